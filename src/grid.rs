use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Applies a signed offset, returning `None` when it would leave the
    /// non-negative quadrant. Upper bounds are checked by the grid.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Start,
    End,
    Frontier,
    Explored,
    Path,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    #[error("{what} {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        rows: usize,
        cols: usize,
    },
    #[error("{what} {position} lies on a static wall")]
    OnWall {
        what: &'static str,
        position: Position,
    },
}

/// Movement order used by every search: up, right, down, down-right,
/// left, up-left. Expansion order depends on it.
const MOVES: [(isize, isize); 6] = [(-1, 0), (0, 1), (1, 0), (1, 1), (0, -1), (-1, -1)];

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    visit_order: Vec<Vec<Option<usize>>>,
    visit_counter: usize,
    static_walls: Vec<Position>,
    start: Position,
    end: Position,
}

impl Grid {
    pub fn new(
        rows: usize,
        cols: usize,
        static_walls: impl IntoIterator<Item = Position>,
        start: Position,
        end: Position,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }

        let mut grid = Grid {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
            visit_order: vec![vec![None; cols]; rows],
            visit_counter: 0,
            static_walls: Vec::new(),
            start,
            end,
        };

        for wall in static_walls {
            grid.check_bounds("static wall", wall)?;
            if !grid.static_walls.contains(&wall) {
                grid.static_walls.push(wall);
            }
        }
        grid.check_endpoint("start", start)?;
        grid.check_endpoint("end", end)?;

        grid.reset();
        Ok(grid)
    }

    /// The 8x8 layout with a vertical wall in column 3 (rows 1 to 6),
    /// start at (3, 5) and end at (5, 1).
    pub fn default_layout() -> Self {
        let walls = (1..=6).map(|row| Position::new(row, 3));
        let mut grid = Grid {
            rows: 8,
            cols: 8,
            cells: vec![vec![Cell::Empty; 8]; 8],
            visit_order: vec![vec![None; 8]; 8],
            visit_counter: 0,
            static_walls: walls.collect(),
            start: Position::new(3, 5),
            end: Position::new(5, 1),
        };
        grid.reset();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn static_walls(&self) -> &[Position] {
        &self.static_walls
    }

    /// Classification of an in-bounds cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Discovery number of a cell in the current run, `None` if the cell
    /// has not been discovered (or is out of bounds).
    pub fn visit_order(&self, pos: Position) -> Option<usize> {
        self.visit_order.get(pos.row)?.get(pos.col).copied().flatten()
    }

    /// Number of cells discovered so far in the current run.
    pub fn visited_count(&self) -> usize {
        self.visit_counter
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    /// Full reinitialisation: everything empty except static walls and the
    /// endpoints; visit numbering cleared.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
        for row in self.visit_order.iter_mut() {
            row.fill(None);
        }
        self.visit_counter = 0;

        for &wall in &self.static_walls {
            self.cells[wall.row][wall.col] = Cell::Wall;
        }
        self.stamp_endpoints();
    }

    /// Removes frontier, explored and path marks left by a previous run and
    /// restarts visit numbering with the start cell as 0.
    pub fn clear_search_marks(&mut self) {
        for (cells, orders) in self.cells.iter_mut().zip(self.visit_order.iter_mut()) {
            for (cell, order) in cells.iter_mut().zip(orders.iter_mut()) {
                if matches!(cell, Cell::Frontier | Cell::Explored | Cell::Path) {
                    *cell = Cell::Empty;
                }
                if *cell != Cell::Wall {
                    *order = None;
                }
            }
        }
        self.visit_counter = 0;

        self.stamp_endpoints();
        self.mark_visit(self.start);
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Walkable: in bounds and not a wall. Search marks do not block.
    pub fn is_free(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.row][pos.col] != Cell::Wall
    }

    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        MOVES
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|&next| self.is_free(next))
            .collect()
    }

    /// Assigns the next discovery number the first time `pos` is seen.
    pub fn mark_visit(&mut self, pos: Position) {
        let slot = &mut self.visit_order[pos.row][pos.col];
        if slot.is_none() {
            *slot = Some(self.visit_counter);
            self.visit_counter += 1;
        }
    }

    /// Classifies a cell as frontier, explored or path. Start and end keep
    /// their own classification.
    pub fn set_search_mark(&mut self, pos: Position, cell: Cell) {
        if pos != self.start && pos != self.end {
            self.cells[pos.row][pos.col] = cell;
        }
    }

    fn stamp_endpoints(&mut self) {
        self.cells[self.start.row][self.start.col] = Cell::Start;
        self.cells[self.end.row][self.end.col] = Cell::End;
    }

    fn check_bounds(&self, what: &'static str, position: Position) -> Result<(), GridError> {
        if self.in_bounds(position) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                what,
                position,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn check_endpoint(&self, what: &'static str, position: Position) -> Result<(), GridError> {
        self.check_bounds(what, position)?;
        if self.static_walls.contains(&position) {
            return Err(GridError::OnWall { what, position });
        }
        Ok(())
    }
}
