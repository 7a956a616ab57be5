use crate::algorithms::common::{discover, finish, root_parents};
use crate::grid::{Cell, Grid, Position};
use crate::renderer::Renderer;
use std::collections::VecDeque;
use std::time::Duration;

/// Breadth-first search with a FIFO queue. Unit steps, so the returned path
/// has the fewest possible moves.
pub fn bfs<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
) -> Vec<Position> {
    grid.clear_search_marks();
    let (start, goal) = (grid.start(), grid.end());

    let mut queue = VecDeque::from([start]);
    let mut parents = root_parents(start);
    let mut expanded = 0;

    while let Some(current) = queue.pop_front() {
        grid.set_search_mark(current, Cell::Explored);
        if current == goal {
            break;
        }
        expanded += 1;

        for neighbor in grid.neighbors(current) {
            if !parents.contains_key(&neighbor) {
                discover(grid, &mut parents, neighbor, current);
                queue.push_back(neighbor);
            }
        }

        renderer.render_frame(grid, pause);
    }

    log::debug!(
        "bfs: expanded {} cells, discovered {}",
        expanded,
        grid.visited_count()
    );
    finish(grid, renderer, pause, &parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{FrameCounter, NoopRenderer};

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn finds_shortest_route_around_the_wall() {
        let mut grid = Grid::default_layout();
        let mut renderer = FrameCounter::new(NoopRenderer);
        let path = bfs(&mut grid, &mut renderer, Duration::ZERO);

        assert_eq!(
            path,
            vec![
                p(3, 5),
                p(4, 5),
                p(5, 5),
                p(6, 5),
                p(7, 5),
                p(7, 4),
                p(7, 3),
                p(6, 2),
                p(5, 1),
            ]
        );
        // 51 expansion frames then one frame per path cell.
        assert_eq!(renderer.frames(), 60);
        assert_eq!(grid.visited_count(), 57);
        assert_eq!(grid.count(Cell::Path), 7);
    }

    #[test]
    fn numbers_cells_in_discovery_order() {
        let mut grid = Grid::default_layout();
        bfs(&mut grid, &mut NoopRenderer, Duration::ZERO);

        let expected = [
            (p(3, 5), 0),
            (p(2, 5), 1),
            (p(3, 6), 2),
            (p(4, 5), 3),
            (p(4, 6), 4),
            (p(3, 4), 5),
            (p(2, 4), 6),
            (p(0, 4), 18),
            (p(7, 3), 39),
            (p(5, 1), 51),
            (p(5, 0), 56),
        ];
        for (pos, order) in expected {
            assert_eq!(grid.visit_order(pos), Some(order), "visit order of {}", pos);
        }
        assert_eq!(grid.visit_order(p(4, 0)), None);
    }

    #[test]
    fn diagonal_shortcut_on_open_grid() {
        let mut grid = Grid::new(5, 5, [], p(0, 0), p(4, 4)).unwrap();
        let path = bfs(&mut grid, &mut NoopRenderer, Duration::ZERO);
        assert_eq!(path, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3), p(4, 4)]);
    }
}
