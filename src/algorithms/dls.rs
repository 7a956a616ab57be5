use crate::algorithms::common::{discover, finish, root_parents, ParentMap};
use crate::grid::{Cell, Grid, Position};
use crate::renderer::Renderer;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Depth-limited search: depth-first traversal that stops descending once
/// `depth_limit` steps have been taken along a branch.
pub fn dls<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
    depth_limit: usize,
) -> Vec<Position> {
    match depth_limited(grid, renderer, pause, depth_limit) {
        Some(parents) => finish(grid, renderer, pause, &parents),
        None => Vec::new(),
    }
}

/// One bounded attempt on a freshly cleared grid. Returns the parent links
/// when the goal was reached within the limit.
pub(crate) fn depth_limited<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
    depth_limit: usize,
) -> Option<ParentMap> {
    grid.clear_search_marks();
    let start = grid.start();
    // A simple path never has more steps than the grid has cells.
    let limit = depth_limit.min(grid.rows() * grid.cols());

    let mut descent = Descent {
        goal: grid.end(),
        grid,
        renderer,
        pause,
        parents: root_parents(start),
        budgets: FxHashMap::default(),
        entered: 0,
    };
    descent.budgets.insert(start, limit);

    let found = descent.run(start, limit);
    log::debug!(
        "dls(limit {}): entered {} cells, goal {}",
        limit,
        descent.entered,
        if found { "reached" } else { "not reached" }
    );

    found.then_some(descent.parents)
}

struct Descent<'a, R: ?Sized> {
    grid: &'a mut Grid,
    renderer: &'a mut R,
    pause: Duration,
    goal: Position,
    parents: ParentMap,
    /// Remaining depth each cell was last entered with.
    budgets: FxHashMap<Position, usize>,
    entered: usize,
}

/// A cell on the current branch and how far its neighbor scan has got.
struct Branch {
    pos: Position,
    remaining: usize,
    neighbors: Vec<Position>,
    next: usize,
}

impl<R: Renderer + ?Sized> Descent<'_, R> {
    /// Depth-first walk from `root` on an explicit stack, so branch depth is
    /// bounded by memory rather than the thread's stack.
    fn run(&mut self, root: Position, limit: usize) -> bool {
        if self.enter(root) {
            return true;
        }
        if limit == 0 {
            return false;
        }

        let mut stack = vec![self.branch(root, limit)];
        while let Some(top) = stack.last_mut() {
            let Some(neighbor) = top.neighbors.get(top.next).copied() else {
                stack.pop();
                continue;
            };
            top.next += 1;
            let current = top.pos;
            let child_budget = top.remaining - 1;

            match self.budgets.get(&neighbor) {
                None => discover(self.grid, &mut self.parents, neighbor, current),
                // Reached again with more depth to spare than last time.
                Some(&known) if child_budget > known => {
                    self.parents.insert(neighbor, Some(current));
                }
                Some(_) => continue,
            }
            self.budgets.insert(neighbor, child_budget);
            self.renderer.render_frame(self.grid, self.pause);

            if self.enter(neighbor) {
                return true;
            }
            if child_budget > 0 {
                stack.push(self.branch(neighbor, child_budget));
            }
        }
        false
    }

    /// Marks and draws a cell as it joins the branch. True if it is the goal.
    fn enter(&mut self, current: Position) -> bool {
        self.entered += 1;
        self.grid.set_search_mark(current, Cell::Explored);
        self.renderer.render_frame(self.grid, self.pause);
        current == self.goal
    }

    fn branch(&self, pos: Position, remaining: usize) -> Branch {
        Branch {
            pos,
            remaining,
            neighbors: self.grid.neighbors(pos),
            next: 0,
        }
    }
}
