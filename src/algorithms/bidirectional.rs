use crate::algorithms::common::{root_parents, trace_path, ParentMap};
use crate::grid::{Cell, Grid, Position};
use crate::renderer::Renderer;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::time::Duration;

/// One direction of the bidirectional search.
struct Side {
    queue: VecDeque<Position>,
    parents: ParentMap,
    visited: FxHashSet<Position>,
}

impl Side {
    fn new(root: Position) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(root);
        Side {
            queue: VecDeque::from([root]),
            parents: root_parents(root),
            visited,
        }
    }

    /// Expands the cells queued at the start of this round. Returns the
    /// meeting point if a popped cell was already seen by `other`.
    fn expand_round(&mut self, grid: &mut Grid, other: &FxHashSet<Position>) -> Option<Position> {
        for _ in 0..self.queue.len() {
            let current = self.queue.pop_front()?;
            grid.set_search_mark(current, Cell::Explored);
            if other.contains(&current) {
                return Some(current);
            }

            for neighbor in grid.neighbors(current) {
                if self.visited.insert(neighbor) {
                    self.parents.insert(neighbor, Some(current));
                    grid.mark_visit(neighbor);
                    grid.set_search_mark(neighbor, Cell::Frontier);
                    self.queue.push_back(neighbor);
                }
            }
        }
        None
    }
}

/// Breadth-first search from both ends at once, alternating one full
/// level from the start side with one from the goal side.
pub fn bidirectional<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
) -> Vec<Position> {
    grid.clear_search_marks();
    let (start, goal) = (grid.start(), grid.end());
    grid.mark_visit(goal);

    let mut forward = Side::new(start);
    let mut backward = Side::new(goal);
    let mut meet = None;
    let mut rounds = 0;

    while meet.is_none() && !forward.queue.is_empty() && !backward.queue.is_empty() {
        rounds += 1;
        meet = forward.expand_round(grid, &backward.visited);
        if meet.is_some() {
            break;
        }
        meet = backward.expand_round(grid, &forward.visited);
        renderer.render_frame(grid, pause);
    }

    log::debug!(
        "bidirectional: {} rounds, discovered {}, meeting point {:?}",
        rounds,
        grid.visited_count(),
        meet
    );

    let Some(meet) = meet else {
        return Vec::new();
    };
    let path = join_at(&forward.parents, &backward.parents, meet, start, goal);
    trace_path(grid, renderer, pause, &path);
    path
}

/// Start -> meet from the forward links, then meet -> goal by following the
/// backward links from the meeting point's backward parent.
fn join_at(
    forward: &ParentMap,
    backward: &ParentMap,
    meet: Position,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(meet);
    while let Some(pos) = current {
        path.push(pos);
        if pos == start {
            break;
        }
        current = forward.get(&pos).copied().flatten();
    }
    path.reverse();

    let mut current = backward.get(&meet).copied().flatten();
    while let Some(pos) = current {
        path.push(pos);
        if pos == goal {
            break;
        }
        current = backward.get(&pos).copied().flatten();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{FrameCounter, NoopRenderer};

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn meets_in_the_middle() {
        let mut grid = Grid::default_layout();
        let mut renderer = FrameCounter::new(NoopRenderer);
        let path = bidirectional(&mut grid, &mut renderer, Duration::ZERO);

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
        // One frame per completed round, then the path.
        assert_eq!(renderer.frames(), 13);
        assert_eq!(grid.visited_count(), 57);
    }

    #[test]
    fn goal_is_numbered_right_after_start() {
        let mut grid = Grid::default_layout();
        bidirectional(&mut grid, &mut NoopRenderer, Duration::ZERO);
        assert_eq!(grid.visit_order(p(3, 5)), Some(0));
        assert_eq!(grid.visit_order(p(5, 1)), Some(1));
        assert_eq!(grid.visit_order(p(2, 5)), Some(2));
        assert_eq!(grid.visit_order(p(4, 1)), Some(8));
    }

    #[test]
    fn join_concatenates_both_halves() {
        let mut forward = root_parents(p(0, 0));
        forward.insert(p(0, 1), Some(p(0, 0)));
        forward.insert(p(0, 2), Some(p(0, 1)));
        let mut backward = root_parents(p(0, 4));
        backward.insert(p(0, 3), Some(p(0, 4)));
        backward.insert(p(0, 2), Some(p(0, 3)));

        assert_eq!(
            join_at(&forward, &backward, p(0, 2), p(0, 0), p(0, 4)),
            vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 4)]
        );
    }
}
