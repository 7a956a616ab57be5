use crate::algorithms::common::{finish, root_parents};
use crate::grid::{Cell, Grid, Position};
use crate::renderer::Renderer;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Uniform-cost search with unit step cost.
///
/// The heap is keyed by `(cost, position)`, so equal-cost entries come out in
/// row-major order. A neighbor is re-queued whenever a strictly cheaper cost is
/// found for it; stale entries are expanded again when popped.
pub fn ucs<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
) -> Vec<Position> {
    grid.clear_search_marks();
    let (start, goal) = (grid.start(), grid.end());

    let mut queue = BinaryHeap::from([Reverse((0usize, start))]);
    let mut parents = root_parents(start);
    let mut cost_so_far: FxHashMap<Position, usize> = FxHashMap::default();
    cost_so_far.insert(start, 0);
    let mut expanded = 0;

    while let Some(Reverse((cost, current))) = queue.pop() {
        grid.set_search_mark(current, Cell::Explored);
        if current == goal {
            break;
        }
        expanded += 1;

        let next_cost = cost + 1;
        for neighbor in grid.neighbors(current) {
            let improves = cost_so_far
                .get(&neighbor)
                .map_or(true, |&known| next_cost < known);
            if improves {
                cost_so_far.insert(neighbor, next_cost);
                parents.insert(neighbor, Some(current));
                grid.mark_visit(neighbor);
                queue.push(Reverse((next_cost, neighbor)));
                grid.set_search_mark(neighbor, Cell::Frontier);
            }
        }

        renderer.render_frame(grid, pause);
    }

    log::debug!(
        "ucs: expanded {} entries, discovered {}",
        expanded,
        grid.visited_count()
    );
    finish(grid, renderer, pause, &parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::bfs;
    use crate::renderer::{FrameCounter, NoopRenderer};

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn breaks_cost_ties_by_position() {
        let mut grid = Grid::default_layout();
        let mut renderer = FrameCounter::new(NoopRenderer);
        let path = ucs(&mut grid, &mut renderer, Duration::ZERO);

        assert_eq!(
            path,
            vec![
                p(3, 5),
                p(3, 4),
                p(4, 4),
                p(5, 4),
                p(6, 4),
                p(7, 4),
                p(7, 3),
                p(6, 2),
                p(5, 1),
            ]
        );
        assert_eq!(renderer.frames(), 57);
        assert_eq!(grid.visited_count(), 54);
        assert_eq!(grid.visit_order(p(3, 4)), Some(5));
        assert_eq!(grid.visit_order(p(5, 1)), Some(50));
    }

    #[test]
    fn matches_bfs_length() {
        let walls = [p(1, 1), p(1, 2), p(1, 3), p(3, 2), p(3, 3), p(3, 4)];
        let mut grid = Grid::new(5, 6, walls, p(0, 0), p(4, 5)).unwrap();
        let by_bfs = bfs(&mut grid, &mut NoopRenderer, Duration::ZERO);
        let by_ucs = ucs(&mut grid, &mut NoopRenderer, Duration::ZERO);
        assert!(!by_bfs.is_empty());
        assert_eq!(by_bfs.len(), by_ucs.len());
    }
}
