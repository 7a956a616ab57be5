use crate::algorithms::common::finish;
use crate::algorithms::dls::depth_limited;
use crate::grid::{Grid, Position};
use crate::renderer::Renderer;
use std::time::Duration;

/// Iterative deepening: depth-limited attempts with limits 0, 1, ..,
/// `max_depth`, each on a cleared grid. Stops at the first limit that
/// reaches the goal.
pub fn iddfs<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
    max_depth: usize,
) -> Vec<Position> {
    let max_depth = max_depth.min(grid.rows() * grid.cols());

    for depth in 0..=max_depth {
        if let Some(parents) = depth_limited(grid, renderer, pause, depth) {
            log::debug!("iddfs: goal reached at depth {}", depth);
            return finish(grid, renderer, pause, &parents);
        }
    }

    log::debug!("iddfs: no path within depth {}", max_depth);
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bfs::bfs;
    use crate::grid::Cell;
    use crate::renderer::{FrameCounter, NoopRenderer};

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn stops_at_the_shortest_depth() {
        let mut grid = Grid::default_layout();
        let mut renderer = FrameCounter::new(NoopRenderer);
        let path = iddfs(&mut grid, &mut renderer, Duration::ZERO, 20);

        let shortest = bfs(&mut Grid::default_layout(), &mut NoopRenderer, Duration::ZERO);
        assert_eq!(path, shortest);
        assert_eq!(renderer.frames(), 1352);
    }

    #[test]
    fn only_the_last_attempt_stays_on_the_grid() {
        let mut grid = Grid::default_layout();
        iddfs(&mut grid, &mut NoopRenderer, Duration::ZERO, 20);
        assert_eq!(grid.visit_order(p(3, 5)), Some(0));
        assert_eq!(grid.visited_count(), 52);
        assert_eq!(grid.visit_order(p(5, 1)), Some(51));
        assert_eq!(grid.count(Cell::Path), 7);
    }

    #[test]
    fn fails_when_shortest_route_is_deeper() {
        let mut grid = Grid::default_layout();
        let mut renderer = FrameCounter::new(NoopRenderer);
        let path = iddfs(&mut grid, &mut renderer, Duration::ZERO, 7);
        assert!(path.is_empty());
        assert_eq!(renderer.frames(), 996);
        assert_eq!(grid.count(Cell::Path), 0);
    }

    #[test]
    fn depth_zero_handles_start_equal_to_end() {
        let mut grid = Grid::new(2, 2, [], p(1, 0), p(1, 0)).unwrap();
        let path = iddfs(&mut grid, &mut NoopRenderer, Duration::ZERO, 0);
        assert_eq!(path, vec![p(1, 0)]);
    }

    #[test]
    fn large_open_grids_stop_at_the_first_success() {
        let mut grid = Grid::new(300, 300, [], p(299, 0), p(299, 1)).unwrap();
        let path = iddfs(&mut grid, &mut NoopRenderer, Duration::ZERO, 1_000_000);
        assert_eq!(path, vec![p(299, 0), p(299, 1)]);
    }

    #[test]
    fn long_corridors_are_searched_to_full_depth() {
        let mut grid = Grid::new(1, 3000, [], p(0, 0), p(0, 2999)).unwrap();
        let path = iddfs(&mut grid, &mut NoopRenderer, Duration::ZERO, usize::MAX);
        assert_eq!(path.len(), 3000);
        assert_eq!(path.last(), Some(&p(0, 2999)));
    }
}
