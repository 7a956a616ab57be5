use crate::algorithms::common::{discover, finish, root_parents};
use crate::grid::{Cell, Grid, Position};
use crate::renderer::Renderer;
use std::time::Duration;

/// Depth-first search with an explicit stack. No optimality guarantee.
pub fn dfs<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
) -> Vec<Position> {
    grid.clear_search_marks();
    let (start, goal) = (grid.start(), grid.end());

    let mut stack = vec![start];
    let mut parents = root_parents(start);
    let mut expanded = 0;

    while let Some(current) = stack.pop() {
        grid.set_search_mark(current, Cell::Explored);
        if current == goal {
            break;
        }
        expanded += 1;

        // Pushed in reverse so the first neighbor in movement order is popped first.
        for neighbor in grid.neighbors(current).into_iter().rev() {
            if !parents.contains_key(&neighbor) {
                discover(grid, &mut parents, neighbor, current);
                stack.push(neighbor);
            }
        }

        renderer.render_frame(grid, pause);
    }

    log::debug!(
        "dfs: expanded {} cells, discovered {}",
        expanded,
        grid.visited_count()
    );
    finish(grid, renderer, pause, &parents)
}
