use crate::grid::{Cell, Grid, Position};
use crate::renderer::Renderer;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Child -> parent links recorded during a traversal. The root maps to `None`.
pub type ParentMap = FxHashMap<Position, Option<Position>>;

/// Rebuilds the start -> goal route from the recorded parents.
///
/// Returns an empty path when the goal was never discovered. Walking stops at
/// `start` or at the first cell without a recorded parent.
pub fn reconstruct_path(parents: &ParentMap, start: Position, goal: Position) -> Vec<Position> {
    if !parents.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(pos) = current {
        path.push(pos);
        if pos == start {
            break;
        }
        current = parents.get(&pos).copied().flatten();
    }

    path.reverse();
    path
}

/// Marks every interior cell of `path` as PATH, one frame per cell.
pub fn trace_path<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
    path: &[Position],
) {
    for &pos in path {
        grid.set_search_mark(pos, Cell::Path);
        renderer.render_frame(grid, pause);
    }
}

/// Records a first discovery: parent link, visit number and frontier mark.
pub(crate) fn discover(grid: &mut Grid, parents: &mut ParentMap, pos: Position, parent: Position) {
    parents.insert(pos, Some(parent));
    grid.mark_visit(pos);
    grid.set_search_mark(pos, Cell::Frontier);
}

/// Reconstructs, traces and returns the path for a finished search.
pub(crate) fn finish<R: Renderer + ?Sized>(
    grid: &mut Grid,
    renderer: &mut R,
    pause: Duration,
    parents: &ParentMap,
) -> Vec<Position> {
    let path = reconstruct_path(parents, grid.start(), grid.end());
    trace_path(grid, renderer, pause, &path);
    path
}

/// Parent map seeded with the root only.
pub(crate) fn root_parents(root: Position) -> ParentMap {
    let mut parents = ParentMap::default();
    parents.insert(root, None);
    parents
}
