use crate::grid::{Cell, Grid, Position};
use std::thread;
use std::time::Duration;

/// Something that can show the current grid state. Called once per search
/// step and once per path cell; must not change the grid.
pub trait Renderer {
    fn render_frame(&mut self, grid: &Grid, pause: Duration);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_frame(&mut self, grid: &Grid, pause: Duration) {
        (**self).render_frame(grid, pause);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render_frame(&mut self, grid: &Grid, pause: Duration) {
        (**self).render_frame(grid, pause);
    }
}

/// Headless renderer, ignores the pause as well.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render_frame(&mut self, _grid: &Grid, _pause: Duration) {}
}

/// Counts frames on their way to an inner renderer.
#[derive(Debug, Default)]
pub struct FrameCounter<R> {
    inner: R,
    frames: usize,
}

impl<R: Renderer> FrameCounter<R> {
    pub fn new(inner: R) -> Self {
        FrameCounter { inner, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl<R: Renderer> Renderer for FrameCounter<R> {
    fn render_frame(&mut self, grid: &Grid, pause: Duration) {
        self.frames += 1;
        self.inner.render_frame(grid, pause);
    }
}

/// Draws the grid to stdout and sleeps between frames.
pub struct TerminalRenderer {
    title: String,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        TerminalRenderer {
            title: title.into(),
        }
    }

    /// Render the whole frame into a string, one line per grid row.
    pub fn draw(&self, grid: &Grid) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", self.title));
        out.push_str("Legend: S=Start, T=Target, ##=Wall, [n]=Frontier, n=Explored, **=Path, .=Empty\n");

        out.push_str("    ");
        for col in 0..grid.cols() {
            out.push_str(&format!("{:>4}", col));
        }
        out.push('\n');

        for row in 0..grid.rows() {
            out.push_str(&format!("{:>3} ", row));
            for col in 0..grid.cols() {
                out.push_str(&format!("{:>4}", cell_label(grid, Position::new(row, col))));
            }
            out.push('\n');
        }
        out
    }

    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

fn cell_label(grid: &Grid, pos: Position) -> String {
    let order = grid.visit_order(pos);
    match grid.cell(pos) {
        Cell::Start => "S".to_string(),
        Cell::End => "T".to_string(),
        Cell::Wall => "##".to_string(),
        Cell::Path => "**".to_string(),
        Cell::Frontier => match order {
            Some(n) => format!("[{}]", n),
            None => "[]".to_string(),
        },
        Cell::Explored => match order {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        },
        Cell::Empty => ".".to_string(),
    }
}

impl Renderer for TerminalRenderer {
    fn render_frame(&mut self, grid: &Grid, pause: Duration) {
        self.clear_screen();
        print!("{}", self.draw(grid));
        thread::sleep(pause);
    }
}
