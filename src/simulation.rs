use crate::algorithms::{Algorithm, SearchError};
use crate::config::Config;
use crate::grid::{Cell, Grid, GridError, Position};
use crate::renderer::{FrameCounter, NoopRenderer, Renderer};
use crate::statistics::RunStatistics;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Everything needed to build the grid: dimensions, endpoints and the static
/// wall layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSetup {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub end: Position,
    pub walls: Vec<Position>,
}

impl EnvironmentSetup {
    /// Uses random walls when requested, otherwise the classic wall column.
    pub fn from_config(config: &Config) -> Self {
        match config.random_walls {
            Some(num_walls) => Self::generate(config, num_walls, config.seed),
            None => Self::classic(config),
        }
    }

    /// Column 3, rows 1 to 6, clipped to the grid.
    pub fn classic(config: &Config) -> Self {
        let walls = (1..=6)
            .map(|row| Position::new(row, 3))
            .filter(|wall| wall.row < config.rows && wall.col < config.cols)
            .collect();

        EnvironmentSetup {
            rows: config.rows,
            cols: config.cols,
            start: config.start,
            end: config.end,
            walls,
        }
    }

    /// Random static walls that never cover the start or end.
    pub fn generate(config: &Config, num_walls: usize, seed: Option<u64>) -> Self {
        let mut rng = if let Some(seed) = seed {
            rand::rngs::StdRng::seed_from_u64(seed)
        } else {
            rand::rngs::StdRng::from_entropy()
        };

        // Never more walls than cells, however many were asked for.
        let target = num_walls.min(config.rows.saturating_mul(config.cols));
        let max_attempts = target.saturating_mul(3);

        let mut walls = Vec::new();
        let mut attempts = 0;
        if config.rows > 0 && config.cols > 0 {
            while walls.len() < target && attempts < max_attempts {
                let pos = Position::new(rng.gen_range(0..config.rows), rng.gen_range(0..config.cols));
                if pos != config.start && pos != config.end && !walls.contains(&pos) {
                    walls.push(pos);
                }
                attempts += 1;
            }
        }

        if walls.len() < num_walls {
            log::warn!(
                "placed {} of {} requested walls after {} attempts",
                walls.len(),
                num_walls,
                attempts
            );
        }

        EnvironmentSetup {
            rows: config.rows,
            cols: config.cols,
            start: config.start,
            end: config.end,
            walls,
        }
    }

    pub fn create_grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.rows, self.cols, self.walls.iter().copied(), self.start, self.end)
    }
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub path: Vec<Position>,
    pub statistics: RunStatistics,
}

impl RunResult {
    pub fn success(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Drives one grid through one or more searches.
pub struct Simulation {
    grid: Grid,
    pause: Duration,
    shortest_length: Option<usize>,
}

impl Simulation {
    pub fn new(config: &Config) -> Result<Self, SimulationError> {
        let environment = EnvironmentSetup::from_config(config);
        let grid = environment.create_grid()?;
        Ok(Self::with_grid(grid, config.pause()))
    }

    pub fn with_grid(grid: Grid, pause: Duration) -> Self {
        let shortest_length = shortest_path_length(&grid);
        log::info!(
            "grid {}x{}, start {}, end {}, {} walls, shortest path {:?}",
            grid.rows(),
            grid.cols(),
            grid.start(),
            grid.end(),
            grid.static_walls().len(),
            shortest_length
        );

        Simulation {
            grid,
            pause,
            shortest_length,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shortest_length(&self) -> Option<usize> {
        self.shortest_length
    }

    /// Draws the grid once before any search has run.
    pub fn show_initial<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render_frame(&self.grid, self.pause);
    }

    pub fn run<R: Renderer + ?Sized>(&mut self, algorithm: Algorithm, renderer: &mut R) -> RunResult {
        log::info!("running {}", algorithm);
        let mut counter = FrameCounter::new(renderer);

        let started = Instant::now();
        let path = algorithm.run(&mut self.grid, &mut counter, self.pause);
        let elapsed = started.elapsed();

        if path.is_empty() {
            log::warn!("{}: no path from {} to {}", algorithm, self.grid.start(), self.grid.end());
        } else {
            log::info!("{}: path with {} moves", algorithm, path.len() - 1);
        }

        let statistics = RunStatistics {
            algorithm: algorithm.to_string(),
            path_length: path.len().checked_sub(1),
            shortest_length: self.shortest_length,
            cells_explored: self.grid.count(Cell::Explored) + self.grid.count(Cell::Path),
            cells_discovered: self.grid.visited_count(),
            frames: counter.frames(),
            elapsed,
        };

        RunResult {
            algorithm,
            path,
            statistics,
        }
    }

    /// Runs every algorithm headlessly on the same grid.
    pub fn run_all(&mut self, algorithms: &[Algorithm]) -> Vec<RunResult> {
        println!("Running comparison of {} algorithms...", algorithms.len());

        let mut results = Vec::new();
        for (i, &algorithm) in algorithms.iter().enumerate() {
            println!("Running algorithm {} of {}: {}", i + 1, algorithms.len(), algorithm);
            let result = self.run(algorithm, &mut NoopRenderer);
            println!(
                "Completed: {} - Success: {}, Moves: {}",
                algorithm,
                result.success(),
                result.path.len().saturating_sub(1)
            );
            results.push(result);
        }
        results
    }

    /// Print comparison results in a table
    pub fn print_comparison_results(results: &[RunResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();
        println!(
            "{:<22} {:<8} {:<8} {:<10} {:<10} {:<12} {:<8} {:<12}",
            "Algorithm", "Success", "Moves", "Shortest", "Explored", "Discovered", "Frames", "Elapsed"
        );
        println!("{}", "-".repeat(96));

        for result in results {
            let stats = &result.statistics;
            let success_str = if result.success() { "✓" } else { "✗" };
            let moves_str = stats
                .path_length
                .map_or_else(|| "-".to_string(), |moves| moves.to_string());
            let shortest_str = match stats.is_shortest() {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            };
            println!(
                "{:<22} {:<8} {:<8} {:<10} {:<10} {:<12} {:<8} {:<12}",
                stats.algorithm,
                success_str,
                moves_str,
                shortest_str,
                stats.cells_explored,
                stats.cells_discovered,
                stats.frames,
                format!("{:.2?}", stats.elapsed)
            );
        }
        println!();

        let successful: Vec<_> = results.iter().filter(|r| r.success()).collect();
        if successful.is_empty() {
            println!("No algorithm reached the target.");
            return;
        }

        println!("=== PERFORMANCE ANALYSIS ===");
        if let Some(fewest_moves) = successful.iter().min_by_key(|r| r.path.len()) {
            println!(
                "Fewest moves: {} ({} moves)",
                fewest_moves.statistics.algorithm,
                fewest_moves.path.len() - 1
            );
        }
        if let Some(least_explored) = successful.iter().min_by_key(|r| r.statistics.cells_explored) {
            println!(
                "Least explored: {} ({} cells)",
                least_explored.statistics.algorithm, least_explored.statistics.cells_explored
            );
        }
        if let Some(fewest_frames) = successful.iter().min_by_key(|r| r.statistics.frames) {
            println!(
                "Fewest frames: {} ({} frames)",
                fewest_frames.statistics.algorithm, fewest_frames.statistics.frames
            );
        }
    }
}

/// Fewest moves from start to end over the same adjacency the searches use.
pub fn shortest_path_length(grid: &Grid) -> Option<usize> {
    pathfinding::prelude::bfs(
        &grid.start(),
        |&pos| grid.neighbors(pos),
        |&pos| pos == grid.end(),
    )
    .map(|path| path.len() - 1)
}
