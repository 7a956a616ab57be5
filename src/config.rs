use crate::algorithms::AlgorithmKind;
use crate::grid::Position;
use clap::Parser;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected a position as ROW,COL, got {0:?}")]
    InvalidPosition(String),
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Algorithm to animate. Without it (and without --all) a menu is shown.
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmKind>,

    /// Run every algorithm on the same grid and compare them.
    #[arg(long, default_value_t = false, conflicts_with = "algorithm")]
    pub all: bool,

    #[arg(long, default_value_t = 8)]
    pub rows: usize,

    #[arg(long, default_value_t = 8)]
    pub cols: usize,

    #[arg(long, default_value = "3,5", value_parser = parse_position)]
    pub start: Position,

    #[arg(long, default_value = "5,1", value_parser = parse_position)]
    pub end: Position,

    /// Depth limit for DLS.
    #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
    pub depth_limit: i64,

    /// Largest depth tried by IDDFS.
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub max_depth: i64,

    #[arg(long, default_value_t = 150)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Place this many random static walls instead of the default wall column.
    #[arg(long)]
    pub random_walls: Option<usize>,

    /// Seed for --random-walls, for reproducible layouts.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

pub fn parse_position(s: &str) -> Result<Position, ConfigError> {
    let invalid = || ConfigError::InvalidPosition(s.to_string());
    let (row, col) = s.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_layout() {
        let config = Config::parse_from(["uninformed_pathfinding"]);
        assert_eq!(config.algorithm, None);
        assert!(!config.all);
        assert_eq!((config.rows, config.cols), (8, 8));
        assert_eq!(config.start, Position::new(3, 5));
        assert_eq!(config.end, Position::new(5, 1));
        assert_eq!(config.depth_limit, 12);
        assert_eq!(config.max_depth, 20);
        assert_eq!(config.pause(), Duration::from_millis(150));
    }

    #[test]
    fn parses_algorithm_and_negative_depths() {
        let config = Config::parse_from([
            "uninformed_pathfinding",
            "--algorithm",
            "iddfs",
            "--max-depth",
            "-2",
            "--start",
            "0, 0",
        ]);
        assert_eq!(config.algorithm, Some(AlgorithmKind::Iddfs));
        assert_eq!(config.max_depth, -2);
        assert_eq!(config.start, Position::new(0, 0));
    }

    #[test]
    fn all_conflicts_with_a_single_algorithm() {
        let result = Config::try_parse_from(["uninformed_pathfinding", "--all", "--algorithm", "bfs"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_positions() {
        assert_eq!(parse_position("4,7"), Ok(Position::new(4, 7)));
        assert!(parse_position("4").is_err());
        assert!(parse_position("a,1").is_err());
        assert!(parse_position("-1,2").is_err());
    }
}
