pub mod bfs;
pub mod bidirectional;
pub mod common;
pub mod dfs;
pub mod dls;
pub mod iddfs;
pub mod ucs;

use crate::grid::{Grid, Position};
use crate::renderer::Renderer;
use clap::ValueEnum;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{parameter} must not be negative, got {value}")]
    NegativeDepth { parameter: &'static str, value: i64 },
}

/// Algorithm identifiers as offered on the command line and in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Ucs,
        AlgorithmKind::Dls,
        AlgorithmKind::Iddfs,
        AlgorithmKind::Bidirectional,
    ];

    /// Maps the 1-6 menu entries to algorithms.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(AlgorithmKind::Bfs),
            "2" => Some(AlgorithmKind::Dfs),
            "3" => Some(AlgorithmKind::Ucs),
            "4" => Some(AlgorithmKind::Dls),
            "5" => Some(AlgorithmKind::Iddfs),
            "6" => Some(AlgorithmKind::Bidirectional),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "Breadth-First Search (BFS)",
            AlgorithmKind::Dfs => "Depth-First Search (DFS)",
            AlgorithmKind::Ucs => "Uniform-Cost Search (UCS)",
            AlgorithmKind::Dls => "Depth-Limited Search (DLS)",
            AlgorithmKind::Iddfs => "Iterative Deepening DFS (IDDFS)",
            AlgorithmKind::Bidirectional => "Bidirectional Search",
        }
    }
}

/// A fully parameterised search, ready to run on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Dls { depth_limit: usize },
    Iddfs { max_depth: usize },
    Bidirectional,
}

impl Algorithm {
    /// Builds an algorithm from its identifier. The depth parameters are only
    /// used by DLS and IDDFS but are validated for them before anything runs.
    pub fn from_kind(kind: AlgorithmKind, depth_limit: i64, max_depth: i64) -> Result<Self, SearchError> {
        Ok(match kind {
            AlgorithmKind::Bfs => Algorithm::Bfs,
            AlgorithmKind::Dfs => Algorithm::Dfs,
            AlgorithmKind::Ucs => Algorithm::Ucs,
            AlgorithmKind::Dls => Algorithm::Dls {
                depth_limit: non_negative("depth_limit", depth_limit)?,
            },
            AlgorithmKind::Iddfs => Algorithm::Iddfs {
                max_depth: non_negative("max_depth", max_depth)?,
            },
            AlgorithmKind::Bidirectional => Algorithm::Bidirectional,
        })
    }

    /// All six algorithms in menu order.
    pub fn all(depth_limit: i64, max_depth: i64) -> Result<Vec<Self>, SearchError> {
        AlgorithmKind::ALL
            .iter()
            .map(|&kind| Algorithm::from_kind(kind, depth_limit, max_depth))
            .collect()
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Bfs => AlgorithmKind::Bfs,
            Algorithm::Dfs => AlgorithmKind::Dfs,
            Algorithm::Ucs => AlgorithmKind::Ucs,
            Algorithm::Dls { .. } => AlgorithmKind::Dls,
            Algorithm::Iddfs { .. } => AlgorithmKind::Iddfs,
            Algorithm::Bidirectional => AlgorithmKind::Bidirectional,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Dls { .. } => "DLS",
            Algorithm::Iddfs { .. } => "IDDFS",
            Algorithm::Bidirectional => "Bidirectional",
        }
    }

    /// BFS, UCS and bidirectional BFS always return a fewest-steps path.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Ucs | Algorithm::Bidirectional)
    }

    /// Runs the search, rendering each step, and returns the start -> end
    /// path (empty if the end was not reached).
    pub fn run<R: Renderer + ?Sized>(
        &self,
        grid: &mut Grid,
        renderer: &mut R,
        pause: Duration,
    ) -> Vec<Position> {
        match *self {
            Algorithm::Bfs => bfs::bfs(grid, renderer, pause),
            Algorithm::Dfs => dfs::dfs(grid, renderer, pause),
            Algorithm::Ucs => ucs::ucs(grid, renderer, pause),
            Algorithm::Dls { depth_limit } => dls::dls(grid, renderer, pause, depth_limit),
            Algorithm::Iddfs { max_depth } => iddfs::iddfs(grid, renderer, pause, max_depth),
            Algorithm::Bidirectional => bidirectional::bidirectional(grid, renderer, pause),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dls { depth_limit } => write!(f, "DLS (limit {})", depth_limit),
            Algorithm::Iddfs { max_depth } => write!(f, "IDDFS (max depth {})", max_depth),
            other => f.write_str(other.name()),
        }
    }
}

fn non_negative(parameter: &'static str, value: i64) -> Result<usize, SearchError> {
    usize::try_from(value).map_err(|_| SearchError::NegativeDepth { parameter, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_in_order() {
        let kinds: Vec<_> = ["1", "2", "3", "4", "5", " 6\n"]
            .iter()
            .filter_map(|c| AlgorithmKind::from_menu_choice(c))
            .collect();
        assert_eq!(kinds, AlgorithmKind::ALL.to_vec());
        assert_eq!(AlgorithmKind::from_menu_choice("7"), None);
        assert_eq!(AlgorithmKind::from_menu_choice("bfs"), None);
    }

    #[test]
    fn negative_depths_are_rejected() {
        assert_eq!(
            Algorithm::from_kind(AlgorithmKind::Dls, -1, 20),
            Err(SearchError::NegativeDepth {
                parameter: "depth_limit",
                value: -1
            })
        );
        assert_eq!(
            Algorithm::from_kind(AlgorithmKind::Iddfs, 12, -3),
            Err(SearchError::NegativeDepth {
                parameter: "max_depth",
                value: -3
            })
        );
        assert!(Algorithm::all(-1, 20).is_err());
        assert_eq!(
            Algorithm::from_kind(AlgorithmKind::Iddfs, -1, 20),
            Ok(Algorithm::Iddfs { max_depth: 20 })
        );
    }

    #[test]
    fn all_lists_every_algorithm_once() {
        let all = Algorithm::all(12, 20).unwrap();
        let names: Vec<_> = all.iter().map(Algorithm::name).collect();
        assert_eq!(names, ["BFS", "DFS", "UCS", "DLS", "IDDFS", "Bidirectional"]);
        assert!(all.iter().zip(AlgorithmKind::ALL).all(|(a, k)| a.kind() == k));
        assert_eq!(all[3].to_string(), "DLS (limit 12)");
    }
}
