use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub algorithm: String,
    /// Moves on the returned path, `None` when no path was found.
    pub path_length: Option<usize>,
    /// Fewest possible moves, computed independently of the run.
    pub shortest_length: Option<usize>,
    pub cells_explored: usize,
    pub cells_discovered: usize,
    pub frames: usize,
    pub elapsed: Duration,
}

impl RunStatistics {
    pub fn found(&self) -> bool {
        self.path_length.is_some()
    }

    /// Whether the returned path has the fewest possible moves. `None` if
    /// either length is unknown.
    pub fn is_shortest(&self) -> Option<bool> {
        Some(self.path_length? == self.shortest_length?)
    }

    /// Extra moves compared with a shortest path.
    pub fn detour(&self) -> Option<usize> {
        Some(self.path_length?.saturating_sub(self.shortest_length?))
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Statistics:", self.algorithm)?;
        match self.path_length {
            Some(moves) => writeln!(f, "Path length: {} moves", moves)?,
            None => writeln!(f, "Path length: no path")?,
        }
        match self.shortest_length {
            Some(moves) => writeln!(f, "Shortest possible: {} moves", moves)?,
            None => writeln!(f, "Shortest possible: unreachable")?,
        }
        if let Some(extra) = self.detour().filter(|&extra| extra > 0) {
            writeln!(f, "Detour: {} extra moves", extra)?;
        }
        writeln!(f, "Cells explored: {}", self.cells_explored)?;
        writeln!(f, "Cells discovered: {}", self.cells_discovered)?;
        writeln!(f, "Frames rendered: {}", self.frames)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(path_length: Option<usize>, shortest_length: Option<usize>) -> RunStatistics {
        RunStatistics {
            algorithm: "DFS".to_string(),
            path_length,
            shortest_length,
            cells_explored: 40,
            cells_discovered: 55,
            frames: 60,
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn compares_with_shortest() {
        assert_eq!(stats(Some(8), Some(8)).is_shortest(), Some(true));
        assert_eq!(stats(Some(20), Some(8)).is_shortest(), Some(false));
        assert_eq!(stats(Some(20), Some(8)).detour(), Some(12));
        assert_eq!(stats(None, Some(8)).is_shortest(), None);
        assert!(!stats(None, None).found());
    }

    #[test]
    fn display_reports_detour_only_when_present() {
        let text = stats(Some(20), Some(8)).to_string();
        assert!(text.starts_with("DFS Statistics:\n"));
        assert!(text.contains("Path length: 20 moves\n"));
        assert!(text.contains("Detour: 12 extra moves\n"));
        assert!(text.contains("Frames rendered: 60\n"));

        let text = stats(Some(8), Some(8)).to_string();
        assert!(!text.contains("Detour"));

        let text = stats(None, None).to_string();
        assert!(text.contains("Path length: no path\n"));
        assert!(text.contains("Shortest possible: unreachable\n"));
    }
}
