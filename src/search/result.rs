//! Search outcome types and statistics

use crate::sequence::{MaterializedView, Natural};
use std::time::Duration;

/// Result of one existential search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Whether some sequence satisfies the predicate
    pub satisfied: bool,
    /// The buffer of the satisfying trial, padded with `false`
    pub witness: Option<MaterializedView>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    pub fn satisfied(witness: MaterializedView, statistics: SearchStatistics) -> Self {
        Self {
            satisfied: true,
            witness: Some(witness),
            statistics,
        }
    }

    pub fn unsatisfied(statistics: SearchStatistics) -> Self {
        Self {
            satisfied: false,
            witness: None,
            statistics,
        }
    }
}

/// Statistics from one or more searches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Number of top-level searches folded into these statistics
    pub searches: u64,
    /// Enumeration rounds (one per present-set size)
    pub rounds: u64,
    /// Predicate evaluations
    pub trials: u64,
    /// Trials that ended undetermined and grew the present set
    pub undetermined_trials: u64,
    /// Largest present set reached
    pub positions_pinned: u64,
    /// Largest position ever pinned
    pub largest_position: Option<Natural>,
    /// Total time spent searching
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    /// Fold another set of statistics into this one
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.searches += other.searches;
        self.rounds += other.rounds;
        self.trials += other.trials;
        self.undetermined_trials += other.undetermined_trials;
        self.positions_pinned = self.positions_pinned.max(other.positions_pinned);
        self.largest_position = match (self.largest_position, other.largest_position) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.elapsed_time += other.elapsed_time;
    }

    /// Get trials evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.trials as f64 / secs
        }
    }

    /// Share of trials that ended undetermined (0.0 to 1.0)
    pub fn undetermined_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.undetermined_trials as f64 / self.trials as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Searches: {}\n", self.searches));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Rounds: {}\n", self.rounds));
        s.push_str(&format!("Trials evaluated: {}\n", self.trials));
        s.push_str(&format!("Throughput: {:.0} trials/sec\n", self.throughput()));

        if self.undetermined_trials > 0 {
            s.push_str(&format!(
                "Undetermined trials: {} ({:.4}%)\n",
                self.undetermined_trials,
                self.undetermined_rate() * 100.0
            ));
        }

        s.push_str(&format!("Positions pinned: {}\n", self.positions_pinned));
        if let Some(position) = self.largest_position {
            s.push_str(&format!("Largest position: {}\n", position));
        }

        s
    }
}
