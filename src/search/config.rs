//! Configuration types for the search engine

use crate::sequence::Natural;

/// How many trials one enumeration round makes
///
/// The engine walks a binary counter over the pinned positions, advancing
/// before each trial. One lap of the counter visits every assignment once;
/// the doubled schedule runs two laps. Both report the same answers, the
/// doubled one only repeats assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrialSchedule {
    /// `2^(n+1)` trials for `n` pinned positions
    #[default]
    Doubled,
    /// `2^n` trials for `n` pinned positions
    Single,
}

impl TrialSchedule {
    /// Number of full counter laps per round
    pub fn laps(self) -> u32 {
        match self {
            TrialSchedule::Doubled => 2,
            TrialSchedule::Single => 1,
        }
    }
}

impl std::fmt::Display for TrialSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrialSchedule::Doubled => write!(f, "doubled"),
            TrialSchedule::Single => write!(f, "single"),
        }
    }
}

impl std::str::FromStr for TrialSchedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "doubled" | "double" => Ok(TrialSchedule::Doubled),
            "single" => Ok(TrialSchedule::Single),
            _ => Err(format!(
                "Unknown trial schedule: '{}'. Valid options: doubled, single",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Trials per enumeration round
    pub schedule: TrialSchedule,
    /// Give up after this many rounds (None = unbounded)
    pub max_rounds: Option<u64>,
    /// Largest prefix length `try_modulus` will test (None = unbounded)
    pub max_modulus: Option<Natural>,
    /// Emit a trace event for every trial
    pub verbose: bool,
}

impl SearchConfig {
    pub fn with_schedule(mut self, schedule: TrialSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_max_rounds_option(mut self, rounds: Option<u64>) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_max_modulus(mut self, limit: Natural) -> Self {
        self.max_modulus = Some(limit);
        self
    }

    pub fn with_max_modulus_option(mut self, limit: Option<Natural>) -> Self {
        self.max_modulus = limit;
        self
    }

    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// True if no limit can make a search fail
    pub fn is_unbounded(&self) -> bool {
        self.max_rounds.is_none() && self.max_modulus.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_from_str() {
        assert_eq!(
            "doubled".parse::<TrialSchedule>().unwrap(),
            TrialSchedule::Doubled
        );
        assert_eq!(
            "SINGLE".parse::<TrialSchedule>().unwrap(),
            TrialSchedule::Single
        );
        assert!("triple".parse::<TrialSchedule>().is_err());
    }

    #[test]
    fn test_schedule_display() {
        assert_eq!(format!("{}", TrialSchedule::Doubled), "doubled");
        assert_eq!(format!("{}", TrialSchedule::Single), "single");
    }

    #[test]
    fn test_schedule_laps() {
        assert_eq!(TrialSchedule::Doubled.laps(), 2);
        assert_eq!(TrialSchedule::Single.laps(), 1);
    }

    #[test]
    fn test_default_config_is_unbounded() {
        let config = SearchConfig::default();
        assert_eq!(config.schedule, TrialSchedule::Doubled);
        assert!(config.is_unbounded());
        assert!(!config.verbose);
    }

    #[test]
    fn test_search_config_builder() {
        let config = SearchConfig::default()
            .with_schedule(TrialSchedule::Single)
            .with_max_rounds(10)
            .with_max_modulus(32)
            .verbose();

        assert_eq!(config.schedule, TrialSchedule::Single);
        assert_eq!(config.max_rounds, Some(10));
        assert_eq!(config.max_modulus, Some(32));
        assert!(config.verbose);
        assert!(!config.is_unbounded());
    }

    #[test]
    fn test_option_builders() {
        let config = SearchConfig::default()
            .with_max_rounds_option(None)
            .with_max_modulus_option(Some(4));
        assert_eq!(config.max_rounds, None);
        assert_eq!(config.max_modulus, Some(4));
    }
}
