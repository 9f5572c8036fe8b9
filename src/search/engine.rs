//! Adaptive exhaustive search over Cantor space
//!
//! The engine never sees an infinite sequence. It keeps a present set of
//! pinned positions and a working assignment holding one value per pinned
//! position, and enumerates every assignment to the pinned positions. A
//! trial that reads outside the present set comes back undetermined; the
//! positions it asked for are pinned and the enumeration restarts with the
//! larger set. For a prefix-determined predicate the present set stops
//! growing after finitely many rounds, and a round in which every trial is
//! definite and false proves that no sequence satisfies the predicate.

use crate::error::{Result, SearchError};
use crate::search::config::SearchConfig;
use crate::search::guard::SearchToken;
use crate::search::result::{SearchOutcome, SearchStatistics};
use crate::sequence::{Bit, BitView, IndexSet, LazyView, MaterializedView, Natural};
use std::time::Instant;
use tracing::{debug, trace};

/// How one enumeration round ended
enum RoundResult {
    /// The current assignment satisfies the predicate
    Satisfied,
    /// Every assignment was tried and all were false
    Exhausted,
    /// A trial was undetermined; these positions were requested
    Pending(IndexSet),
}

/// Search engine with configuration and cumulative statistics
#[derive(Debug, Clone, Default)]
pub struct Search {
    config: SearchConfig,
    statistics: SearchStatistics,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics accumulated over every search run by this engine
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Reset the cumulative statistics
    pub fn reset(&mut self) {
        self.statistics = SearchStatistics::default();
    }

    /// Does some sequence satisfy `predicate`?
    pub fn try_exists<P>(&mut self, predicate: P) -> Result<Bit>
    where
        P: Fn(&dyn BitView) -> Option<Bit>,
    {
        Ok(self.try_find(predicate)?.satisfied)
    }

    /// Search for a sequence satisfying `predicate`, returning the witness
    ///
    /// The predicate must be prefix-determined; otherwise the search may not
    /// terminate unless `max_rounds` is set. Starting a search from inside a
    /// predicate aborts the process.
    pub fn try_find<P>(&mut self, predicate: P) -> Result<SearchOutcome>
    where
        P: Fn(&dyn BitView) -> Option<Bit>,
    {
        let _token = SearchToken::acquire();
        let started = Instant::now();

        let mut statistics = SearchStatistics {
            searches: 1,
            ..Default::default()
        };
        let result = self.run(&predicate, &mut statistics);
        statistics.elapsed_time = started.elapsed();
        self.statistics.merge(&statistics);

        match result? {
            Some(witness) => {
                debug!(
                    rounds = statistics.rounds,
                    trials = statistics.trials,
                    "predicate satisfied"
                );
                Ok(SearchOutcome::satisfied(witness, statistics))
            }
            None => {
                debug!(
                    rounds = statistics.rounds,
                    trials = statistics.trials,
                    "predicate unsatisfiable"
                );
                Ok(SearchOutcome::unsatisfied(statistics))
            }
        }
    }

    fn run<P>(
        &self,
        predicate: &P,
        statistics: &mut SearchStatistics,
    ) -> Result<Option<MaterializedView>>
    where
        P: Fn(&dyn BitView) -> Option<Bit>,
    {
        let mut present = IndexSet::new();

        loop {
            if let Some(limit) = self.config.max_rounds {
                if statistics.rounds >= limit {
                    return Err(SearchError::RoundLimit { rounds: limit });
                }
            }
            statistics.rounds += 1;

            // Slot k of `values` holds the bit at `order[k]`
            let order = present.to_vec();
            let mut values = vec![false; order.len()];
            debug!(
                round = statistics.rounds,
                pinned = order.len(),
                "enumerating assignments"
            );

            match self.enumerate(predicate, &order, &mut values, statistics) {
                RoundResult::Satisfied => {
                    return Ok(Some(MaterializedView::from_assignment(order, values)));
                }
                RoundResult::Exhausted => {
                    debug!(present = %present, "tried every assignment");
                    return Ok(None);
                }
                RoundResult::Pending(requested) => {
                    if requested.is_empty() {
                        return Err(SearchError::Stalled {
                            round: statistics.rounds,
                        });
                    }
                    debug!(requested = %requested, "pinning requested positions");
                    present.extend(requested.iter());
                    statistics.positions_pinned = present.len();
                    statistics.largest_position = present.max();
                }
            }
        }
    }

    /// Try every assignment to `order` until one is true or undetermined
    fn enumerate<P>(
        &self,
        predicate: &P,
        order: &[Natural],
        values: &mut [Bit],
        statistics: &mut SearchStatistics,
    ) -> RoundResult
    where
        P: Fn(&dyn BitView) -> Option<Bit>,
    {
        let laps = self.config.schedule.laps();
        let mut completed = 0;

        loop {
            let wrapped = advance(values);
            statistics.trials += 1;

            if self.config.verbose {
                trace!(assignment = %render(order, values), "trial");
            }

            let view = LazyView::new(order, values);
            match predicate(&view) {
                Some(true) => return RoundResult::Satisfied,
                Some(false) => {}
                None => {
                    statistics.undetermined_trials += 1;
                    return RoundResult::Pending(view.into_requested());
                }
            }

            if wrapped {
                completed += 1;
                if completed == laps {
                    return RoundResult::Exhausted;
                }
            }
        }
    }
}

/// Increment the binary counter whose digits are `values`, lowest first
///
/// Returns true when the counter wraps around to all-false.
fn advance(values: &mut [Bit]) -> bool {
    for digit in values.iter_mut() {
        if !*digit {
            *digit = true;
            return false;
        }
        *digit = false;
    }
    true
}

fn render(order: &[Natural], values: &[Bit]) -> String {
    order
        .iter()
        .zip(values)
        .map(|(position, &value)| format!("{}={}", position, u8::from(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unwrap a search that can only fail by contract violation
pub(crate) fn settle<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("search failed: {}", err),
    }
}

/// Returns true iff some sequence makes `predicate` true
///
/// `predicate` must be prefix-determined; otherwise this may not return.
///
/// # Panics
///
/// Panics if `predicate` returns undetermined without reading any unpinned
/// position. Aborts the process if called from inside another search's
/// predicate on the same thread.
pub fn exists<P>(predicate: P) -> Bit
where
    P: Fn(&dyn BitView) -> Option<Bit>,
{
    settle(Search::default().try_exists(predicate))
}

/// Like [`exists`], but returns the satisfying sequence
pub fn find<P>(predicate: P) -> Option<MaterializedView>
where
    P: Fn(&dyn BitView) -> Option<Bit>,
{
    settle(Search::default().try_find(predicate)).witness
}
