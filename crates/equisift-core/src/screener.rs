//! Core screening logic.

use crate::criteria::FilterCriteria;
use crate::data_source::FetchResult;
use crate::repository::DataRepository;
use crate::{FinancialSnapshot, Ticker};

/// Default large-cap basket screened when no tickers are supplied.
pub const DEFAULT_TICKERS: [&str; 10] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "TSLA", "NVDA", "JPM", "JNJ", "V",
];

/// Aggregate outcome from screening a batch of tickers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningOutcome {
    pub matches: Vec<FinancialSnapshot>,
    pub non_matches: Vec<FinancialSnapshot>,
    pub errors: Vec<FetchResult>,
}

impl ScreeningOutcome {
    /// Total number of tickers reviewed across all three buckets.
    pub fn reviewed(&self) -> usize {
        self.matches.len() + self.non_matches.len() + self.errors.len()
    }
}

/// Drives ticker batches through the repository and filter criteria.
pub struct ScreeningEngine {
    repository: DataRepository,
}

impl ScreeningEngine {
    pub fn new(repository: DataRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &DataRepository {
        &self.repository
    }

    /// Partition `tickers` into matches, non-matches, and fetch failures.
    ///
    /// Every ticker lands in exactly one bucket (a failing fetch never
    /// aborts the batch) and order within each bucket follows the input
    /// order. Rejection reasons are not stored on the outcome; downstream
    /// reporting recomputes them via
    /// [`FilterCriteria::rejection_reasons`] as needed.
    pub async fn screen(&self, tickers: &[Ticker], criteria: &FilterCriteria) -> ScreeningOutcome {
        let mut matches = Vec::new();
        let mut non_matches = Vec::new();
        let mut errors = Vec::new();

        for result in self.repository.fetch_many(tickers, true).await {
            match result.snapshot() {
                None => errors.push(result),
                Some(snapshot) => {
                    if criteria.matches(snapshot) {
                        matches.push(snapshot.clone());
                    } else {
                        non_matches.push(snapshot.clone());
                    }
                }
            }
        }

        ScreeningOutcome {
            matches,
            non_matches,
            errors,
        }
    }
}
