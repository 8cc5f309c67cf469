//! Data source trait and fetch result types.
//!
//! A data source retrieves a [`FinancialSnapshot`] for a ticker from an
//! external provider. Provider-level failures (transport errors, malformed
//! payloads, unknown tickers) are captured inside the returned
//! [`FetchResult`] and never cross this boundary as Rust errors, so a
//! single bad ticker can never abort a batch.

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use crate::{FinancialSnapshot, Ticker};

/// Outcome of one fetch attempt for a ticker.
///
/// Exactly one of snapshot/error is present; the private fields and the
/// [`FetchResult::success`] / [`FetchResult::failure`] constructors keep
/// that invariant by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult {
    ticker: Ticker,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<FinancialSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FetchResult {
    pub fn success(snapshot: FinancialSnapshot) -> Self {
        Self {
            ticker: snapshot.ticker.clone(),
            snapshot: Some(snapshot),
            error: None,
        }
    }

    pub fn failure(ticker: Ticker, error: impl Into<String>) -> Self {
        Self {
            ticker,
            snapshot: None,
            error: Some(error.into()),
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn snapshot(&self) -> Option<&FinancialSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_success(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; the repository shares them across
/// call sites behind an `Arc`.
pub trait DataSource: Send + Sync {
    /// Short provider identifier used in messages and reports.
    fn name(&self) -> &'static str;

    /// Fetch a snapshot for `ticker`.
    ///
    /// Never fails at the Rust level: provider failures are returned as
    /// [`FetchResult::failure`] values.
    fn fetch<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'a>>;

    /// Fetch snapshots for `tickers`, one sequential `fetch` per ticker.
    ///
    /// Results follow the input order; each item is independent and carries
    /// its own success or failure.
    fn fetch_many<'a>(
        &'a self,
        tickers: &'a [Ticker],
    ) -> Pin<Box<dyn Future<Output = Vec<FetchResult>> + Send + 'a>> {
        Box::pin(async move {
            let mut results = Vec::with_capacity(tickers.len());
            for ticker in tickers {
                results.push(self.fetch(ticker).await);
            }
            results
        })
    }
}
