//! # Equisift Core
//!
//! Core contracts and screening pipeline for the equisift stock screener.
//!
//! ## Overview
//!
//! This crate provides the data-acquisition and rule-evaluation pipeline:
//!
//! - **Domain types**: normalized [`Ticker`], immutable
//!   [`FinancialSnapshot`] valuation metrics, [`FetchResult`] fetch outcomes
//! - **Data source trait** for provider adapters, with a Yahoo Finance
//!   implementation
//! - **Cache-aside repository** mediating between source and cache
//! - **Composable rule engine** deciding pass/fail with human-readable
//!   rejection reasons
//! - **Screening engine** partitioning ticker batches into matches,
//!   non-matches, and fetch failures
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Yahoo Finance) |
//! | [`cache`] | Snapshot cache trait and in-memory implementation |
//! | [`criteria`] | Rule collection with AND composition |
//! | [`data_source`] | Data source trait and fetch result types |
//! | [`domain`] | Domain models (Ticker, FinancialSnapshot) |
//! | [`formatting`] | Numeric display helpers |
//! | [`http_client`] | HTTP client abstraction |
//! | [`repository`] | Cache-aside data repository |
//! | [`rules`] | Rule trait and built-in threshold rules |
//! | [`screener`] | Batch screening engine |
//!
//! ## Error Handling
//!
//! Provider-origin failures are values, not errors: the data source boundary
//! converts every transport or payload problem into a [`FetchResult`] with
//! an error message, so one bad ticker never aborts a batch. Only contract
//! violations (invalid ticker text, NaN or negative metrics) surface as
//! [`ValidationError`] at construction time.

pub mod adapters;
pub mod cache;
pub mod criteria;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod formatting;
pub mod http_client;
pub mod repository;
pub mod rules;
pub mod screener;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::YahooFinanceSource;

// Caching
pub use cache::{InMemoryCache, SnapshotCache};

// Criteria
pub use criteria::{FilterCriteria, ScreenThresholds};

// Data source trait and types
pub use data_source::{DataSource, FetchResult};

// Domain models
pub use domain::{FinancialSnapshot, Ticker};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Repository
pub use repository::DataRepository;

// Rules
pub use rules::fundamental::{
    MaxPbRatioRule, MaxPeRatioRule, MinDividendYieldRule, MinMarketCapRule,
};
pub use rules::{Rule, RuleVerdict};

// Screening engine
pub use screener::{ScreeningEngine, ScreeningOutcome, DEFAULT_TICKERS};
