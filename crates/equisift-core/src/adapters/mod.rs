//! Provider adapters implementing the [`DataSource`](crate::DataSource) contract.

pub mod yahoo;

pub use yahoo::YahooFinanceSource;
