pub mod snapshot;
pub mod ticker;

pub use snapshot::FinancialSnapshot;
pub use ticker::Ticker;
