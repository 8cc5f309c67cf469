use serde::{Deserialize, Serialize};

use crate::{Ticker, ValidationError};

/// Point-in-time valuation metrics for one ticker.
///
/// Any metric may be absent when the provider has no data for it; absence
/// is preserved, never collapsed to zero. Present values are validated as
/// finite and non-negative at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub ticker: Ticker,
    pub pe_ratio: Option<f64>,
    pub pb_ratio: Option<f64>,
    /// Percentage on the 0-100 scale, never a fraction.
    pub dividend_yield: Option<f64>,
    pub market_cap: Option<f64>,
}

impl FinancialSnapshot {
    pub fn new(
        ticker: Ticker,
        pe_ratio: Option<f64>,
        pb_ratio: Option<f64>,
        dividend_yield: Option<f64>,
        market_cap: Option<f64>,
    ) -> Result<Self, ValidationError> {
        validate_optional_metric("pe_ratio", pe_ratio)?;
        validate_optional_metric("pb_ratio", pb_ratio)?;
        validate_optional_metric("dividend_yield", dividend_yield)?;
        validate_optional_metric("market_cap", market_cap)?;

        Ok(Self {
            ticker,
            pe_ratio,
            pb_ratio,
            dividend_yield,
            market_cap,
        })
    }
}

fn validate_optional_metric(
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteMetric { field });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeMetric { field });
        }
    }
    Ok(())
}
