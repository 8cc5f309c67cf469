//! Fundamental screening rules, one numeric threshold each.

use super::{Rule, RuleVerdict};
use crate::formatting::format_grouped;
use crate::FinancialSnapshot;

/// Rejects stocks whose trailing P/E ratio exceeds a configured threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxPeRatioRule {
    pub threshold: f64,
}

impl MaxPeRatioRule {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Rule for MaxPeRatioRule {
    fn name(&self) -> &'static str {
        "Max P/E ratio"
    }

    fn evaluate(&self, snapshot: &FinancialSnapshot) -> RuleVerdict {
        match snapshot.pe_ratio {
            None => RuleVerdict::fail("P/E ratio data unavailable"),
            Some(value) if value > self.threshold => RuleVerdict::fail(format!(
                "P/E ratio {value:.2} exceeds limit {:.2}",
                self.threshold
            )),
            Some(_) => RuleVerdict::pass(),
        }
    }

    fn describe(&self) -> String {
        format!("Max P/E ratio: {:.2}", self.threshold)
    }
}

/// Rejects stocks whose price-to-book ratio exceeds a configured threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxPbRatioRule {
    pub threshold: f64,
}

impl MaxPbRatioRule {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Rule for MaxPbRatioRule {
    fn name(&self) -> &'static str {
        "Max P/B ratio"
    }

    fn evaluate(&self, snapshot: &FinancialSnapshot) -> RuleVerdict {
        match snapshot.pb_ratio {
            None => RuleVerdict::fail("P/B ratio data unavailable"),
            Some(value) if value > self.threshold => RuleVerdict::fail(format!(
                "P/B ratio {value:.2} exceeds limit {:.2}",
                self.threshold
            )),
            Some(_) => RuleVerdict::pass(),
        }
    }

    fn describe(&self) -> String {
        format!("Max P/B ratio: {:.2}", self.threshold)
    }
}

/// Rejects stocks whose dividend yield is below a configured threshold.
///
/// Threshold and metric are both percentages on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinDividendYieldRule {
    pub threshold: f64,
}

impl MinDividendYieldRule {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Rule for MinDividendYieldRule {
    fn name(&self) -> &'static str {
        "Min dividend yield"
    }

    fn evaluate(&self, snapshot: &FinancialSnapshot) -> RuleVerdict {
        match snapshot.dividend_yield {
            None => RuleVerdict::fail("Dividend yield data unavailable"),
            Some(value) if value < self.threshold => RuleVerdict::fail(format!(
                "Dividend yield {value:.2}% below minimum {:.2}%",
                self.threshold
            )),
            Some(_) => RuleVerdict::pass(),
        }
    }

    fn describe(&self) -> String {
        format!("Min dividend yield: {:.2}%", self.threshold)
    }
}

/// Rejects stocks whose market capitalization is below a configured
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMarketCapRule {
    pub threshold: f64,
}

impl MinMarketCapRule {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Rule for MinMarketCapRule {
    fn name(&self) -> &'static str {
        "Min market cap"
    }

    fn evaluate(&self, snapshot: &FinancialSnapshot) -> RuleVerdict {
        match snapshot.market_cap {
            None => RuleVerdict::fail("Market capitalization data unavailable"),
            Some(value) if value < self.threshold => RuleVerdict::fail(format!(
                "Market capitalization {} below minimum {}",
                format_grouped(value, 2),
                format_grouped(self.threshold, 2)
            )),
            Some(_) => RuleVerdict::pass(),
        }
    }

    fn describe(&self) -> String {
        format!("Min market cap: {} USD", format_grouped(self.threshold, 0))
    }
}
