//! Filtering criteria composed of reusable screening rules.

use crate::rules::fundamental::{
    MaxPbRatioRule, MaxPeRatioRule, MinDividendYieldRule, MinMarketCapRule,
};
use crate::rules::Rule;
use crate::FinancialSnapshot;

/// Optional thresholds used to assemble the built-in rules.
///
/// An unset threshold simply omits its rule.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenThresholds {
    pub max_pe_ratio: Option<f64>,
    pub max_pb_ratio: Option<f64>,
    pub min_dividend_yield: Option<f64>,
    pub min_market_cap: Option<f64>,
}

/// An ordered collection of screening rules combined with logical AND.
///
/// Rule order controls the order of reported rejection reasons, never the
/// pass/fail outcome: every rule is evaluated against every snapshot.
pub struct FilterCriteria {
    rules: Vec<Box<dyn Rule>>,
    inactive: Vec<String>,
}

impl FilterCriteria {
    /// Build criteria from explicit threshold options.
    ///
    /// Thresholds left unset omit their rule and are listed as inactive by
    /// [`describe`](Self::describe).
    pub fn from_thresholds(thresholds: &ScreenThresholds) -> Self {
        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        let mut inactive = Vec::new();

        match thresholds.max_pe_ratio {
            Some(threshold) => rules.push(Box::new(MaxPeRatioRule::new(threshold))),
            None => inactive.push(String::from("Max P/E ratio: not set")),
        }

        match thresholds.max_pb_ratio {
            Some(threshold) => rules.push(Box::new(MaxPbRatioRule::new(threshold))),
            None => inactive.push(String::from("Max P/B ratio: not set")),
        }

        match thresholds.min_dividend_yield {
            Some(threshold) => rules.push(Box::new(MinDividendYieldRule::new(threshold))),
            None => inactive.push(String::from("Min dividend yield: not set")),
        }

        match thresholds.min_market_cap {
            Some(threshold) => rules.push(Box::new(MinMarketCapRule::new(threshold))),
            None => inactive.push(String::from("Min market cap: not set")),
        }

        Self { rules, inactive }
    }

    /// Build criteria from an explicit rule list supplied by the caller.
    ///
    /// No inactive-threshold lines are recorded in this mode.
    pub fn from_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules,
            inactive: Vec::new(),
        }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Whether all configured rules pass for `snapshot`.
    ///
    /// Criteria with zero rules match everything.
    pub fn matches(&self, snapshot: &FinancialSnapshot) -> bool {
        self.rejection_reasons(snapshot).is_empty()
    }

    /// Human-readable explanations for every rule failure, in rule order.
    ///
    /// No short-circuiting: each rule is evaluated even after a failure so
    /// the caller sees the complete picture.
    pub fn rejection_reasons(&self, snapshot: &FinancialSnapshot) -> Vec<String> {
        let mut reasons = Vec::new();
        for rule in &self.rules {
            let verdict = rule.evaluate(snapshot);
            if !verdict.passed() {
                let reason = verdict
                    .reason()
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("{} failed", rule.name()));
                reasons.push(reason);
            }
        }
        reasons
    }

    /// One summary line per configured rule, followed by inactive-threshold
    /// lines when the instance was built from thresholds.
    pub fn describe(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.rules.iter().map(|rule| rule.describe()).collect();
        lines.extend(self.inactive.iter().cloned());
        if lines.is_empty() {
            lines.push(String::from("No screening rules configured."));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleVerdict;
    use crate::Ticker;

    fn snapshot(pe_ratio: Option<f64>, pb_ratio: Option<f64>) -> FinancialSnapshot {
        FinancialSnapshot::new(
            Ticker::parse("TEST").expect("valid ticker"),
            pe_ratio,
            pb_ratio,
            None,
            None,
        )
        .expect("valid snapshot")
    }

    #[test]
    fn unset_thresholds_omit_their_rules() {
        let criteria = FilterCriteria::from_thresholds(&ScreenThresholds {
            max_pe_ratio: Some(25.0),
            ..ScreenThresholds::default()
        });
        assert_eq!(criteria.rules().len(), 1);
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = FilterCriteria::from_thresholds(&ScreenThresholds::default());
        assert!(criteria.matches(&snapshot(None, None)));
        assert!(criteria.rejection_reasons(&snapshot(None, None)).is_empty());
    }

    #[test]
    fn all_rules_are_evaluated_with_no_short_circuit() {
        let criteria = FilterCriteria::from_thresholds(&ScreenThresholds {
            max_pe_ratio: Some(25.0),
            max_pb_ratio: Some(3.0),
            ..ScreenThresholds::default()
        });

        let reasons = criteria.rejection_reasons(&snapshot(Some(30.0), Some(4.0)));
        assert_eq!(
            reasons,
            vec![
                String::from("P/E ratio 30.00 exceeds limit 25.00"),
                String::from("P/B ratio 4.00 exceeds limit 3.00"),
            ]
        );
    }

    #[test]
    fn describe_lists_configured_then_inactive_thresholds() {
        let criteria = FilterCriteria::from_thresholds(&ScreenThresholds {
            max_pe_ratio: Some(25.0),
            ..ScreenThresholds::default()
        });

        assert_eq!(
            criteria.describe(),
            vec![
                String::from("Max P/E ratio: 25.00"),
                String::from("Max P/B ratio: not set"),
                String::from("Min dividend yield: not set"),
                String::from("Min market cap: not set"),
            ]
        );
    }

    #[test]
    fn describe_for_injected_rules_has_no_inactive_lines() {
        let criteria =
            FilterCriteria::from_rules(vec![Box::new(MaxPeRatioRule::new(25.0))]);
        assert_eq!(criteria.describe(), vec![String::from("Max P/E ratio: 25.00")]);
    }

    #[test]
    fn describe_with_no_rules_at_all_reports_the_fallback_line() {
        let criteria = FilterCriteria::from_rules(Vec::new());
        assert_eq!(
            criteria.describe(),
            vec![String::from("No screening rules configured.")]
        );
    }

    #[test]
    fn injected_custom_rule_participates_in_evaluation() {
        struct AlwaysReject;

        impl Rule for AlwaysReject {
            fn name(&self) -> &'static str {
                "Always reject"
            }

            fn evaluate(&self, _snapshot: &FinancialSnapshot) -> RuleVerdict {
                RuleVerdict::fail("rejected by policy")
            }

            fn describe(&self) -> String {
                String::from("Always reject")
            }
        }

        let criteria = FilterCriteria::from_rules(vec![Box::new(AlwaysReject)]);
        assert!(!criteria.matches(&snapshot(Some(10.0), None)));
        assert_eq!(
            criteria.rejection_reasons(&snapshot(Some(10.0), None)),
            vec![String::from("rejected by policy")]
        );
    }
}
