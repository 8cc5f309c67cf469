//! Plain-text report building for screening outcomes.

use equisift_core::formatting::format_metric;
use equisift_core::{FetchResult, FilterCriteria, FinancialSnapshot, ScreeningOutcome};
use time::macros::format_description;
use time::OffsetDateTime;

const TABLE_HEADERS: [&str; 5] = [
    "Ticker",
    "P/E",
    "P/B",
    "Dividend Yield (%)",
    "Market Cap (USD)",
];

/// Create a descriptive email subject line.
pub fn build_subject(now: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    let date = now
        .format(&format)
        .expect("formatting a date into a string cannot fail");
    format!("Stock screening report - {date}")
}

/// Generate the plain-text body for a screening report.
pub fn build_body(criteria: &FilterCriteria, outcome: &ScreeningOutcome) -> String {
    let mut lines: Vec<String> = Vec::new();

    let title = "Stock screening summary";
    lines.push(String::from(title));
    lines.push("=".repeat(title.len()));
    lines.push(String::new());

    lines.push(String::from("Screening criteria:"));
    for description in criteria.describe() {
        lines.push(format!("  • {description}"));
    }
    lines.push(String::new());

    lines.push(format!("Tickers reviewed: {}", outcome.reviewed()));
    lines.push(format!("Recommended trades: {}", outcome.matches.len()));
    lines.push(format!(
        "Do-not-trade candidates: {}",
        outcome.non_matches.len()
    ));
    lines.push(format!(
        "Tickers with data issues: {}",
        outcome.errors.len()
    ));
    lines.push(String::new());

    lines.extend(matches_section(&outcome.matches));
    lines.push(String::new());
    lines.extend(rejections_section(criteria, &outcome.non_matches));
    lines.push(String::new());
    lines.extend(errors_section(&outcome.errors));

    let mut body = lines.join("\n");
    while body.ends_with('\n') {
        body.pop();
    }
    body.push('\n');
    body
}

fn matches_section(matches: &[FinancialSnapshot]) -> Vec<String> {
    if matches.is_empty() {
        return vec![String::from("Recommended trades: none")];
    }

    let mut lines = vec![String::from("Recommended trades:")];
    lines.extend(
        render_table(matches)
            .into_iter()
            .map(|line| format!("  {line}")),
    );
    lines
}

/// Aligned ` | `-separated table with a `-+-` separator under the header.
fn render_table(snapshots: &[FinancialSnapshot]) -> Vec<String> {
    let mut rows: Vec<[String; 5]> = vec![TABLE_HEADERS.map(String::from)];
    for snapshot in snapshots {
        rows.push([
            snapshot.ticker.to_string(),
            format_metric(snapshot.pe_ratio),
            format_metric(snapshot.pb_ratio),
            format_metric(snapshot.dividend_yield),
            format_metric(snapshot.market_cap),
        ]);
    }

    let widths: Vec<usize> = (0..TABLE_HEADERS.len())
        .map(|idx| rows.iter().map(|row| row[idx].len()).max().unwrap_or(0))
        .collect();

    let join = |row: &[String; 5]| {
        row.iter()
            .enumerate()
            .map(|(idx, cell)| format!("{cell:<width$}", width = widths[idx]))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![join(&rows[0]), separator];
    lines.extend(rows[1..].iter().map(join));
    lines
}

fn rejections_section(
    criteria: &FilterCriteria,
    non_matches: &[FinancialSnapshot],
) -> Vec<String> {
    if non_matches.is_empty() {
        return vec![String::from("Do-not-trade candidates: none")];
    }

    let mut lines = vec![String::from("Do-not-trade candidates:")];
    for snapshot in non_matches {
        let dividend = format_metric(snapshot.dividend_yield);
        let dividend_display = if dividend == "-" {
            dividend
        } else {
            format!("{dividend}%")
        };
        let market_cap = format_metric(snapshot.market_cap);
        let market_cap_display = if market_cap == "-" {
            market_cap
        } else {
            format!("{market_cap} USD")
        };

        lines.push(format!(
            "  - {} (P/E={}, P/B={}, Dividend Yield={}, Market Cap={})",
            snapshot.ticker,
            format_metric(snapshot.pe_ratio),
            format_metric(snapshot.pb_ratio),
            dividend_display,
            market_cap_display
        ));
        for reason in criteria.rejection_reasons(snapshot) {
            lines.push(format!("      • {reason}"));
        }
    }
    lines
}

fn errors_section(errors: &[FetchResult]) -> Vec<String> {
    if errors.is_empty() {
        return vec![String::from("Tickers with data issues: none")];
    }

    let mut lines = vec![String::from("Tickers with data issues:")];
    for result in errors {
        let detail = result.error().unwrap_or("Unknown error");
        lines.push(format!("  - {}: {detail}", result.ticker()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use equisift_core::{ScreenThresholds, Ticker};
    use time::macros::datetime;

    fn snapshot(symbol: &str, pe_ratio: Option<f64>, dividend_yield: Option<f64>) -> FinancialSnapshot {
        FinancialSnapshot::new(
            Ticker::parse(symbol).expect("valid ticker"),
            pe_ratio,
            Some(5.0),
            dividend_yield,
            Some(1_000_000_000.0),
        )
        .expect("valid snapshot")
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria::from_thresholds(&ScreenThresholds {
            max_pe_ratio: Some(25.0),
            ..ScreenThresholds::default()
        })
    }

    #[test]
    fn subject_carries_the_report_date() {
        let subject = build_subject(datetime!(2026-08-06 09:30 UTC));
        assert_eq!(subject, "Stock screening report - 2026-08-06");
    }

    #[test]
    fn body_lists_criteria_and_counts() {
        let outcome = ScreeningOutcome {
            matches: vec![snapshot("AAPL", Some(20.0), Some(0.44))],
            non_matches: vec![snapshot("TSLA", Some(60.0), None)],
            errors: vec![FetchResult::failure(
                Ticker::parse("XYZ").expect("valid ticker"),
                "provider unreachable",
            )],
        };

        let body = build_body(&criteria(), &outcome);

        assert!(body.starts_with("Stock screening summary\n======================="));
        assert!(body.contains("  • Max P/E ratio: 25.00"));
        assert!(body.contains("  • Min market cap: not set"));
        assert!(body.contains("Tickers reviewed: 3"));
        assert!(body.contains("Recommended trades: 1"));
        assert!(body.contains("Do-not-trade candidates: 1"));
        assert!(body.contains("Tickers with data issues: 1"));
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn matches_render_as_an_aligned_table() {
        let outcome = ScreeningOutcome {
            matches: vec![snapshot("AAPL", Some(20.0), Some(0.44))],
            non_matches: Vec::new(),
            errors: Vec::new(),
        };

        let body = build_body(&criteria(), &outcome);

        assert!(body.contains("Ticker | P/E"));
        assert!(body.contains("-+-"));
        assert!(body.contains("AAPL"));
        assert!(body.contains("Do-not-trade candidates: none"));
        assert!(body.contains("Tickers with data issues: none"));
    }

    #[test]
    fn rejections_carry_metrics_and_reasons() {
        let outcome = ScreeningOutcome {
            matches: Vec::new(),
            non_matches: vec![snapshot("TSLA", Some(60.0), None)],
            errors: Vec::new(),
        };

        let body = build_body(&criteria(), &outcome);

        assert!(body.contains("Recommended trades: none"));
        assert!(body.contains("  - TSLA (P/E=60.00, P/B=5.00, Dividend Yield=-, Market Cap=1,000,000,000.00 USD)"));
        assert!(body.contains("      • P/E ratio 60.00 exceeds limit 25.00"));
    }

    #[test]
    fn errors_section_lists_each_failing_ticker() {
        let outcome = ScreeningOutcome {
            matches: Vec::new(),
            non_matches: Vec::new(),
            errors: vec![FetchResult::failure(
                Ticker::parse("XYZ").expect("valid ticker"),
                "provider unreachable",
            )],
        };

        let body = build_body(&criteria(), &outcome);
        assert!(body.contains("  - XYZ: provider unreachable"));
    }
}
