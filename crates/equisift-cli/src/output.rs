//! Console rendering for screening results.

use equisift_core::formatting::format_metric;
use equisift_core::{FinancialSnapshot, ScreeningOutcome};

const TABLE_HEADERS: [&str; 5] = [
    "Ticker",
    "P/E",
    "P/B",
    "Dividend Yield (%)",
    "Market Cap (USD)",
];

pub fn render(outcome: &ScreeningOutcome) {
    if outcome.matches.is_empty() {
        println!("No stocks matched the provided criteria.");
    } else {
        print_table(&outcome.matches);
    }

    if !outcome.non_matches.is_empty() {
        println!("\nStocks failing the criteria:");
        for snapshot in &outcome.non_matches {
            println!("  - {}", snapshot.ticker);
        }
    }

    if !outcome.errors.is_empty() {
        println!("\nTickers with data issues:");
        for result in &outcome.errors {
            println!(
                "  - {}: {}",
                result.ticker(),
                result.error().unwrap_or("Unknown error")
            );
        }
    }
}

fn print_table(matches: &[FinancialSnapshot]) {
    println!("{}", TABLE_HEADERS.join("\t"));
    for snapshot in matches {
        let row = [
            snapshot.ticker.to_string(),
            format_metric(snapshot.pe_ratio),
            format_metric(snapshot.pb_ratio),
            format_metric(snapshot.dividend_yield),
            format_metric(snapshot.market_cap),
        ];
        println!("{}", row.join("\t"));
    }
}
