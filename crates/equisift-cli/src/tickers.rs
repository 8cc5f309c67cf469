//! Ticker list resolution: explicit arguments, a ticker file, or the
//! default basket.

use std::path::Path;

use equisift_core::{Ticker, DEFAULT_TICKERS};

use crate::error::CliError;

/// Resolve the tickers to screen.
///
/// Explicit `--tickers` arguments win over the ticker file; when both are
/// absent or empty the default large-cap basket is used.
pub fn resolve(
    tickers: Option<&[String]>,
    ticker_file: Option<&Path>,
) -> Result<Vec<Ticker>, CliError> {
    let arg_tickers: Vec<String> = tickers
        .unwrap_or_default()
        .iter()
        .map(|ticker| ticker.trim().to_owned())
        .filter(|ticker| !ticker.is_empty())
        .collect();

    let raw = if !arg_tickers.is_empty() {
        arg_tickers
    } else if let Some(path) = ticker_file {
        read_ticker_file(path)?
    } else {
        Vec::new()
    };

    let raw = if raw.is_empty() {
        DEFAULT_TICKERS.iter().map(|t| (*t).to_owned()).collect()
    } else {
        raw
    };

    raw.iter()
        .map(|ticker| Ticker::parse(ticker))
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::from)
}

fn read_ticker_file(path: &Path) -> Result<Vec<String>, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::TickerFile {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_tickers_win_over_everything() {
        let tickers = vec![String::from(" aapl "), String::from("msft")];
        let resolved = resolve(Some(&tickers), None).expect("tickers should resolve");

        let symbols: Vec<&str> = resolved.iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn ticker_file_is_used_when_no_arguments_are_given() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "aapl\n\n  googl  ").expect("write tickers");

        let resolved = resolve(None, Some(file.path())).expect("tickers should resolve");
        let symbols: Vec<&str> = resolved.iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL"]);
    }

    #[test]
    fn missing_ticker_file_is_an_error() {
        let err = resolve(None, Some(Path::new("/definitely/not/here.txt")))
            .expect_err("must fail");
        assert!(matches!(err, CliError::TickerFile { .. }));
    }

    #[test]
    fn falls_back_to_the_default_basket() {
        let resolved = resolve(None, None).expect("default basket should resolve");
        assert_eq!(resolved.len(), DEFAULT_TICKERS.len());
        assert_eq!(resolved[0].as_str(), "AAPL");
    }

    #[test]
    fn invalid_ticker_text_is_rejected() {
        let tickers = vec![String::from("AAPL$")];
        let err = resolve(Some(&tickers), None).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}
