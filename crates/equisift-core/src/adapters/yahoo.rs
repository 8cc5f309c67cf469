//! Yahoo Finance implementation of the data source contract.
//!
//! Real mode queries the `quoteSummary` endpoint and extracts the valuation
//! metrics leniently: a missing or non-numeric field becomes `None` rather
//! than failing the whole fetch. Mock mode (any [`HttpClient`] reporting
//! `is_mock`) derives deterministic fundamentals from the ticker text so the
//! full pipeline can be exercised offline.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::data_source::{DataSource, FetchResult};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{FinancialSnapshot, Ticker};

const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const QUOTE_SUMMARY_MODULES: &str = "summaryDetail,defaultKeyStatistics,price";

/// Yahoo Finance adapter supporting both real API calls and mock mode.
pub struct YahooFinanceSource {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
}

impl Default for YahooFinanceSource {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
        }
    }
}

impl YahooFinanceSource {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
        }
    }

    async fn fetch_real(&self, ticker: &Ticker) -> FetchResult {
        let endpoint = format!(
            "{QUOTE_SUMMARY_URL}/{}?modules={}",
            urlencoding::encode(ticker.as_str()),
            QUOTE_SUMMARY_MODULES
        );

        let request = HttpRequest::get(endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(10_000);

        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                return FetchResult::failure(
                    ticker.clone(),
                    format!("{} transport error: {}", self.name(), error.message()),
                );
            }
        };

        if !response.is_success() {
            return FetchResult::failure(
                ticker.clone(),
                format!("yahoo upstream returned status {}", response.status),
            );
        }

        parse_quote_summary(ticker, &response.body)
    }

    async fn fetch_fake(&self, ticker: &Ticker) -> FetchResult {
        let request = HttpRequest::get(format!("{QUOTE_SUMMARY_URL}/{}", ticker.as_str()));
        let response = match self.http_client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                return FetchResult::failure(
                    ticker.clone(),
                    format!("{} transport error: {}", self.name(), error.message()),
                );
            }
        };

        if !response.is_success() {
            return FetchResult::failure(
                ticker.clone(),
                format!("yahoo upstream returned status {}", response.status),
            );
        }

        let seed = ticker_seed(ticker);
        let fraction = 0.005 + (seed % 50) as f64 / 10_000.0;
        let snapshot = FinancialSnapshot::new(
            ticker.clone(),
            Some(14.0 + (seed % 200) as f64 / 10.0),
            Some(1.5 + (seed % 80) as f64 / 10.0),
            Some(percentage_from_fraction(fraction)),
            Some(500_000_000_000.0 + (seed % 300_000) as f64 * 1_000_000.0),
        );

        match snapshot {
            Ok(snapshot) => FetchResult::success(snapshot),
            Err(error) => FetchResult::failure(ticker.clone(), error.to_string()),
        }
    }
}

impl DataSource for YahooFinanceSource {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn fetch<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> Pin<Box<dyn Future<Output = FetchResult> + Send + 'a>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real(ticker).await
            } else {
                self.fetch_fake(ticker).await
            }
        })
    }
}

fn parse_quote_summary(ticker: &Ticker, body: &str) -> FetchResult {
    let payload: QuoteSummaryResponse = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(error) => {
            return FetchResult::failure(
                ticker.clone(),
                format!("malformed yahoo payload: {error}"),
            );
        }
    };

    if let Some(error) = &payload.quote_summary.error {
        if !error.is_empty() {
            return FetchResult::failure(ticker.clone(), format!("yahoo API error: {error}"));
        }
    }

    let Some(result) = payload.quote_summary.result.into_iter().next() else {
        return FetchResult::failure(
            ticker.clone(),
            format!("yahoo returned no data for {ticker}"),
        );
    };

    let pe_ratio = result
        .summary_detail
        .as_ref()
        .and_then(|detail| metric(&detail.trailing_pe))
        .or_else(|| {
            result
                .default_key_statistics
                .as_ref()
                .and_then(|stats| metric(&stats.trailing_pe))
        });

    let pb_ratio = result
        .default_key_statistics
        .as_ref()
        .and_then(|stats| metric(&stats.price_to_book))
        .or_else(|| {
            result
                .summary_detail
                .as_ref()
                .and_then(|detail| metric(&detail.price_to_book))
        });

    // Yahoo reports dividend yield as a fraction; the percentage conversion
    // happens exactly once, here at ingestion.
    let dividend_yield = result
        .summary_detail
        .as_ref()
        .and_then(|detail| metric(&detail.dividend_yield))
        .map(percentage_from_fraction);

    let market_cap = result
        .price
        .as_ref()
        .and_then(|price| metric(&price.market_cap))
        .or_else(|| {
            result
                .summary_detail
                .as_ref()
                .and_then(|detail| metric(&detail.market_cap))
        });

    match FinancialSnapshot::new(ticker.clone(), pe_ratio, pb_ratio, dividend_yield, market_cap) {
        Ok(snapshot) => FetchResult::success(snapshot),
        Err(error) => FetchResult::failure(ticker.clone(), error.to_string()),
    }
}

const fn percentage_from_fraction(fraction: f64) -> f64 {
    fraction * 100.0
}

fn metric(value: &Option<RawValue>) -> Option<f64> {
    value.as_ref().and_then(RawValue::to_metric)
}

fn ticker_seed(ticker: &Ticker) -> u64 {
    ticker.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

// Yahoo quoteSummary response structures.

#[derive(Debug, Clone, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryData,
}

#[derive(Debug, Clone, Deserialize)]
struct QuoteSummaryData {
    #[serde(default)]
    result: Vec<QuoteSummaryResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct QuoteSummaryResult {
    #[serde(rename = "summaryDetail", default)]
    summary_detail: Option<SummaryDetailData>,
    #[serde(rename = "defaultKeyStatistics", default)]
    default_key_statistics: Option<DefaultKeyStatisticsData>,
    #[serde(default)]
    price: Option<PriceData>,
}

#[derive(Debug, Clone, Deserialize)]
struct SummaryDetailData {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<RawValue>,
    #[serde(rename = "priceToBook", default)]
    price_to_book: Option<RawValue>,
    #[serde(rename = "dividendYield", default)]
    dividend_yield: Option<RawValue>,
    #[serde(rename = "marketCap", default)]
    market_cap: Option<RawValue>,
}

#[derive(Debug, Clone, Deserialize)]
struct DefaultKeyStatisticsData {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<RawValue>,
    #[serde(rename = "priceToBook", default)]
    price_to_book: Option<RawValue>,
}

#[derive(Debug, Clone, Deserialize)]
struct PriceData {
    #[serde(rename = "marketCap", default)]
    market_cap: Option<RawValue>,
}

/// Yahoo wraps numeric fields in an object carrying the raw value plus
/// display metadata. The raw value is kept as loose JSON so a non-numeric
/// payload degrades to an absent metric instead of failing the fetch.
#[derive(Debug, Clone, Deserialize)]
struct RawValue {
    #[serde(default)]
    raw: Option<Value>,
}

impl RawValue {
    fn to_metric(&self) -> Option<f64> {
        self.raw
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite() && *value >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use std::sync::Mutex;

    struct ScriptedHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedHttpClient {
        fn with_body(body: &str) -> Self {
            Self {
                response: Ok(HttpResponse::ok_json(body)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn with_status(status: u16) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    body: String::new(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(HttpError::new(message)),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpClient for ScriptedHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn ticker(symbol: &str) -> Ticker {
        Ticker::parse(symbol).expect("valid ticker")
    }

    fn summary_body(detail: &str) -> String {
        format!(
            r#"{{"quoteSummary":{{"result":[{{"summaryDetail":{detail}}}],"error":null}}}}"#
        )
    }

    #[tokio::test]
    async fn mock_mode_returns_deterministic_snapshot() {
        let adapter = YahooFinanceSource::default();
        let aapl = ticker("AAPL");

        let first = adapter.fetch(&aapl).await;
        let second = adapter.fetch(&aapl).await;

        assert!(first.is_success());
        assert_eq!(first, second);
        assert_eq!(first.ticker().as_str(), "AAPL");
    }

    #[tokio::test]
    async fn parses_metrics_and_converts_dividend_yield_to_percentage() {
        let body = summary_body(
            r#"{"trailingPE":{"raw":28.5},"priceToBook":{"raw":7.2},"dividendYield":{"raw":0.0044},"marketCap":{"raw":2800000000000.0}}"#,
        );
        let client = Arc::new(ScriptedHttpClient::with_body(&body));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("AAPL")).await;
        let snapshot = result.snapshot().expect("fetch should succeed");

        assert_eq!(snapshot.pe_ratio, Some(28.5));
        assert_eq!(snapshot.pb_ratio, Some(7.2));
        assert_eq!(snapshot.dividend_yield, Some(0.44));
        assert_eq!(snapshot.market_cap, Some(2_800_000_000_000.0));
    }

    #[tokio::test]
    async fn non_numeric_raw_value_becomes_absent_metric() {
        let body = summary_body(
            r#"{"trailingPE":{"raw":"Infinity"},"dividendYield":{}}"#,
        );
        let client = Arc::new(ScriptedHttpClient::with_body(&body));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("TSLA")).await;
        let snapshot = result.snapshot().expect("fetch should succeed");

        assert_eq!(snapshot.pe_ratio, None);
        assert_eq!(snapshot.dividend_yield, None);
    }

    #[tokio::test]
    async fn negative_raw_value_becomes_absent_metric() {
        let body = summary_body(r#"{"trailingPE":{"raw":-12.4}}"#);
        let client = Arc::new(ScriptedHttpClient::with_body(&body));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("UBER")).await;
        let snapshot = result.snapshot().expect("fetch should succeed");
        assert_eq!(snapshot.pe_ratio, None);
    }

    #[tokio::test]
    async fn transport_error_surfaces_as_fetch_failure() {
        let client = Arc::new(ScriptedHttpClient::failing("upstream timeout"));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("AAPL")).await;
        assert!(!result.is_success());
        let message = result.error().expect("error must be set");
        assert!(message.contains("yahoo"), "message should name the provider");
        assert!(message.contains("upstream timeout"));
    }

    #[tokio::test]
    async fn http_error_status_surfaces_as_fetch_failure() {
        let client = Arc::new(ScriptedHttpClient::with_status(503));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("AAPL")).await;
        assert!(!result.is_success());
        assert!(result.error().expect("error must be set").contains("503"));
    }

    #[tokio::test]
    async fn payload_error_surfaces_as_fetch_failure() {
        let body = r#"{"quoteSummary":{"result":[],"error":"Quote not found for ticker symbol: ZZZZ"}}"#;
        let client = Arc::new(ScriptedHttpClient::with_body(body));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("ZZZZ")).await;
        assert!(!result.is_success());
        assert!(result
            .error()
            .expect("error must be set")
            .contains("Quote not found"));
    }

    #[tokio::test]
    async fn empty_result_list_surfaces_as_fetch_failure() {
        let body = r#"{"quoteSummary":{"result":[],"error":null}}"#;
        let client = Arc::new(ScriptedHttpClient::with_body(body));
        let adapter = YahooFinanceSource {
            http_client: client,
            use_real_api: true,
        };

        let result = adapter.fetch(&ticker("MSFT")).await;
        assert!(!result.is_success());
        assert!(result
            .error()
            .expect("error must be set")
            .contains("no data"));
    }

    #[tokio::test]
    async fn requests_quote_summary_with_modules() {
        let body = summary_body(r#"{"trailingPE":{"raw":10.0}}"#);
        let client = Arc::new(ScriptedHttpClient::with_body(&body));
        let adapter = YahooFinanceSource {
            http_client: Arc::clone(&client) as Arc<dyn HttpClient>,
            use_real_api: true,
        };

        let aapl = ticker("aapl");
        adapter.fetch(&aapl).await;

        let requests = client
            .requests
            .lock()
            .expect("request store should not be poisoned");
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("/quoteSummary/AAPL"));
        assert!(requests[0].url.contains("modules=summaryDetail"));
    }
}
