//! Quote and exchange-rate models and the accessors that extract them.
//!
//! Each upstream answers with a different JSON shape:
//! - Upbit: a list of tickers, the first one carrying `trade_price` (number).
//! - Binance: an object with `price` as a string-encoded decimal.
//! - Naver: an object with `exchangeInfo.closePrice`, a comma-grouped decimal string.
//!
//! The `parse_*` functions turn a fetched document into a typed value; the
//! `get_*` accessors fetch, parse, log, and report absence as `None`.
use chrono::Utc;
use log::{error, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::Result;
use crate::error::PremiumError;
use crate::fetcher::{JsonFetcher, fetch_data};
use crate::net::Endpoints;
use crate::source::Source;

/// Spot price of the tracked asset on one market.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Market that quoted the price.
    pub source: Source,
    /// Price in the market's currency (KRW for Upbit, USD for Binance).
    pub price: f64,
    /// UTC timestamp in milliseconds since Unix epoch, taken when parsed.
    pub timestamp: u64,
}

impl Quote {
    /// Creates a quote stamped with the current time.
    pub fn new(source: Source, price: f64) -> Self {
        Quote {
            source,
            price,
            timestamp: now_millis(),
        }
    }
}

/// USD/KRW conversion rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    /// Service that published the rate.
    pub source: Source,
    /// KRW per one USD.
    pub krw_per_usd: f64,
    /// UTC timestamp in milliseconds since Unix epoch, taken when parsed.
    pub timestamp: u64,
}

impl ExchangeRate {
    /// Creates a rate stamped with the current time.
    pub fn new(source: Source, krw_per_usd: f64) -> Self {
        ExchangeRate {
            source,
            krw_per_usd,
            timestamp: now_millis(),
        }
    }
}

fn now_millis() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// A number that upstreams send either as JSON number or as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn into_f64(self, source: Source) -> Result<f64> {
        match self {
            RawNumber::Number(n) => Ok(n),
            RawNumber::Text(s) => parse_decimal(source, &s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UpbitTicker {
    trade_price: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
struct BinanceTicker {
    price: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NaverMarketIndex {
    exchange_info: Option<NaverExchangeInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NaverExchangeInfo {
    close_price: Option<String>,
}

/// Parses a decimal string, dropping thousand separators.
///
/// `"1,350.50"` becomes `1350.5`. Non-finite results are rejected.
pub fn parse_decimal(source: Source, raw: &str) -> Result<f64> {
    let cleaned = raw.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PremiumError::InvalidNumber {
            upstream: source,
            value: raw.to_string(),
        }),
    }
}

/// Extracts `exchangeInfo.closePrice` from a Naver market index document.
pub fn parse_exchange_rate(json: Value) -> Result<ExchangeRate> {
    let index: NaverMarketIndex = serde_json::from_value(json)?;
    let close_price = index
        .exchange_info
        .and_then(|info| info.close_price)
        .ok_or(PremiumError::MissingField {
            upstream: Source::Naver,
            field: "exchangeInfo.closePrice",
        })?;
    let rate = parse_decimal(Source::Naver, &close_price)?;
    Ok(ExchangeRate::new(Source::Naver, rate))
}

/// Extracts the first ticker's `trade_price` from an Upbit ticker list.
pub fn parse_upbit_price(json: Value) -> Result<Quote> {
    let tickers: Vec<UpbitTicker> = serde_json::from_value(json)?;
    let price = tickers
        .into_iter()
        .next()
        .and_then(|ticker| ticker.trade_price)
        .ok_or(PremiumError::MissingField {
            upstream: Source::Upbit,
            field: "[0].trade_price",
        })?
        .into_f64(Source::Upbit)?;
    Ok(Quote::new(Source::Upbit, price))
}

/// Extracts `price` from a Binance ticker object.
pub fn parse_binance_price(json: Value) -> Result<Quote> {
    let ticker: BinanceTicker = serde_json::from_value(json)?;
    let price = ticker
        .price
        .ok_or(PremiumError::MissingField {
            upstream: Source::Binance,
            field: "price",
        })?
        .into_f64(Source::Binance)?;
    Ok(Quote::new(Source::Binance, price))
}

fn fetch_and_parse<F, T>(
    fetcher: &F,
    endpoints: &Endpoints,
    source: Source,
    parse: fn(Value) -> Result<T>,
) -> Option<T>
where
    F: JsonFetcher + ?Sized,
{
    let url = endpoints.url(source);
    let json = fetch_data(fetcher, url, &endpoints.headers(source))?;
    match parse(json) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Malformed {} response [{}]: {}", source, url, e);
            None
        }
    }
}

/// Fetches the USD/KRW rate from Naver.
pub fn get_exchange_rate<F>(fetcher: &F, endpoints: &Endpoints) -> Option<ExchangeRate>
where
    F: JsonFetcher + ?Sized,
{
    let rate = fetch_and_parse(fetcher, endpoints, Source::Naver, parse_exchange_rate);
    if rate.is_none() {
        error!("Unable to find exchange rate information.");
    }
    rate
}

/// Fetches the domestic KRW price from Upbit.
pub fn get_upbit_price<F>(fetcher: &F, endpoints: &Endpoints) -> Option<Quote>
where
    F: JsonFetcher + ?Sized,
{
    let quote = fetch_and_parse(fetcher, endpoints, Source::Upbit, parse_upbit_price);
    if quote.is_none() {
        error!("Unable to fetch {} price information.", Source::Upbit);
    }
    quote
}

/// Fetches the international USD price from Binance.
pub fn get_binance_price<F>(fetcher: &F, endpoints: &Endpoints) -> Option<Quote>
where
    F: JsonFetcher + ?Sized,
{
    let quote = fetch_and_parse(fetcher, endpoints, Source::Binance, parse_binance_price);
    if quote.is_none() {
        error!("Unable to fetch {} price information.", Source::Binance);
    }
    quote
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::stub::StubFetcher;
    use crate::net::{BINANCE_API_URL, NAVER_API_URL, UPBIT_API_URL, USER_AGENT};
    use serde_json::json;

    #[test]
    fn parse_decimal_strips_thousand_separators() {
        assert_eq!(parse_decimal(Source::Naver, "1,350.50").unwrap(), 1350.50);
        assert_eq!(parse_decimal(Source::Naver, "1,234,567.8").unwrap(), 1234567.8);
        assert_eq!(parse_decimal(Source::Binance, " 0.2451 ").unwrap(), 0.2451);
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        let err = parse_decimal(Source::Naver, "n/a").unwrap_err();
        assert!(matches!(
            err,
            PremiumError::InvalidNumber { upstream: Source::Naver, .. }
        ));
        assert!(parse_decimal(Source::Naver, "NaN").is_err());
        assert!(parse_decimal(Source::Naver, "").is_err());
    }

    #[test]
    fn exchange_rate_reads_nested_close_price() {
        let json = json!({"exchangeInfo": {"closePrice": "1,350.50", "name": "USD"}});

        let rate = parse_exchange_rate(json).unwrap();

        assert_eq!(rate.source, Source::Naver);
        assert_eq!(rate.krw_per_usd, 1350.50);
    }

    #[test]
    fn exchange_rate_missing_field() {
        for json in [json!({}), json!({"exchangeInfo": {}})] {
            let err = parse_exchange_rate(json).unwrap_err();
            assert!(matches!(
                err,
                PremiumError::MissingField { field: "exchangeInfo.closePrice", .. }
            ));
        }
    }

    #[test]
    fn upbit_reads_first_trade_price() {
        let json = json!([
            {"market": "KRW-TRX", "trade_price": 342.0},
            {"market": "KRW-TRX", "trade_price": 1.0}
        ]);

        let quote = parse_upbit_price(json).unwrap();

        assert_eq!(quote.source, Source::Upbit);
        assert_eq!(quote.price, 342.0);
    }

    #[test]
    fn upbit_empty_list_is_missing_field() {
        let err = parse_upbit_price(json!([])).unwrap_err();
        assert!(matches!(
            err,
            PremiumError::MissingField { upstream: Source::Upbit, .. }
        ));
    }

    #[test]
    fn upbit_error_object_is_malformed() {
        let json = json!({"error": {"name": "404", "message": "Code not found"}});
        assert!(matches!(
            parse_upbit_price(json).unwrap_err(),
            PremiumError::SerdeJson(_)
        ));
    }

    #[test]
    fn binance_parses_string_price() {
        let quote = parse_binance_price(json!({"symbol": "TRXUSDT", "price": "0.24510000"})).unwrap();
        assert_eq!(quote.source, Source::Binance);
        assert_eq!(quote.price, 0.2451);
    }

    #[test]
    fn binance_missing_price() {
        assert!(matches!(
            parse_binance_price(json!({"code": -1121, "msg": "Invalid symbol."})).unwrap_err(),
            PremiumError::MissingField { field: "price", .. }
        ));
    }

    #[test]
    fn accessors_send_headers_per_source() {
        let fetcher = StubFetcher::default()
            .with(UPBIT_API_URL, json!([{"trade_price": 340.0}]))
            .with(BINANCE_API_URL, json!({"price": "0.25"}))
            .with(NAVER_API_URL, json!({"exchangeInfo": {"closePrice": "1,360.00"}}));
        let endpoints = Endpoints::default();

        assert!(get_upbit_price(&fetcher, &endpoints).is_some());
        assert!(get_binance_price(&fetcher, &endpoints).is_some());
        assert!(get_exchange_rate(&fetcher, &endpoints).is_some());

        let requests = fetcher.requests.borrow();
        assert_eq!(requests[0].0, UPBIT_API_URL);
        assert!(requests[0].1.is_empty());
        for (_, headers) in &requests[1..] {
            assert_eq!(
                headers,
                &vec![("User-Agent".to_string(), USER_AGENT.to_string())]
            );
        }
    }

    #[test]
    fn accessors_report_absence() {
        let fetcher = StubFetcher::default()
            .with(NAVER_API_URL, json!({"exchangeInfo": null}));
        let endpoints = Endpoints::default();

        assert_eq!(get_exchange_rate(&fetcher, &endpoints), None);
        assert_eq!(get_upbit_price(&fetcher, &endpoints), None);
        assert_eq!(get_binance_price(&fetcher, &endpoints), None);
    }
}
