//! Kimchi premium calculation.
//!
//! The premium compares the domestic KRW price with the international USD price
//! converted at the current USD/KRW rate:
//!
//! ```text
//! premium_pct = ((P_d - P_i * R) / (P_i * R)) * 100
//! ```
//!
//! rounded to two decimal places. All three inputs must be finite and strictly
//! positive, so the divisor can never be zero.
use log::{debug, error};

use crate::Result;
use crate::error::PremiumError;
use crate::fetcher::JsonFetcher;
use crate::net::Endpoints;
use crate::quote::{ExchangeRate, Quote, get_binance_price, get_exchange_rate, get_upbit_price};

/// Outcome of a successful premium calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumReport {
    /// Premium in percent, rounded to two decimals.
    pub premium_pct: f64,
    /// Rate used to convert the international price.
    pub exchange_rate: ExchangeRate,
    /// Domestic (KRW) quote.
    pub domestic: Quote,
    /// International (USD) quote.
    pub international: Quote,
}

/// Rounds to two decimal places, halves away from zero.
///
/// Results that round to zero are returned as `+0.0`, never `-0.0`.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PremiumError::InvalidPrice { name, value })
    }
}

/// Applies the premium formula to raw numbers.
///
/// - domestic: price in KRW.
/// - international: price in USD.
/// - krw_per_usd: exchange rate.
/// - Returns: the premium in percent, rounded to two decimals.
pub fn premium_percent(domestic: f64, international: f64, krw_per_usd: f64) -> Result<f64> {
    ensure_positive("domestic price", domestic)?;
    ensure_positive("international price", international)?;
    ensure_positive("exchange rate", krw_per_usd)?;

    let converted = international * krw_per_usd;
    let premium = (domestic - converted) / converted * 100.0;
    Ok(round_to_cents(premium))
}

/// Builds a report from already fetched inputs.
pub fn compute_premium(
    exchange_rate: ExchangeRate,
    domestic: Quote,
    international: Quote,
) -> Result<PremiumReport> {
    let premium_pct = premium_percent(
        domestic.price,
        international.price,
        exchange_rate.krw_per_usd,
    )?;
    Ok(PremiumReport {
        premium_pct,
        exchange_rate,
        domestic,
        international,
    })
}

/// Fetches the rate and both prices, then computes the premium.
///
/// Fetches run one after another. The exchange rate comes first; without it the
/// price endpoints are not contacted at all. Every failure is logged and
/// reported as `None`.
pub fn calculate_kimchi<F>(fetcher: &F, endpoints: &Endpoints) -> Option<PremiumReport>
where
    F: JsonFetcher + ?Sized,
{
    let exchange_rate = get_exchange_rate(fetcher, endpoints)?;

    let domestic = get_upbit_price(fetcher, endpoints);
    let international = get_binance_price(fetcher, endpoints);
    let (Some(domestic), Some(international)) = (domestic, international) else {
        let err = PremiumError::MissingUpstream("Unable to fetch Upbit or Binance data.".to_string());
        error!("{}", err);
        return None;
    };

    match compute_premium(exchange_rate, domestic, international) {
        Ok(report) => {
            debug!("Premium report: {:?}", report);
            Some(report)
        }
        Err(e) => {
            error!("Premium calculation error: {}", e);
            None
        }
    }
}
