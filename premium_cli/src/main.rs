//! Kimchi premium CLI — fetches the TRX price on Upbit (KRW) and Binance (USD)
//! plus the USD/KRW rate, and prints how far the Korean price sits above or
//! below the converted international one.
//!
//! Usage example (CLI):
//! ```bash
//! RUST_LOG=debug premium_cli
//! premium_cli --fx-url http://127.0.0.1:9000/fx
//! ```
//!
//! Diagnostics go to stderr through the logger; the result goes to stdout. The
//! process exits with status 0 whether or not the calculation succeeded.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::error;
use premium_common::PremiumReport;
use premium_common::calculate_kimchi;
use premium_common::fetcher::HttpFetcher;
use premium_common::net::Endpoints;

fn main() {
    init_logger();
    let endpoints = Endpoints::from(Args::parse());

    println!("Calculating kimchi premium...");

    let report = match HttpFetcher::new() {
        Ok(fetcher) => calculate_kimchi(&fetcher, &endpoints),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            None
        }
    };

    for line in render(report.as_ref()) {
        println!("{}", line);
    }
}

/// Formats the final console lines for a calculation outcome.
fn render(report: Option<&PremiumReport>) -> Vec<String> {
    match report {
        Some(report) => vec![
            format!("Current kimchi premium: {}%", report.premium_pct),
            format!(
                "Exchange rate: {:.2} KRW/USD",
                report.exchange_rate.krw_per_usd
            ),
        ],
        None => vec![String::from("Kimchi premium calculation failed.")],
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use premium_common::quote::{ExchangeRate, Quote};
    use premium_common::source::Source;

    #[test]
    fn render_success() {
        let report = PremiumReport {
            premium_pct: 5.82,
            exchange_rate: ExchangeRate::new(Source::Naver, 1350.5),
            domestic: Quote::new(Source::Upbit, 100.0),
            international: Quote::new(Source::Binance, 0.07),
        };

        assert_eq!(
            render(Some(&report)),
            vec![
                "Current kimchi premium: 5.82%".to_string(),
                "Exchange rate: 1350.50 KRW/USD".to_string(),
            ]
        );
    }

    #[test]
    fn render_failure() {
        assert_eq!(
            render(None),
            vec!["Kimchi premium calculation failed.".to_string()]
        );
    }
}
