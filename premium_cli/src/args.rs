//! Command-line arguments for the premium calculator.
//!
//! Every flag is optional; running without arguments queries the default
//! upstreams. See `main` for end-to-end usage.
use clap::Parser;
use premium_common::net::{BINANCE_API_URL, Endpoints, NAVER_API_URL, UPBIT_API_URL, USER_AGENT};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Computes the kimchi premium of TRX between Upbit and Binance", long_about = None)]
pub struct Args {
    /// Upbit ticker URL returning a list with `trade_price`.
    #[clap(long, default_value = UPBIT_API_URL)]
    pub upbit_url: String,

    /// Binance ticker URL returning an object with `price`.
    #[clap(long, default_value = BINANCE_API_URL)]
    pub binance_url: String,

    /// USD/KRW URL returning `exchangeInfo.closePrice`.
    #[clap(long, default_value = NAVER_API_URL)]
    pub fx_url: String,

    /// User-Agent sent to Binance and the FX service.
    #[clap(long, default_value = USER_AGENT)]
    pub user_agent: String,
}

impl From<Args> for Endpoints {
    fn from(args: Args) -> Self {
        Endpoints {
            upbit_url: args.upbit_url.trim().to_string(),
            binance_url: args.binance_url.trim().to_string(),
            fx_url: args.fx_url.trim().to_string(),
            user_agent: args.user_agent,
        }
    }
}
