//! Upstream endpoints and request headers.
//!
//! The default URLs track TRX on each market. `Endpoints` bundles them with the
//! browser User-Agent sent to the services that reject bare clients.

use crate::source::Source;

/// Upbit ticker for the KRW-TRX market.
pub const UPBIT_API_URL: &str = "https://api.upbit.com/v1/ticker?markets=KRW-TRX";
/// Binance spot price for TRXUSDT.
pub const BINANCE_API_URL: &str = "https://api.binance.com/api/v3/ticker/price?symbol=TRXUSDT";
/// Naver USD/KRW market index.
pub const NAVER_API_URL: &str = "https://api.stock.naver.com/marketindex/exchange/FX_USDKRW";

/// Browser User-Agent sent to Binance and Naver.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/109.0";

/// Header name used for the User-Agent.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// URLs of the three upstreams plus the User-Agent to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Domestic (Upbit) ticker URL.
    pub upbit_url: String,
    /// International (Binance) ticker URL.
    pub binance_url: String,
    /// USD/KRW (Naver) exchange rate URL.
    pub fx_url: String,
    /// User-Agent value for sources that require one.
    pub user_agent: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            upbit_url: String::from(UPBIT_API_URL),
            binance_url: String::from(BINANCE_API_URL),
            fx_url: String::from(NAVER_API_URL),
            user_agent: String::from(USER_AGENT),
        }
    }
}

impl Endpoints {
    /// URL to query for the given source.
    pub fn url(&self, source: Source) -> &str {
        match source {
            Source::Upbit => &self.upbit_url,
            Source::Binance => &self.binance_url,
            Source::Naver => &self.fx_url,
        }
    }

    /// Request headers for the given source.
    ///
    /// Upbit is queried without extra headers.
    pub fn headers(&self, source: Source) -> Vec<(&'static str, &str)> {
        match source {
            Source::Upbit => Vec::new(),
            Source::Binance | Source::Naver => vec![(USER_AGENT_HEADER, self.user_agent.as_str())],
        }
    }
}
