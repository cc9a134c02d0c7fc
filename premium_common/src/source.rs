//! Upstream services a price or rate can come from.

use strum_macros::Display;

/// Upstream that produced a value.
#[derive(Debug, Clone, Copy, Display, Hash, Eq, PartialEq)]
pub enum Source {
    /// Korean exchange, KRW market.
    Upbit,
    /// International exchange, USDT market.
    Binance,
    /// Naver market index, USD/KRW rate.
    Naver,
}
