//! Spot price sources
//!
//! The engine depends only on [`MarketDataProvider`]: given a ticker, return its
//! current price or fail with [`PricingError::DataUnavailable`](crate::error::PricingError).

pub mod yahoo;

use std::collections::HashMap;

use crate::error::{PriceResult, PricingError};

pub use yahoo::{YahooConfig, YahooFetcher};

/// Synchronous, fallible spot-price lookup.
///
/// Implementations perform no caching; every call is a fresh lookup.
pub trait MarketDataProvider: Send + Sync {
    fn fetch_ticker_price(&self, symbol: &str) -> PriceResult<f64>;
}

/// Fixed symbol → price table, for offline use and tests
#[derive(Debug, Clone, Default)]
pub struct StaticPriceProvider {
    prices: HashMap<String, f64>,
}

impl StaticPriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, symbol: impl Into<String>, price: f64) -> Self {
        self.prices.insert(symbol.into(), price);
        self
    }
}

impl MarketDataProvider for StaticPriceProvider {
    fn fetch_ticker_price(&self, symbol: &str) -> PriceResult<f64> {
        self.prices
            .get(symbol)
            .copied()
            .ok_or_else(|| PricingError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("Could not fetch price for ticker: {}", symbol),
            })
    }
}
