//! Yahoo Finance spot fetcher
//!
//! Uses the unofficial chart endpoint. The last close of the most recent trading
//! day is preferred; when the history is empty the quote metadata
//! (`regularMarketPrice`, then `currentPrice`) is used instead.
//!
//! Note: Yahoo data is delayed and intended for personal use.

use serde::Deserialize;
use std::time::Duration;

use super::MarketDataProvider;
use crate::error::{PriceResult, PricingError};

#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Request timeout; `None` blocks until the server answers
    pub timeout: Option<Duration>,
}

impl Default for YahooConfig {
    fn default() -> Self {
        YahooConfig {
            base_url: "https://query1.finance.yahoo.com/v8/finance".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            timeout: None,
        }
    }
}

/// Yahoo Finance API client
pub struct YahooFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooFetcher {
    pub fn new() -> PriceResult<Self> {
        Self::with_config(YahooConfig::default())
    }

    pub fn with_config(config: YahooConfig) -> PriceResult<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PricingError::InvalidConfiguration {
                field: "http_client".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Extract a spot price from a decoded chart response
    pub fn price_from_chart(symbol: &str, response: &ChartResponse) -> PriceResult<f64> {
        let result = response
            .chart
            .result
            .as_ref()
            .and_then(|r| r.first())
            .ok_or_else(|| unavailable(symbol))?;

        let last_close = result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.iter().rev().flatten().next().copied());

        if let Some(close) = last_close {
            return Ok(close);
        }

        tracing::warn!("Empty price history for {}, falling back to quote metadata", symbol);
        result
            .meta
            .regular_market_price
            .or(result.meta.current_price)
            .ok_or_else(|| unavailable(symbol))
    }
}

impl MarketDataProvider for YahooFetcher {
    fn fetch_ticker_price(&self, symbol: &str) -> PriceResult<f64> {
        let url = format!("{}/chart/{}?range=1d&interval=1m", self.base_url, symbol);
        tracing::info!("Fetching spot price for {}", symbol);

        let response: ChartResponse = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| PricingError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?
            .json()
            .map_err(|e| PricingError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("Failed to parse quote: {}", e),
            })?;

        Self::price_from_chart(symbol, &response)
    }
}

fn unavailable(symbol: &str) -> PricingError {
    PricingError::DataUnavailable {
        symbol: symbol.to_string(),
        reason: format!("Could not fetch price for ticker: {}", symbol),
    }
}

// Yahoo API response types

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    regular_market_price: Option<f64>,
    current_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
