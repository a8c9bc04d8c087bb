//! # vanilla-greeks: Black-Scholes Pricing and Sensitivity Sweeps
//!
//! Prices European vanilla options and their Greeks, and builds the numeric
//! series and grids behind price-vs-strike curves and P&L heatmaps.
//!
//! ## Key Features
//!
//! - **Closed-form Black-Scholes**: price, delta, gamma, vega, theta, rho
//! - **Pluggable models**: strategies registered by name in the engine (Black-Scholes, Monte Carlo)
//! - **Spot resolution**: supplied explicitly or fetched through a market-data provider
//! - **Parallel sweeps**: strike series and spot × volatility grids with Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, Local};
//! use vanilla_greeks::domain::OptionContract;
//! use vanilla_greeks::market_data::StaticPriceProvider;
//! use vanilla_greeks::pricing::PricingEngine;
//!
//! let engine = PricingEngine::new(Box::new(StaticPriceProvider::new().with_price("AAPL", 105.0)));
//! let expiry = Local::now().date_naive() + Duration::days(30);
//! let option = OptionContract::new("AAPL", 100.0, expiry);
//!
//! // Spot is fetched from the provider because none is supplied
//! let call = engine.calculate_call(&option, 0.2, 0.01, None).expect("valid inputs");
//! println!("Call price: {:.4}, delta: {:.4}", call.price, call.delta);
//! ```
//!
//! ## Degenerate expiry
//!
//! An option at or past expiration prices to exactly zero on every output.
//! This is a defined result, not an error.

// Module declarations
pub mod error;
pub mod rng;
pub mod math_utils;
pub mod domain;
pub mod analytics;
pub mod pricing;
pub mod market_data;
pub mod sweep;

// Re-export commonly used types for convenience
pub use error::{PriceResult, PricingError};
