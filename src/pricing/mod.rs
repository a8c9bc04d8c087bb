//! Pricing models and the engine that dispatches to them

pub mod black_scholes;
pub mod engine;
pub mod monte_carlo;
pub mod strategy;

pub use black_scholes::{BlackScholesStrategy, BLACK_SCHOLES};
pub use engine::{EngineConfig, PricingEngine};
pub use monte_carlo::{MonteCarloConfig, MonteCarloStrategy, MONTE_CARLO};
pub use strategy::{Greek, Greeks, PricingStrategy};
