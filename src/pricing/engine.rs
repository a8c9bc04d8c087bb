// src/pricing/engine.rs
//! Strategy registry, spot resolution and dispatch
//!
//! # Calculation surfaces
//!
//! - [`PricingEngine::calculate`] prices both legs with any registered model.
//! - [`PricingEngine::calculate_call`] / [`PricingEngine::calculate_put`] always use
//!   the strategy registered under [`BLACK_SCHOLES`].
//!
//! All three are projections of [`PricingEngine::price`], which runs the same steps
//! in a fixed order: model lookup, input validation, spot resolution, strategy call.
//! An unknown model therefore fails before any market-data request or math.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{OptionContract, OptionType};
use crate::error::{validation::*, PriceResult, PricingError};
use crate::market_data::MarketDataProvider;
use crate::pricing::black_scholes::{BlackScholesStrategy, BLACK_SCHOLES};
use crate::pricing::monte_carlo::{MonteCarloStrategy, MONTE_CARLO};
use crate::pricing::strategy::{Greeks, PricingStrategy};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Date time-to-expiration is measured from; `None` means the local date at call time
    pub valuation_date: Option<NaiveDate>,
    /// Model used by callers that do not name one
    pub default_model: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            valuation_date: None,
            default_model: BLACK_SCHOLES.to_string(),
        }
    }
}

impl EngineConfig {
    /// Validate against the set of registered model names
    pub fn validate(&self, models: &[String]) -> PriceResult<()> {
        if !models.iter().any(|m| m == &self.default_model) {
            return Err(PricingError::InvalidConfiguration {
                field: "default_model".to_string(),
                reason: format!("'{}' is not a registered model", self.default_model),
            });
        }
        Ok(())
    }
}

pub struct PricingEngine {
    strategies: HashMap<String, Arc<dyn PricingStrategy>>,
    data_provider: Box<dyn MarketDataProvider>,
    config: EngineConfig,
}

impl PricingEngine {
    /// Engine with the default registry: Black-Scholes and Monte Carlo
    pub fn new(data_provider: Box<dyn MarketDataProvider>) -> Self {
        let mut strategies: HashMap<String, Arc<dyn PricingStrategy>> = HashMap::new();
        strategies.insert(BLACK_SCHOLES.to_string(), Arc::new(BlackScholesStrategy::new()));
        strategies.insert(MONTE_CARLO.to_string(), Arc::new(MonteCarloStrategy::default()));

        Self {
            strategies,
            data_provider,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(data_provider: Box<dyn MarketDataProvider>, config: EngineConfig) -> PriceResult<Self> {
        let mut engine = Self::new(data_provider);
        config.validate(&engine.model_names())?;
        engine.config = config;
        Ok(engine)
    }

    /// Register a strategy, replacing any existing entry with the same name
    pub fn register_strategy(&mut self, name: impl Into<String>, strategy: Arc<dyn PricingStrategy>) {
        self.strategies.insert(name.into(), strategy);
    }

    pub fn strategy(&self, name: &str) -> PriceResult<Arc<dyn PricingStrategy>> {
        self.strategies
            .get(name)
            .cloned()
            .ok_or_else(|| PricingError::UnknownModel {
                name: name.to_string(),
                available: self.model_names(),
            })
    }

    /// Registered model names, sorted
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn valuation_date(&self) -> NaiveDate {
        self.config
            .valuation_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// The supplied spot, or exactly one fetch for the option's underlying
    pub fn resolve_spot(&self, option: &OptionContract, spot: Option<f64>) -> PriceResult<f64> {
        match spot {
            Some(s) => Ok(s),
            None => {
                let fetched = self
                    .data_provider
                    .fetch_ticker_price(&option.underlying_symbol)?;
                tracing::debug!(
                    symbol = %option.underlying_symbol,
                    spot = fetched,
                    "resolved spot from market data"
                );
                Ok(fetched)
            }
        }
    }

    /// Price the given legs with `model_name`
    fn price_legs(
        &self,
        option: &OptionContract,
        legs: &[OptionType],
        volatility: f64,
        rate: f64,
        model_name: &str,
        spot: Option<f64>,
    ) -> PriceResult<Vec<Greeks>> {
        let strategy = self.strategy(model_name)?;

        validate_positive("strike_price", option.strike_price)?;
        validate_positive("volatility", volatility)?;
        validate_finite("rate", rate)?;

        let spot = self.resolve_spot(option, spot)?;
        validate_positive("spot", spot)?;

        let today = self.valuation_date();
        tracing::debug!(
            model = model_name,
            symbol = %option.underlying_symbol,
            strike = option.strike_price,
            spot,
            volatility,
            rate,
            "pricing option"
        );

        legs.iter()
            .map(|leg| strategy.calculate_on(option, *leg, spot, volatility, rate, today))
            .collect()
    }

    /// Canonical single-leg calculation
    pub fn price(
        &self,
        option: &OptionContract,
        option_type: OptionType,
        volatility: f64,
        rate: f64,
        model_name: &str,
        spot: Option<f64>,
    ) -> PriceResult<Greeks> {
        let mut legs = self.price_legs(option, &[option_type], volatility, rate, model_name, spot)?;
        legs.pop().ok_or_else(|| PricingError::NumericalInstability {
            method: model_name.to_string(),
            reason: "strategy returned no result".to_string(),
        })
    }

    /// Call leg under Black-Scholes
    pub fn calculate_call(
        &self,
        option: &OptionContract,
        volatility: f64,
        rate: f64,
        spot: Option<f64>,
    ) -> PriceResult<Greeks> {
        self.price(option, OptionType::Call, volatility, rate, BLACK_SCHOLES, spot)
    }

    /// Put leg under Black-Scholes
    pub fn calculate_put(
        &self,
        option: &OptionContract,
        volatility: f64,
        rate: f64,
        spot: Option<f64>,
    ) -> PriceResult<Greeks> {
        self.price(option, OptionType::Put, volatility, rate, BLACK_SCHOLES, spot)
    }

    /// `(call, put)` under any registered model.
    ///
    /// The spot is resolved once and shared by both legs.
    pub fn calculate(
        &self,
        option: &OptionContract,
        volatility: f64,
        rate: f64,
        model_name: &str,
        spot: Option<f64>,
    ) -> PriceResult<(Greeks, Greeks)> {
        let legs = self.price_legs(
            option,
            &[OptionType::Call, OptionType::Put],
            volatility,
            rate,
            model_name,
            spot,
        )?;
        match legs.as_slice() {
            [call, put] => Ok((*call, *put)),
            _ => Err(PricingError::NumericalInstability {
                method: model_name.to_string(),
                reason: "strategy did not return both legs".to_string(),
            }),
        }
    }

    /// [`calculate`](Self::calculate) with the configured default model
    pub fn calculate_default(
        &self,
        option: &OptionContract,
        volatility: f64,
        rate: f64,
        spot: Option<f64>,
    ) -> PriceResult<(Greeks, Greeks)> {
        self.calculate(option, volatility, rate, &self.config.default_model, spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::StaticPriceProvider;
    use approx::assert_relative_eq;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
    }

    fn engine() -> PricingEngine {
        let provider = StaticPriceProvider::new().with_price("AAPL", 105.0);
        PricingEngine::with_config(
            Box::new(provider),
            EngineConfig {
                valuation_date: Some(today()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn option() -> OptionContract {
        OptionContract::new("AAPL", 100.0, today() + Duration::days(30))
    }

    #[test]
    fn test_default_registry() {
        let engine = engine();
        assert_eq!(engine.model_names(), vec![BLACK_SCHOLES.to_string(), MONTE_CARLO.to_string()]);
        assert_eq!(engine.strategy(MONTE_CARLO).unwrap().name(), MONTE_CARLO);
    }

    #[test]
    fn test_projections_agree_with_combined() {
        let engine = engine();
        let (call, put) = engine.calculate(&option(), 0.2, 0.01, BLACK_SCHOLES, None).unwrap();
        assert_eq!(engine.calculate_call(&option(), 0.2, 0.01, None).unwrap(), call);
        assert_eq!(engine.calculate_put(&option(), 0.2, 0.01, None).unwrap(), put);
        assert_relative_eq!(call.price, 5.710348176714945, epsilon = 1e-9);
        assert_eq!(engine.calculate_default(&option(), 0.2, 0.01, None).unwrap(), (call, put));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let engine = engine();
        let err = engine.calculate_call(&option(), 0.0, 0.01, Some(100.0)).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("volatility"));

        let err = engine
            .calculate_put(&option().with_strike(-5.0), 0.2, 0.01, Some(100.0))
            .unwrap_err();
        assert!(err.to_string().contains("strike_price"));

        let err = engine.calculate_call(&option(), 0.2, 0.01, Some(0.0)).unwrap_err();
        assert!(err.to_string().contains("spot"));

        assert!(engine.calculate_call(&option(), 0.2, f64::NAN, Some(100.0)).is_err());
    }

    #[test]
    fn test_missing_data_propagates() {
        let engine = engine();
        let unknown = OptionContract::new("FAKE", 100.0, today() + Duration::days(30));
        let err = engine.calculate(&unknown, 0.2, 0.01, BLACK_SCHOLES, None).unwrap_err();
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_unknown_default_model_rejected() {
        let result = PricingEngine::with_config(
            Box::new(StaticPriceProvider::new()),
            EngineConfig {
                default_model: "Binomial".to_string(),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(PricingError::InvalidConfiguration { .. })));
    }
}
