// src/sweep/strike.rs
//! Price or Greek against strike, for calls and puts

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::range::{ParameterRange, MAX_AXIS_POINTS};
use crate::domain::OptionContract;
use crate::error::{validation::*, PriceResult};
use crate::pricing::black_scholes::BLACK_SCHOLES;
use crate::pricing::engine::PricingEngine;
use crate::pricing::strategy::{Greek, Greeks};

#[derive(Debug, Clone)]
pub struct StrikeSweepConfig {
    /// Half-width of the strike range as a fraction of the template strike
    pub strike_delta: f64,
    pub points: usize,
    pub greek: Greek,
    pub model_name: String,
    pub parallel: bool,
}

impl Default for StrikeSweepConfig {
    fn default() -> Self {
        StrikeSweepConfig {
            strike_delta: 0.2,
            points: 21,
            greek: Greek::Price,
            model_name: BLACK_SCHOLES.to_string(),
            parallel: true,
        }
    }
}

impl StrikeSweepConfig {
    pub fn validate(&self) -> PriceResult<()> {
        validate_count("points", self.points, MAX_AXIS_POINTS)?;
        validate_finite("strike_delta", self.strike_delta)?;
        // δ = 1 would put the lowest strike at zero
        validate_range("strike_delta", self.strike_delta, 0.0, 0.99)?;
        Ok(())
    }
}

/// Call and put series aligned by index with `strikes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeSeries {
    pub greek: Greek,
    pub strikes: Vec<f64>,
    pub calls: Vec<f64>,
    pub puts: Vec<f64>,
}

impl StrikeSeries {
    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }
}

/// Re-price `template` at every strike of `K·(1−δ) … K·(1+δ)`.
///
/// The spot is resolved once up front. Each strike gets its own contract and an
/// independent call into [`PricingEngine::calculate`]. The first failing strike
/// aborts the sweep.
pub fn strike_sweep(
    engine: &PricingEngine,
    template: &OptionContract,
    volatility: f64,
    rate: f64,
    spot: Option<f64>,
    config: &StrikeSweepConfig,
) -> PriceResult<StrikeSeries> {
    config.validate()?;
    // Fail on an unknown model before touching market data
    engine.strategy(&config.model_name)?;
    let spot = engine.resolve_spot(template, spot)?;

    let strikes =
        ParameterRange::around(template.strike_price, config.strike_delta, config.points).values();
    tracing::debug!(
        symbol = %template.underlying_symbol,
        greek = %config.greek,
        points = strikes.len(),
        "starting strike sweep"
    );

    let price_at = |k: &f64| -> PriceResult<(Greeks, Greeks)> {
        let option = template.with_strike(*k);
        engine.calculate(&option, volatility, rate, &config.model_name, Some(spot))
    };

    let legs: Vec<(Greeks, Greeks)> = if config.parallel {
        strikes.par_iter().map(price_at).collect::<PriceResult<_>>()?
    } else {
        strikes.iter().map(price_at).collect::<PriceResult<_>>()?
    };

    let (calls, puts): (Vec<f64>, Vec<f64>) = legs
        .iter()
        .map(|(call, put)| (call.get(config.greek), put.get(config.greek)))
        .unzip();

    Ok(StrikeSeries {
        greek: config.greek,
        strikes,
        calls,
        puts,
    })
}
