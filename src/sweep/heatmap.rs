// src/sweep/heatmap.rs
//! P&L heatmaps over spot × volatility
//!
//! Layout is fixed: row `i` ↔ `vol_axis[i]`, column `j` ↔ `spot_axis[j]`, and
//! `values[[i, j]] = price(spot_j, vol_i) − purchase_price`.

use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::range::ParameterRange;
use crate::domain::{OptionContract, OptionType};
use crate::error::{validation::*, PriceResult, PricingError};
use crate::pricing::engine::PricingEngine;

#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub spot_range: ParameterRange,
    pub vol_range: ParameterRange,
    /// Premium paid for the option; subtracted from every cell
    pub purchase_price: f64,
    /// `None` prices through the Black-Scholes-bound `calculate_call` / `calculate_put`;
    /// `Some(model)` goes through the model-polymorphic `calculate`
    pub model_name: Option<String>,
    pub parallel: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        HeatmapConfig::centered(100.0, 0.2)
    }
}

impl HeatmapConfig {
    /// Spot ±20% and volatility ±50% around the given point, 10 samples each
    pub fn centered(spot: f64, volatility: f64) -> Self {
        HeatmapConfig {
            spot_range: ParameterRange::around(spot, 0.2, 10),
            vol_range: ParameterRange::around(volatility, 0.5, 10),
            purchase_price: 0.0,
            model_name: None,
            parallel: true,
        }
    }

    pub fn validate(&self) -> PriceResult<()> {
        self.spot_range.validate("spot_range")?;
        self.vol_range.validate("vol_range")?;
        // Axes must stay inside the pricing domain
        validate_positive("spot_range.min", self.spot_range.min)?;
        validate_positive("vol_range.min", self.vol_range.min)?;
        validate_finite("purchase_price", self.purchase_price)?;
        Ok(())
    }
}

/// P&L matrix plus the axes it was built on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    pub option_type: OptionType,
    pub purchase_price: f64,
    pub spot_axis: Vec<f64>,
    pub vol_axis: Vec<f64>,
    /// Shape `(vol_axis.len(), spot_axis.len())`
    pub values: Array2<f64>,
}

impl PriceGrid {
    /// `(rows, cols)` = `(vol samples, spot samples)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn get(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.values.get((vol_index, spot_index)).copied()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Build one P&L grid by independently re-pricing every (vol, spot) cell.
///
/// The first failing cell aborts the whole grid; no partial grid is returned.
pub fn pnl_heatmap(
    engine: &PricingEngine,
    template: &OptionContract,
    option_type: OptionType,
    rate: f64,
    config: &HeatmapConfig,
) -> PriceResult<PriceGrid> {
    config.validate()?;
    if let Some(model) = &config.model_name {
        engine.strategy(model)?;
    }

    let spot_axis = config.spot_range.values();
    let vol_axis = config.vol_range.values();
    let (rows, cols) = (vol_axis.len(), spot_axis.len());
    tracing::debug!(
        symbol = %template.underlying_symbol,
        %option_type,
        rows,
        cols,
        "starting P&L heatmap"
    );

    let cell = |idx: usize| -> PriceResult<f64> {
        let (vol, spot) = (vol_axis[idx / cols], spot_axis[idx % cols]);
        let option = template.clone();
        let greeks = match (&config.model_name, option_type) {
            (None, OptionType::Call) => engine.calculate_call(&option, vol, rate, Some(spot))?,
            (None, OptionType::Put) => engine.calculate_put(&option, vol, rate, Some(spot))?,
            (Some(model), leg) => engine.price(&option, leg, vol, rate, model, Some(spot))?,
        };
        Ok(greeks.price - config.purchase_price)
    };

    let cells: Vec<f64> = if config.parallel {
        (0..rows * cols).into_par_iter().map(cell).collect::<PriceResult<_>>()?
    } else {
        (0..rows * cols).map(cell).collect::<PriceResult<_>>()?
    };

    let values = Array2::from_shape_vec((rows, cols), cells).map_err(|e| {
        PricingError::NumericalInstability {
            method: "pnl_heatmap".to_string(),
            reason: e.to_string(),
        }
    })?;

    tracing::debug!(cells = rows * cols, "finished P&L heatmap");
    Ok(PriceGrid {
        option_type,
        purchase_price: config.purchase_price,
        spot_axis,
        vol_axis,
        values,
    })
}

/// Independent call and put grids over the same axes.
///
/// The two grids share nothing but their inputs; each is a full re-price.
pub fn pnl_heatmaps(
    engine: &PricingEngine,
    template: &OptionContract,
    rate: f64,
    call_config: &HeatmapConfig,
    put_config: &HeatmapConfig,
) -> PriceResult<(PriceGrid, PriceGrid)> {
    let call = pnl_heatmap(engine, template, OptionType::Call, rate, call_config)?;
    let put = pnl_heatmap(engine, template, OptionType::Put, rate, put_config)?;
    Ok((call, put))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::StaticPriceProvider;
    use crate::pricing::black_scholes::BlackScholesStrategy;
    use crate::pricing::engine::EngineConfig;
    use crate::pricing::monte_carlo::MONTE_CARLO;
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
    }

    fn engine() -> PricingEngine {
        PricingEngine::with_config(
            Box::new(StaticPriceProvider::new()),
            EngineConfig {
                valuation_date: Some(today()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn template() -> OptionContract {
        OptionContract::new("SPY", 100.0, today() + Duration::days(73))
    }

    fn spec_config() -> HeatmapConfig {
        HeatmapConfig {
            spot_range: ParameterRange::new(90.0, 120.0, 10),
            vol_range: ParameterRange::new(0.1, 0.5, 10),
            purchase_price: 2.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_grid_shape_and_corners() {
        let grid = pnl_heatmap(&engine(), &template(), OptionType::Call, 0.01, &spec_config()).unwrap();
        let t = 73.0 / 365.0;

        assert_eq!(grid.shape(), (10, 10));
        assert_eq!(grid.spot_axis[0], 90.0);
        assert_eq!(grid.vol_axis[0], 0.1);

        let first = BlackScholesStrategy::greeks(OptionType::Call, 90.0, 100.0, 0.01, 0.1, t).price - 2.5;
        let last = BlackScholesStrategy::greeks(OptionType::Call, 120.0, 100.0, 0.01, 0.5, t).price - 2.5;
        assert_relative_eq!(grid.get(0, 0).unwrap(), first, epsilon = 1e-12);
        assert_relative_eq!(grid.get(9, 9).unwrap(), last, epsilon = 1e-12);

        // Row ↔ volatility, column ↔ spot
        let off = BlackScholesStrategy::greeks(OptionType::Call, 90.0, 100.0, 0.01, 0.5, t).price - 2.5;
        assert_relative_eq!(grid.get(9, 0).unwrap(), off, epsilon = 1e-12);
        assert!(grid.get(10, 0).is_none());
    }

    #[test]
    fn test_call_and_put_grids_differ() {
        let (call, put) = pnl_heatmaps(&engine(), &template(), 0.01, &spec_config(), &spec_config()).unwrap();
        assert_eq!(call.option_type, OptionType::Call);
        assert_eq!(put.option_type, OptionType::Put);
        assert_ne!(call.values, put.values);
        // Call P&L rises with spot along every row, put P&L falls
        for row in 0..10 {
            assert!(call.get(row, 9).unwrap() > call.get(row, 0).unwrap());
            assert!(put.get(row, 9).unwrap() < put.get(row, 0).unwrap());
        }
        assert!(call.min() < call.max());
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let parallel = pnl_heatmap(&engine(), &template(), OptionType::Put, 0.01, &spec_config()).unwrap();
        let sequential = pnl_heatmap(
            &engine(),
            &template(),
            OptionType::Put,
            0.01,
            &HeatmapConfig {
                parallel: false,
                ..spec_config()
            },
        )
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_invalid_axis_aborts() {
        let config = HeatmapConfig {
            vol_range: ParameterRange::new(0.0, 0.5, 10),
            ..spec_config()
        };
        let err = pnl_heatmap(&engine(), &template(), OptionType::Call, 0.01, &config).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_unknown_model_fails_fast() {
        let config = HeatmapConfig {
            model_name: Some("Binomial".to_string()),
            ..spec_config()
        };
        let err = pnl_heatmap(&engine(), &template(), OptionType::Call, 0.01, &config).unwrap_err();
        assert!(matches!(err, PricingError::UnknownModel { .. }));
    }

    #[test]
    fn test_polymorphic_path() {
        let config = HeatmapConfig {
            spot_range: ParameterRange::new(95.0, 105.0, 2),
            vol_range: ParameterRange::new(0.2, 0.3, 2),
            model_name: Some(MONTE_CARLO.to_string()),
            ..Default::default()
        };
        let grid = pnl_heatmap(&engine(), &template(), OptionType::Call, 0.01, &config).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        assert!(grid.values.iter().all(|v| *v > 0.0));
    }

    #[test]
    fn test_centered_defaults() {
        let config = HeatmapConfig::centered(150.0, 0.3);
        assert_eq!(config.spot_range.count, 10);
        assert_eq!(config.vol_range.count, 10);
        assert_relative_eq!(config.spot_range.min, 120.0, epsilon = 1e-12);
        assert_relative_eq!(config.vol_range.max, 0.45, epsilon = 1e-12);
        assert!(config.validate().is_ok());
    }
}
