// src/pricing/monte_carlo.rs
//! Plain Monte Carlo strategy under Geometric Brownian Motion
//!
//! # Math Framework
//!
//! Samples the exact GBM terminal value:
//! ```text
//! S_T = S_0 * exp((r - σ²/2)T + σ√T * Z),  Z ~ N(0,1)
//! ```
//! and discounts the mean European payoff. No antithetic or control variates.
//!
//! Greeks are central bump-and-reprice estimates over the same normal draws
//! (common random numbers), scaled to the units of
//! [`BlackScholesStrategy`](crate::pricing::black_scholes::BlackScholesStrategy).

use rayon::prelude::*;

use crate::domain::{OptionType, DAYS_PER_YEAR};
use crate::error::{validation::*, PriceResult, PricingError};
use crate::pricing::strategy::{Greeks, PricingStrategy};
use crate::rng::RngFactory;

/// Registry key of the Monte Carlo model
pub const MONTE_CARLO: &str = "Monte Carlo";

#[derive(Debug, Clone)]
pub struct MonteCarloConfig {
    pub paths: usize,
    pub seed: u64,
    /// Relative spot bump for delta and gamma
    pub spot_bump: f64,
    /// Absolute volatility bump for vega
    pub vol_bump: f64,
    /// Absolute rate bump for rho
    pub rate_bump: f64,
}

impl MonteCarloConfig {
    /// Validate the Monte Carlo configuration
    pub fn validate(&self) -> PriceResult<()> {
        validate_count("paths", self.paths, 100_000_000)?;
        validate_positive("spot_bump", self.spot_bump)?;
        validate_range("spot_bump", self.spot_bump, 0.0, 0.1)?;
        validate_positive("vol_bump", self.vol_bump)?;
        validate_positive("rate_bump", self.rate_bump)?;
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        MonteCarloConfig {
            paths: 10_000,
            seed: 42,
            spot_bump: 1e-2,
            vol_bump: 1e-3,
            rate_bump: 1e-4,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MonteCarloStrategy {
    config: MonteCarloConfig,
}

impl MonteCarloStrategy {
    pub fn new(config: MonteCarloConfig) -> PriceResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Same strategy with a different path count
    pub fn with_paths(&self, paths: usize) -> PriceResult<Self> {
        Self::new(MonteCarloConfig {
            paths,
            ..self.config.clone()
        })
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Discounted mean payoff over `config.paths` terminal draws
    fn mc_price(&self, option_type: OptionType, s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
        let n = self.config.paths;
        let factory = RngFactory::new(self.config.seed);
        let drift = (r - 0.5 * sigma * sigma) * t;
        let diffusion = sigma * t.sqrt();

        let payoff_sum = (0..n)
            .into_par_iter()
            .map(|i| {
                let z = factory.path_normal(i as u64);
                let st = s0 * (drift + diffusion * z).exp();
                option_type.intrinsic(st, k)
            })
            .reduce(|| 0.0, |a, b| a + b);

        (-r * t).exp() * payoff_sum / n as f64
    }
}

impl PricingStrategy for MonteCarloStrategy {
    fn name(&self) -> &str {
        MONTE_CARLO
    }

    fn price_with_time(
        &self,
        option_type: OptionType,
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        t: f64,
    ) -> PriceResult<Greeks> {
        if t <= 0.0 {
            return Ok(Greeks::zero());
        }
        validate_positive("spot", spot)?;
        validate_positive("strike", strike)?;
        validate_positive("volatility", volatility)?;
        validate_finite("rate", rate)?;

        let price_at = |s: f64, sigma: f64, r: f64, tau: f64| {
            self.mc_price(option_type, s, strike, r, sigma, tau)
        };

        let price = price_at(spot, volatility, rate, t);

        let ds = spot * self.config.spot_bump;
        let up = price_at(spot + ds, volatility, rate, t);
        let down = price_at(spot - ds, volatility, rate, t);
        let delta = (up - down) / (2.0 * ds);
        let gamma = (up - 2.0 * price + down) / (ds * ds);

        let dv = self.config.vol_bump.min(0.5 * volatility);
        let vega = (price_at(spot, volatility + dv, rate, t) - price_at(spot, volatility - dv, rate, t))
            / (2.0 * dv)
            / 100.0;

        let dr = self.config.rate_bump;
        let rho = (price_at(spot, volatility, rate + dr, t) - price_at(spot, volatility, rate - dr, t))
            / (2.0 * dr);

        // Theta is -∂V/∂T; never step past expiry
        let dt = (1.0 / DAYS_PER_YEAR).min(0.5 * t);
        let theta_annual =
            -(price_at(spot, volatility, rate, t + dt) - price_at(spot, volatility, rate, t - dt)) / (2.0 * dt);

        let greeks = Greeks {
            price,
            delta,
            gamma,
            vega,
            theta: theta_annual / DAYS_PER_YEAR,
            rho,
        };

        if !greeks.is_finite() {
            return Err(PricingError::NumericalInstability {
                method: MONTE_CARLO.to_string(),
                reason: format!("non-finite estimate: {:?}", greeks),
            });
        }
        Ok(greeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::black_scholes::BlackScholesStrategy;

    #[test]
    fn test_config_validation() {
        assert!(MonteCarloConfig::default().validate().is_ok());
        assert!(MonteCarloStrategy::new(MonteCarloConfig {
            paths: 0,
            ..Default::default()
        })
        .is_err());
        assert!(MonteCarloStrategy::default().with_paths(50_000).is_ok());
    }

    #[test]
    fn test_expired_returns_zero() {
        let mc = MonteCarloStrategy::default();
        let result = mc
            .price_with_time(OptionType::Put, 100.0, 100.0, 0.2, 0.01, 0.0)
            .unwrap();
        assert_eq!(result, Greeks::zero());
    }

    #[test]
    fn test_reproducible_for_fixed_seed() {
        let mc = MonteCarloStrategy::default();
        let a = mc.price_with_time(OptionType::Call, 100.0, 100.0, 0.2, 0.01, 0.5).unwrap();
        let b = mc.price_with_time(OptionType::Call, 100.0, 100.0, 0.2, 0.01, 0.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mc_price_close_to_analytic() {
        let mc = MonteCarloStrategy::default().with_paths(200_000).unwrap();
        let (s, k, r, sigma, t) = (100.0, 100.0, 0.05, 0.2, 1.0);

        for option_type in [OptionType::Call, OptionType::Put] {
            let estimate = mc.price_with_time(option_type, s, k, sigma, r, t).unwrap();
            let analytic = BlackScholesStrategy::greeks(option_type, s, k, r, sigma, t);

            // Payoff std-dev is below 15 here, so 4 standard errors < 0.14
            assert!(
                (estimate.price - analytic.price).abs() < 0.15,
                "{} MC price {} vs analytic {}",
                option_type,
                estimate.price,
                analytic.price
            );
            assert!((estimate.delta - analytic.delta).abs() < 0.03);
            assert!((estimate.vega - analytic.vega).abs() < 0.03);
        }
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        let mc = MonteCarloStrategy::default();
        assert!(mc.price_with_time(OptionType::Call, 100.0, 100.0, 0.0, 0.01, 0.5).is_err());
        assert!(mc.price_with_time(OptionType::Call, -1.0, 100.0, 0.2, 0.01, 0.5).is_err());
    }
}
