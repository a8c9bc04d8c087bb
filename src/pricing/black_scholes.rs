// src/pricing/black_scholes.rs
//! Closed-form Black-Scholes strategy

use crate::analytics::bs_analytic;
use crate::domain::{OptionType, DAYS_PER_YEAR};
use crate::error::PriceResult;
use crate::math_utils::norm_cdf;
use crate::pricing::strategy::{Greeks, PricingStrategy};

/// Registry key of the Black-Scholes model
pub const BLACK_SCHOLES: &str = "Black-Scholes";

/// European vanilla pricing under Black-Scholes.
///
/// Stateless; one instance can serve every grid cell concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesStrategy;

impl BlackScholesStrategy {
    pub fn new() -> Self {
        Self
    }

    /// `(d₁, d₂)` for the given inputs
    pub fn calculate_derivatives(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
        bs_analytic::d1_d2(s, k, r, sigma, t)
    }

    /// `(Φ(d₁), Φ(d₂), φ(d₁))`
    pub fn calculate_common_factors(d1: f64, d2: f64) -> (f64, f64, f64) {
        bs_analytic::common_factors(d1, d2)
    }

    /// Price and Greeks of one leg.
    ///
    /// `t <= 0` returns all zeros. `sigma = 0` with `t > 0` is not guarded here
    /// and yields non-finite values; the engine rejects it before calling in.
    pub fn greeks(option_type: OptionType, s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Greeks {
        if t <= 0.0 {
            return Greeks::zero();
        }

        let sqrt_t = t.sqrt();
        let (d1, d2) = Self::calculate_derivatives(s, k, r, sigma, t);
        let (n_d1, n_d2, pdf_d1) = Self::calculate_common_factors(d1, d2);
        let discounted_strike = k * (-r * t).exp();

        let gamma = pdf_d1 / (s * sigma * sqrt_t);
        let vega = s * pdf_d1 * sqrt_t / 100.0;
        let decay = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);

        let (price, delta, theta_annual, rho) = match option_type {
            OptionType::Call => (
                s * n_d1 - discounted_strike * n_d2,
                n_d1,
                decay - r * discounted_strike * n_d2,
                t * discounted_strike * n_d2,
            ),
            OptionType::Put => {
                // Φ(-d) evaluated directly; 1 - Φ(d) cancels to zero in the tail
                let (n_neg_d1, n_neg_d2) = (norm_cdf(-d1), norm_cdf(-d2));
                (
                    discounted_strike * n_neg_d2 - s * n_neg_d1,
                    n_d1 - 1.0,
                    decay + r * discounted_strike * n_neg_d2,
                    -t * discounted_strike * n_neg_d2,
                )
            }
        };

        Greeks {
            price,
            delta,
            gamma,
            vega,
            theta: theta_annual / DAYS_PER_YEAR,
            rho,
        }
    }
}

impl PricingStrategy for BlackScholesStrategy {
    fn name(&self) -> &str {
        BLACK_SCHOLES
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
        Ok(Self::greeks(option_type, spot, strike, rate, volatility, t))
    }
}
