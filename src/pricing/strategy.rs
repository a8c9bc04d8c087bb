// src/pricing/strategy.rs
//! Pricing strategy contract shared by every model
//!
//! A strategy turns `(option, type, spot, volatility, rate)` into a price and the
//! five Greeks. Models are registered by name in the
//! [`PricingEngine`](crate::pricing::engine::PricingEngine); call sites never branch
//! on the concrete model.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{OptionContract, OptionType};
use crate::error::{PriceResult, PricingError};

/// Price and sensitivities of one option leg
///
/// Units: `vega` per 1 volatility point (1%), `theta` per calendar day,
/// `rho` per unit of rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl Greeks {
    /// All six outputs exactly zero: the result for an expired or same-day option
    pub fn zero() -> Self {
        Self::default()
    }

    /// Project a single field
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Price => self.price,
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }

    pub fn is_finite(&self) -> bool {
        Greek::ALL.iter().all(|g| self.get(*g).is_finite())
    }
}

/// Selector for one field of [`Greeks`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Greek {
    Price,
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Greek {
    pub const ALL: [Greek; 6] = [
        Greek::Price,
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Greek::Price => "price",
            Greek::Delta => "delta",
            Greek::Gamma => "gamma",
            Greek::Vega => "vega",
            Greek::Theta => "theta",
            Greek::Rho => "rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Greek {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Greek::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| PricingError::InvalidConfiguration {
                field: "greek".to_string(),
                reason: format!("unknown greek '{}'", s),
            })
    }
}

/// Pricing model plugged into the engine
pub trait PricingStrategy: Send + Sync {
    /// Human-readable model name
    fn name(&self) -> &str;

    /// Price one leg with an explicit year fraction `t`.
    ///
    /// Implementations return [`Greeks::zero`] for `t <= 0`.
    fn price_with_time(
        &self,
        option_type: OptionType,
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        t: f64,
    ) -> PriceResult<Greeks>;

    /// Price `option` as seen from `today`
    fn calculate_on(
        &self,
        option: &OptionContract,
        option_type: OptionType,
        spot: f64,
        volatility: f64,
        rate: f64,
        today: NaiveDate,
    ) -> PriceResult<Greeks> {
        let t = option.time_to_expiration(today);
        self.price_with_time(option_type, spot, option.strike_price, volatility, rate, t)
    }

    /// Price `option` as seen from the local calendar date
    fn calculate(
        &self,
        option: &OptionContract,
        option_type: OptionType,
        spot: f64,
        volatility: f64,
        rate: f64,
    ) -> PriceResult<Greeks> {
        self.calculate_on(option, option_type, spot, volatility, rate, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_projection() {
        let g = Greeks {
            price: 1.0,
            delta: 2.0,
            gamma: 3.0,
            vega: 4.0,
            theta: 5.0,
            rho: 6.0,
        };
        let projected: Vec<f64> = Greek::ALL.iter().map(|k| g.get(*k)).collect();
        assert_eq!(projected, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(g.is_finite());
        assert!(!Greeks { gamma: f64::NAN, ..g }.is_finite());
    }

    #[test]
    fn test_greek_parsing_is_case_insensitive() {
        assert_eq!("Delta".parse::<Greek>().unwrap(), Greek::Delta);
        assert_eq!("vega".parse::<Greek>().unwrap(), Greek::Vega);
        assert!("vanna".parse::<Greek>().is_err());
    }

    #[test]
    fn test_zero_is_all_zero() {
        let z = Greeks::zero();
        assert!(Greek::ALL.iter().all(|g| z.get(*g) == 0.0));
    }
}
