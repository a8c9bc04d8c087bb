// src/domain/option.rs
//! European vanilla option contract
//!
//! An `OptionContract` is an immutable value. Sweeps derive new contracts from a
//! template with the `with_*` constructors instead of mutating it in place, so a
//! template can be shared freely across parallel grid cells.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Days per year used to turn calendar days into a year fraction
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at the given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.phi() * (spot - strike)).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidConfiguration {
                field: "option_type".to_string(),
                reason: format!("expected 'call' or 'put', got '{}'", other),
            }),
        }
    }
}

/// Option contract specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Underlying ticker (e.g. "AAPL")
    pub underlying_symbol: String,
    /// Strike price
    pub strike_price: f64,
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// Optional type; several call sites price both legs from one template regardless
    pub option_type: Option<OptionType>,
}

impl OptionContract {
    /// Create a new contract without a fixed option type
    pub fn new(underlying_symbol: impl Into<String>, strike_price: f64, expiration_date: NaiveDate) -> Self {
        Self {
            underlying_symbol: underlying_symbol.into(),
            strike_price,
            expiration_date,
            option_type: None,
        }
    }

    /// Same contract, tagged with an option type
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = Some(option_type);
        self
    }

    /// New contract identical to `self` except for the strike
    pub fn with_strike(&self, strike_price: f64) -> Self {
        Self {
            strike_price,
            ..self.clone()
        }
    }

    /// New contract identical to `self` except for the expiration date
    pub fn with_expiration(&self, expiration_date: NaiveDate) -> Self {
        Self {
            expiration_date,
            ..self.clone()
        }
    }

    /// Time to expiration in years as seen from `today`.
    ///
    /// Zero on the expiration date and negative afterwards; pricing treats
    /// both as a degenerate, all-zero result.
    pub fn time_to_expiration(&self, today: NaiveDate) -> f64 {
        let days = (self.expiration_date - today).num_days();
        days as f64 / DAYS_PER_YEAR
    }

    /// Time to expiration from the local calendar date
    pub fn time_to_expiration_now(&self) -> f64 {
        self.time_to_expiration(Local::now().date_naive())
    }
}
