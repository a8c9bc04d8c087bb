// src/error.rs
use std::fmt;

/// Error types for the vanilla-greeks library
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid parameter values (non-positive strike, spot or volatility, NaN rates, ...)
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Requested model name is not present in the strategy registry
    UnknownModel { name: String, available: Vec<String> },

    /// Market data could not resolve a spot price for the symbol
    DataUnavailable { symbol: String, reason: String },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Numerical instability or non-finite estimate
    NumericalInstability { method: String, reason: String },
}

impl PricingError {
    /// True when pricing failed because market data was unavailable.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, PricingError::DataUnavailable { .. })
    }

    /// True when pricing failed because the caller supplied bad inputs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidParameters { .. }
                | PricingError::UnknownModel { .. }
                | PricingError::InvalidConfiguration { .. }
        )
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::UnknownModel { name, available } => {
                write!(
                    f,
                    "Unknown pricing model '{}' (available: {})",
                    name,
                    available.join(", ")
                )
            }
            PricingError::DataUnavailable { symbol, reason } => {
                write!(f, "Market data unavailable for '{}': {}", symbol, reason)
            }
            PricingError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PricingError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for vanilla-greeks operations
pub type PriceResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PriceResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PriceResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> PriceResult<()> {
        if !(min..=max).contains(&value) {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PriceResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a sample or path count
    pub fn validate_count(field: &str, count: usize, max: usize) -> PriceResult<()> {
        if count == 0 {
            Err(PricingError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if count > max {
            Err(PricingError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!("exceeds maximum allowed ({})", max),
            })
        } else {
            Ok(())
        }
    }
}
