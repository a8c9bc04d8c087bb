// src/sweep/range.rs
use serde::{Deserialize, Serialize};

use crate::error::{validation::*, PriceResult, PricingError};
use crate::math_utils::linspace;

/// Largest sample count accepted on a single axis
pub const MAX_AXIS_POINTS: usize = 10_000;

/// Closed interval sampled at `count` evenly spaced points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl ParameterRange {
    pub fn new(min: f64, max: f64, count: usize) -> Self {
        Self { min, max, count }
    }

    /// `centre·(1−pct) … centre·(1+pct)`
    pub fn around(centre: f64, pct: f64, count: usize) -> Self {
        Self::new(centre * (1.0 - pct), centre * (1.0 + pct), count)
    }

    pub fn validate(&self, name: &str) -> PriceResult<()> {
        validate_count(name, self.count, MAX_AXIS_POINTS)?;
        validate_finite(&format!("{}.min", name), self.min)?;
        validate_finite(&format!("{}.max", name), self.max)?;
        if self.min > self.max {
            return Err(PricingError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("min {} exceeds max {}", self.min, self.max),
            });
        }
        Ok(())
    }

    /// Ascending sample points, endpoints included
    pub fn values(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.count)
    }
}
