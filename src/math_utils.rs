// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
///
/// Evaluated through `erfc` so the lower tail keeps full relative precision.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

/// `count` evenly spaced values from `min` to `max` inclusive.
///
/// A single sample yields `[min]`; zero samples yield an empty vector.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { max } else { min + step * i as f64 })
                .collect()
        }
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_points() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_cdf(1.96), 0.975002104851780, epsilon = 1e-9);
        assert_abs_diff_eq!(norm_cdf(-1.0), 0.158655253931457, epsilon = 1e-9);
        // Deep tail stays distinguishable from zero
        assert!(norm_cdf(-9.0) > 0.0);
        assert!(norm_cdf(-9.0) < norm_cdf(-8.5));
    }

    #[test]
    fn test_norm_pdf_peak() {
        assert_abs_diff_eq!(norm_pdf(0.0), 0.398942280401433, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_pdf(1.5), norm_pdf(-1.5), epsilon = 1e-15);
    }

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(90.0, 120.0, 10);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 90.0);
        assert_eq!(xs[9], 120.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(linspace(5.0, 7.0, 1), vec![5.0]);
        assert!(linspace(5.0, 7.0, 0).is_empty());
    }
}
