// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! For European options the risk-neutral expectation has closed-form solutions
//! involving the cumulative normal distribution function Φ(x).
//!
//! All functions here are raw formulas: they expect `t > 0` and `sigma > 0` and
//! return unscaled sensitivities (vega per unit vol, theta per year). Scaling and
//! the expiry short-circuit live in [`crate::pricing::black_scholes`].

use crate::math_utils::{norm_cdf, norm_pdf};

/// Black-Scholes `d₁` and `d₂`
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// `sigma = 0` with `t > 0` divides by zero and yields non-finite values.
pub fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// The `(Φ(d₁), Φ(d₂), φ(d₁))` triple shared by the call and put formulas
pub fn common_factors(d1: f64, d2: f64) -> (f64, f64, f64) {
    (norm_cdf(d1), norm_cdf(d2), norm_pdf(d1))
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

/// Black-Scholes Delta (∂V/∂S) for European call
///
/// # Formula
/// ```text
/// Δ = ∂C/∂S = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares to buy per option sold
/// - Range: [0, 1] for calls
pub fn bs_call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, sigma, t);
    norm_cdf(d1)
}

/// Black-Scholes Delta for European put: `Φ(d₁) - 1`, range [-1, 0]
pub fn bs_put_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_call_delta(s, k, r, sigma, t) - 1.0
}

/// Black-Scholes Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. underlying price
/// - Maximum at-the-money
/// - Same for calls and puts
pub fn bs_gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, sigma, t);
    norm_pdf(d1) / (s * sigma * t.sqrt())
}

/// Black-Scholes Vega (∂V/∂σ), per unit of volatility
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// Same for calls and puts; always non-negative.
pub fn bs_vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, _) = d1_d2(s, k, r, sigma, t);
    s * norm_pdf(d1) * t.sqrt()
}

/// Black-Scholes Theta (∂V/∂t) for European call, per year
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
/// ```
pub fn bs_call_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    (-s * norm_pdf(d1) * sigma) / (2.0 * t.sqrt()) - r * k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes Theta for European put, per year
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)
/// ```
pub fn bs_put_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    (-s * norm_pdf(d1) * sigma) / (2.0 * t.sqrt()) + r * k * (-r * t).exp() * norm_cdf(-d2)
}

/// Black-Scholes Rho (∂V/∂r) for European call
///
/// # Formula
/// ```text
/// ρ = K * T * e^(-rT) * Φ(d₂)
/// ```
pub fn bs_call_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (_, d2) = d1_d2(s, k, r, sigma, t);
    k * t * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes Rho for European put: `-K * T * e^(-rT) * Φ(-d₂)`
pub fn bs_put_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (_, d2) = d1_d2(s, k, r, sigma, t);
    -k * t * (-r * t).exp() * norm_cdf(-d2)
}
