//! Property-based tests using proptest.
//!
//! Arbitrage and convexity relations that must hold for every valid input,
//! not just the handful of reference points in `greeks_test.rs`.

use proptest::prelude::*;
use vanilla_greeks::domain::OptionType;
use vanilla_greeks::pricing::{BlackScholesStrategy, Greeks};

fn legs(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (Greeks, Greeks) {
    (
        BlackScholesStrategy::greeks(OptionType::Call, s, k, r, sigma, t),
        BlackScholesStrategy::greeks(OptionType::Put, s, k, r, sigma, t),
    )
}

proptest! {
    /// Δ_call − Δ_put = 1
    #[test]
    fn delta_parity(
        s in 50.0_f64..200.0,
        k in 50.0_f64..200.0,
        r in -0.02_f64..0.10,
        sigma in 0.05_f64..1.0,
        t in 0.01_f64..3.0,
    ) {
        let (call, put) = legs(s, k, r, sigma, t);
        prop_assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
    }

    /// C − P = S − K e^(−rT)
    #[test]
    fn price_parity(
        s in 50.0_f64..200.0,
        k in 50.0_f64..200.0,
        r in -0.02_f64..0.10,
        sigma in 0.05_f64..1.0,
        t in 0.01_f64..3.0,
    ) {
        let (call, put) = legs(s, k, r, sigma, t);
        let forward_gap = s - k * (-r * t).exp();
        let scale = s.max(k);
        prop_assert!(
            (call.price - put.price - forward_gap).abs() <= 1e-6 * scale,
            "parity broken: C={} P={} gap={}", call.price, put.price, forward_gap
        );
    }

    /// Gamma and vega are non-negative and identical across legs
    #[test]
    fn gamma_and_vega_non_negative(
        s in 10.0_f64..500.0,
        k in 10.0_f64..500.0,
        r in -0.02_f64..0.10,
        sigma in 0.01_f64..2.0,
        t in 0.001_f64..5.0,
    ) {
        let (call, put) = legs(s, k, r, sigma, t);
        prop_assert!(call.gamma >= 0.0);
        prop_assert!(call.vega >= 0.0);
        prop_assert_eq!(call.gamma, put.gamma);
        prop_assert_eq!(call.vega, put.vega);
    }

    /// Raising spot raises the call and lowers the put
    #[test]
    fn monotone_in_spot(
        s in 80.0_f64..120.0,
        bump in 0.5_f64..10.0,
        r in 0.0_f64..0.08,
        sigma in 0.1_f64..0.6,
        t in 0.05_f64..2.0,
    ) {
        let (call_lo, put_lo) = legs(s, 100.0, r, sigma, t);
        let (call_hi, put_hi) = legs(s + bump, 100.0, r, sigma, t);
        prop_assert!(call_hi.price > call_lo.price);
        prop_assert!(put_hi.price < put_lo.price);
    }

    /// Expired or same-day options price to exact zeros
    #[test]
    fn non_positive_time_is_all_zero(
        s in 1.0_f64..500.0,
        k in 1.0_f64..500.0,
        sigma in 0.0_f64..2.0,
        t in -2.0_f64..=0.0,
    ) {
        let (call, put) = legs(s, k, 0.01, sigma, t);
        prop_assert_eq!(call, Greeks::zero());
        prop_assert_eq!(put, Greeks::zero());
    }
}
