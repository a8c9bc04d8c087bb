// demos/error_handling_demo.rs
use chrono::{Duration, Local};
use vanilla_greeks::domain::OptionContract;
use vanilla_greeks::error::PricingError;
use vanilla_greeks::market_data::StaticPriceProvider;
use vanilla_greeks::pricing::{MonteCarloConfig, MonteCarloStrategy, PricingEngine};
use vanilla_greeks::sweep::{strike_sweep, StrikeSweepConfig};

fn main() {
    println!("Error Handling Demo for vanilla-greeks");
    println!("======================================\n");

    let engine = PricingEngine::new(Box::new(StaticPriceProvider::new().with_price("AAPL", 105.0)));
    let today = Local::now().date_naive();
    let option = OptionContract::new("AAPL", 100.0, today + Duration::days(30));

    // Test 1: Non-positive volatility
    println!("1. Testing zero volatility...");
    match engine.calculate_call(&option, 0.0, 0.01, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Unknown model
    println!("\n2. Testing unknown model name...");
    match engine.calculate(&option, 0.2, 0.01, "Binomial", None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Missing market data
    println!("\n3. Testing a symbol the provider does not know...");
    let orphan = OptionContract::new("ZZZZ", 100.0, today + Duration::days(30));
    match engine.calculate_put(&orphan, 0.2, 0.01, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) if e.is_data_unavailable() => println!("   ✓ Caught data error: {}", e),
        Err(e) => println!("   Unexpected error type: {}", e),
    }

    // Test 4: Supplying the spot bypasses the provider entirely
    println!("\n4. Testing explicit spot for the same symbol...");
    match engine.calculate_put(&orphan, 0.2, 0.01, Some(98.5)) {
        Ok(put) => println!("   ✓ Success: Put price = {:.4}", put.price),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 5: Expired option is a defined zero, not an error
    println!("\n5. Testing an expired option...");
    let expired = option.with_expiration(today - Duration::days(1));
    match engine.calculate(&expired, 0.2, 0.01, "Black-Scholes", None) {
        Ok((call, put)) => println!(
            "   ✓ Success: call price = {}, put price = {}",
            call.price, put.price
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 6: Invalid Monte Carlo configuration
    println!("\n6. Testing invalid Monte Carlo configuration...");
    let bad_config = MonteCarloConfig {
        paths: 0,
        ..Default::default()
    };
    match MonteCarloStrategy::new(bad_config) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Invalid sweep configuration
    println!("\n7. Testing a strike sweep wider than the strike itself...");
    let wide = StrikeSweepConfig {
        strike_delta: 1.5,
        ..Default::default()
    };
    match strike_sweep(&engine, &option, 0.2, 0.01, None, &wide) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 8: Error type matching
    println!("\n8. Testing error type matching...");
    match engine.calculate_call(&option, 0.2, 0.01, Some(-5.0)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::InvalidParameters { parameter, value, constraint }) => {
            println!("   ✓ Caught InvalidParameters: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
