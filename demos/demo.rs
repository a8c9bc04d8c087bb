// demos/demo.rs
use chrono::{Duration, Local};
use vanilla_greeks::domain::{OptionContract, OptionType};
use vanilla_greeks::market_data::{MarketDataProvider, StaticPriceProvider, YahooFetcher};
use vanilla_greeks::math_utils::Timer;
use vanilla_greeks::pricing::{Greek, Greeks, PricingEngine, BLACK_SCHOLES, MONTE_CARLO};
use vanilla_greeks::sweep::{pnl_heatmaps, strike_sweep, HeatmapConfig, StrikeSweepConfig};
use vanilla_greeks::PriceResult;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let result = if args.len() > 2 && args[1] == "--live" {
        match YahooFetcher::new() {
            Ok(fetcher) => run_demo(Box::new(fetcher), &args[2]),
            Err(e) => Err(e),
        }
    } else {
        run_demo(Box::new(StaticPriceProvider::new().with_price("AAPL", 105.0)), "AAPL")
    };

    if let Err(e) = result {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn print_greeks(label: &str, g: &Greeks) {
    println!(
        "  {:<12} price {:>9.4}  delta {:>8.4}  gamma {:>8.5}  vega {:>8.5}  theta {:>8.5}  rho {:>8.4}",
        label, g.price, g.delta, g.gamma, g.vega, g.theta, g.rho
    );
}

fn run_demo(provider: Box<dyn MarketDataProvider>, symbol: &str) -> PriceResult<()> {
    println!("--- vanilla-greeks demo ---");

    let engine = PricingEngine::new(provider);
    let expiry = Local::now().date_naive() + Duration::days(30);
    let spot = engine.resolve_spot(&OptionContract::new(symbol, 1.0, expiry), None)?;
    let strike = spot.round();
    let option = OptionContract::new(symbol, strike, expiry);
    let (volatility, rate) = (0.2, 0.01);

    println!("Underlying {} spot {:.2}, strike {:.2}, expiry {}", symbol, spot, strike, expiry);
    println!("Registered models: {:?}\n", engine.model_names());

    let mut timer = Timer::new();
    timer.start();
    let call = engine.calculate_call(&option, volatility, rate, Some(spot))?;
    let put = engine.calculate_put(&option, volatility, rate, Some(spot))?;
    println!("{} ({:.3} ms)", BLACK_SCHOLES, timer.elapsed_ms());
    print_greeks("call", &call);
    print_greeks("put", &put);

    let parity = call.price - put.price - (spot - strike * (-rate * option.time_to_expiration_now()).exp());
    println!("  put-call parity residual: {:.2e}\n", parity);

    timer.start();
    let (mc_call, mc_put) = engine.calculate(&option, volatility, rate, MONTE_CARLO, Some(spot))?;
    println!("{} ({:.3} ms)", MONTE_CARLO, timer.elapsed_ms());
    print_greeks("call", &mc_call);
    print_greeks("put", &mc_put);
    println!();

    let series = strike_sweep(
        &engine,
        &option,
        volatility,
        rate,
        Some(spot),
        &StrikeSweepConfig {
            greek: Greek::Delta,
            points: 9,
            ..Default::default()
        },
    )?;
    println!("{} across strikes:", series.greek);
    println!("  {:>10} {:>10} {:>10}", "strike", "call", "put");
    for i in 0..series.len() {
        println!(
            "  {:>10.2} {:>10.4} {:>10.4}",
            series.strikes[i], series.calls[i], series.puts[i]
        );
    }
    println!();

    let config = HeatmapConfig {
        purchase_price: call.price,
        ..HeatmapConfig::centered(spot, volatility)
    };
    let put_config = HeatmapConfig {
        purchase_price: put.price,
        ..config.clone()
    };
    timer.start();
    let (call_grid, put_grid) = pnl_heatmaps(&engine, &option, rate, &config, &put_config)?;
    println!("P&L heatmaps built in {:.3} ms", timer.elapsed_ms());

    for grid in [&call_grid, &put_grid] {
        let leg = match grid.option_type {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        };
        println!(
            "\n{} P&L (paid {:.4}), range {:.2} .. {:.2}",
            leg,
            grid.purchase_price,
            grid.min(),
            grid.max()
        );
        print!("  {:>6}", "vol\\S");
        for s in &grid.spot_axis {
            print!(" {:>7.1}", s);
        }
        println!();
        for (i, vol) in grid.vol_axis.iter().enumerate() {
            print!("  {:>6.3}", vol);
            for j in 0..grid.spot_axis.len() {
                print!(" {:>7.2}", grid.values[[i, j]]);
            }
            println!();
        }
    }

    Ok(())
}
