//! Hodrick-Prescott filter example.
//!
//! Run with: cargo run --example hp_filter

use macroprep::core::Frequency;
use macroprep::transform::{
    annualized_log_difference_with, detrended_log, log_levels, DifferencePolicy,
};
use macroprep::trend::HPFilter;

fn main() -> macroprep::Result<()> {
    println!("=== Hodrick-Prescott Filter Example ===\n");

    println!("The HP trend minimizes");
    println!("  sum (y_t - tau_t)^2 + lambda * sum (tau_{{t+1}} - 2 tau_t + tau_{{t-1}})^2\n");

    // Quarterly output with a 5 year cycle
    let output: Vec<f64> = (0..120)
        .map(|i| {
            let t = i as f64;
            1_000.0 * (0.007 * t + 0.02 * (2.0 * std::f64::consts::PI * t / 20.0).sin()).exp()
        })
        .collect();
    let logs = log_levels(&output);

    // 1. Smoothing parameter by frequency
    println!("--- Ravn-Uhlig smoothing parameters ---");
    for frequency in [Frequency::Annual, Frequency::Quarterly, Frequency::Monthly] {
        println!("  {:<10} lambda = {}", frequency, frequency.hp_lambda());
    }

    // 2. Effect of lambda
    println!("\n--- Effect of lambda on the cycle ---");
    for lambda in [10.0, 100.0, 1600.0, 14_400.0] {
        match HPFilter::new(lambda).decompose(&logs) {
            Ok(result) => {
                let peak = result.cycle.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
                println!(
                    "  lambda = {:>8}: max |cycle| = {:.4}, trend strength = {:.3}",
                    lambda,
                    peak,
                    result.trend_strength()
                );
            }
            Err(e) => println!("  lambda = {:>8}: error: {}", lambda, e),
        }
    }

    // 3. Detrended log levels vs growth rates
    println!("\n--- Detrended log vs annualized growth (first 8 quarters) ---");
    let cycle = detrended_log(&output)?;
    let growth = annualized_log_difference_with(
        &output,
        Frequency::Quarterly.annualization_factor(),
        DifferencePolicy::Drop,
    );
    for t in 1..9 {
        println!(
            "  t = {:>2}: cycle = {:>8.4}, growth = {:>8.3}",
            t,
            cycle[t],
            growth[t - 1]
        );
    }

    Ok(())
}
