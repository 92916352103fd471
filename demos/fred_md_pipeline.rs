//! FRED-MD preparation pipeline example.
//!
//! Run with: RUST_LOG=debug cargo run --example fred_md_pipeline

use chrono::{Months, TimeZone, Utc};
use macroprep::features::{cross_correlation, CycleMoments};
use macroprep::prelude::*;

fn synthetic_level(n: usize, start: f64, growth: f64, amplitude: f64, shift: f64) -> Vec<f64> {
    (0..n)
        .map(|t| {
            let t = t as f64;
            let cycle = amplitude * (2.0 * std::f64::consts::PI * (t - shift) / 60.0).sin();
            start * (growth * t + cycle).exp()
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== FRED-MD Preparation Pipeline ===\n");

    let n = 240;
    let base = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let index: Vec<_> = (0..n)
        .map(|i| base + Months::new(i as u32))
        .collect();

    // Raw columns under their FRED-MD mnemonics
    let raw = MacroFrame::builder()
        .index(index)
        .column("GDPC1", synthetic_level(n, 9_000.0, 0.0021, 0.012, 0.0))
        .column("PCNDx", synthetic_level(n, 1_800.0, 0.0018, 0.006, 1.0))
        .column("GPDIC1", synthetic_level(n, 1_500.0, 0.0030, 0.045, 3.0))
        .column("CE16OV", synthetic_level(n, 118_000.0, 0.0009, 0.008, 4.0))
        .column("DFF", (0..n).map(|t| 4.0 + 2.0 * (t as f64 / 30.0).sin()).collect())
        .column("UNRATE", (0..n).map(|t| 5.5 - (t as f64 / 30.0).sin()).collect())
        .build()?;

    println!("Raw frame (first rows):");
    println!("{}", raw.slice(0, 5)?);

    // 1. Rename
    let renamed = raw.renamed(&NameMapper::fred_md())?;
    println!("Renamed columns: {:?}\n", renamed.labels());

    // 2. Transform
    let table = TransformTable::fred_md();
    for label in renamed.labels() {
        match table.lookup(label) {
            Ok(kind) => println!("  {:<25} -> {}", label, kind),
            Err(_) => println!("  {:<25} -> (dropped)", label),
        }
    }

    let cycles = renamed
        .transformed(&table, &TransformConfig::default())?
        .drop_incomplete_rows();
    println!("\nTransformed frame (first rows):");
    println!("{}", cycles.slice(0, 5)?);

    // 3. Business-cycle moments relative to output
    let gdp = cycles.column("gdp")?;
    println!("--- Cycle moments relative to gdp ---");
    println!(
        "{:<25} {:>8} {:>8} {:>8} {:>8} {:>6}",
        "series", "std", "rel_std", "ac(1)", "corr", "peak"
    );
    for (label, values) in cycles.columns() {
        let m = CycleMoments::compute(values, gdp, 12)?;
        println!(
            "{:<25} {:>8.4} {:>8.3} {:>8.3} {:>8.3} {:>6}",
            label, m.std_dev, m.relative_std, m.autocorrelation, m.correlation, m.peak_lag
        );
    }

    // 4. Cross-correlation of investment with output
    let ccf = cross_correlation(cycles.column("investment")?, gdp, 7)?;
    println!("\nccf(investment, gdp):");
    for (lag, c) in ccf.iter().enumerate() {
        println!("  lag {}: {:.3}", lag, c);
    }

    Ok(())
}
