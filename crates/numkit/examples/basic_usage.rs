//! numkit walkthrough
//!
//! This example demonstrates both components:
//! - Calculator arithmetic and its recorded history
//! - Elementwise transforms, with and without post-normalization
//! - Summary statistics
//! - Z-score outlier filtering
//!
//! Run with `RUST_LOG=numkit=trace` to see the library's diagnostics.

use numkit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), NumkitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(60));
    println!("numkit {} - Walkthrough", numkit::VERSION);
    println!("{}", "=".repeat(60));
    println!();

    example_1_calculator()?;
    example_2_transforms()?;
    example_3_statistics()?;
    example_4_outliers()?;

    Ok(())
}

fn example_1_calculator() -> Result<(), NumkitError> {
    println!("Example 1: Calculator");
    println!("{}", "-".repeat(60));

    let mut calc = Calculator::new();
    calc.add(2, 3);
    calc.subtract(10.5, 0.5);
    calc.multiply(4, 5);
    calc.divide(5, 2)?;

    if let Err(e) = calc.divide(1, 0) {
        println!("Rejected: {}", e);
    }

    for entry in calc.history() {
        println!("  {}", entry);
    }
    println!();

    // Expected:
    //   Rejected: Cannot divide by zero
    //   2 + 3 = 5
    //   10.5 - 0.5 = 10.0
    //   4 * 5 = 20
    //   5 / 2 = 2.5
    Ok(())
}

fn example_2_transforms() -> Result<(), NumkitError> {
    println!("Example 2: Transforms");
    println!("{}", "-".repeat(60));

    let data = [10.0, 20.0, 30.0];
    let plain = DataProcessor::default();
    let scaled = DataProcessor::builder().normalize(true).build()?;

    for op in Operation::ALL {
        println!(
            "  {:<10} {:?}  normalized: {:?}",
            op.name(),
            plain.process(&data, op)?,
            scaled.process(&data, op)?
        );
    }
    println!();

    // Expected:
    //   identity   [10.0, 20.0, 30.0]  normalized: [0.0, 0.5, 1.0]
    //   square     [100.0, 400.0, 900.0]  normalized: [0.0, 0.375, 1.0]
    //   ...
    Ok(())
}

fn example_3_statistics() -> Result<(), NumkitError> {
    println!("Example 3: Statistics");
    println!("{}", "-".repeat(60));

    let stats = DataProcessor::default().statistics(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
    println!("{}", stats);

    // Expected:
    //   Statistics:
    //     Mean: 3.000000
    //     Std:  1.414214
    //     Min:  1.000000
    //     Max:  5.000000
    Ok(())
}

fn example_4_outliers() -> Result<(), NumkitError> {
    println!("Example 4: Outlier Filtering");
    println!("{}", "-".repeat(60));

    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    let processor = DataProcessor::default();

    println!("  Input:          {:?}", data);
    println!("  threshold=2.0:  {:?}", processor.filter_outliers(&data)?);
    println!(
        "  threshold=0.5:  {:?}",
        processor.filter_outliers_with(&data, 0.5)?
    );
    println!();

    // Expected:
    //   threshold=2.0:  [1.0, 2.0, 3.0, 4.0, 5.0]
    //   threshold=0.5:  [2.0, 3.0, 4.0, 5.0]
    Ok(())
}
