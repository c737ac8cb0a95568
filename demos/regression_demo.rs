//! Fits the bundled `ex0.txt` dataset with standard regression, then
//! predicts every training row with locally weighted regression at two
//! bandwidths.
//!
//! Run with: `cargo run --example regression_demo [path/to/data.txt]`

use lwlr_rs::prelude::*;

const DEFAULT_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/ex0.txt");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA.to_string());
    let data: Dataset<f64> = Dataset::from_path(&path)?;

    println!("Loaded {} rows from {}\n", data.len(), path);

    let standard = Regression::<f64>::new()
        .return_diagnostics()
        .adapter(Standard)
        .build()?
        .fit(&data.x, &data.y)?;
    println!("== Standard regression ==\n{}", standard);

    for k in [0.01, 1.0] {
        let model = Regression::new()
            .bandwidth(k)
            .parallel(true)
            .adapter(LocallyWeighted)
            .build()?;
        let result = model.predict(&data.x, &data.x, &data.y)?;
        let diag = Diagnostics::compute(&data.y, &result.predictions);

        println!("== Locally weighted regression (k = {}) ==\n{}", k, result);
        println!("{}\n", diag);
    }

    Ok(())
}
