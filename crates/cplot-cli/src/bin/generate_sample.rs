//! Deterministic synthetic benchmark log for demoing the chart pipeline.

use std::error::Error;

const ROWS: usize = 500;
const BATCH_SIZE: usize = 100;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = fastrand::Rng::with_seed(42);

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    for i in 0..ROWS {
        let aggregate_count = ((i + 1) * BATCH_SIZE) as f64;

        // Cost creeps up with the stored-instance count, with measurement
        // noise and the occasional compaction spike on top.
        let base = 120.0 + (aggregate_count / 1000.0).sqrt() * 15.0;
        let noise = (rng.f64() - 0.5) * 20.0;
        let spike = if rng.f64() < 0.02 {
            80.0 + rng.f64() * 40.0
        } else {
            0.0
        };
        let computation = base + noise + spike;

        writer.write_record(&[
            format!("{aggregate_count}"),
            format!("{computation:.2}"),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} measurements to {output_path}");
    Ok(())
}
