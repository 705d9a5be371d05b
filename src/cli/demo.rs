use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use radiostat::analysis::{Analyzer, ChargeReport};
use radiostat::device::SimulatedCell;

use super::Config;

/// Record a run on a simulated cell, then analyze the recorded trace
pub fn run(config: &Config, output_dir: Option<PathBuf>, stripping_efficiency: f64) -> Result<()> {
    info!("radiostat - Simulated Beaker Cell Demo");
    info!("======================================");

    if !(0.0..=1.0).contains(&stripping_efficiency) {
        anyhow::bail!(
            "Stripping efficiency must be within [0, 1], got {}",
            stripping_efficiency
        );
    }

    let experiment = config.experiment();
    let output_dir = config.output_dir(output_dir);
    let mut cell = SimulatedCell::new().with_stripping_efficiency(stripping_efficiency);

    let path = experiment
        .run_and_record(&mut cell, &output_dir)
        .context("Simulated run failed")?;
    println!("Saved data to: {}", path.display());

    let analyzer = Analyzer::new().with_threshold_fraction(config.threshold_fraction(None));
    match analyzer.analyze_file(&path) {
        Ok(analysis) => {
            let report = ChargeReport::new(&analysis)
                .with_source(path.display().to_string())
                .with_efficiency(true);

            #[cfg(feature = "colorized_output")]
            {
                print!("{}", report.format_colored());
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                print!("{}", report);
            }
        }
        // The trace is already on disk; report and keep it
        Err(e) => warn!("{}", e),
    }

    Ok(())
}
