use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use radiostat::analysis::{Analyzer, ChargeReport};
use radiostat::trace::latest_trace;

use super::Config;

/// Analyze a trace file and print the charge summary
pub fn run(
    config: &Config,
    file: Option<PathBuf>,
    json: bool,
    show_ce: bool,
    threshold: Option<f64>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let file = match file {
        Some(file) => file,
        None => {
            let dir = config.output_dir(output_dir);
            latest_trace(&dir)
                .with_context(|| format!("Failed to search {} for traces", dir.display()))?
                .with_context(|| format!("No cv_data_*.txt traces found in {}", dir.display()))?
        }
    };

    let analyzer = Analyzer::new().with_threshold_fraction(config.threshold_fraction(threshold));
    info!(
        "Analyzing {} (threshold {:.0}% of peak current)",
        file.display(),
        analyzer.threshold_fraction() * 100.0
    );

    let analysis = analyzer
        .analyze_file(&file)
        .with_context(|| format!("Analysis of {} failed", file.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?
        );
        return Ok(());
    }

    let report = ChargeReport::new(&analysis)
        .with_source(file.display().to_string())
        .with_efficiency(show_ce);

    #[cfg(feature = "colorized_output")]
    {
        print!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        print!("{}", report);
    }

    Ok(())
}
