use anyhow::{Context, Result};
use serde::Serialize;

use radiostat::device::{CurrentRange, CyclicParams, CYCLIC_TEST_NAME};

use super::Config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeviceSettings {
    test_name: &'static str,
    curr_range: CurrentRange,
    sample_rate: f64,
    param: CyclicParams,
}

/// Print the settings that would be sent to the potentiostat
pub fn run(config: &Config) -> Result<()> {
    let experiment = config.experiment();
    let param = experiment
        .sweep
        .to_params()
        .context("Invalid waveform configuration")?;

    let settings = DeviceSettings {
        test_name: CYCLIC_TEST_NAME,
        curr_range: experiment.current_range,
        sample_rate: experiment.sample_rate_hz,
        param,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?
    );
    Ok(())
}
