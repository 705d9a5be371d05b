use super::*;

#[test]
fn test_current_range_names() {
    for range in CurrentRange::ALL {
        assert_eq!(range.as_str().parse::<CurrentRange>().unwrap(), range);
        assert_eq!(range.to_string(), range.as_str());
    }
    assert_eq!(" 100UA ".parse::<CurrentRange>().unwrap(), CurrentRange::Range100uA);
    assert!("5uA".parse::<CurrentRange>().is_err());
}

#[test]
fn test_current_range_serde() {
    let json = serde_json::to_string(&CurrentRange::Range1000uA).unwrap();
    assert_eq!(json, "\"1000uA\"");
    let range: CurrentRange = serde_json::from_str("\"10uA\"").unwrap();
    assert_eq!(range, CurrentRange::Range10uA);
}

#[test]
fn test_sweep_to_params() {
    let sweep = CyclicSweep {
        volt_min: -0.5,
        volt_max: 0.5,
        volt_per_sec: 0.05,
        num_cycles: 2,
        shift: 0.0,
        quiet_value: 0.1,
        quiet_time_ms: 250,
    };
    let params = sweep.to_params().unwrap();

    assert_eq!(params.amplitude, 0.5);
    assert_eq!(params.offset, 0.0);
    assert_eq!(params.period, 40_000);
    assert_eq!(params.num_cycles, 2);
    assert_eq!(params.quiet_value, 0.1);
    assert_eq!(params.quiet_time, 250);
    assert!((params.duration_s() - 80.25).abs() < 1e-12);
}

#[test]
fn test_default_sweep_period_is_truncated() {
    // 4 * 0.4 V / 1 V/s is 1.6 s, but the amplitude is 0.39999999999999997
    let params = CyclicSweep::default().to_params().unwrap();
    assert!((params.amplitude - 0.4).abs() < 1e-12);
    assert!((params.offset + 0.8).abs() < 1e-12);
    assert_eq!(params.period, 1599);
}

#[test]
fn test_sweep_validation() {
    let base = CyclicSweep::default();

    let inverted = CyclicSweep {
        volt_min: 0.0,
        volt_max: -1.0,
        ..base
    };
    assert!(matches!(inverted.to_params(), Err(DeviceError::InvalidParameter(_))));

    let stalled = CyclicSweep {
        volt_per_sec: 0.0,
        ..base
    };
    assert!(stalled.to_params().is_err());

    let no_cycles = CyclicSweep {
        num_cycles: 0,
        ..base
    };
    assert!(no_cycles.to_params().is_err());

    let bad_shift = CyclicSweep { shift: 1.5, ..base };
    assert!(bad_shift.to_params().is_err());

    let too_fast = CyclicSweep {
        volt_per_sec: 1e9,
        ..base
    };
    assert!(too_fast.to_params().is_err());
}

#[test]
fn test_params_serialize_with_device_keys() {
    let params = CyclicSweep::default().to_params().unwrap();
    let json: serde_json::Value = serde_json::to_value(params).unwrap();

    for key in [
        "quietValue",
        "quietTime",
        "amplitude",
        "offset",
        "period",
        "numCycles",
        "shift",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["numCycles"], 1);
}

#[test]
fn test_triangle_waveform() {
    let params = CyclicParams {
        quiet_value: 0.0,
        quiet_time: 1000,
        amplitude: 1.0,
        offset: 0.5,
        period: 4000,
        num_cycles: 1,
        shift: 0.0,
    };

    // Quiet period holds the quiet value
    assert_eq!(params.voltage_at(0.5), 0.0);
    // Sweep starts at the minimum, peaks half a period later
    assert!((params.voltage_at(1.0) - -0.5).abs() < 1e-12);
    assert!((params.voltage_at(2.0) - 0.5).abs() < 1e-12);
    assert!((params.voltage_at(3.0) - 1.5).abs() < 1e-12);
    assert!((params.voltage_at(4.0) - 0.5).abs() < 1e-12);

    // Half-period shift starts at the maximum
    let shifted = CyclicParams {
        quiet_time: 0,
        shift: 0.5,
        ..params
    };
    assert!((shifted.voltage_at(0.0) - 1.5).abs() < 1e-12);
    assert!((shifted.voltage_at(2.0) - -0.5).abs() < 1e-12);
}

#[test]
fn test_simulated_cell_requires_configuration() {
    let mut cell = SimulatedCell::new();
    assert!(matches!(
        cell.run_cyclic_test(),
        Err(DeviceError::NotConfigured("current range"))
    ));

    cell.set_curr_range(CurrentRange::Range100uA).unwrap();
    assert!(matches!(
        cell.run_cyclic_test(),
        Err(DeviceError::NotConfigured("sample rate"))
    ));

    assert!(cell.set_sample_rate(0.0).is_err());
    cell.set_sample_rate(10.0).unwrap();
    assert!(matches!(
        cell.run_cyclic_test(),
        Err(DeviceError::NotConfigured("test parameters"))
    ));
}

#[test]
fn test_experiment_runs_simulated_cell() {
    let experiment = Experiment::default();
    let mut cell = SimulatedCell::new();
    let trace = experiment.run(&mut cell).unwrap();

    // 1.599 s at 100 Hz
    assert_eq!(trace.len(), 159);
    assert_eq!(trace.samples[0].time_s, 0.0);
    // Shifted by half a period: starts at volt_max
    assert!((trace.samples[0].voltage_v.unwrap() - -0.4).abs() < 1e-9);
    assert!(trace.samples[0].current_ua > 0.0);
}

#[test]
fn test_simulated_current_is_clamped_to_range() {
    let experiment = Experiment {
        current_range: CurrentRange::Range10uA,
        ..Experiment::default()
    };
    let mut cell = SimulatedCell::new();
    let trace = experiment.run(&mut cell).unwrap();

    assert!(trace.samples.iter().all(|s| s.current_ua.abs() <= 10.0));
    assert!(trace.samples.iter().any(|s| s.current_ua == -10.0));
}

#[test]
fn test_record_trace_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");

    let mut cell = SimulatedCell::new();
    let path = Experiment::default()
        .run_and_record(&mut cell, &output_dir)
        .unwrap();

    assert!(path.starts_with(&output_dir));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("cv_data_") && name.ends_with(".txt"));

    let trace = crate::trace::Trace::from_tsv_file(&path).unwrap();
    assert_eq!(trace.len(), 159);
}
