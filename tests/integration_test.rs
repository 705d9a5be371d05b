//! Integration tests for radiostat
//!
//! These tests exercise the full pipeline from a (simulated) run to the
//! charge report and the persisted responses.

use radiostat::analysis::{analyze, AnalysisError, Analyzer, ChargeReport};
use radiostat::device::{record_trace, CurrentRange, CyclicSweep, Experiment, SimulatedCell};
use radiostat::responses::{ResponseKey, ResponseStore};
use radiostat::trace::{latest_trace, Trace, TraceError};
use std::fs;
use tempfile::tempdir;

/// Record a simulated run and analyze the file it produced
#[test]
fn test_record_then_analyze() {
    let dir = tempdir().unwrap();
    let mut cell = SimulatedCell::new().with_stripping_efficiency(0.8);

    let path = Experiment::default()
        .run_and_record(&mut cell, dir.path())
        .unwrap();
    assert_eq!(latest_trace(dir.path()).unwrap(), Some(path.clone()));

    let result = analyze(&path).unwrap();

    assert!(result.charge_ox > 0.0);
    assert!(result.charge_red < 0.0);

    // Stripping recovers roughly 80% of the plated charge
    let recovered = result.charge_ox / result.charge_red.abs();
    assert!((0.7..0.85).contains(&recovered), "recovered {recovered}");

    // More plated than stripped: the signed min/max ratio is |red| / ox
    let expected = result.charge_red.abs() / result.charge_ox * 100.0;
    assert!((result.efficiency_pct - expected).abs() < 1e-9);
    assert!(result.efficiency_pct > 100.0);
}

/// Every returned sample is above 5% of the peak of the whole trace
#[test]
fn test_active_samples_exceed_full_trace_threshold() {
    let dir = tempdir().unwrap();
    let experiment = Experiment {
        current_range: CurrentRange::Range1000uA,
        sample_rate_hz: 200.0,
        sweep: CyclicSweep {
            num_cycles: 2,
            quiet_time_ms: 500,
            ..CyclicSweep::default()
        },
    };
    let mut cell = SimulatedCell::new();
    let path = experiment.run_and_record(&mut cell, dir.path()).unwrap();

    let trace = Trace::from_tsv_file(&path).unwrap();
    let peak_ma = trace
        .currents_ua()
        .iter()
        .map(|c| (c / 1000.0).abs())
        .fold(0.0, f64::max);

    let result = analyze(&path).unwrap();
    assert!(result.time.len() < trace.len());
    assert!(result.current.iter().all(|c| c.abs() > 0.05 * peak_ma));

    // Shared time axis across all series
    assert_eq!(result.time.len(), result.current.len());
    assert_eq!(result.time.len(), result.current_ox.len());
    assert_eq!(result.time.len(), result.current_red.len());
    assert!(result.time.windows(2).all(|w| w[0] <= w[1]));
}

/// Re-running the analysis on an unchanged file gives identical results
#[test]
fn test_analysis_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut cell = SimulatedCell::new();
    let trace = Experiment::default().run(&mut cell).unwrap();
    let path = record_trace(&trace, dir.path()).unwrap();

    let analyzer = Analyzer::new();
    let first = analyzer.analyze_file(&path).unwrap();
    let second = analyzer.analyze_file(&path).unwrap();
    assert_eq!(first, second);

    // Reading back the file changes nothing compared to the in-memory trace
    let in_memory = analyzer.analyze_trace(&trace).unwrap();
    assert_eq!(first, in_memory);
}

/// A flat trace cannot be integrated
#[test]
fn test_flat_trace_file_is_degenerate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.txt");
    let mut content = String::from("Time (s)\tVoltage (V)\tCurrent (uA)\n");
    for i in 0..50 {
        content.push_str(&format!("{}\t-0.8\t0\n", i as f64 * 0.01));
    }
    fs::write(&path, content).unwrap();

    let err = analyze(&path).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::DegenerateTrace {
            active: 0,
            total: 50
        }
    ));
}

/// A file without the current column is reported by column name
#[test]
fn test_missing_column_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_current.txt");
    fs::write(&path, "Time (s)\tVoltage (V)\n0\t-0.4\n0.01\t-0.41\n").unwrap();

    let err = analyze(&path).unwrap_err();
    match &err {
        AnalysisError::Parse(TraceError::MissingColumn(column)) => {
            assert_eq!(column, "Current (uA)")
        }
        other => panic!("unexpected error: {other}"),
    }

    // The cause is reachable for diagnostics
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("Current (uA)"));
}

/// Report text for a recorded run
#[test]
fn test_report_for_recorded_run() {
    let dir = tempdir().unwrap();
    let mut cell = SimulatedCell::new();
    let path = Experiment::default()
        .run_and_record(&mut cell, dir.path())
        .unwrap();
    let result = analyze(&path).unwrap();

    let text = ChargeReport::new(&result).to_string();
    assert!(text.contains(&format!("Stripping Charge: {:.4} mC", result.charge_ox)));
    assert!(text.contains(&format!("Plating Charge: {:.4} mC", result.charge_red)));
    assert!(text.contains("CE (%) = (Smaller Charge ÷ Larger Charge) × 100"));
    assert!(!text.contains("Computed CE"));
}

/// Responses from several steps survive a reload and are saved as one object
#[test]
fn test_responses_across_steps() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output").join("student_responses.json");

    let mut store = ResponseStore::load(&path).unwrap();
    store.set(ResponseKey::IntroReflection, "Salt water plates more zinc");
    store.save().unwrap();

    let mut store = ResponseStore::load(&path).unwrap();
    for n in 1..=3 {
        store.set(ResponseKey::CalculatedCe(n), &format!("{}", 80 + n));
    }
    store.set(ResponseKey::FinalConclusion, "Electrolyte 2 was most efficient");
    store.save().unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert_eq!(object["intro_reflection"], "Salt water plates more zinc");
    assert_eq!(object["test2_calculated_ce"], "82");
    assert_eq!(object["final_conclusion"], "Electrolyte 2 was most efficient");
}
