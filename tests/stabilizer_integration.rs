//! End-to-end runs through the result assembler, including the JSON
//! wire shape downstream consumers depend on.

use quorum::domain::models::SampleRequest;
use quorum::domain::ports::{BackendKind, QuorumError};
use quorum::services::Stabilizer;

#[test]
fn test_ping_example_end_to_end() {
    let stabilizer = Stabilizer::new(BackendKind::Sequential, "majority", 4).unwrap();
    let report = stabilizer
        .run(&SampleRequest::new("ping", 9, 123))
        .unwrap();

    assert_eq!(report.samples, 9);
    assert_eq!(report.strategy, "majority");
    assert_eq!(report.diagnostics.counts.values().sum::<u32>(), 9);
    assert!((1..=4).contains(&report.unique_candidates));

    let expected_agreement =
        f64::from(report.diagnostics.counts[&report.final_outcome]) / 9.0;
    assert!((report.agreement_rate - expected_agreement).abs() < f64::EPSILON);

    let expected_outlier = (report.unique_candidates - 1) as f64 / 9.0;
    assert!((report.outlier_rate - expected_outlier).abs() < f64::EPSILON);
}

#[test]
fn test_outlier_rate_is_not_truncated() {
    // Real-valued division: whenever more than one candidate shows up,
    // the rate must be strictly positive, never rounded down to zero.
    let stabilizer = Stabilizer::new(BackendKind::Sequential, "majority", 1).unwrap();
    for seed in 0..20 {
        let report = stabilizer
            .run(&SampleRequest::new("ping", 9, seed))
            .unwrap();
        if report.unique_candidates > 1 {
            assert!(report.outlier_rate > 0.0);
            return;
        }
    }
    panic!("no seed in 0..20 produced more than one candidate");
}

#[test]
fn test_every_backend_produces_a_valid_report() {
    for kind in [
        BackendKind::Sequential,
        BackendKind::BatchThread,
        BackendKind::Future,
        BackendKind::WorkerQueue,
    ] {
        let stabilizer = Stabilizer::new(kind, "majority", 3).unwrap();
        let report = stabilizer
            .run(&SampleRequest::new("ping", 33, 7))
            .unwrap();
        assert_eq!(report.samples, 33, "{kind:?}");
        assert_eq!(report.diagnostics.counts.values().sum::<u32>(), 33, "{kind:?}");
        assert!(report.diagnostics.counts[&report.final_outcome] >= 1, "{kind:?}");
        assert!(report.agreement_rate > 0.0 && report.agreement_rate <= 1.0, "{kind:?}");
        assert_eq!(report.diagnostics.max_workers, 3, "{kind:?}");
    }
}

#[test]
fn test_configuration_errors_fail_before_sampling() {
    let stabilizer = Stabilizer::new(BackendKind::Sequential, "majority", 4).unwrap();

    let err = stabilizer.run(&SampleRequest::new("", 9, 0)).unwrap_err();
    assert!(matches!(err, QuorumError::EmptyQuery));

    let err = stabilizer.run(&SampleRequest::new("ping", 0, 0)).unwrap_err();
    assert!(matches!(err, QuorumError::SamplesOutOfRange(0)));

    let err = stabilizer
        .run(&SampleRequest::new("ping", 102, 0))
        .unwrap_err();
    assert!(matches!(err, QuorumError::SamplesOutOfRange(102)));
}

#[test]
fn test_unsupported_strategies_fail_at_construction() {
    for name in ["single", "median", "unanimous"] {
        let err = Stabilizer::new(BackendKind::Sequential, name, 4).unwrap_err();
        assert!(
            matches!(&err, QuorumError::UnsupportedStrategy(n) if n == name),
            "expected unsupported-strategy error for {name:?}, got {err}"
        );
    }
}

#[test]
fn test_zero_workers_rejected() {
    let err = Stabilizer::new(BackendKind::WorkerQueue, "majority", 0).unwrap_err();
    assert!(matches!(err, QuorumError::InvalidWorkerCount(0)));
}

#[test]
fn test_json_wire_shape() {
    let stabilizer = Stabilizer::new(BackendKind::Sequential, "majority", 2).unwrap();
    let report = stabilizer
        .run(&SampleRequest::new("ping", 9, 123))
        .unwrap();

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    // Top-level field names are the external contract.
    assert!(json["final"].is_string());
    assert_eq!(json["strategy"], "majority");
    assert_eq!(json["samples"], 9);
    assert!(json["agreement_rate"].is_f64());
    assert!(json["unique_candidates"].is_u64());
    assert!(json["outlier_rate"].is_f64());
    assert!(json["latency_ms"].is_u64());

    // Nested diagnostics object with the counts mapping.
    let diagnostics = &json["diagnostics"];
    assert_eq!(diagnostics["seed"], 123);
    assert_eq!(diagnostics["max_workers"], 2);
    let counts = diagnostics["counts"].as_object().unwrap();
    let total: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 9);
    for key in counts.keys() {
        assert!(
            ["OK", "FAIL", "Timeout", "Retry"].contains(&key.as_str()),
            "unexpected outcome label {key:?}"
        );
    }
    assert!(counts.contains_key(json["final"].as_str().unwrap()));
}

#[test]
fn test_deterministic_verdict_across_runs() {
    let stabilizer = Stabilizer::new(BackendKind::Sequential, "majority", 1).unwrap();
    let request = SampleRequest::new("ping", 9, 123);
    let first = stabilizer.run(&request).unwrap();
    let second = stabilizer.run(&request).unwrap();
    assert_eq!(first.final_outcome, second.final_outcome);
    assert_eq!(first.diagnostics.counts, second.diagnostics.counts);
}
