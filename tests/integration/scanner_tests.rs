//! End-to-end scanner runs over scripted capability providers

use crate::common::init_tracing;
use crate::common::providers::{
    clean_document, secure_capabilities, secure_transport, FlakyCrypto, GatedCrypto,
    WorkingBiometric,
};
use std::sync::Arc;
use tokio_test::assert_ok;
use wallet_sentinel::{
    Capabilities, CheckDetail, CheckKind, OverallStatus, RunState, ScanConfig, SecurityScanner,
    SentinelError,
};

fn scanner_with(config: ScanConfig, caps: Capabilities) -> Arc<SecurityScanner> {
    Arc::new(SecurityScanner::new(config, caps).unwrap())
}

#[tokio::test]
async fn test_full_secure_platform_reports_secure() {
    init_tracing();
    let scanner = scanner_with(ScanConfig::default(), secure_capabilities());
    let report = scanner.start().await.unwrap();

    assert_eq!(report.state, RunState::Complete);
    assert_eq!(report.status, OverallStatus::Secure);
    assert_eq!(report.snapshot.results.len(), CheckKind::ALL.len());
    assert!(report.snapshot.results.iter().all(|r| r.passed));
    assert_eq!(report.snapshot.progress, 100);
    assert!(report.snapshot.error.is_none());
}

#[tokio::test]
async fn test_enabled_subset_runs_in_registry_order_with_unique_kinds() {
    let config = ScanConfig::builder()
        .only([
            CheckKind::Soc2Compliance,
            CheckKind::Csp,
            CheckKind::Storage,
            CheckKind::Biometric,
        ])
        .build()
        .unwrap();
    let scanner = scanner_with(config, secure_capabilities());
    let report = scanner.start().await.unwrap();

    let kinds: Vec<CheckKind> = report.snapshot.results.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CheckKind::Biometric,
            CheckKind::Csp,
            CheckKind::Storage,
            CheckKind::Soc2Compliance,
        ]
    );
    let mut unique = kinds.clone();
    unique.dedup();
    assert_eq!(unique.len(), kinds.len());
}

// Scenario: TLS settles immediately, the HSM-backing crypto subsystem throws
// twice and then answers; the flaky check recovers within its retry budget.
#[tokio::test(start_paused = true)]
async fn test_flaky_provider_recovers_within_retry_budget() {
    let config = ScanConfig::builder()
        .timeout_ms(5_000)
        .retry_attempts(2)
        .delay_ms(100)
        .only([CheckKind::Tls, CheckKind::Hsm])
        .build()
        .unwrap();
    let caps = Capabilities::new()
        .with_crypto(Arc::new(FlakyCrypto::new(2)))
        .with_document(clean_document())
        .with_transport(secure_transport());
    let scanner = scanner_with(config, caps);

    let report = scanner.start().await.unwrap();
    assert!(!report.snapshot.is_checking);
    assert_eq!(report.snapshot.results.len(), 2);

    let hsm = &report.snapshot.results[0];
    assert_eq!(hsm.kind, CheckKind::Hsm);
    assert!(hsm.passed);
    assert_eq!(hsm.attempts, 3);

    let tls = &report.snapshot.results[1];
    assert_eq!(tls.kind, CheckKind::Tls);
    assert!(tls.passed);
    assert_eq!(tls.attempts, 1);

    assert_eq!(report.status, OverallStatus::Secure);
}

// Scenario: the crypto subsystem never answers; the HSM check is demoted
// after exactly retry_attempts + 1 attempts and the run still completes.
#[tokio::test(start_paused = true)]
async fn test_exhausted_retries_demote_and_run_continues() {
    let config = ScanConfig::builder()
        .timeout_ms(5_000)
        .retry_attempts(2)
        .delay_ms(100)
        .only([CheckKind::Tls, CheckKind::Hsm])
        .build()
        .unwrap();
    let caps = Capabilities::new()
        .with_crypto(Arc::new(FlakyCrypto::new(u32::MAX)))
        .with_document(clean_document())
        .with_transport(secure_transport());
    let scanner = scanner_with(config, caps);

    let report = scanner.start().await.unwrap();
    assert_eq!(report.state, RunState::Complete);
    assert_eq!(report.snapshot.results.len(), 2);

    let hsm = &report.snapshot.results[0];
    assert!(!hsm.passed);
    assert_eq!(hsm.attempts, 3);
    assert!(matches!(hsm.detail, CheckDetail::Unavailable { .. }));
    assert!(report.snapshot.results[1].passed);

    assert_eq!(report.status, OverallStatus::PartiallySecure);
}

// Scenario: stop() lands while the first of three enabled checks is in
// flight; the in-flight result still settles and is kept, the rest are
// abandoned.
#[tokio::test]
async fn test_stop_keeps_in_flight_result_and_abandons_rest() {
    init_tracing();
    let config = ScanConfig::builder()
        .only([CheckKind::Hsm, CheckKind::Tls, CheckKind::Headers])
        .build()
        .unwrap();
    let gated = Arc::new(GatedCrypto::new());
    let entered = gated.entered.clone();
    let release = gated.release.clone();
    let caps = Capabilities::new()
        .with_crypto(gated)
        .with_document(clean_document())
        .with_transport(secure_transport());
    let scanner = scanner_with(config, caps);

    let runner = {
        let scanner = scanner.clone();
        tokio::spawn(async move { scanner.start().await })
    };

    // wait until the first probe is inside the capability call
    entered.acquire().await.unwrap().forget();
    scanner.stop();
    release.add_permits(1);

    let report = runner.await.unwrap().unwrap();
    assert_eq!(report.state, RunState::Cancelled);
    assert_eq!(report.snapshot.results.len(), 1);
    assert_eq!(report.snapshot.results[0].kind, CheckKind::Hsm);
    assert!(report.snapshot.results[0].passed);
    assert!(report.snapshot.error.is_some());
    assert!(!report.snapshot.is_checking);
    assert!(report.snapshot.progress < 100);
    assert_eq!(scanner.run_state(), RunState::Cancelled);
}

#[tokio::test]
async fn test_lifecycle_calls_rejected_while_running() {
    let config = ScanConfig::builder().only([CheckKind::Hsm]).build().unwrap();
    let gated = Arc::new(GatedCrypto::new());
    let entered = gated.entered.clone();
    let release = gated.release.clone();
    let scanner = scanner_with(config, Capabilities::new().with_crypto(gated));

    let runner = {
        let scanner = scanner.clone();
        tokio::spawn(async move { scanner.start().await })
    };
    entered.acquire().await.unwrap().forget();
    assert_eq!(scanner.run_state(), RunState::Running);

    assert!(matches!(
        scanner.start().await.unwrap_err(),
        SentinelError::InvalidState {
            action: "start",
            ..
        }
    ));
    assert!(matches!(
        scanner.reset().unwrap_err(),
        SentinelError::InvalidState {
            action: "reset",
            ..
        }
    ));
    assert!(matches!(
        scanner.update_config(|c| c.retry_attempts = 0).unwrap_err(),
        SentinelError::InvalidState {
            action: "update_config",
            ..
        }
    ));

    release.add_permits(1);
    runner.await.unwrap().unwrap();
}

// The global watchdog fires while a probe hangs; everything settled before
// the deadline survives, and an early-terminated run is never Secure.
#[tokio::test(start_paused = true)]
async fn test_global_timeout_preserves_partial_results_and_never_secure() {
    let config = ScanConfig::builder()
        .timeout_ms(2_000)
        .check_timeout_ms(500)
        .retry_attempts(5)
        .delay_ms(100)
        .only([CheckKind::Hsm, CheckKind::Biometric, CheckKind::Crypto])
        .build()
        .unwrap();
    let caps = Capabilities::new()
        .with_crypto(Arc::new(FlakyCrypto::hanging_random()))
        .with_biometric(Arc::new(WorkingBiometric));
    let scanner = scanner_with(config, caps);

    let report = scanner.start().await.unwrap();
    assert_eq!(report.state, RunState::TimedOut);
    assert!(report.snapshot.error.is_some());
    assert!(!report.snapshot.is_checking);

    // HSM and Biometric settled (and passed) before Crypto hung
    assert_eq!(report.snapshot.results.len(), 2);
    assert!(report.snapshot.results.iter().all(|r| r.passed));
    assert!(report.snapshot.progress < 100);

    // all settled checks passed, but the run did not complete
    assert_eq!(report.status, OverallStatus::PartiallySecure);
    assert_ne!(report.status, OverallStatus::Secure);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_with_mixed_partial_results() {
    let config = ScanConfig::builder()
        .timeout_ms(2_000)
        .check_timeout_ms(500)
        .retry_attempts(5)
        .delay_ms(100)
        .only([CheckKind::Csp, CheckKind::Biometric, CheckKind::Crypto])
        .build()
        .unwrap();
    // no document attached: CSP fails fast; Crypto then hangs until the
    // watchdog fires
    let caps = Capabilities::new()
        .with_crypto(Arc::new(FlakyCrypto::hanging_random()))
        .with_biometric(Arc::new(WorkingBiometric));
    let scanner = scanner_with(config, caps);

    let report = scanner.start().await.unwrap();
    assert_eq!(report.state, RunState::TimedOut);
    assert_eq!(report.snapshot.results.len(), 2);
    assert!(!report.snapshot.results[0].passed);
    assert!(report.snapshot.results[1].passed);
    assert_eq!(report.status, OverallStatus::PartiallySecure);
}

#[tokio::test]
async fn test_progress_is_monotonic_and_tops_out_at_complete() {
    let scanner = scanner_with(ScanConfig::default(), secure_capabilities());
    let mut rx = scanner.subscribe();

    let collector = tokio::spawn(async move {
        let mut progress_seen = Vec::new();
        loop {
            if rx.changed().await.is_err() {
                break;
            }
            let snapshot = rx.borrow_and_update().clone();
            let finished = !snapshot.is_checking && snapshot.run_id.is_some();
            progress_seen.push(snapshot.progress);
            if finished {
                break;
            }
        }
        progress_seen
    });

    let report = scanner.start().await.unwrap();
    let progress_seen = collector.await.unwrap();

    assert!(
        progress_seen.windows(2).all(|w| w[0] <= w[1]),
        "progress regressed: {:?}",
        progress_seen
    );
    assert_eq!(progress_seen.last().copied(), Some(100));
    assert_eq!(report.snapshot.progress, 100);
}

#[tokio::test]
async fn test_deterministic_providers_make_restart_idempotent() {
    let scanner = scanner_with(ScanConfig::default(), secure_capabilities());

    let first = scanner.start().await.unwrap();
    assert_ok!(scanner.reset());
    let second = scanner.start().await.unwrap();

    assert_eq!(first.status, second.status);
    let verdicts =
        |r: &wallet_sentinel::ScanReport| -> Vec<(CheckKind, bool)> {
            r.snapshot.results.iter().map(|c| (c.kind, c.passed)).collect()
        };
    assert_eq!(verdicts(&first), verdicts(&second));
}

#[tokio::test]
async fn test_terminal_report_serializes_as_plain_data() {
    let config = ScanConfig::builder()
        .only([CheckKind::Tls, CheckKind::ThreatDetection])
        .build()
        .unwrap();
    let scanner = scanner_with(config, secure_capabilities());
    let report = scanner.start().await.unwrap();

    let message = serde_json::to_string(&report).unwrap();
    let back: wallet_sentinel::ScanReport = serde_json::from_str(&message).unwrap();
    assert_eq!(report, back);

    let value: serde_json::Value = serde_json::from_str(&message).unwrap();
    assert_eq!(value["status"], "secure");
    assert_eq!(value["snapshot"]["results"][0]["kind"], "tls");
    assert_eq!(value["snapshot"]["results"][1]["detail"]["type"], "threat_detection");
}

#[tokio::test]
async fn test_last_status_tracks_latest_finished_run() {
    let scanner = scanner_with(ScanConfig::default(), secure_capabilities());
    assert_eq!(scanner.last_status(), OverallStatus::Unknown);

    scanner.start().await.unwrap();
    assert_eq!(scanner.last_status(), OverallStatus::Secure);

    scanner.reset().unwrap();
    // a reset clears progress but not the last finished verdict
    assert_eq!(scanner.last_status(), OverallStatus::Secure);
}
