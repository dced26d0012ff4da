#![cfg(all(test, unix))]
use std::time::{Duration, Instant};

use netdiag_common::error::{ProbeError, ReportError};
use netdiag_common::network::ping::PingResult;
use netdiag_core::probe::{EchoProbe, ProbeConfig};
use netdiag_protocols::ping_report::PingFlavor;

use crate::utils::fake_ping;

async fn probe_with(program: &str, flavor: PingFlavor) -> EchoProbe {
    fake_ping::init();
    let cfg = ProbeConfig::new("127.0.0.1", 0, "127.0.0.1", 7)
        .with_ping_program(program)
        .with_ping_flavor(flavor);
    EchoProbe::bind(cfg).await.unwrap()
}

#[tokio::test]
async fn windows_report_yields_loss_and_average() {
    let mut probe = probe_with(&fake_ping::path(fake_ping::WINDOWS), PingFlavor::Windows).await;
    let result = probe.ping(4, 4).await.unwrap();
    assert_eq!(result, PingResult::new(0, 3));
}

#[tokio::test]
async fn iputils_report_yields_rounded_average() {
    let mut probe = probe_with(&fake_ping::path(fake_ping::IPUTILS), PingFlavor::Unix).await;
    let result = probe.ping(56, 4).await.unwrap();
    assert_eq!(result.packet_loss_percent, 0);
    assert_eq!(result.avg_rtt_ms, 3);
}

#[tokio::test]
async fn missing_average_is_a_hard_failure() {
    let mut probe = probe_with(&fake_ping::path(fake_ping::NO_AVERAGE), PingFlavor::Windows).await;
    let result = probe.ping(32, 1).await;
    assert!(
        matches!(result, Err(ProbeError::Report(ReportError::MissingAverage))),
        "expected a report error, got {result:?}"
    );
}

#[tokio::test]
async fn unrecognized_output_is_a_report_error() {
    // `echo` prints its arguments, which is no ping summary at all.
    let mut probe = probe_with("echo", PingFlavor::Unix).await;
    let result = probe.ping(56, 3).await;
    assert!(matches!(result, Err(ProbeError::Report(ReportError::MissingLoss))));
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let mut probe = probe_with("/nonexistent/netdiag-ping", PingFlavor::Unix).await;
    let result = probe.ping(56, 1).await;
    assert!(matches!(result, Err(ProbeError::PingSpawn { .. })));
}

#[tokio::test]
async fn abnormal_exit_carries_status_and_stderr() {
    let mut probe = probe_with(&fake_ping::path(fake_ping::UNREACHABLE), PingFlavor::Unix).await;
    match probe.ping(56, 1).await {
        Err(ProbeError::PingExit { status, stderr }) => {
            assert_eq!(status.code(), Some(2));
            assert!(stderr.contains("Network is unreachable"));
        }
        other => panic!("expected PingExit, got {other:?}"),
    }
}

/// Lost requests each wait out the reply timeout, so a lossy run takes far
/// longer than one second per packet and must still be measured.
#[tokio::test]
async fn slow_lossy_run_finishes_within_default_deadline() {
    fake_ping::init();
    let cfg = ProbeConfig::new("127.0.0.1", 0, "127.0.0.1", 7)
        .with_timeout(Duration::from_secs(2))
        .with_ping_program(fake_ping::path(fake_ping::SLOW_LOSSY_WINDOWS))
        .with_ping_flavor(PingFlavor::Windows);
    let mut probe = EchoProbe::bind(cfg).await.unwrap();

    let result = probe.ping(32, 3).await;

    assert_eq!(result.unwrap(), PingResult::new(67, 3));
}

#[tokio::test]
async fn hung_ping_is_killed_at_deadline() {
    fake_ping::init();
    let deadline = Duration::from_millis(300);
    let cfg = ProbeConfig::new("127.0.0.1", 0, "127.0.0.1", 7)
        .with_ping_program(fake_ping::path(fake_ping::HANG))
        .with_ping_flavor(PingFlavor::Unix)
        .with_ping_deadline(deadline);
    let mut probe = EchoProbe::bind(cfg).await.unwrap();

    let started = Instant::now();
    let result = probe.ping(56, 1).await;

    assert!(matches!(result, Err(ProbeError::PingTimeout(d)) if d == deadline));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
#[ignore]
async fn system_ping_reaches_localhost() {
    let cfg = ProbeConfig::new("127.0.0.1", 0, "127.0.0.1", 7);
    let mut probe = EchoProbe::bind(cfg).await.unwrap();
    let result = probe.ping(56, 2).await.unwrap();
    assert_eq!(result.packet_loss_percent, 0);
}
