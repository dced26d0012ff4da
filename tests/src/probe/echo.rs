#![cfg(test)]
use std::time::{Duration, Instant};

use netdiag_common::error::ProbeError;
use netdiag_common::network::echo::{EchoReply, NO_RESPONSE};
use netdiag_core::probe::{EchoProbe, ProbeConfig};
use tokio::net::UdpSocket;

use crate::utils;

#[tokio::test]
async fn echo_round_trip_over_loopback() {
    let (peer, handle) = utils::spawn_echo_peer(1).await;
    let mut probe = EchoProbe::bind(utils::loopback_probe(peer)).await.unwrap();

    let reply = probe.send_and_receive("Hello, UDP Echo!").await.unwrap();

    assert_eq!(reply, EchoReply::Reply("Hello, UDP Echo!".to_string()));
    handle.await.unwrap();
}

#[tokio::test]
async fn empty_message_round_trips() {
    let (peer, handle) = utils::spawn_echo_peer(1).await;
    let mut probe = EchoProbe::bind(utils::loopback_probe(peer)).await.unwrap();

    let reply = probe.send_and_receive("").await.unwrap();

    assert_eq!(reply, EchoReply::Reply(String::new()));
    handle.await.unwrap();
}

#[tokio::test]
async fn probe_serves_sequential_cycles() {
    let (peer, handle) = utils::spawn_echo_peer(2).await;
    let mut probe = EchoProbe::bind(utils::loopback_probe(peer)).await.unwrap();

    let first = probe.send_and_receive("one").await.unwrap();
    let second = probe.send_and_receive("two").await.unwrap();

    assert_eq!(first.as_text(), Some("one"));
    assert_eq!(second.as_text(), Some("two"));
    handle.await.unwrap();
}

/// A peer that never answers must yield the sentinel, and only after the
/// configured timeout (plus scheduling slack).
#[tokio::test]
async fn silent_peer_yields_no_response_within_timeout() {
    let silent = utils::silent_peer().await;
    let timeout = Duration::from_millis(300);
    let cfg = utils::loopback_probe(silent.local_addr().unwrap()).with_timeout(timeout);
    let mut probe = EchoProbe::bind(cfg).await.unwrap();

    let started = Instant::now();
    let reply = probe.send_and_receive("anyone there?").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(reply, EchoReply::NoResponse);
    assert_eq!(reply.to_string(), NO_RESPONSE);
    assert!(elapsed >= Duration::from_millis(290), "returned too early: {elapsed:?}");
    assert!(elapsed < timeout + Duration::from_secs(1), "blocked too long: {elapsed:?}");
}

#[tokio::test]
async fn first_datagram_wins_regardless_of_sender() {
    let silent = utils::silent_peer().await;
    let mut probe = EchoProbe::bind(utils::loopback_probe(silent.local_addr().unwrap()))
        .await
        .unwrap();

    let intruder = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    intruder
        .send_to(b"not the peer", probe.local_addr().unwrap())
        .await
        .unwrap();

    let reply = probe.send_and_receive("hello").await.unwrap();
    assert_eq!(reply, EchoReply::Reply("not the peer".to_string()));
}

#[tokio::test]
async fn bind_fails_when_port_is_taken() {
    let taken = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let result = EchoProbe::bind(ProbeConfig::new("127.0.0.1", port, "127.0.0.1", 9)).await;

    assert!(
        matches!(result, Err(ProbeError::Bind { addr, .. }) if addr.port() == port),
        "expected a bind error"
    );
}

#[tokio::test]
async fn port_is_released_when_probe_is_dropped() {
    let probe = EchoProbe::bind(ProbeConfig::new("127.0.0.1", 0, "127.0.0.1", 9))
        .await
        .unwrap();
    let local = probe.local_addr().unwrap();
    drop(probe);

    assert!(UdpSocket::bind(local).await.is_ok());
}

#[tokio::test]
async fn unresolvable_destination_binds_nothing() {
    let result = EchoProbe::bind(ProbeConfig::new("127.0.0.1", 0, "no-such-host.invalid", 7)).await;
    assert!(matches!(result, Err(ProbeError::Resolve { .. })));
}
