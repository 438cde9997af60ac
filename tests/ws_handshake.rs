//! End-to-end handshake tests against a real server on an ephemeral port.
//!
//! Registration is fire-and-forget on the wire, so tests sequence it by
//! polling `GET /presence` instead of sleeping.

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use qrlink_relay::app_state::AppState;
use qrlink_relay::build_app;
use qrlink_relay::domain::PresenceRegistry;
use qrlink_relay::service::HandshakeRouter;

type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn spawn_relay() -> SocketAddr {
    let registry = Arc::new(PresenceRegistry::new());
    let router = Arc::new(HandshakeRouter::new(registry));
    let app = build_app(AppState { router });

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn connect(addr: SocketAddr) -> WsClient {
    let (ws, _) = connect_async(format!("ws://{addr}/ws"))
        .await
        .expect("ws connect");
    ws
}

async fn send_event(ws: &mut WsClient, event: Value) {
    ws.send(Message::text(event.to_string()))
        .await
        .expect("ws send");
}

async fn recv_event(ws: &mut WsClient) -> Value {
    loop {
        let msg = timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for event")
            .expect("stream ended")
            .expect("ws error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).expect("valid event json");
        }
    }
}

async fn assert_silence(ws: &mut WsClient, window: Duration) {
    let result = timeout(window, ws.next()).await;
    assert!(result.is_err(), "expected no event, got {result:?}");
}

/// Polls `/presence` until exactly `expected` names are registered.
async fn wait_for_presence(addr: SocketAddr, expected: &[&str]) {
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/presence");
    for _ in 0..100 {
        if let Ok(resp) = client.get(&url).send().await
            && let Ok(body) = resp.json::<Value>().await
        {
            let names: Vec<&str> = body
                .get("names")
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            if names.len() == expected.len() && expected.iter().all(|n| names.contains(n)) {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("presence never reached {expected:?}");
}

#[tokio::test]
async fn health_reports_healthy() {
    let addr = spawn_relay().await;
    let resp = reqwest::get(format!("http://{addr}/health"))
        .await
        .expect("health request");
    assert!(resp.status().is_success());

    let body = resp.json::<Value>().await.expect("health body");
    assert_eq!(body.get("status").and_then(Value::as_str), Some("healthy"));
}

#[tokio::test]
async fn scan_and_decision_round_trip() {
    let addr = spawn_relay().await;

    let mut alice = connect(addr).await;
    send_event(&mut alice, json!({"event": "register", "data": "alice"})).await;
    let mut bob = connect(addr).await;
    send_event(&mut bob, json!({"event": "register", "data": "bob"})).await;
    wait_for_presence(addr, &["alice", "bob"]).await;

    // Bob scans Alice's code; the request lands on Alice's connection.
    send_event(
        &mut bob,
        json!({"event": "qr-scanned", "data": {"ownerName": "alice", "scannerName": "bob"}}),
    )
    .await;
    let request = recv_event(&mut alice).await;
    assert_eq!(
        request,
        json!({"event": "qr-request", "data": {"scannerName": "bob"}})
    );

    // Alice approves; the status lands on Bob's connection.
    send_event(
        &mut alice,
        json!({"event": "login-response", "data": {"scannerName": "bob", "status": "Accepted"}}),
    )
    .await;
    let status = recv_event(&mut bob).await;
    assert_eq!(
        status,
        json!({"event": "login-status", "data": {"status": "Accepted"}})
    );
}

#[tokio::test]
async fn scan_naming_departed_owner_goes_nowhere() {
    let addr = spawn_relay().await;

    let mut alice = connect(addr).await;
    send_event(&mut alice, json!({"event": "register", "data": "alice"})).await;
    wait_for_presence(addr, &["alice"]).await;

    // Owner leaves; her registration is reclaimed.
    alice.close(None).await.expect("close alice");
    wait_for_presence(addr, &[]).await;

    let mut bob = connect(addr).await;
    send_event(&mut bob, json!({"event": "register", "data": "bob"})).await;
    wait_for_presence(addr, &["bob"]).await;

    send_event(
        &mut bob,
        json!({"event": "qr-scanned", "data": {"ownerName": "alice", "scannerName": "bob"}}),
    )
    .await;

    // No error frame, no response: the scanner is expected to time out.
    assert_silence(&mut bob, Duration::from_millis(300)).await;
}

#[tokio::test]
async fn decision_reaches_scanner_on_its_new_connection() {
    let addr = spawn_relay().await;

    let mut alice = connect(addr).await;
    send_event(&mut alice, json!({"event": "register", "data": "alice"})).await;
    let mut bob = connect(addr).await;
    send_event(&mut bob, json!({"event": "register", "data": "bob"})).await;
    wait_for_presence(addr, &["alice", "bob"]).await;

    send_event(
        &mut bob,
        json!({"event": "qr-scanned", "data": {"ownerName": "alice", "scannerName": "bob"}}),
    )
    .await;
    let request = recv_event(&mut alice).await;
    assert_eq!(
        request,
        json!({"event": "qr-request", "data": {"scannerName": "bob"}})
    );

    // Scanner drops before the owner decides, then reconnects under the
    // same name.
    bob.close(None).await.expect("close bob");
    wait_for_presence(addr, &["alice"]).await;
    let mut bob_again = connect(addr).await;
    send_event(&mut bob_again, json!({"event": "register", "data": "bob"})).await;
    wait_for_presence(addr, &["alice", "bob"]).await;

    // The decision is resolved at decision time, so it lands on the new
    // connection.
    send_event(
        &mut alice,
        json!({"event": "login-response", "data": {"scannerName": "bob", "status": "Accepted"}}),
    )
    .await;
    let status = recv_event(&mut bob_again).await;
    assert_eq!(
        status,
        json!({"event": "login-status", "data": {"status": "Accepted"}})
    );
}

#[tokio::test]
async fn malformed_frames_are_ignored_without_closing() {
    let addr = spawn_relay().await;

    let mut alice = connect(addr).await;
    send_event(&mut alice, json!({"event": "register", "data": "alice"})).await;
    wait_for_presence(addr, &["alice"]).await;

    // Garbage, an unknown event, and a truncated payload: all dropped.
    alice
        .send(Message::text("not json"))
        .await
        .expect("ws send");
    send_event(&mut alice, json!({"event": "self-destruct", "data": {}})).await;
    send_event(&mut alice, json!({"event": "qr-scanned", "data": {"ownerName": "alice"}})).await;

    // The connection survives and still routes handshake traffic.
    let mut bob = connect(addr).await;
    send_event(&mut bob, json!({"event": "register", "data": "bob"})).await;
    wait_for_presence(addr, &["alice", "bob"]).await;

    send_event(
        &mut bob,
        json!({"event": "qr-scanned", "data": {"ownerName": "alice", "scannerName": "bob"}}),
    )
    .await;
    let request = recv_event(&mut alice).await;
    assert_eq!(
        request,
        json!({"event": "qr-request", "data": {"scannerName": "bob"}})
    );
}
