mod common;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::test]
async fn test_download_handshake_over_socket() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = common::start_tracker().await;
    let alice = common::start_peer(&tracker, &dir, "alice").await;
    alice.client.store.write("doc.txt", &[1u8; 500]).await.unwrap();

    let mut stream = TcpStream::connect(alice.transfer_address).await.unwrap();
    stream.write_all(br#"{"command":"download","filename":"doc.txt"}"#).await.unwrap();
    let offer = common::read_reply(&mut stream).await;
    assert_eq!(offer, json!({"status": "success", "filename": "doc.txt", "size": 500}));

    stream.write_all(b"OK").await.unwrap();
    let mut received = Vec::new();
    stream.read_to_end(&mut received).await.unwrap();
    assert_eq!(received.len(), 500);
}

#[tokio::test]
async fn test_ack_sent_with_request_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = common::start_tracker().await;
    let alice = common::start_peer(&tracker, &dir, "alice").await;
    alice.client.store.write("doc.txt", b"hello world").await.unwrap();

    let mut stream = TcpStream::connect(alice.transfer_address).await.unwrap();
    stream.write_all(br#"{"command":"download","filename":"doc.txt"}OK"#).await.unwrap();

    let mut received = Vec::new();
    stream.read_to_end(&mut received).await.unwrap();
    let expected = [br#"{"status":"success","filename":"doc.txt","size":11}"#.as_slice(), b"hello world"].concat();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn test_one_download_per_connection() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = common::start_tracker().await;
    let alice = common::start_peer(&tracker, &dir, "alice").await;

    let mut stream = TcpStream::connect(alice.transfer_address).await.unwrap();
    stream.write_all(br#"{"command":"download","filename":"missing.txt"}"#).await.unwrap();
    let reply = common::read_reply(&mut stream).await;
    assert_eq!(reply, json!({"status": "error", "message": "File not found"}));

    let mut rest = Vec::new();
    stream.read_to_end(&mut rest).await.unwrap();
    assert!(rest.is_empty());
}

#[tokio::test]
async fn test_stopped_peer_refuses_connections() {
    let dir = tempfile::tempdir().unwrap();
    let tracker = common::start_tracker().await;
    let alice = common::start_peer(&tracker, &dir, "alice").await;
    alice.stop();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    assert!(TcpStream::connect(alice.transfer_address).await.is_err());
}
