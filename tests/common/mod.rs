#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::Value;
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::watch;
use peershare::config::structs::configuration::Configuration;
use peershare::peer::structs::peer_client::PeerClient;
use peershare::protocol::protocol::MAX_RESPONSE_SIZE;
use peershare::protocol::structs::message_reader::MessageReader;
use peershare::registry::structs::peer_registry::PeerRegistry;
use peershare::registry::traits::registry::Registry;
use peershare::store::structs::file_store::FileStore;
use peershare::tracker::structs::peer_tracker::PeerTracker;
use peershare::tracker::tracker::tracker_service;
use peershare::transfer::transfer::transfer_service;

pub type TestConfig = Arc<Configuration>;

pub struct TestTracker {
    pub address: SocketAddr,
    pub tracker: Arc<PeerTracker>,
    shutdown: watch::Sender<bool>,
}

pub struct TestPeer {
    pub client: PeerClient,
    pub transfer_address: SocketAddr,
    shutdown: watch::Sender<bool>,
}

impl TestPeer {
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
    }
}

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.tracker.bind_address = String::from("127.0.0.1:0");
    config.peer.bind_address = String::from("127.0.0.1:0");
    Arc::new(config)
}

pub async fn start_tracker() -> TestTracker {
    start_tracker_with_registry(Arc::new(PeerRegistry::new())).await
}

pub async fn start_tracker_with_registry(registry: Arc<dyn Registry>) -> TestTracker {
    let config = create_test_config();
    let tracker = Arc::new(PeerTracker::with_registry(config.clone(), registry));
    let (shutdown, rx) = watch::channel(false);
    let (address, _handle) = tracker_service(config.tracker.bind_address.parse().unwrap(), tracker.clone(), rx)
        .await
        .unwrap();
    TestTracker { address, tracker, shutdown }
}

/// Starts a transfer server for `identity` with its store under `dir`.
pub async fn start_peer(tracker: &TestTracker, dir: &TempDir, identity: &str) -> TestPeer {
    let store = Arc::new(FileStore::open(dir.path().join(format!("client_repo_{identity}"))).await.unwrap());
    let (shutdown, rx) = watch::channel(false);
    let (transfer_address, _handle) = transfer_service("127.0.0.1:0".parse().unwrap(), store.clone(), rx)
        .await
        .unwrap();
    let client = PeerClient::new(identity, tracker.address, "127.0.0.1", transfer_address.port(), store);
    TestPeer { client, transfer_address, shutdown }
}

pub async fn start_registered_peer(tracker: &TestTracker, dir: &TempDir, identity: &str) -> TestPeer {
    let peer = start_peer(tracker, dir, identity).await;
    peer.client.register().await.unwrap();
    peer
}

/// Writes `path` with `size` bytes of a repeating pattern.
pub fn create_local_file(dir: &TempDir, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let content: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, content).unwrap();
    path
}

/// Sends raw bytes on a fresh connection and reads one reply.
pub async fn send_raw(address: SocketAddr, data: &[u8]) -> Value {
    let mut stream = TcpStream::connect(address).await.unwrap();
    stream.write_all(data).await.unwrap();
    read_reply(&mut stream).await
}

pub async fn read_reply(stream: &mut TcpStream) -> Value {
    let mut reader = MessageReader::with_limit(MAX_RESPONSE_SIZE);
    reader.expect_value(stream).await.unwrap()
}
