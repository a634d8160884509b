use std::net::SocketAddr;
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use peershare::common::common::{setup_logging, tcp_check_host_and_port_used};
use peershare::config::structs::configuration::Configuration;
use peershare::peer::structs::peer_client::PeerClient;
use peershare::store::structs::file_store::FileStore;
use peershare::structs::{parse_publish_arg, Cli, Commands};
use peershare::tracker::structs::peer_tracker::PeerTracker;
use peershare::tracker::tracker::{console_stats_service, tracker_service};
use peershare::transfer::transfer::transfer_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            exit(101)
        }
    };

    if let Commands::Peer { identity, port, .. } = &args.command {
        if let Some(identity) = identity {
            config.peer.identity = identity.clone();
        }
        if let Some(port) = port {
            match config.peer.bind_address.parse::<SocketAddr>() {
                Ok(mut address) => {
                    address.set_port(*port);
                    config.peer.bind_address = address.to_string();
                }
                Err(e) => {
                    eprintln!("[VALIDATE CONFIG] Invalid [PEER] bind_address: {e}");
                    exit(101)
                }
            }
        }
        if let Err(e) = config.validate() {
            eprintln!("{e}");
            exit(101)
        }
    }

    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (tx, rx) = watch::channel(false);

            match args.command {
                Commands::Tracker => run_tracker(config, tx, rx).await,
                Commands::Peer { publish, fetch, .. } => run_peer(config, publish, fetch, tx, rx).await,
                Commands::Discover { identity } => {
                    let client = match build_client(&config, 0).await {
                        Ok(client) => client,
                        Err(e) => {
                            error!("[PEER] {e}");
                            exit(1)
                        }
                    };
                    match client.discover(&identity).await {
                        Ok(catalog) => {
                            println!("Files of {}:", catalog.identity);
                            for file in catalog.files {
                                println!("  {file}");
                            }
                        }
                        Err(e) => {
                            error!("[PEER] {e}");
                            exit(1)
                        }
                    }
                    Ok(())
                }
                Commands::Ping { identity } => {
                    let client = match build_client(&config, 0).await {
                        Ok(client) => client,
                        Err(e) => {
                            error!("[PEER] {e}");
                            exit(1)
                        }
                    };
                    match client.ping(&identity).await {
                        Ok(liveness) => {
                            let state = if liveness.alive { "alive" } else { "not alive" };
                            println!("{} is {state} (last seen {})", liveness.identity, liveness.last_seen);
                        }
                        Err(e) => {
                            error!("[PEER] {e}");
                            exit(1)
                        }
                    }
                    Ok(())
                }
            }
        })
}

async fn run_tracker(config: Arc<Configuration>, tx: watch::Sender<bool>, rx: watch::Receiver<bool>) -> std::io::Result<()>
{
    if let Err(e) = tcp_check_host_and_port_used(&config.tracker.bind_address) {
        error!("[TRACKER] {e}");
        exit(1);
    }
    let address: SocketAddr = match config.tracker.bind_address.parse() {
        Ok(address) => address,
        Err(e) => {
            error!("[TRACKER] Invalid bind address {}: {e}", config.tracker.bind_address);
            exit(1)
        }
    };

    let tracker = Arc::new(PeerTracker::new(config.clone()));
    let deadlock_handle = deadlock_service(rx.clone());

    let (_, tracker_handle) = match tracker_service(address, tracker.clone(), rx.clone()).await {
        Ok(service) => service,
        Err(e) => {
            error!("[TRACKER] Unable to bind {address}: {e}");
            exit(1)
        }
    };
    let stats_handle = console_stats_service(tracker.clone(), config.log_console_interval, rx.clone()).await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown request received, shutting down...");
    let _ = tx.send(true);

    if let Err(e) = try_join_all(vec![tracker_handle, stats_handle, deadlock_handle]).await {
        warn!("[BOOT] A service task ended abnormally: {e}");
    }
    tracker.log_console_stats();
    info!("Server shutting down completed");
    Ok(())
}

async fn run_peer(config: Arc<Configuration>, publish: Vec<String>, fetch: Vec<String>, tx: watch::Sender<bool>, rx: watch::Receiver<bool>) -> std::io::Result<()>
{
    let bind_address: SocketAddr = match config.peer.bind_address.parse() {
        Ok(address) => address,
        Err(e) => {
            error!("[PEER] Invalid bind address {}: {e}", config.peer.bind_address);
            exit(1)
        }
    };

    let client = match build_client(&config, bind_address.port()).await {
        Ok(client) => client,
        Err(e) => {
            error!("[PEER] {e}");
            exit(1)
        }
    };

    let (local_address, transfer_handle) = match transfer_service(bind_address, client.store.clone(), rx.clone()).await {
        Ok(service) => service,
        Err(e) => {
            error!("[TRANSFER] Unable to bind {bind_address}: {e}");
            exit(1)
        }
    };
    let client = PeerClient {
        port: local_address.port(),
        ..client
    };

    if let Err(e) = client.register().await {
        error!("[PEER] Registration of {} failed: {e}", client.identity);
    }

    for argument in publish {
        let Some((local, name)) = parse_publish_arg(&argument) else {
            warn!("[PEER] Ignoring publish argument {argument:?}, expected LOCAL=NAME");
            continue;
        };
        match client.publish(Path::new(&local), &name).await {
            Ok(message) => info!("[PEER] {message}"),
            Err(e) => error!("[PEER] Publishing {local} as {name} failed: {e}")
        }
    }

    for filename in fetch {
        match client.fetch(&filename).await {
            Ok(outcome) => info!(
                "[PEER] Fetched {filename} ({} bytes) from {} at {}:{}{}",
                outcome.size, outcome.holder.identity, outcome.holder.address, outcome.holder.port,
                if outcome.self_published { "" } else { ", not published to the tracker" }
            ),
            Err(e) => error!("[PEER] Fetching {filename} failed: {e}")
        }
    }

    match client.list_repository().await {
        Ok(files) => {
            info!("[PEER] Repository {} holds {} file(s)", client.store.root().display(), files.len());
            for file in files {
                info!("[PEER]   {} ({} bytes)", file.name, file.size);
            }
        }
        Err(e) => warn!("[PEER] Unable to list the repository: {e}")
    }

    info!("[PEER] {} serving downloads on {local_address}, press Ctrl-C to stop", client.identity);
    tokio::signal::ctrl_c().await?;
    info!("Shutdown request received, shutting down...");
    let _ = tx.send(true);
    if let Err(e) = transfer_handle.await {
        warn!("[BOOT] Transfer server ended abnormally: {e}");
    }
    Ok(())
}

async fn build_client(config: &Configuration, port: u16) -> Result<PeerClient, String>
{
    let tracker_address: SocketAddr = config.peer.tracker_address.parse()
        .map_err(|e| format!("Invalid tracker address {}: {e}", config.peer.tracker_address))?;
    let store = FileStore::open(&config.peer.repository_path).await
        .map_err(|e| format!("Unable to open repository {}: {e}", config.peer.repository_path))?;
    Ok(PeerClient::from_config(&config.peer, tracker_address, port, Arc::new(store)))
}

fn deadlock_service(mut rx: watch::Receiver<bool>) -> JoinHandle<()>
{
    tokio::spawn(async move {
        info!("[BOOT] Starting thread for deadlocks...");
        let mut interval = tokio::time::interval(Duration::from_secs(30));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
                _ = rx.changed() => {
                    info!("[BOOT] Shutting down thread for deadlocks...");
                    return;
                }
            }
        }
    })
}
