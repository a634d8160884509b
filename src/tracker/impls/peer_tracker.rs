use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use chrono::Utc;
use log::{debug, info};
use crate::common::common::format_timestamp;
use crate::config::structs::configuration::Configuration;
use crate::protocol::enums::response::Response;
use crate::protocol::enums::tracker_payload::TrackerPayload;
use crate::protocol::enums::tracker_request::TrackerRequest;
use crate::protocol::structs::ack_payload::AckPayload;
use crate::protocol::structs::catalog_payload::CatalogPayload;
use crate::protocol::structs::holders_payload::HoldersPayload;
use crate::protocol::structs::liveness_payload::LivenessPayload;
use crate::registry::structs::peer_registry::PeerRegistry;
use crate::registry::traits::registry::Registry;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_tracker::PeerTracker;

impl PeerTracker {
    pub fn new(config: Arc<Configuration>) -> PeerTracker
    {
        PeerTracker::with_registry(config, Arc::new(PeerRegistry::new()))
    }

    pub fn with_registry(config: Arc<Configuration>, registry: Arc<dyn Registry>) -> PeerTracker
    {
        PeerTracker {
            config,
            registry,
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                ..Default::default()
            }),
        }
    }

    /// Runs one decoded request against the registry and builds the reply.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_request(&self, request: TrackerRequest) -> Response<TrackerPayload>
    {
        let response = match request {
            TrackerRequest::Register { identity, address, port } => {
                self.update_stats(StatsEvent::RegisterHandled, 1);
                self.registry.register(&identity, &address, port);
                info!("[TRACKER] Registered client: {identity} ({address}:{port})");
                Response::success(TrackerPayload::Ack(AckPayload {
                    message: String::from("Client registered"),
                }))
            }
            TrackerRequest::Publish { identity, filename } => {
                self.update_stats(StatsEvent::PublishHandled, 1);
                match self.registry.publish(&identity, &filename) {
                    Ok(_) => {
                        info!("[TRACKER] {identity} published: {filename}");
                        Response::success(TrackerPayload::Ack(AckPayload {
                            message: format!("File {filename} published"),
                        }))
                    }
                    Err(error) => Response::error(error.to_string())
                }
            }
            TrackerRequest::Fetch { identity, filename } => {
                self.update_stats(StatsEvent::FetchHandled, 1);
                let peers = self.registry.find_holders(&filename, &identity);
                if peers.is_empty() {
                    Response::error(format!("No peers found with file: {filename}"))
                } else {
                    info!("[TRACKER] Found {} peer(s) with file: {filename}", peers.len());
                    Response::success(TrackerPayload::Holders(HoldersPayload { peers }))
                }
            }
            TrackerRequest::Discover { identity } => {
                self.update_stats(StatsEvent::DiscoverHandled, 1);
                match self.registry.catalog(&identity) {
                    Ok(files) => Response::success(TrackerPayload::Catalog(CatalogPayload { identity, files })),
                    Err(error) => Response::error(error.to_string())
                }
            }
            TrackerRequest::Ping { identity } => {
                self.update_stats(StatsEvent::PingHandled, 1);
                match self.registry.liveness(&identity) {
                    Ok(liveness) => Response::success(TrackerPayload::Liveness(LivenessPayload {
                        identity,
                        alive: liveness.alive,
                        last_seen: format_timestamp(liveness.last_seen),
                    })),
                    Err(error) => Response::error(error.to_string())
                }
            }
        };

        if let Response::Error { message } = &response {
            self.update_stats(StatsEvent::ErrorsAnswered, 1);
            debug!("[TRACKER] Answering with error: {message}");
        }
        response
    }

    /// Logs one `[STATS]` line plus, at debug level, one line per registered peer.
    pub fn log_console_stats(&self)
    {
        self.set_stats(StatsEvent::TimestampConsole, Utc::now().timestamp());
        let stats = self.get_stats();
        let snapshot = self.registry.snapshot();
        let files: usize = snapshot.iter().map(|peer| peer.file_count).sum();

        info!(
            "[STATS] Peers: {} - Published: {} | Conn: {} - R: {} - P: {} - F: {} - D: {} - Ping: {} - Malformed: {} - Unknown: {} - Errors: {}",
            snapshot.len(), files, stats.connections_handled, stats.register_handled, stats.publish_handled,
            stats.fetch_handled, stats.discover_handled, stats.ping_handled, stats.malformed,
            stats.unknown_command, stats.errors_answered
        );

        for peer in snapshot {
            debug!(
                "[STATS] {} ({}:{}) - {} files - last seen {}",
                peer.identity, peer.address, peer.port, peer.file_count, format_timestamp(peer.last_seen)
            );
        }
    }
}
