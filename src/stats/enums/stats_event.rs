use serde::{Deserialize, Serialize};

/// Every counter that can be bumped through `PeerTracker::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    ConnectionsHandled,
    RegisterHandled,
    PublishHandled,
    FetchHandled,
    DiscoverHandled,
    PingHandled,
    Malformed,
    UnknownCommand,
    ErrorsAnswered,
    TimestampConsole,
}
