use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::peer_tracker::PeerTracker;

impl PeerTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            connections_handled: self.stats.connections_handled.load(Ordering::SeqCst),
            register_handled: self.stats.register_handled.load(Ordering::SeqCst),
            publish_handled: self.stats.publish_handled.load(Ordering::SeqCst),
            fetch_handled: self.stats.fetch_handled.load(Ordering::SeqCst),
            discover_handled: self.stats.discover_handled.load(Ordering::SeqCst),
            ping_handled: self.stats.ping_handled.load(Ordering::SeqCst),
            malformed: self.stats.malformed.load(Ordering::SeqCst),
            unknown_command: self.stats.unknown_command.load(Ordering::SeqCst),
            errors_answered: self.stats.errors_answered.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::ConnectionsHandled => &self.stats.connections_handled,
            StatsEvent::RegisterHandled => &self.stats.register_handled,
            StatsEvent::PublishHandled => &self.stats.publish_handled,
            StatsEvent::FetchHandled => &self.stats.fetch_handled,
            StatsEvent::DiscoverHandled => &self.stats.discover_handled,
            StatsEvent::PingHandled => &self.stats.ping_handled,
            StatsEvent::Malformed => &self.stats.malformed,
            StatsEvent::UnknownCommand => &self.stats.unknown_command,
            StatsEvent::ErrorsAnswered => &self.stats.errors_answered,
            StatsEvent::TimestampConsole => &self.stats.timestamp_run_console,
        }
    }
}
