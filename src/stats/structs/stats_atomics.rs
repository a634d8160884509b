use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub connections_handled: AtomicI64,
    pub register_handled: AtomicI64,
    pub publish_handled: AtomicI64,
    pub fetch_handled: AtomicI64,
    pub discover_handled: AtomicI64,
    pub ping_handled: AtomicI64,
    pub malformed: AtomicI64,
    pub unknown_command: AtomicI64,
    pub errors_answered: AtomicI64,
}
