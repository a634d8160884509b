use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub connections_handled: i64,
    pub register_handled: i64,
    pub publish_handled: i64,
    pub fetch_handled: i64,
    pub discover_handled: i64,
    pub ping_handled: i64,
    pub malformed: i64,
    pub unknown_command: i64,
    pub errors_answered: i64,
}
