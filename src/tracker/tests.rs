#[cfg(test)]
mod tracker_tests {
    use std::sync::Arc;
    use chrono::Utc;
    use parking_lot::Mutex;
    use crate::config::structs::configuration::Configuration;
    use crate::protocol::enums::response::Response;
    use crate::protocol::enums::tracker_payload::TrackerPayload;
    use crate::protocol::enums::tracker_request::TrackerRequest;
    use crate::protocol::structs::ack_payload::AckPayload;
    use crate::protocol::structs::holders_payload::HoldersPayload;
    use crate::registry::enums::registry_error::RegistryError;
    use crate::registry::structs::holder::Holder;
    use crate::registry::structs::liveness::Liveness;
    use crate::registry::structs::peer_summary::PeerSummary;
    use crate::registry::traits::registry::Registry;
    use crate::tracker::structs::peer_tracker::PeerTracker;

    fn tracker() -> PeerTracker {
        PeerTracker::new(Arc::new(Configuration::init()))
    }

    fn register(tracker: &PeerTracker, identity: &str, port: u16) {
        tracker.handle_request(TrackerRequest::Register {
            identity: identity.to_string(),
            address: String::from("127.0.0.1"),
            port,
        });
    }

    #[test]
    fn test_register_then_fetch() {
        let tracker = tracker();
        register(&tracker, "alice", 7000);
        register(&tracker, "bob", 7001);
        tracker.handle_request(TrackerRequest::Publish { identity: String::from("alice"), filename: String::from("doc.txt") });

        let response = tracker.handle_request(TrackerRequest::Fetch { identity: String::from("bob"), filename: String::from("doc.txt") });
        assert_eq!(response, Response::success(TrackerPayload::Holders(HoldersPayload {
            peers: vec![Holder { identity: String::from("alice"), address: String::from("127.0.0.1"), port: 7000 }],
        })));

        let stats = tracker.get_stats();
        assert_eq!(stats.register_handled, 2);
        assert_eq!(stats.publish_handled, 1);
        assert_eq!(stats.fetch_handled, 1);
        assert_eq!(stats.errors_answered, 0);
    }

    #[test]
    fn test_publish_ack_names_file() {
        let tracker = tracker();
        register(&tracker, "alice", 7000);
        let response = tracker.handle_request(TrackerRequest::Publish { identity: String::from("alice"), filename: String::from("doc.txt") });
        assert_eq!(response, Response::success(TrackerPayload::Ack(AckPayload { message: String::from("File doc.txt published") })));
    }

    #[test]
    fn test_fetch_own_file_is_an_error() {
        let tracker = tracker();
        register(&tracker, "alice", 7000);
        tracker.handle_request(TrackerRequest::Publish { identity: String::from("alice"), filename: String::from("doc.txt") });

        let own = tracker.handle_request(TrackerRequest::Fetch { identity: String::from("alice"), filename: String::from("doc.txt") });
        let unknown = tracker.handle_request(TrackerRequest::Fetch { identity: String::from("alice"), filename: String::from("x.txt") });
        assert_eq!(own, Response::error("No peers found with file: doc.txt"));
        assert_eq!(unknown, Response::error("No peers found with file: x.txt"));
        assert_eq!(tracker.get_stats().errors_answered, 2);
    }

    #[test]
    fn test_ping_formats_last_seen() {
        let tracker = tracker();
        register(&tracker, "alice", 7000);
        match tracker.handle_request(TrackerRequest::Ping { identity: String::from("alice") }) {
            Response::Success(TrackerPayload::Liveness(liveness)) => {
                assert!(liveness.alive);
                assert_eq!(liveness.last_seen.len(), "2024-01-01 00:00:00".len());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[derive(Default)]
    struct RecordingRegistry {
        calls: Mutex<Vec<String>>,
    }

    impl Registry for RecordingRegistry {
        fn register(&self, identity: &str, _address: &str, _port: u16) {
            self.calls.lock().push(format!("register {identity}"));
        }

        fn publish(&self, identity: &str, _filename: &str) -> Result<(), RegistryError> {
            Err(RegistryError::NotRegistered(identity.to_string()))
        }

        fn find_holders(&self, _filename: &str, _exclude_identity: &str) -> Vec<Holder> {
            Vec::new()
        }

        fn catalog(&self, identity: &str) -> Result<Vec<String>, RegistryError> {
            Err(RegistryError::NotFound(identity.to_string()))
        }

        fn liveness(&self, _identity: &str) -> Result<Liveness, RegistryError> {
            Ok(Liveness { alive: false, last_seen: Utc::now() })
        }

        fn snapshot(&self) -> Vec<PeerSummary> {
            Vec::new()
        }
    }

    #[test]
    fn test_injected_registry() {
        let registry = Arc::new(RecordingRegistry::default());
        let tracker = PeerTracker::with_registry(Arc::new(Configuration::init()), registry.clone());

        register(&tracker, "alice", 7000);
        assert_eq!(registry.calls.lock().as_slice(), [String::from("register alice")]);

        let publish = tracker.handle_request(TrackerRequest::Publish { identity: String::from("alice"), filename: String::from("a") });
        assert_eq!(publish, Response::error("Client not registered"));
        let discover = tracker.handle_request(TrackerRequest::Discover { identity: String::from("alice") });
        assert_eq!(discover, Response::error("Host alice not found"));
        tracker.log_console_stats();
    }
}
