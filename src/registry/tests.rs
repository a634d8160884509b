#[cfg(test)]
mod registry_tests {
    use std::sync::Arc;
    use chrono::{TimeDelta, TimeZone, Utc};
    use crate::registry::enums::registry_error::RegistryError;
    use crate::registry::structs::holder::Holder;
    use crate::registry::structs::peer_registry::PeerRegistry;
    use crate::registry::traits::registry::Registry;

    fn holder(identity: &str, port: u16) -> Holder {
        Holder { identity: identity.to_string(), address: String::from("127.0.0.1"), port }
    }

    #[test]
    fn test_unregistered_identity_is_rejected() {
        let registry = PeerRegistry::new();
        assert_eq!(registry.publish("ghost", "a.txt"), Err(RegistryError::NotRegistered(String::from("ghost"))));
        assert_eq!(registry.catalog("ghost"), Err(RegistryError::NotFound(String::from("ghost"))));
        assert_eq!(registry.liveness("ghost"), Err(RegistryError::NotFound(String::from("ghost"))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_publish_is_idempotent() {
        let registry = PeerRegistry::new();
        registry.register("alice", "127.0.0.1", 7000);
        registry.publish("alice", "doc.txt").unwrap();
        registry.publish("alice", "doc.txt").unwrap();
        assert_eq!(registry.catalog("alice").unwrap(), vec![String::from("doc.txt")]);
    }

    #[test]
    fn test_register_replaces_record() {
        let registry = PeerRegistry::new();
        registry.register("alice", "127.0.0.1", 7000);
        registry.publish("alice", "x").unwrap();
        registry.register("alice", "10.0.0.2", 7100);

        assert!(registry.catalog("alice").unwrap().is_empty());
        assert_eq!(registry.len(), 1);
        let snapshot = registry.snapshot();
        assert_eq!(snapshot[0].address, "10.0.0.2");
        assert_eq!(snapshot[0].port, 7100);
        assert_eq!(snapshot[0].file_count, 0);
    }

    #[test]
    fn test_find_holders_excludes_requester() {
        let registry = PeerRegistry::new();
        registry.register("alice", "127.0.0.1", 7000);
        registry.register("bob", "127.0.0.1", 7001);
        registry.publish("alice", "doc.txt").unwrap();
        registry.publish("bob", "doc.txt").unwrap();

        assert_eq!(registry.find_holders("doc.txt", "bob"), vec![holder("alice", 7000)]);
        assert_eq!(registry.find_holders("doc.txt", "alice"), vec![holder("bob", 7001)]);
        assert_eq!(registry.find_holders("doc.txt", "carol").len(), 2);
    }

    #[test]
    fn test_find_holders_empty_cases_look_alike() {
        let registry = PeerRegistry::new();
        registry.register("alice", "127.0.0.1", 7000);
        registry.publish("alice", "only-mine.txt").unwrap();

        let never_published = registry.find_holders("unknown.txt", "alice");
        let only_requester = registry.find_holders("only-mine.txt", "alice");
        assert!(never_published.is_empty());
        assert_eq!(never_published, only_requester);
    }

    #[test]
    fn test_find_holders_order_is_deterministic() {
        let registry = PeerRegistry::new();
        for (index, identity) in ["carol", "alice", "bob"].iter().enumerate() {
            registry.register(identity, "127.0.0.1", 7000 + index as u16);
            registry.publish(identity, "shared.bin").unwrap();
        }
        let first = registry.find_holders("shared.bin", "nobody");
        let second = registry.find_holders("shared.bin", "nobody");
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_liveness_threshold() {
        let registry = PeerRegistry::new();
        let registered = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        registry.register_at("alice", "127.0.0.1", 7000, registered);

        let at_59 = registry.liveness_at("alice", registered + TimeDelta::seconds(59)).unwrap();
        assert!(at_59.alive);
        assert_eq!(at_59.last_seen, registered);

        let at_61 = registry.liveness_at("alice", registered + TimeDelta::seconds(61)).unwrap();
        assert!(!at_61.alive);
        assert_eq!(at_61.last_seen, registered);

        let at_60 = registry.liveness_at("alice", registered + TimeDelta::seconds(60)).unwrap();
        assert!(!at_60.alive);
    }

    #[test]
    fn test_publish_bumps_last_seen() {
        let registry = PeerRegistry::new();
        let registered = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let published = registered + TimeDelta::seconds(120);
        registry.register_at("alice", "127.0.0.1", 7000, registered);
        registry.publish_at("alice", "doc.txt", published).unwrap();

        let liveness = registry.liveness_at("alice", published + TimeDelta::seconds(30)).unwrap();
        assert!(liveness.alive);
        assert_eq!(liveness.last_seen, published);
    }

    #[test]
    fn test_snapshot_lists_every_peer() {
        let registry = PeerRegistry::new();
        registry.register("alice", "127.0.0.1", 7000);
        registry.register("bob", "127.0.0.1", 7001);
        registry.publish("bob", "a").unwrap();
        registry.publish("bob", "b").unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 2);
        let bob = snapshot.iter().find(|peer| peer.identity == "bob").unwrap();
        assert_eq!(bob.file_count, 2);
    }

    #[test]
    fn test_concurrent_publish_distinct_names() {
        let registry = Arc::new(PeerRegistry::new());
        registry.register("alice", "127.0.0.1", 7000);

        let handles: Vec<_> = (0..64).map(|index| {
            let registry = registry.clone();
            std::thread::spawn(move || registry.publish("alice", &format!("file-{index}")))
        }).collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }

        assert_eq!(registry.catalog("alice").unwrap().len(), 64);
    }
}
