#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_init_defaults() {
        let config = Configuration::init();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_console_interval, 60);
        assert_eq!(config.tracker.bind_address, "0.0.0.0:5000");
        assert_eq!(config.peer.tracker_address, "127.0.0.1:5000");
        assert_eq!(config.peer.bind_address, "0.0.0.0:6000");
        assert!(!config.peer.try_all_holders);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = Configuration::init();
        let data = toml::to_string(&config).unwrap();
        let parsed = Configuration::load(data.as_bytes()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_try_all_holders_defaults_to_false() {
        let data = r#"
            log_level = "debug"
            log_console_interval = 30

            [tracker]
            bind_address = "127.0.0.1:5000"

            [peer]
            identity = "alice"
            tracker_address = "127.0.0.1:5000"
            advertise_address = "127.0.0.1"
            bind_address = "127.0.0.1:7000"
            repository_path = "client_repo_alice"
        "#;
        let config = Configuration::load(data.as_bytes()).unwrap();
        assert_eq!(config.peer.identity, "alice");
        assert!(!config.peer.try_all_holders);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_missing_section() {
        let data = "log_level = \"info\"\nlog_console_interval = 60\n";
        assert!(Configuration::load(data.as_bytes()).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_identity() {
        let mut config = Configuration::init();
        config.peer.identity = String::from("bad identity/..");
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("[PEER] identity"));
    }

    #[test]
    fn test_validate_rejects_bad_address() {
        let mut config = Configuration::init();
        config.tracker.bind_address = String::from("localhost");
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("[TRACKER] bind_address"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("loud");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        match Configuration::load_file(path.to_str().unwrap()) {
            Err(ConfigurationError::IOError(_)) => {}
            other => panic!("expected IOError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file_creates_default_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        assert!(Configuration::load_from_file(path, false).is_err());
        assert!(!std::path::Path::new(path).exists());

        assert!(Configuration::load_from_file(path, true).is_err());
        let created = Configuration::load_file(path).unwrap();
        assert_eq!(created, Configuration::init());

        let loaded = Configuration::load_from_file(path, false).unwrap();
        assert_eq!(loaded, Configuration::init());
    }
}
