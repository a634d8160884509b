use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_server_config::TrackerServerConfig;

pub const IDENTITY_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]{0,63}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker: TrackerServerConfig {
                bind_address: String::from("0.0.0.0:5000"),
            },
            peer: PeerConfig {
                identity: String::from("peer1"),
                tracker_address: String::from("127.0.0.1:5000"),
                advertise_address: String::from("127.0.0.1"),
                bind_address: String::from("0.0.0.0:6000"),
                repository_path: String::from("repository"),
                try_all_holders: false,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => return Err(CustomError::new(&format!("could not serialize default configuration: {e}")))
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} file, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        parse_log_level(&self.log_level)?;
        Self::validate_value("[PEER] identity", &self.peer.identity, IDENTITY_PATTERN)?;
        Self::validate_address("[TRACKER] bind_address", &self.tracker.bind_address)?;
        Self::validate_address("[PEER] tracker_address", &self.peer.tracker_address)?;
        Self::validate_address("[PEER] bind_address", &self.peer.bind_address)?;
        if self.peer.advertise_address.trim().is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] [PEER] advertise_address must not be empty"));
        }
        if self.peer.repository_path.trim().is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] [PEER] repository_path must not be empty"));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| CustomError::new(&format!("[VALIDATE CONFIG] Invalid regex {regex}: {e}")))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }

    pub fn validate_address(name: &str, value: &str) -> Result<SocketAddr, CustomError>
    {
        value.parse::<SocketAddr>()
            .map_err(|e| CustomError::new(&format!("[VALIDATE CONFIG] Error checking {name} [:] Address: \"{value}\" [:] {e}")))
    }
}
