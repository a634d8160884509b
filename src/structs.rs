use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run the tracker until Ctrl-C.
    Tracker,
    /// Run a peer: serve downloads, register, publish and fetch.
    Peer {
        /// Overrides `[peer] identity`.
        #[arg(long)]
        identity: Option<String>,
        /// Overrides the port of `[peer] bind_address`.
        #[arg(long)]
        port: Option<u16>,
        /// Publish a local file, as `LOCAL=NAME` or just `LOCAL`.
        #[arg(long)]
        publish: Vec<String>,
        /// Fetch a file from another peer.
        #[arg(long)]
        fetch: Vec<String>,
    },
    /// List the files a peer has published.
    Discover {
        identity: String,
    },
    /// Ask whether a peer was active within the last minute.
    Ping {
        identity: String,
    },
}

/// Splits a `--publish` argument into the local path and the published name.
/// Without `=`, the file name of the path is published.
pub fn parse_publish_arg(value: &str) -> Option<(String, String)> {
    match value.split_once('=') {
        Some((local, name)) if !local.is_empty() && !name.is_empty() => Some((local.to_string(), name.to_string())),
        Some(_) => None,
        None => {
            let name = std::path::Path::new(value).file_name()?.to_string_lossy().to_string();
            Some((value.to_string(), name))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use super::{parse_publish_arg, Cli, Commands};

    #[test]
    fn test_parse_publish_arg() {
        assert_eq!(parse_publish_arg("/tmp/a.txt=doc.txt"), Some((String::from("/tmp/a.txt"), String::from("doc.txt"))));
        assert_eq!(parse_publish_arg("/tmp/a.txt"), Some((String::from("/tmp/a.txt"), String::from("a.txt"))));
        assert_eq!(parse_publish_arg("=doc.txt"), None);
        assert_eq!(parse_publish_arg("/tmp/a.txt="), None);
    }

    #[test]
    fn test_cli_peer_command() {
        let cli = Cli::try_parse_from([
            "peershare", "--config", "peer.toml", "peer", "--identity", "bob", "--port", "7001",
            "--publish", "notes.txt=doc.txt", "--fetch", "song.mp3", "--fetch", "movie.mkv",
        ]).unwrap();
        assert_eq!(cli.config, "peer.toml");
        assert!(!cli.create_config);
        assert_eq!(cli.command, Commands::Peer {
            identity: Some(String::from("bob")),
            port: Some(7001),
            publish: vec![String::from("notes.txt=doc.txt")],
            fetch: vec![String::from("song.mp3"), String::from("movie.mkv")],
        });
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["peershare", "ping", "alice"]).unwrap();
        assert_eq!(cli.config, "config.toml");
        assert_eq!(cli.command, Commands::Ping { identity: String::from("alice") });
    }
}
