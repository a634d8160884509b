use std::net::SocketAddr;
use chrono::{DateTime, Local, Utc};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use socket2::{Domain, Protocol, Socket, Type};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Format used for `last_seen` on the wire and in console output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'")))
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Ok(level) => level,
        Err(error) => {
            panic!("{error}");
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}

pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

/// Renders a UTC instant in local time, second precision.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

pub fn tcp_check_host_and_port_used(bind_address: &str) -> Result<(), CustomError> {
    if cfg!(target_os = "windows") {
        return match std::net::TcpListener::bind(bind_address) {
            Ok(_) => Ok(()),
            Err(_) => Err(CustomError::new(&format!("Unable to bind to {bind_address} ! Exiting...")))
        };
    }
    Ok(())
}

/// Builds a non-blocking TCP listener with address reuse enabled.
pub fn bind_tcp_listener(bind_address: SocketAddr) -> std::io::Result<tokio::net::TcpListener> {
    let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&bind_address.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;

    let std_listener: std::net::TcpListener = socket.into();
    tokio::net::TcpListener::from_std(std_listener)
}
