//! Command implementations for xplanectl

pub mod show_values;
pub mod take_off;

use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;
use xplane_udp::DEFAULT_HOST_PORT;

use crate::error::CliError;

#[derive(Args, Debug)]
pub struct ShowValuesArgs {
    /// Address to listen on
    #[arg(short, long, default_value_t = IpAddr::V6(Ipv6Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_HOST_PORT)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct TakeOffArgs {
    /// Host running X-Plane (name or IP address)
    pub send_host: String,

    /// Port X-Plane receives on
    #[arg(short = 'p', long, default_value_t = DEFAULT_HOST_PORT)]
    pub send_port: u16,

    /// Local address to receive telemetry on
    #[arg(short = 'b', long, default_value = "0.0.0.0")]
    pub listen_host: String,

    /// Local port to receive telemetry on
    #[arg(short = 'P', long, default_value_t = DEFAULT_HOST_PORT)]
    pub listen_port: u16,

    /// YAML tuning file
    #[arg(long, env = "XPLANECTL_CONFIG", conflicts_with = "gentle")]
    pub config: Option<PathBuf>,

    /// Use the softer built-in tuning
    #[arg(long)]
    pub gentle: bool,
}

/// Parse a literal IP address for a local socket.
pub fn listen_addr(host: &str, port: u16) -> Result<SocketAddr, CliError> {
    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .map_err(|e| CliError::InvalidAddress(format!("'{host}': {e}")))
}

/// Resolve a host name or literal address, preferring the first result.
pub async fn resolve(host: &str, port: u16) -> Result<SocketAddr, CliError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| CliError::InvalidAddress(format!("'{host}': {e}")))?;
    addrs
        .next()
        .ok_or_else(|| CliError::InvalidAddress(format!("'{host}' did not resolve")))
}
