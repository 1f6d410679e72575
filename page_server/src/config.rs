//! Server configuration built from CLI arguments.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

/// Where the page server listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Parses `host` as an IP address (`localhost` is accepted as 127.0.0.1).
    /// Port 0 asks the OS for a free port.
    pub fn from_args(host: &str, port: u16) -> Result<Self> {
        let ip = match host.trim() {
            "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
            other => other
                .parse::<IpAddr>()
                .with_context(|| format!("invalid --host address: {host:?}"))?,
        };
        Ok(Self {
            addr: SocketAddr::new(ip, port),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ipv4_and_ipv6() {
        let v4 = ServerConfig::from_args("0.0.0.0", 8080).unwrap();
        assert_eq!(v4.addr.to_string(), "0.0.0.0:8080");

        let v6 = ServerConfig::from_args("::1", 3000).unwrap();
        assert_eq!(v6.addr.to_string(), "[::1]:3000");
    }

    #[test]
    fn localhost_maps_to_loopback() {
        let cfg = ServerConfig::from_args("localhost", 0).unwrap();
        assert_eq!(cfg.addr.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn rejects_hostnames() {
        let err = ServerConfig::from_args("example.com", 80).unwrap_err();
        assert!(err.to_string().contains("invalid --host address"));
    }
}
