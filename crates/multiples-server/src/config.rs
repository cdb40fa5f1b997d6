//! Server configuration, passed explicitly to [`crate::serve`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use multiples_core::constants::DEFAULT_REST_PORT;
use multiples_core::options::Options;

/// Listening address and calculation options for the REST front-end.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind_address: IpAddr,
    /// REST listening port (0 lets the OS pick one).
    pub rest_port: u16,
    /// Options applied to every calculation.
    pub options: Options,
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.rest_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            rest_port: DEFAULT_REST_PORT,
            options: Options::default(),
        }
    }
}
