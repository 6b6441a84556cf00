use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::{address::ServiceFlags, network::Network};

/// Protocol version announced in the version message. Below 70001, so no
/// relay flag is expected after the start height.
pub const PROTOCOL_VERSION: i32 = 60002;

pub const DEFAULT_USER_AGENT: &str = "Satoshi:0.7.2";

pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// Everything a session needs to fill in its messages. Each option only
/// affects its own field; the defaults are the usual mainnet values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub network: Network,
    pub protocol_version: i32,
    pub services: ServiceFlags,
    /// What we believe the peer serves; only goes into its address record.
    pub remote_services: ServiceFlags,
    pub local_addr: SocketAddr,
    pub remote_addr: SocketAddr,
    pub user_agent: String,
    pub start_height: i32,
    pub read_buffer_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let localhost = SocketAddr::new(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            Network::MainNet.default_port(),
        );

        Self {
            network: Network::MainNet,
            protocol_version: PROTOCOL_VERSION,
            services: ServiceFlags::NODE_NETWORK,
            remote_services: ServiceFlags::NODE_NETWORK,
            local_addr: localhost,
            remote_addr: localhost,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            start_height: 0,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl SessionConfig {
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn with_protocol_version(mut self, protocol_version: i32) -> Self {
        self.protocol_version = protocol_version;
        self
    }

    pub fn with_services(mut self, services: ServiceFlags) -> Self {
        self.services = services;
        self
    }

    pub fn with_remote_services(mut self, remote_services: ServiceFlags) -> Self {
        self.remote_services = remote_services;
        self
    }

    pub fn with_local_addr(mut self, local_addr: SocketAddr) -> Self {
        self.local_addr = local_addr;
        self
    }

    pub fn with_remote_addr(mut self, remote_addr: SocketAddr) -> Self {
        self.remote_addr = remote_addr;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_start_height(mut self, start_height: i32) -> Self {
        self.start_height = start_height;
        self
    }

    pub fn with_read_buffer_size(mut self, read_buffer_size: usize) -> Self {
        self.read_buffer_size = read_buffer_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();

        assert_eq!(config.network.magic(), 0xd9b4bef9);
        assert_eq!(config.protocol_version, 60002);
        assert_eq!(config.services, ServiceFlags::NODE_NETWORK);
        assert_eq!(config.remote_services, ServiceFlags::NODE_NETWORK);
        assert_eq!(config.local_addr.port(), 8333);
        assert_eq!(config.user_agent, "Satoshi:0.7.2");
        assert_eq!(config.read_buffer_size, 1024);
    }

    #[test]
    fn test_setters_touch_one_field() {
        let peer: SocketAddr = "82.64.194.26:8333".parse().unwrap();
        let config = SessionConfig::default().with_remote_addr(peer);

        assert_eq!(config.remote_addr, peer);
        assert_eq!(
            config,
            SessionConfig {
                remote_addr: peer,
                ..SessionConfig::default()
            }
        );

        let config = SessionConfig::default()
            .with_network(Network::TestNet)
            .with_start_height(42)
            .with_read_buffer_size(16);
        assert_eq!(config.network, Network::TestNet);
        assert_eq!(config.start_height, 42);
        assert_eq!(config.read_buffer_size, 16);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);

        let config = SessionConfig::default().with_services(ServiceFlags::NODE_WITNESS);
        assert_eq!(config.remote_services, ServiceFlags::NODE_NETWORK);
    }
}
