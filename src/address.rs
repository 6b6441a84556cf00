use byteorder::{BigEndian, WriteBytesExt};
use std::{
    io::Write,
    net::{IpAddr, SocketAddr},
    ops::BitOr,
};

use super::{encode::Encodable, errors::Result};

/// Size of a network address record inside a version payload.
pub const NETWORK_ADDRESS_SIZE: usize = 26;

/// ServiceFlags represents the service flags of a node
/// https://developer.bitcoin.org/reference/p2p_networking.html#version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// This node is not a full node. It may not be able to provide any data except for the transactions it originates.
    pub const UNNAMED: ServiceFlags = ServiceFlags(0);

    /// This is a full node and can be asked for full blocks. It should implement all protocol features available in its self-reported protocol version
    pub const NODE_NETWORK: ServiceFlags = ServiceFlags(0x1);

    /// This is a full node capable of responding to the getutxo protocol request. This is not supported by any currently-maintained Bitcoin node.
    pub const NODE_GETUTXO: ServiceFlags = ServiceFlags(0x2);

    /// This is a full node capable and willing to handle bloom-filtered connections.
    pub const NODE_BLOOM: ServiceFlags = ServiceFlags(0x4);

    /// This is a full node that can be asked for blocks and transactions including witness data.
    pub const NODE_WITNESS: ServiceFlags = ServiceFlags(0x8);

    /// This is a full node that supports Xtreme Thinblocks. This is not supported by any currently-maintained Bitcoin node.
    pub const NODE_XTHIN: ServiceFlags = ServiceFlags(0x10);

    /// This node serves BIP157 compact filters.
    pub const NODE_COMPACT_FILTERS: ServiceFlags = ServiceFlags(0x40);

    /// This is the same as NODE_NETWORK but the node has at least the last 288 blocks (last 2 days).
    pub const NODE_NETWORK_LIMITED: ServiceFlags = ServiceFlags(0x0400);

    /// Gets the integer representation of this ServiceFlags
    pub fn to_u64(self) -> u64 {
        self.0
    }

    /// Gets the ServiceFlags from an integer representation
    pub fn from_u64(n: u64) -> Self {
        ServiceFlags(n)
    }

    pub fn contains(self, other: ServiceFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl From<u64> for ServiceFlags {
    fn from(n: u64) -> Self {
        ServiceFlags(n)
    }
}

impl BitOr for ServiceFlags {
    type Output = ServiceFlags;

    fn bitor(self, rhs: ServiceFlags) -> ServiceFlags {
        ServiceFlags(self.0 | rhs.0)
    }
}

/// NetworkAddress is the `net_addr` record (without timestamp) carried twice
/// in a version payload.
/// https://developer.bitcoin.org/reference/p2p_networking.html#addr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkAddress {
    /// The services the node advertised.
    pub services: ServiceFlags,

    /// IPv6 address, IPv4 peers are stored in their IPv4-mapped form.
    pub address: [u8; 16],

    /// Port number, host order here and big endian on the wire.
    pub port: u16,
}

impl NetworkAddress {
    pub fn new(services: ServiceFlags, socket: SocketAddr) -> Self {
        let address = match socket.ip() {
            IpAddr::V4(x) => x.to_ipv6_mapped(),
            IpAddr::V6(x) => x,
        }
        .octets();

        Self {
            services,
            address,
            port: socket.port(),
        }
    }
}

impl Encodable for NetworkAddress {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.services.to_u64().encode(writer)?;
        self.address.encode(writer)?;
        // the port is the one big-endian field of the protocol
        writer.write_u16::<BigEndian>(self.port)?;
        Ok(())
    }
}
