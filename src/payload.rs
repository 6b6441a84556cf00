use rand::RngCore;
use std::{io::Write, time::SystemTime};

use super::{
    address::{NetworkAddress, ServiceFlags},
    command::Command,
    config::SessionConfig,
    encode::Encodable,
    errors::{BTCWireError, Result},
    inventory::GetDataPayload,
};

/// Payload represents the payload of a message
/// The inner type encapsulates all the different payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Version(VersionPayload),
    VerAck,
    GetData(GetDataPayload),
}

impl Payload {
    /// The command this payload travels under
    pub fn command(&self) -> Command {
        match self {
            Payload::Version(_) => Command::Version,
            Payload::VerAck => Command::VerAck,
            Payload::GetData(_) => Command::GetData,
        }
    }
}

impl Encodable for Payload {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Payload::Version(version_payload) => version_payload.encode(writer),
            // verack carries nothing
            Payload::VerAck => Ok(()),
            Payload::GetData(getdata_payload) => getdata_payload.encode(writer),
        }
    }
}

/// VersionPayload represents the payload of a version message
/// https://developer.bitcoin.org/reference/p2p_networking.html#version
///
/// The relay flag of protocol 70001 is not sent; peers treat a missing flag as true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPayload {
    /// The highest protocol version understood by the transmitting node.
    pub version: i32,

    /// The services supported by the transmitting node encoded as a bitfield.
    pub services: ServiceFlags,

    /// The current Unix epoch time according to the transmitting node’s clock.
    pub timestamp: i64,

    /// The receiving node as perceived by the transmitting node.
    pub addr_recv: NetworkAddress,

    /// Added in protocol version 106. The transmitting node.
    pub addr_from: NetworkAddress,

    /// Added in protocol version 106. A random nonce which can help a node detect a connection to itself.
    pub nonce: u64,

    /// Added in protocol version 106. Inner user agent text, the `/` delimiters are added on encode.
    pub user_agent: String,

    /// Added in protocol version 209. The height of the transmitting node’s best block chain.
    pub start_height: i32,
}

impl VersionPayload {
    /// Builds the version payload from the session configuration, drawing
    /// the nonce from `rng` and the timestamp from the system clock.
    pub fn build<R: RngCore + ?Sized>(config: &SessionConfig, rng: &mut R) -> Result<Payload> {
        Self::build_at(config, rng, unix_timestamp(SystemTime::now()))
    }

    pub fn build_at<R: RngCore + ?Sized>(
        config: &SessionConfig,
        rng: &mut R,
        timestamp: i64,
    ) -> Result<Payload> {
        let version_payload = VersionPayload {
            version: config.protocol_version,
            services: config.services,
            timestamp,
            addr_recv: NetworkAddress::new(config.remote_services, config.remote_addr),
            addr_from: NetworkAddress::new(config.services, config.local_addr),
            nonce: rng.next_u64(),
            user_agent: config.user_agent.clone(),
            start_height: config.start_height,
        };

        // fail on construction instead of on first send
        version_payload.user_agent_bytes()?;

        Ok(Payload::Version(version_payload))
    }

    /// The user agent as it goes on the wire: `/text/`, without the length byte.
    pub fn user_agent_bytes(&self) -> Result<Vec<u8>> {
        // the delimiter may only appear around the text
        if !self
            .user_agent
            .bytes()
            .all(|b| (b.is_ascii_graphic() || b == b' ') && b != b'/')
        {
            return Err(BTCWireError::InvalidUserAgent);
        }

        let delimited = format!("/{}/", self.user_agent).into_bytes();
        if delimited.len() > u8::MAX as usize {
            return Err(BTCWireError::UserAgentTooLong(delimited.len()));
        }

        Ok(delimited)
    }
}

/// Seconds since the unix epoch. A clock set before 1970 gives a negative
/// value rather than a made up one.
fn unix_timestamp(now: SystemTime) -> i64 {
    match now.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(err) => {
            tracing::warn!("System clock is {:?} before the unix epoch", err.duration());
            -(err.duration().as_secs() as i64)
        }
    }
}

impl Encodable for VersionPayload {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        let user_agent = self.user_agent_bytes()?;

        self.version.encode(writer)?;
        self.services.to_u64().encode(writer)?;
        self.timestamp.encode(writer)?;
        self.addr_recv.encode(writer)?;
        self.addr_from.encode(writer)?;
        self.nonce.encode(writer)?;
        (user_agent.len() as u8).encode(writer)?;
        writer.write_all(&user_agent)?;
        self.start_height.encode(writer)
    }
}
