use byteorder::{ByteOrder, LittleEndian};
use std::io::Write;

use super::{
    checksum::{checksum, CHECKSUM_SIZE},
    command::{CommandName, COMMAND_NAME_SIZE},
    encode::{Decodable, Encodable},
    errors::{BTCWireError, Result},
    network::Network,
    payload::Payload,
};

const START_STRING_SIZE: usize = 4;
const PAYLOAD_LEN_SIZE: usize = 4;
pub const HEADER_SIZE: usize =
    START_STRING_SIZE + COMMAND_NAME_SIZE + PAYLOAD_LEN_SIZE + CHECKSUM_SIZE;

// 32 MB
const MAX_PAYLOAD_SIZE: usize = 32 * 1024 * 1024;

const HEADER_START_STRING_RANGE: std::ops::Range<usize> = 0..4;
const HEADER_COMMAND_NAME_RANGE: std::ops::Range<usize> = 4..16;
const HEADER_PAYLOAD_LEN_RANGE: std::ops::Range<usize> = 16..20;
const HEADER_CHECKSUM_RANGE: std::ops::Range<usize> = 20..24;

/// A framed message ready for the wire.
///
/// Length and checksum are computed from the payload when the frame is
/// built, so a frame can never disagree with its own payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    magic: u32,
    command: CommandName,
    checksum: u32,
    payload: Vec<u8>,
}

impl Message {
    /// Frames raw payload bytes under any command name.
    pub fn frame(magic: u32, command: &str, payload: Vec<u8>) -> Result<Self> {
        Self::with_command(magic, CommandName::new(command)?, payload)
    }

    /// Encodes a typed payload and frames it for `network`.
    pub fn new(network: Network, payload: &Payload) -> Result<Self> {
        Self::with_command(
            network.magic(),
            payload.command().into(),
            payload.to_bytes()?,
        )
    }

    /// The acknowledgement frame. Constant for a given network, but still
    /// derived through the regular encoder.
    pub fn verack(network: Network) -> Result<Self> {
        Self::new(network, &Payload::VerAck)
    }

    fn with_command(magic: u32, command: CommandName, payload: Vec<u8>) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(BTCWireError::PayloadTooLarge);
        }

        Ok(Self {
            magic,
            command,
            checksum: checksum(&payload),
            payload,
        })
    }

    pub fn magic(&self) -> u32 {
        self.magic
    }

    pub fn command(&self) -> &CommandName {
        &self.command
    }

    pub fn payload_len(&self) -> u32 {
        // bounded by MAX_PAYLOAD_SIZE
        self.payload.len() as u32
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn header(&self) -> MessageHeader {
        MessageHeader {
            magic: self.magic,
            command: self.command,
            payload_len: self.payload_len(),
            checksum: self.checksum,
        }
    }
}

impl Encodable for Message {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        // https://developer.bitcoin.org/reference/p2p_networking.html#message-headers
        self.header().encode(writer)?;

        // payload char[..] (variable length)
        Ok(writer.write_all(&self.payload)?)
    }
}

/// The fixed 24-byte header in front of every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub magic: u32,
    pub command: CommandName,
    pub payload_len: u32,
    pub checksum: u32,
}

impl MessageHeader {
    pub fn network(&self) -> Result<Network> {
        Network::from_magic(self.magic)
    }

    /// Checks that `payload` is the one this header announces.
    pub fn verify(&self, payload: &[u8]) -> Result<()> {
        if payload.len() != self.payload_len as usize || checksum(payload) != self.checksum {
            return Err(BTCWireError::InvalidChecksum);
        }

        Ok(())
    }
}

impl Encodable for MessageHeader {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        // start string char[4]
        self.magic.encode(writer)?;

        // command name char[12]
        self.command.as_bytes().encode(writer)?;

        // payload length uint32 (4 bytes)
        self.payload_len.encode(writer)?;

        // checksum char[4]
        self.checksum.encode(writer)
    }
}

impl Decodable for MessageHeader {
    /// Reads the header at the start of `bytes`; anything after it is ignored.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(BTCWireError::InvalidHeaderSize);
        }

        let mut command = [0u8; COMMAND_NAME_SIZE];
        command.copy_from_slice(&bytes[HEADER_COMMAND_NAME_RANGE]);

        let payload_len = LittleEndian::read_u32(&bytes[HEADER_PAYLOAD_LEN_RANGE]);
        if payload_len as usize > MAX_PAYLOAD_SIZE {
            return Err(BTCWireError::PayloadTooLarge);
        }

        Ok(Self {
            magic: LittleEndian::read_u32(&bytes[HEADER_START_STRING_RANGE]),
            command: CommandName::from_bytes(command),
            payload_len,
            checksum: LittleEndian::read_u32(&bytes[HEADER_CHECKSUM_RANGE]),
        })
    }
}
