use rand::RngCore;
use std::io::{Read, Write};

use super::{
    command::CommandName,
    config::SessionConfig,
    encode::{Decodable, Encodable},
    errors::{BTCWireError, Result},
    inventory::GetDataPayload,
    message::{Message, MessageHeader},
    payload::{Payload, VersionPayload},
};

/// One request sent and whatever the peer answered, both as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub command: CommandName,
    pub request: Vec<u8>,
    pub response: Vec<u8>,
}

/// Drives version, verack and getdata over an already connected stream.
///
/// Each step writes one frame and does one bounded read. Responses are
/// handed back untouched; opening, closing and timeouts belong to the stream.
pub struct Session<S> {
    stream: S,
    config: SessionConfig,
}

impl<S: Read + Write> Session<S> {
    pub fn new(stream: S, config: SessionConfig) -> Self {
        Self { stream, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Runs the three exchanges in order and stops at the first transport error.
    pub fn run<R: RngCore + ?Sized>(
        &mut self,
        getdata: GetDataPayload,
        rng: &mut R,
    ) -> Result<Vec<Exchange>> {
        let network = self.config.network;

        // check everything up front so a bad config or encoding error sends nothing
        self.check_read_buffer()?;
        let version_msg = Message::new(network, &VersionPayload::build(&self.config, rng)?)?;
        let verack_msg = Message::verack(network)?;
        let getdata_msg = Message::new(network, &Payload::GetData(getdata))?;

        [version_msg, verack_msg, getdata_msg]
            .iter()
            .map(|message| self.send_and_receive(message))
            .collect()
    }

    /// Writes `message` and reads a single response of at most
    /// `read_buffer_size` bytes.
    pub fn send_and_receive(&mut self, message: &Message) -> Result<Exchange> {
        self.check_read_buffer()?;
        let request = message.to_bytes()?;

        tracing::info!(
            "Sending {} ({} bytes) to {}",
            message.command(),
            request.len(),
            self.config.remote_addr
        );
        self.stream.write_all(&request)?;
        self.stream.flush()?;

        let mut buffer = vec![0u8; self.config.read_buffer_size];
        let n = self.stream.read(&mut buffer)?;
        if n == 0 {
            tracing::error!("Failed to read from socket stream");
            return Err(BTCWireError::ConnectionClosed);
        }
        buffer.truncate(n);

        tracing::info!("Received {} bytes from {}", n, self.config.remote_addr);
        match MessageHeader::from_bytes(&buffer) {
            Ok(header) => tracing::debug!(
                "Response header: command={} length={} checksum={:#010x}",
                header.command,
                header.payload_len,
                header.checksum
            ),
            Err(err) => tracing::debug!("Response header not parsed: {}", err),
        }

        Ok(Exchange {
            command: *message.command(),
            request,
            response: buffer,
        })
    }

    // a zero-sized read always returns 0 and would look like a hang-up
    fn check_read_buffer(&self) -> Result<()> {
        if self.config.read_buffer_size == 0 {
            return Err(BTCWireError::EmptyReadBuffer);
        }

        Ok(())
    }
}
