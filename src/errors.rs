use thiserror::Error;

pub type Result<T> = std::result::Result<T, BTCWireError>;

///! BTCWireError represents an error while encoding a message or talking to a peer
#[derive(Debug, Error)]
pub enum BTCWireError {
    #[error("Unknown network magic {0:#010x}")]
    UnknownNetwork(u32),

    #[error("Unknown network name {0:?}")]
    UnknownNetworkName(String),

    #[error("Command name is {0} bytes long, the limit is 12")]
    CommandTooLong(usize),

    #[error("Command name must be printable ASCII without NUL bytes")]
    InvalidCommand,

    #[error("Inventory request holds {0} items, the limit is 255")]
    TooManyInventoryItems(usize),

    #[error("User agent is {0} bytes long once delimited, the limit is 255")]
    UserAgentTooLong(usize),

    #[error("User agent must be printable ASCII without '/'")]
    InvalidUserAgent,

    #[error("Read buffer size must be at least one byte")]
    EmptyReadBuffer,

    #[error("Hash must be 32 bytes long, got {0}")]
    InvalidHashLength(usize),

    #[error("Malformed hex identifier")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Failed to read or write the peer stream")]
    TransportError(#[from] std::io::Error),

    #[error("Peer closed the connection")]
    ConnectionClosed,

    #[error("Invalid header size")]
    InvalidHeaderSize,

    #[error("Invalid payload size")]
    PayloadTooLarge,

    #[error("Invalid checksum")]
    InvalidChecksum,
}
