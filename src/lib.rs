// #![warn(unused_crate_dependencies)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Bitcoin p2p message codec
//!
//! This crate turns the `version`, `verack` and `getdata` messages into the
//! exact bytes a peer expects, and drives that three step exchange over any
//! blocking `Read + Write` stream.

mod address;
mod checksum;
mod command;
mod config;
mod encode;
mod errors;
mod inventory;
mod message;
mod network;
mod payload;
mod session;

pub use address::{NetworkAddress, ServiceFlags, NETWORK_ADDRESS_SIZE};
pub use checksum::checksum;
pub use command::{Command, CommandName, COMMAND_NAME_SIZE};
pub use config::{SessionConfig, DEFAULT_READ_BUFFER_SIZE, DEFAULT_USER_AGENT, PROTOCOL_VERSION};
pub use encode::{decode, encode, Decodable, Encodable};
pub use errors::{BTCWireError, Result};
pub use inventory::{
    GetDataPayload, Hash256, InventoryItem, InventoryType, INVENTORY_ITEM_SIZE, MAX_INVENTORY_ITEMS,
};
pub use message::{Message, MessageHeader, HEADER_SIZE};
pub use network::Network;
pub use payload::{Payload, VersionPayload};
pub use session::{Exchange, Session};
