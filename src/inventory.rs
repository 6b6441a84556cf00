use std::{fmt, io::Write, str::FromStr};

use super::{
    encode::Encodable,
    errors::{BTCWireError, Result},
};

pub const HASH_SIZE: usize = 32;

/// Size of one inventory record: 4-byte type tag plus the hash.
pub const INVENTORY_ITEM_SIZE: usize = 4 + HASH_SIZE;

/// Only a single count byte is written, so 255 items at most.
pub const MAX_INVENTORY_ITEMS: usize = u8::MAX as usize;

/// InventoryType identifies what an inventory vector points at
/// https://developer.bitcoin.org/reference/p2p_networking.html#data-messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryType {
    Error,
    Tx,
    Block,
    FilteredBlock,
    CompactBlock,
    WitnessTx,
    WitnessBlock,
    FilteredWitnessBlock,
}

impl InventoryType {
    pub fn to_u32(self) -> u32 {
        match self {
            InventoryType::Error => 0,
            InventoryType::Tx => 1,
            InventoryType::Block => 2,
            InventoryType::FilteredBlock => 3,
            InventoryType::CompactBlock => 4,
            InventoryType::WitnessTx => 0x4000_0001,
            InventoryType::WitnessBlock => 0x4000_0002,
            InventoryType::FilteredWitnessBlock => 0x4000_0003,
        }
    }
}

/// A 32-byte identifier kept in wire (little-endian) order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256([u8; HASH_SIZE]);

impl Hash256 {
    /// Bytes that are already in wire order.
    pub fn from_wire_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parses an identifier as explorers and RPC print it (big endian) and
    /// reverses it into wire order.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = hex::decode(s.trim())?;
        if bytes.len() != HASH_SIZE {
            return Err(BTCWireError::InvalidHashLength(bytes.len()));
        }
        bytes.reverse();

        let mut hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(&bytes);
        Ok(Self(hash))
    }

    /// Human readable form, the inverse of [`Hash256::from_hex`].
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }

    pub fn as_wire_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

impl FromStr for Hash256 {
    type Err = BTCWireError;

    fn from_str(s: &str) -> Result<Self> {
        Hash256::from_hex(s)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// An inventory vector: what kind of object and its hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub kind: InventoryType,
    pub hash: Hash256,
}

impl InventoryItem {
    pub fn new(kind: InventoryType, hash: Hash256) -> Self {
        Self { kind, hash }
    }

    pub fn tx(hash: Hash256) -> Self {
        Self::new(InventoryType::Tx, hash)
    }

    pub fn block(hash: Hash256) -> Self {
        Self::new(InventoryType::Block, hash)
    }
}

impl Encodable for InventoryItem {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.kind.to_u32().encode(writer)?;
        self.hash.as_wire_bytes().encode(writer)
    }
}

/// GetDataPayload represents the payload of a getdata message
/// https://developer.bitcoin.org/reference/p2p_networking.html#getdata
///
/// The count is always derived from the items, never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GetDataPayload {
    items: Vec<InventoryItem>,
}

impl GetDataPayload {
    pub fn new(items: Vec<InventoryItem>) -> Result<Self> {
        if items.len() > MAX_INVENTORY_ITEMS {
            return Err(BTCWireError::TooManyInventoryItems(items.len()));
        }

        Ok(Self { items })
    }

    /// Requests every transaction id, given in their human readable form.
    pub fn transactions<S: AsRef<str>>(tx_ids: &[S]) -> Result<Self> {
        let items = tx_ids
            .iter()
            .map(|id| Hash256::from_hex(id.as_ref()).map(InventoryItem::tx))
            .collect::<Result<Vec<_>>>()?;

        Self::new(items)
    }

    pub fn count(&self) -> u8 {
        // bounded by `new`
        self.items.len() as u8
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }
}

impl Encodable for GetDataPayload {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.items.len() > MAX_INVENTORY_ITEMS {
            return Err(BTCWireError::TooManyInventoryItems(self.items.len()));
        }

        self.count().encode(writer)?;
        self.items.iter().try_for_each(|item| item.encode(writer))
    }
}
