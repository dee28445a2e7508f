//! Inventory identifiers for announceable network objects.
//!
//! An inventory item is a (type, hash) pair carried inside `inv`,
//! `getdata`, and `notfound` payloads. The type space partitions into
//! core object types, a witness high bit requesting the extended
//! encoding, and a contiguous extension block routed on the extension
//! relay path.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::protocol::commands;

/// Transaction.
pub const MSG_TX: u32 = 1;
/// Block.
pub const MSG_BLOCK: u32 = 2;
/// Block filtered down to the transactions matching a bloom filter.
pub const MSG_FILTERED_BLOCK: u32 = 3;
/// Compact block.
pub const MSG_CMPCT_BLOCK: u32 = 4;

// Extension object types, a contiguous block
/// Spork.
pub const MSG_SPORK: u32 = 24;
/// Governance object.
pub const MSG_GOVERNANCE_OBJECT: u32 = 25;
/// Governance object vote.
pub const MSG_GOVERNANCE_OBJECT_VOTE: u32 = 26;
/// Quorum final commitment.
pub const MSG_QUORUM_FINAL_COMMITMENT: u32 = 27;
/// Quorum setup contribution.
pub const MSG_QUORUM_CONTRIB: u32 = 28;
/// Quorum setup complaint.
pub const MSG_QUORUM_COMPLAINT: u32 = 29;
/// Quorum setup justification.
pub const MSG_QUORUM_JUSTIFICATION: u32 = 30;
/// Quorum premature commitment.
pub const MSG_QUORUM_PREMATURE_COMMITMENT: u32 = 31;
/// Quorum recovered threshold signature.
pub const MSG_QUORUM_RECOVERED_SIG: u32 = 32;

/// High bit requesting the witness encoding of the referenced object.
pub const MSG_WITNESS_FLAG: u32 = 1 << 30;
/// Mask isolating the base type from the flag bits.
pub const MSG_TYPE_MASK: u32 = 0xFFFF_FFFF >> 2;
/// Witness-encoded transaction.
pub const MSG_WITNESS_TX: u32 = MSG_TX | MSG_WITNESS_FLAG;
/// Witness-encoded block.
pub const MSG_WITNESS_BLOCK: u32 = MSG_BLOCK | MSG_WITNESS_FLAG;

/// Size of an inventory item on the wire.
pub const INV_ITEM_SIZE: usize = 36;

/// Error for an inventory type with no command-token mapping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown inventory type {0:#010x}")]
pub struct UnknownInvType(pub u32);

/// A (type, content-hash) pair identifying a network object.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvItem {
    /// Type code: a base type, optionally witness-flagged.
    pub item_type: u32,
    /// 256-bit content identifier.
    pub hash: [u8; 32],
}

impl InvItem {
    /// Create an inventory item.
    pub fn new(item_type: u32, hash: [u8; 32]) -> Self {
        InvItem { item_type, hash }
    }

    /// The relay command token for this item's type.
    ///
    /// A witness-flagged type prefixes the base token with `witness-`.
    /// A base type outside the mapping table is an error; callers that
    /// only need a display string use the [`fmt::Display`] fallback
    /// instead.
    pub fn command(&self) -> Result<String, UnknownInvType> {
        let mut cmd = String::new();
        if self.item_type & MSG_WITNESS_FLAG != 0 {
            cmd.push_str("witness-");
        }
        let token = match self.item_type & MSG_TYPE_MASK {
            MSG_TX => commands::TX,
            MSG_BLOCK => commands::BLOCK,
            MSG_FILTERED_BLOCK => commands::MERKLEBLOCK,
            MSG_CMPCT_BLOCK => commands::CMPCTBLOCK,
            MSG_SPORK => commands::SPORK,
            MSG_GOVERNANCE_OBJECT => commands::GOVERNANCEOBJECT,
            MSG_GOVERNANCE_OBJECT_VOTE => commands::GOVERNANCEOBJECTVOTE,
            MSG_QUORUM_FINAL_COMMITMENT => commands::QFCOMMITMENT,
            MSG_QUORUM_CONTRIB => commands::QCONTRIB,
            MSG_QUORUM_COMPLAINT => commands::QCOMPLAINT,
            MSG_QUORUM_JUSTIFICATION => commands::QJUSTIFICATION,
            MSG_QUORUM_PREMATURE_COMMITMENT => commands::QPCOMMITMENT,
            MSG_QUORUM_RECOVERED_SIG => commands::QSIGREC,
            _ => return Err(UnknownInvType(self.item_type)),
        };
        cmd.push_str(token);
        Ok(cmd)
    }

    /// Whether the base type is an extension-range object.
    ///
    /// Extension objects travel on a separate relay path from core
    /// blockchain objects.
    pub fn is_mn_type(&self) -> bool {
        let base = self.item_type & MSG_TYPE_MASK;
        (MSG_SPORK..=MSG_QUORUM_RECOVERED_SIG).contains(&base)
    }

    /// Wire encoding: little-endian type followed by the hash.
    pub fn to_bytes(&self) -> [u8; INV_ITEM_SIZE] {
        let mut bytes = [0u8; INV_ITEM_SIZE];
        bytes[..4].copy_from_slice(&self.item_type.to_le_bytes());
        bytes[4..].copy_from_slice(&self.hash);
        bytes
    }

    /// Parse an inventory item from its wire bytes.
    pub fn from_bytes(bytes: [u8; INV_ITEM_SIZE]) -> Self {
        let mut item_type = [0u8; 4];
        item_type.copy_from_slice(&bytes[..4]);
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&bytes[4..]);
        InvItem {
            item_type: u32::from_le_bytes(item_type),
            hash,
        }
    }
}

/// Compare inventory items by hash alone.
///
/// Items sharing a hash refer to the same underlying object; the type
/// selects an encoding, not an identity. Including the type in this
/// comparison would let one object occupy several slots in ordered
/// containers, so equality and ordering must ignore it.
pub fn cmp_by_hash(a: &InvItem, b: &InvItem) -> Ordering {
    a.hash.cmp(&b.hash)
}

impl PartialEq for InvItem {
    fn eq(&self, other: &Self) -> bool {
        cmp_by_hash(self, other) == Ordering::Equal
    }
}

impl Eq for InvItem {}

impl PartialOrd for InvItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_by_hash(self, other))
    }
}

impl Ord for InvItem {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_by_hash(self, other)
    }
}

// Hashes only the content hash, keeping hashed collections consistent
// with the hash-only equality above.
impl Hash for InvItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Display for InvItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command() {
            Ok(cmd) => write!(f, "{} {}", cmd, hex::encode(self.hash)),
            Err(_) => write!(f, "{:#010x} {}", self.item_type, hex::encode(self.hash)),
        }
    }
}
