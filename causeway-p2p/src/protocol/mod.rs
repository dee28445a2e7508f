//! P2P protocol layer.
//!
//! This module contains:
//! - The fixed wire header and its validation rules
//! - The frozen registry of recognized command tokens
//! - Inventory identifiers and their command-token mapping
//! - The framing codec splitting byte streams into raw messages

pub mod commands;
pub mod framing;
pub mod header;
pub mod inventory;

// Re-export main types
pub use framing::{MessageCodec, RawNetMessage};
pub use header::{MessageHeader, COMMAND_SIZE, HEADER_SIZE};
pub use inventory::{InvItem, UnknownInvType};
