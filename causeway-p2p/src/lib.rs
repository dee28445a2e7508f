//! P2P wire layer for the Causeway protocol.
//!
//! This crate provides the message-level plumbing every connection
//! shares:
//!
//! - Fixed-header framing with byte-exact validation
//! - The frozen registry of recognized command tokens
//! - Inventory identifiers with command mapping and extension routing
//! - Service-capability flags and the peer desirability heuristic
//!
//! # Architecture
//!
//! A received byte stream is split into header plus payload by
//! [`MessageCodec`]; each header is validated against the configured
//! network magic before its payload is surfaced. Inventory items travel
//! inside payloads and map to command tokens for relay. Service flags
//! are exchanged during handshake and filtered through
//! [`desirable_service_flags`], which consults the shared
//! [`NodeContext`]. Socket I/O, dispatch, and disconnect policy belong
//! to the connection layer built on top.

pub mod config;
pub mod context;
pub mod error;
pub mod protocol;
pub mod services;

// Re-export main types
pub use config::{Network, MAINNET_MAGIC, MAX_PAYLOAD_SIZE, REGTEST_MAGIC, TESTNET_MAGIC};
pub use context::NodeContext;
pub use error::{P2pError, P2pResult};
pub use protocol::{InvItem, MessageCodec, MessageHeader, RawNetMessage, UnknownInvType};
pub use services::{desirable_service_flags, has_all_desirable_service_flags, ServiceFlags};
