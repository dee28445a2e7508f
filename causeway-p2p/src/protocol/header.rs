//! The fixed wire header prefixed to every message.
//!
//! Layout, 24 bytes total:
//! - 4 bytes: network magic
//! - 12 bytes: command token, printable ASCII, null-padded
//! - 4 bytes: little-endian payload length
//! - 4 bytes: payload checksum
//!
//! The checksum is carried opaquely here; computing it for outgoing
//! payloads uses the double-SHA256 prefix, verifying it on receipt is
//! the connection layer's concern.

use causeway_core::payload_checksum;

use crate::config::MAX_PAYLOAD_SIZE;

/// Size of the magic field in bytes.
pub const MAGIC_SIZE: usize = 4;

/// Size of the command field in bytes.
pub const COMMAND_SIZE: usize = 12;

/// Size of the checksum field in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Total header size in bytes.
pub const HEADER_SIZE: usize = MAGIC_SIZE + COMMAND_SIZE + 4 + CHECKSUM_SIZE;

/// A wire message header.
///
/// Constructed per received or outgoing message, validated once with
/// [`MessageHeader::is_valid`], then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    magic: [u8; MAGIC_SIZE],
    command: [u8; COMMAND_SIZE],
    payload_length: u32,
    checksum: [u8; CHECKSUM_SIZE],
}

impl MessageHeader {
    /// Header with only the magic filled in. The payload length starts
    /// at the u32 maximum, so the header never validates until a real
    /// length replaces it.
    pub fn new(magic: [u8; MAGIC_SIZE]) -> Self {
        MessageHeader {
            magic,
            command: [0; COMMAND_SIZE],
            payload_length: u32::MAX,
            checksum: [0; CHECKSUM_SIZE],
        }
    }

    /// Header for a command and payload length, checksum left zeroed.
    ///
    /// # Panics
    ///
    /// Panics if `command` is longer than [`COMMAND_SIZE`] bytes.
    pub fn with_command(magic: [u8; MAGIC_SIZE], command: &str, payload_length: u32) -> Self {
        assert!(
            command.len() <= COMMAND_SIZE,
            "command too long: {command:?}"
        );
        let mut padded = [0u8; COMMAND_SIZE];
        padded[..command.len()].copy_from_slice(command.as_bytes());
        MessageHeader {
            magic,
            command: padded,
            payload_length,
            checksum: [0; CHECKSUM_SIZE],
        }
    }

    /// Header for an outgoing payload, with its checksum computed.
    pub fn for_payload(magic: [u8; MAGIC_SIZE], command: &str, payload: &[u8]) -> Self {
        let mut header = Self::with_command(magic, command, payload.len() as u32);
        header.checksum = payload_checksum(payload);
        header
    }

    /// Parse a header from its wire bytes. Validation is separate.
    pub fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        let mut magic = [0u8; MAGIC_SIZE];
        magic.copy_from_slice(&bytes[0..4]);
        let mut command = [0u8; COMMAND_SIZE];
        command.copy_from_slice(&bytes[4..16]);
        let mut length = [0u8; 4];
        length.copy_from_slice(&bytes[16..20]);
        let mut checksum = [0u8; CHECKSUM_SIZE];
        checksum.copy_from_slice(&bytes[20..24]);
        MessageHeader {
            magic,
            command,
            payload_length: u32::from_le_bytes(length),
            checksum,
        }
    }

    /// Serialize the header to its wire bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..16].copy_from_slice(&self.command);
        bytes[16..20].copy_from_slice(&self.payload_length.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.checksum);
        bytes
    }

    /// The command token, truncated at the first null byte.
    pub fn command(&self) -> String {
        let end = self
            .command
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(COMMAND_SIZE);
        String::from_utf8_lossy(&self.command[..end]).into_owned()
    }

    /// The network magic this header carries.
    pub fn magic(&self) -> [u8; MAGIC_SIZE] {
        self.magic
    }

    /// The declared payload length in bytes.
    pub fn payload_length(&self) -> u32 {
        self.payload_length
    }

    /// The payload checksum as carried on the wire.
    pub fn checksum(&self) -> [u8; CHECKSUM_SIZE] {
        self.checksum
    }

    /// Validate the header against the expected network magic.
    ///
    /// Returns false on a magic mismatch, on a command field with a
    /// non-null byte after its first null or any byte outside printable
    /// ASCII, and on a payload length above [`MAX_PAYLOAD_SIZE`] (also
    /// logged for diagnostics). Failure is a boolean signal for the
    /// connection layer; nothing here panics.
    pub fn is_valid(&self, expected_magic: [u8; MAGIC_SIZE]) -> bool {
        if self.magic != expected_magic {
            return false;
        }

        let mut rest_must_be_null = false;
        for &byte in &self.command {
            if rest_must_be_null {
                if byte != 0 {
                    return false;
                }
            } else if byte == 0 {
                rest_must_be_null = true;
            } else if !(0x20..=0x7E).contains(&byte) {
                return false;
            }
        }

        if self.payload_length as usize > MAX_PAYLOAD_SIZE {
            tracing::warn!(
                command = %self.command(),
                size = self.payload_length,
                "Rejecting header with oversized payload length"
            );
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAINNET_MAGIC;

    /// Build a header with a raw command field, bypassing the padded
    /// constructor.
    fn header_with_raw_command(command: [u8; COMMAND_SIZE]) -> MessageHeader {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&MAINNET_MAGIC);
        bytes[4..16].copy_from_slice(&command);
        bytes[16..20].copy_from_slice(&8u32.to_le_bytes());
        MessageHeader::from_bytes(bytes)
    }

    #[test]
    fn test_valid_ping_header() {
        let header = MessageHeader::with_command(MAINNET_MAGIC, "ping", 8);

        assert!(header.is_valid(MAINNET_MAGIC));
        assert_eq!(header.command(), "ping");
        assert_eq!(header.payload_length(), 8);
    }

    #[test]
    fn test_magic_mismatch_rejected() {
        let header = MessageHeader::with_command(MAINNET_MAGIC, "ping", 8);
        assert!(!header.is_valid([0x0B, 0x11, 0x09, 0x07]));
    }

    #[test]
    fn test_magic_only_header_is_invalid_until_filled() {
        let header = MessageHeader::new(MAINNET_MAGIC);
        assert_eq!(header.command(), "");
        assert_eq!(header.payload_length(), u32::MAX);
        assert!(!header.is_valid(MAINNET_MAGIC));
    }

    #[test]
    fn test_full_width_command_is_valid() {
        let header = MessageHeader::with_command(MAINNET_MAGIC, "filterclear1", 0);
        assert!(header.is_valid(MAINNET_MAGIC));
        assert_eq!(header.command(), "filterclear1");
    }

    #[test]
    fn test_non_null_after_null_rejected() {
        let mut command = [0u8; COMMAND_SIZE];
        command[..4].copy_from_slice(b"ping");
        command[5] = b'x';

        let header = header_with_raw_command(command);
        assert!(!header.is_valid(MAINNET_MAGIC));
    }

    #[test]
    fn test_non_printable_command_rejected() {
        let mut command = [0u8; COMMAND_SIZE];
        command[..4].copy_from_slice(b"pi\x1Fg");
        assert!(!header_with_raw_command(command).is_valid(MAINNET_MAGIC));

        let mut command = [0u8; COMMAND_SIZE];
        command[..4].copy_from_slice(b"pi\x80g");
        assert!(!header_with_raw_command(command).is_valid(MAINNET_MAGIC));
    }

    #[test]
    fn test_payload_length_bound() {
        let at_max = MessageHeader::with_command(MAINNET_MAGIC, "tx", MAX_PAYLOAD_SIZE as u32);
        assert!(at_max.is_valid(MAINNET_MAGIC));

        let over = MessageHeader::with_command(MAINNET_MAGIC, "tx", MAX_PAYLOAD_SIZE as u32 + 1);
        assert!(!over.is_valid(MAINNET_MAGIC));
    }

    #[test]
    #[should_panic(expected = "command too long")]
    fn test_overlong_command_panics() {
        MessageHeader::with_command(MAINNET_MAGIC, "thirteenchars", 0);
    }

    #[test]
    fn test_wire_roundtrip() {
        let header = MessageHeader::for_payload(MAINNET_MAGIC, "ping", &[1, 2, 3, 4]);
        let bytes = header.to_bytes();

        assert_eq!(&bytes[0..4], &MAINNET_MAGIC);
        assert_eq!(&bytes[4..8], b"ping");
        assert_eq!(&bytes[8..16], &[0u8; 8]);
        assert_eq!(&bytes[16..20], &4u32.to_le_bytes());

        let parsed = MessageHeader::from_bytes(bytes);
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_for_payload_computes_checksum() {
        let payload = b"payload under test";
        let header = MessageHeader::for_payload(MAINNET_MAGIC, "tx", payload);

        assert_eq!(header.checksum(), payload_checksum(payload));
        assert_eq!(header.payload_length(), payload.len() as u32);
    }
}
