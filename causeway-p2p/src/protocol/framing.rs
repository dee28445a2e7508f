//! Wire message framing codec.
//!
//! Messages are framed by the 24-byte header from [`header`]: magic,
//! null-padded command, little-endian payload length, and checksum.
//! Decoding validates each header against the configured network magic
//! before the payload is buffered; an invalid header is a protocol
//! error the connection layer acts on, never a panic.
//!
//! [`header`]: crate::protocol::header

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::config::{Network, MAX_PAYLOAD_SIZE};
use crate::error::{P2pError, P2pResult};
use crate::protocol::header::{MessageHeader, COMMAND_SIZE, HEADER_SIZE, MAGIC_SIZE};

/// A framed wire message: validated header plus raw payload bytes.
///
/// The payload stays opaque at this layer; dispatching it by command
/// token is the connection layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNetMessage {
    /// The message header, checksum computed over `payload`.
    pub header: MessageHeader,
    /// The undecoded payload bytes.
    pub payload: Bytes,
}

impl RawNetMessage {
    /// Frame a payload under a command token.
    pub fn new(magic: [u8; MAGIC_SIZE], command: &str, payload: Bytes) -> P2pResult<Self> {
        if command.len() > COMMAND_SIZE {
            return Err(P2pError::CommandTooLong(command.to_string()));
        }
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(P2pError::MessageTooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }
        let header = MessageHeader::for_payload(magic, command, &payload);
        Ok(RawNetMessage { header, payload })
    }

    /// The command token this message carries.
    pub fn command(&self) -> String {
        self.header.command()
    }
}

/// Codec framing wire messages over a byte stream.
#[derive(Debug)]
pub struct MessageCodec {
    magic: [u8; MAGIC_SIZE],
    /// Header of the message currently being received, once complete.
    current_header: Option<MessageHeader>,
}

impl MessageCodec {
    /// Create a codec expecting the given network magic.
    pub fn new(magic: [u8; MAGIC_SIZE]) -> Self {
        MessageCodec {
            magic,
            current_header: None,
        }
    }

    /// Create a codec for a network.
    pub fn for_network(network: Network) -> Self {
        Self::new(network.magic())
    }
}

impl Decoder for MessageCodec {
    type Item = RawNetMessage;
    type Error = P2pError;

    fn decode(&mut self, src: &mut BytesMut) -> P2pResult<Option<Self::Item>> {
        // If we don't have a header yet, try to read one
        if self.current_header.is_none() {
            if src.len() < HEADER_SIZE {
                // Not enough data for the header
                return Ok(None);
            }

            let mut header_bytes = [0u8; HEADER_SIZE];
            header_bytes.copy_from_slice(&src[..HEADER_SIZE]);
            let header = MessageHeader::from_bytes(header_bytes);

            if !header.is_valid(self.magic) {
                // Distinguish the failure for the connection layer
                let actual = header.magic();
                if actual != self.magic {
                    return Err(P2pError::InvalidMagic {
                        expected: self.magic,
                        actual,
                    });
                }
                if header.payload_length() as usize > MAX_PAYLOAD_SIZE {
                    return Err(P2pError::MessageTooLarge {
                        size: header.payload_length() as usize,
                        max: MAX_PAYLOAD_SIZE,
                    });
                }
                return Err(P2pError::InvalidHeader {
                    command: header.command(),
                });
            }

            src.advance(HEADER_SIZE);
            self.current_header = Some(header);
        }

        // current_header is always Some here
        let length = match &self.current_header {
            Some(header) => header.payload_length() as usize,
            None => return Ok(None),
        };

        // Check if we have the full payload
        if src.len() < length {
            // Reserve space for the rest to avoid reallocations
            src.reserve(length - src.len());
            return Ok(None);
        }

        let payload = src.split_to(length).freeze();
        let header = match self.current_header.take() {
            Some(header) => header,
            None => return Ok(None),
        };

        Ok(Some(RawNetMessage { header, payload }))
    }
}

impl Encoder<RawNetMessage> for MessageCodec {
    type Error = P2pError;

    fn encode(&mut self, message: RawNetMessage, dst: &mut BytesMut) -> P2pResult<()> {
        let length = message.payload.len();
        if length > MAX_PAYLOAD_SIZE {
            return Err(P2pError::MessageTooLarge {
                size: length,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        dst.reserve(HEADER_SIZE + length);
        dst.put_slice(&message.header.to_bytes());
        dst.put_slice(&message.payload);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAINNET_MAGIC;

    fn ping_message() -> RawNetMessage {
        RawNetMessage::new(
            MAINNET_MAGIC,
            "ping",
            Bytes::from_static(&[1, 2, 3, 4, 5, 6, 7, 8]),
        )
        .unwrap()
    }

    #[test]
    fn test_roundtrip_ping() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let original = ping_message();

        let mut buf = BytesMut::new();
        codec.encode(original.clone(), &mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE + 8);

        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.command(), "ping");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_roundtrip_empty_payload() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let original = RawNetMessage::new(MAINNET_MAGIC, "verack", Bytes::new()).unwrap();

        let mut buf = BytesMut::new();
        codec.encode(original.clone(), &mut buf).unwrap();

        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.payload.len(), 0);
    }

    #[test]
    fn test_partial_header() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let mut buf = BytesMut::new();
        buf.put_slice(&MAINNET_MAGIC);

        let result = codec.decode(&mut buf).unwrap();
        assert!(result.is_none());
        // Nothing consumed until a full header arrives
        assert_eq!(buf.len(), MAGIC_SIZE);
    }

    #[test]
    fn test_partial_payload_across_reads() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let original = ping_message();

        let mut encoded = BytesMut::new();
        codec.encode(original.clone(), &mut encoded).unwrap();

        // Feed the header plus half the payload first
        let mut buf = BytesMut::new();
        buf.put_slice(&encoded[..HEADER_SIZE + 4]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        // The rest completes the message
        buf.put_slice(&encoded[HEADER_SIZE + 4..]);
        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_invalid_magic() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let mut buf = BytesMut::new();

        let foreign = RawNetMessage::new([0xDE, 0xAD, 0xBE, 0xEF], "ping", Bytes::new()).unwrap();
        let mut encoder = MessageCodec::new([0xDE, 0xAD, 0xBE, 0xEF]);
        encoder.encode(foreign, &mut buf).unwrap();

        let result = codec.decode(&mut buf);
        assert!(matches!(result, Err(P2pError::InvalidMagic { .. })));
    }

    #[test]
    fn test_oversized_payload_length() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let mut buf = BytesMut::new();

        let header =
            MessageHeader::with_command(MAINNET_MAGIC, "block", MAX_PAYLOAD_SIZE as u32 + 1);
        buf.put_slice(&header.to_bytes());

        let result = codec.decode(&mut buf);
        assert!(matches!(result, Err(P2pError::MessageTooLarge { .. })));
    }

    #[test]
    fn test_malformed_command_field() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let mut buf = BytesMut::new();

        let mut header_bytes = MessageHeader::with_command(MAINNET_MAGIC, "ping", 0).to_bytes();
        // Corrupt the command field with a byte after the null padding
        header_bytes[10] = b'x';
        buf.put_slice(&header_bytes);

        let result = codec.decode(&mut buf);
        assert!(matches!(result, Err(P2pError::InvalidHeader { .. })));
    }

    #[test]
    fn test_multiple_messages() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let mut buf = BytesMut::new();

        let first = ping_message();
        let second = RawNetMessage::new(
            MAINNET_MAGIC,
            "pong",
            Bytes::from_static(&[8, 7, 6, 5, 4, 3, 2, 1]),
        )
        .unwrap();

        codec.encode(first.clone(), &mut buf).unwrap();
        codec.encode(second.clone(), &mut buf).unwrap();

        assert_eq!(codec.decode(&mut buf).unwrap().unwrap(), first);
        assert_eq!(codec.decode(&mut buf).unwrap().unwrap(), second);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_new_rejects_overlong_command() {
        let result = RawNetMessage::new(MAINNET_MAGIC, "thirteenchars", Bytes::new());
        assert!(matches!(result, Err(P2pError::CommandTooLong(_))));
    }

    #[test]
    fn test_checksum_written_to_wire() {
        let mut codec = MessageCodec::new(MAINNET_MAGIC);
        let payload = Bytes::from_static(b"checksummed payload");
        let message = RawNetMessage::new(MAINNET_MAGIC, "tx", payload.clone()).unwrap();

        let mut buf = BytesMut::new();
        codec.encode(message, &mut buf).unwrap();

        assert_eq!(
            &buf[20..24],
            &causeway_core::payload_checksum(&payload)
        );
    }
}
