//! P2P configuration.

/// Network magic bytes for the main network.
pub const MAINNET_MAGIC: [u8; 4] = [0xF9, 0xBE, 0xB4, 0xD9];

/// Network magic bytes for the test network.
pub const TESTNET_MAGIC: [u8; 4] = [0x0B, 0x11, 0x09, 0x07];

/// Network magic bytes for local regression testing.
pub const REGTEST_MAGIC: [u8; 4] = [0xFA, 0xBF, 0xB5, 0xDA];

/// Maximum message payload size in bytes (32 MB).
pub const MAX_PAYLOAD_SIZE: usize = 0x0200_0000;

/// Which network a node participates in.
///
/// Selects the magic bytes every wire message is prefixed with, so
/// traffic from a different network (or an unrelated protocol) is
/// rejected at the framing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// The production network.
    Mainnet,
    /// The public test network.
    Testnet,
    /// A private network for local regression testing.
    Regtest,
}

impl Network {
    /// The magic bytes identifying this network on the wire.
    pub fn magic(&self) -> [u8; 4] {
        match self {
            Network::Mainnet => MAINNET_MAGIC,
            Network::Testnet => TESTNET_MAGIC,
            Network::Regtest => REGTEST_MAGIC,
        }
    }
}
