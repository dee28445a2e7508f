//! Peer service capabilities and the desirability heuristic.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::context::NodeContext;

/// Capability bitset a peer advertises during handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// No capabilities.
    pub const NONE: ServiceFlags = ServiceFlags(0);
    /// Serves the full block history.
    pub const NETWORK: ServiceFlags = ServiceFlags(1 << 0);
    /// Answers UTXO-set queries.
    pub const GETUTXO: ServiceFlags = ServiceFlags(1 << 1);
    /// Accepts bloom-filtered connections.
    pub const BLOOM: ServiceFlags = ServiceFlags(1 << 2);
    /// Serves witness data.
    pub const WITNESS: ServiceFlags = ServiceFlags(1 << 3);
    /// Serves only the most recent blocks.
    pub const NETWORK_LIMITED: ServiceFlags = ServiceFlags(1 << 10);

    /// Construct from a raw bit pattern.
    pub const fn from_bits(bits: u64) -> Self {
        ServiceFlags(bits)
    }

    /// The raw bit pattern.
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Whether every bit in `other` is set here.
    pub fn contains(&self, other: ServiceFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// One human-readable token per set bit, lowest bit first.
    pub fn to_strings(&self) -> Vec<String> {
        let mut names = Vec::new();
        for bit in 0..64 {
            if self.0 & (1u64 << bit) != 0 {
                names.push(service_bit_to_string(bit));
            }
        }
        names
    }
}

impl BitOr for ServiceFlags {
    type Output = ServiceFlags;

    fn bitor(self, rhs: ServiceFlags) -> ServiceFlags {
        ServiceFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ServiceFlags {
    fn bitor_assign(&mut self, rhs: ServiceFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ServiceFlags {
    type Output = ServiceFlags;

    fn bitand(self, rhs: ServiceFlags) -> ServiceFlags {
        ServiceFlags(self.0 & rhs.0)
    }
}

fn service_bit_to_string(bit: u32) -> String {
    match ServiceFlags(1u64 << bit) {
        // A set bit can never produce the empty flag value.
        ServiceFlags::NONE => unreachable!("a set bit never maps to NONE"),
        ServiceFlags::NETWORK => "NETWORK".to_string(),
        ServiceFlags::GETUTXO => "GETUTXO".to_string(),
        ServiceFlags::BLOOM => "BLOOM".to_string(),
        ServiceFlags::WITNESS => "WITNESS".to_string(),
        ServiceFlags::NETWORK_LIMITED => "NETWORK_LIMITED".to_string(),
        _ => format!("UNKNOWN[2^{bit}]"),
    }
}

/// The capabilities worth seeking in a peer, given what it offers.
///
/// Until initial block download completes the node needs peers holding
/// the full block history. Afterwards recent blocks suffice, so a peer
/// advertising limited service is acceptable, which spreads connection
/// load across more of the network.
pub fn desirable_service_flags(context: &NodeContext, offered: ServiceFlags) -> ServiceFlags {
    if offered.contains(ServiceFlags::NETWORK_LIMITED) && context.ibd_completed() {
        return ServiceFlags::NETWORK_LIMITED | ServiceFlags::WITNESS;
    }
    ServiceFlags::NETWORK | ServiceFlags::WITNESS
}

/// Whether `services` covers everything currently sought in a peer.
pub fn has_all_desirable_service_flags(context: &NodeContext, services: ServiceFlags) -> bool {
    desirable_service_flags(context, services).bits() & !services.bits() == 0
}
