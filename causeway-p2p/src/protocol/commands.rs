//! Command tokens for every recognized wire message.
//!
//! The registry is frozen and order-preserving: handshake and relay
//! filtering accept exactly the tokens listed here, and every type code
//! the inventory layer maps resolves to one of these strings. Adding an
//! extension message means adding its token to this list and, if the
//! message travels by inventory announcement, a matching type code in
//! the inventory table.

// Core protocol messages
pub const VERSION: &str = "version";
pub const VERACK: &str = "verack";
pub const ADDR: &str = "addr";
pub const INV: &str = "inv";
pub const GETDATA: &str = "getdata";
pub const MERKLEBLOCK: &str = "merkleblock";
pub const GETBLOCKS: &str = "getblocks";
pub const GETHEADERS: &str = "getheaders";
pub const TX: &str = "tx";
pub const HEADERS: &str = "headers";
pub const BLOCK: &str = "block";
pub const GETADDR: &str = "getaddr";
pub const MEMPOOL: &str = "mempool";
pub const PING: &str = "ping";
pub const PONG: &str = "pong";
pub const NOTFOUND: &str = "notfound";
pub const FILTERLOAD: &str = "filterload";
pub const FILTERADD: &str = "filteradd";
pub const FILTERCLEAR: &str = "filterclear";
pub const SENDHEADERS: &str = "sendheaders";
pub const FEEFILTER: &str = "feefilter";
pub const SENDCMPCT: &str = "sendcmpct";
pub const CMPCTBLOCK: &str = "cmpctblock";
pub const GETBLOCKTXN: &str = "getblocktxn";
pub const BLOCKTXN: &str = "blocktxn";

// Extension messages
pub const SPORK: &str = "spork";
pub const GETSPORKS: &str = "getsporks";
pub const SYNCSTATUSCOUNT: &str = "ssc";
pub const GOVERNANCESYNC: &str = "govsync";
pub const GOVERNANCEOBJECT: &str = "govobj";
pub const GOVERNANCEOBJECTVOTE: &str = "govobjvote";
pub const GETMNLISTDIFF: &str = "getmnlistd";
pub const MNLISTDIFF: &str = "mnlistdiff";
pub const QSENDRECSIGS: &str = "qsendrecsigs";
pub const QFCOMMITMENT: &str = "qfcommit";
pub const QCONTRIB: &str = "qcontrib";
pub const QCOMPLAINT: &str = "qcomplaint";
pub const QJUSTIFICATION: &str = "qjustify";
pub const QPCOMMITMENT: &str = "qpcommit";
pub const QWATCH: &str = "qwatch";
pub const QSIGSESANN: &str = "qsigsesann";
pub const QSIGSHARESINV: &str = "qsigsinv";
pub const QGETSIGSHARES: &str = "qgetsigs";
pub const QBSIGSHARES: &str = "qbsigs";
pub const QSIGREC: &str = "qsigrec";
pub const QSIGSHARE: &str = "qsigshare";
pub const MNAUTH: &str = "mnauth";

// Compact block filter messages
pub const GETCFILTERS: &str = "getcfilters";
pub const CFILTER: &str = "cfilter";
pub const GETCFHEADERS: &str = "getcfheaders";
pub const CFHEADERS: &str = "cfheaders";
pub const GETCFCHECKPT: &str = "getcfcheckpt";
pub const CFCHECKPT: &str = "cfcheckpt";

// Keep this in the same order as the constants above.
static ALL_MESSAGE_TYPES: [&str; 53] = [
    VERSION,
    VERACK,
    ADDR,
    INV,
    GETDATA,
    MERKLEBLOCK,
    GETBLOCKS,
    GETHEADERS,
    TX,
    HEADERS,
    BLOCK,
    GETADDR,
    MEMPOOL,
    PING,
    PONG,
    NOTFOUND,
    FILTERLOAD,
    FILTERADD,
    FILTERCLEAR,
    SENDHEADERS,
    FEEFILTER,
    SENDCMPCT,
    CMPCTBLOCK,
    GETBLOCKTXN,
    BLOCKTXN,
    SPORK,
    GETSPORKS,
    SYNCSTATUSCOUNT,
    GOVERNANCESYNC,
    GOVERNANCEOBJECT,
    GOVERNANCEOBJECTVOTE,
    GETMNLISTDIFF,
    MNLISTDIFF,
    QSENDRECSIGS,
    QFCOMMITMENT,
    QCONTRIB,
    QCOMPLAINT,
    QJUSTIFICATION,
    QPCOMMITMENT,
    QWATCH,
    QSIGSESANN,
    QSIGSHARESINV,
    QGETSIGSHARES,
    QBSIGSHARES,
    QSIGREC,
    QSIGSHARE,
    MNAUTH,
    GETCFILTERS,
    CFILTER,
    GETCFHEADERS,
    CFHEADERS,
    GETCFCHECKPT,
    CFCHECKPT,
];

/// Read-only view of every recognized command token, in registry order.
pub fn all_message_types() -> &'static [&'static str] {
    &ALL_MESSAGE_TYPES
}

/// Whether `command` names a recognized message type.
pub fn is_known_command(command: &str) -> bool {
    ALL_MESSAGE_TYPES.contains(&command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::header::COMMAND_SIZE;
    use std::collections::HashSet;

    #[test]
    fn test_registry_order() {
        let types = all_message_types();
        assert_eq!(types.len(), 53);
        assert_eq!(types[0], VERSION);
        assert_eq!(types[8], TX);
        assert_eq!(types[24], BLOCKTXN);
        assert_eq!(types[25], SPORK);
        assert_eq!(types[46], MNAUTH);
        assert_eq!(types[47], GETCFILTERS);
        assert_eq!(types[52], CFCHECKPT);
    }

    #[test]
    fn test_registry_is_duplicate_free() {
        let unique: HashSet<&str> = all_message_types().iter().copied().collect();
        assert_eq!(unique.len(), all_message_types().len());
    }

    #[test]
    fn test_all_tokens_fit_header_field() {
        for command in all_message_types() {
            assert!(
                command.len() <= COMMAND_SIZE,
                "token {command:?} exceeds the command field"
            );
            assert!(
                command.bytes().all(|b| (0x20..=0x7E).contains(&b)),
                "token {command:?} contains non-printable bytes"
            );
        }
    }

    #[test]
    fn test_is_known_command() {
        assert!(is_known_command("version"));
        assert!(is_known_command("qsigrec"));
        assert!(is_known_command("cfcheckpt"));
        assert!(!is_known_command("versionx"));
        assert!(!is_known_command(""));
    }
}
