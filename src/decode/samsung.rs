//! Samsung (0x0075) manufacturer payload decoding.
//!
//! Only the leading type byte is surfaced; the rest of the format is
//! undocumented and is left to the hex dump.

use crate::decode::manufacturer::Fact;

pub(crate) fn decode(payload: &[u8]) -> Vec<Fact> {
    let mut facts = vec![Fact::note("Samsung-specific data")];
    if let Some(&data_type) = payload.first() {
        // Best-effort: meaning of the type byte is inferred, not documented.
        facts.push(Fact::field("Samsung Data Type", format!("0x{:02x}", data_type)));
    }
    facts
}
