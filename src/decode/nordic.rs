//! Nordic Semiconductor (0x0059) manufacturer payload decoding.
//!
//! Nordic's company identifier in advertisements usually indicates a
//! development or test device running sample firmware.

use crate::decode::manufacturer::Fact;

pub(crate) fn decode(payload: &[u8]) -> Vec<Fact> {
    let mut facts = vec![Fact::note(
        "Nordic Semiconductor data (likely development/test device)",
    )];
    if payload.len() >= 2 {
        // Inferred layout: type byte then version byte.
        facts.push(Fact::field("Device Type", format!("0x{:02x}", payload[0])));
        facts.push(Fact::field("Version", format!("0x{:02x}", payload[1])));
    }
    facts
}
