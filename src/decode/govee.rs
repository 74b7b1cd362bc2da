//! Govee (0x8803) manufacturer payload decoding.
//!
//! Layout reverse-engineered from H6125 LED strip advertisements
//! (`ec 00 0a 02 00` after the company id). Every interpretation here is
//! best-effort: byte meanings are inferred from observed traffic, not from a
//! published protocol, and the facts say so.

use crate::decode::manufacturer::Fact;

/// Minimum payload: device type, two status bytes, mode byte, flags byte.
const MIN_LEN: usize = 5;

pub(crate) fn decode(payload: &[u8]) -> Vec<Fact> {
    let mut facts = vec![Fact::note("Govee smart device data")];

    if payload.len() < MIN_LEN {
        facts.push(Fact::note(format!(
            "Incomplete Govee data ({} bytes, need {})",
            payload.len(),
            MIN_LEN
        )));
        return facts;
    }

    facts.push(Fact::field("Device Type/Model", format!("0x{:02x}", payload[0])));
    let category = match payload[0] {
        0xec => "LED Strip Light (H6125 series)",
        _ => "Unknown Govee device type",
    };
    facts.push(Fact::field("Device Category", category.to_string()));

    // Bytes 1-2 read as a little-endian status/config word. The word
    // boundary is an assumption from a single device family.
    let status_word = u16::from(payload[1]) | (u16::from(payload[2]) << 8);
    facts.push(Fact::field("Status/Config", format!("0x{:04x}", status_word)));

    // Byte 2 on its own tracks what looks like a brightness or power level.
    if payload[2] > 0 {
        let percentage = (u32::from(payload[2]) * 100) / 255;
        facts.push(Fact::field(
            "Possible Brightness/Power",
            format!("{} ({}%)", payload[2], percentage),
        ));
    }

    facts.push(Fact::field("Mode/State", format!("0x{:02x}", payload[3])));
    let state = match payload[3] {
        0x01 => "Possibly OFF",
        0x02 => "Possibly ON/Active",
        0x03 => "Possibly in Scene/Effect mode",
        _ => "Unknown state",
    };
    facts.push(Fact::field("Status", state.to_string()));

    if payload[4] != 0 {
        facts.push(Fact::field("Additional Flags", format!("0x{:02x}", payload[4])));
    }

    facts
}
