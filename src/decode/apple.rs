//! Apple (0x004C) manufacturer payload decoding.
//!
//! The first payload byte is a sub-type tag. The iBeacon layout (tag 0x02)
//! is well documented; the continuity tags (Nearby, Handoff, AirPods) are
//! surfaced as markers without deeper parsing.

use crate::decode::manufacturer::Fact;

/// Bytes an iBeacon frame needs: tag + length + 16-byte UUID + major +
/// minor + TX power.
const IBEACON_LEN: usize = 23;

pub(crate) fn decode(payload: &[u8]) -> Vec<Fact> {
    let mut facts = Vec::new();

    let Some(&tag) = payload.first() else {
        facts.push(Fact::note("Incomplete Apple data (empty payload)"));
        return facts;
    };
    facts.push(Fact::field("Apple Data Type", format!("0x{:02x}", tag)));

    match tag {
        0x02 => decode_ibeacon(payload, &mut facts),
        0x10 => facts.push(Fact::note("Apple Nearby/AirDrop data")),
        0x12 => facts.push(Fact::note("Apple Handoff/Continuity data")),
        0x07 => {
            facts.push(Fact::note("Apple AirPods data"));
            if let Some(&subtype) = payload.get(1) {
                facts.push(Fact::field("AirPods Subtype", format!("0x{:02x}", subtype)));
            }
        }
        _ => facts.push(Fact::note(format!("Unknown Apple data type 0x{:02x}", tag))),
    }

    facts
}

/// iBeacon layout: byte 0 tag, byte 1 frame length (not validated), bytes
/// 2..18 proximity UUID, bytes 18..20 big-endian major, bytes 20..22
/// big-endian minor, byte 22 signed calibrated TX power.
fn decode_ibeacon(payload: &[u8], facts: &mut Vec<Fact>) {
    if payload.len() < IBEACON_LEN {
        facts.push(Fact::note(format!(
            "Incomplete iBeacon data ({} bytes, need {})",
            payload.len(),
            IBEACON_LEN
        )));
        return;
    }

    let uuid: String = payload[2..18].iter().map(|b| format!("{:02x}", b)).collect();
    let major = u16::from_be_bytes([payload[18], payload[19]]);
    let minor = u16::from_be_bytes([payload[20], payload[21]]);
    let tx_power = payload[22] as i8;

    facts.push(Fact::field("iBeacon UUID", uuid));
    facts.push(Fact::field("iBeacon Major", major.to_string()));
    facts.push(Fact::field("iBeacon Minor", minor.to_string()));
    facts.push(Fact::field("iBeacon TX Power", format!("{} dBm", tx_power)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ibeacon_decode() {
        // UUID 00..0f, major 1, minor 2, TX power -10 (0xF6).
        let mut payload = vec![0x02, 0x15];
        payload.extend(0x00u8..0x10);
        payload.extend([0x00, 0x01, 0x00, 0x02, 0xF6]);
        assert_eq!(payload.len(), 23);

        let facts = decode(&payload);
        assert!(facts.contains(&Fact::field(
            "iBeacon UUID",
            "000102030405060708090a0b0c0d0e0f"
        )));
        assert!(facts.contains(&Fact::field("iBeacon Major", "1")));
        assert!(facts.contains(&Fact::field("iBeacon Minor", "2")));
        assert!(facts.contains(&Fact::field("iBeacon TX Power", "-10 dBm")));
    }

    #[test]
    fn test_ibeacon_too_short() {
        let facts = decode(&[0x02, 0x15, 0xAA]);
        assert!(facts
            .iter()
            .any(|f| f.to_string() == "Incomplete iBeacon data (3 bytes, need 23)"));
    }

    #[test]
    fn test_continuity_markers() {
        assert!(decode(&[0x10]).contains(&Fact::note("Apple Nearby/AirDrop data")));
        assert!(decode(&[0x12]).contains(&Fact::note("Apple Handoff/Continuity data")));
    }

    #[test]
    fn test_airpods_subtype() {
        let facts = decode(&[0x07, 0x19]);
        assert!(facts.contains(&Fact::note("Apple AirPods data")));
        assert!(facts.contains(&Fact::field("AirPods Subtype", "0x19")));

        // No second byte: marker only.
        let facts = decode(&[0x07]);
        assert!(facts.contains(&Fact::note("Apple AirPods data")));
        assert!(!facts.iter().any(|f| matches!(
            f,
            Fact::Field { label: "AirPods Subtype", .. }
        )));
    }

    #[test]
    fn test_unknown_tag() {
        let facts = decode(&[0x42]);
        assert!(facts.contains(&Fact::note("Unknown Apple data type 0x42")));
    }

    #[test]
    fn test_empty_payload() {
        let facts = decode(&[]);
        assert_eq!(facts, vec![Fact::note("Incomplete Apple data (empty payload)")]);
    }
}
