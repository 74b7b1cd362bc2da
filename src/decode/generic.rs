//! Fallback decoding for companies without a dedicated decoder.
//!
//! Surfaces the raw payload plus two cheap pattern checks: an iBeacon-like
//! length window and a lossy printable-ASCII candidate string.

use crate::decode::manufacturer::Fact;
use crate::utils::{hex_string, is_printable_ascii};

pub(crate) fn decode(company_id: u16, payload: &[u8]) -> Vec<Fact> {
    let mut facts = vec![Fact::field("Company ID", format!("0x{:04x}", company_id))];

    if payload.is_empty() {
        return facts;
    }

    facts.push(Fact::field(
        "Payload",
        format!("({} bytes) {}", payload.len(), hex_string(payload)),
    ));

    if (16..=25).contains(&payload.len()) {
        facts.push(Fact::note("Possible iBeacon-like format detected"));
    }

    // Lossy heuristic: keep only the printable bytes, and only report the
    // result when they make up more than half the payload.
    let printable: Vec<u8> = payload
        .iter()
        .copied()
        .filter(|&b| is_printable_ascii(b))
        .collect();
    if printable.len() > payload.len() / 2 {
        if let Ok(text) = String::from_utf8(printable) {
            if !text.is_empty() {
                facts.push(Fact::field("Possible text content", format!("\"{}\"", text)));
            }
        }
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_candidate() {
        let facts = decode(0x1234, b"Hello");
        assert!(facts.contains(&Fact::field("Company ID", "0x1234")));
        assert!(facts.contains(&Fact::field("Payload", "(5 bytes) 48 65 6c 6c 6f")));
        assert!(facts.contains(&Fact::field("Possible text content", "\"Hello\"")));
    }

    #[test]
    fn test_non_printable_bytes_dropped_from_candidate() {
        // 4 printable of 6 bytes: candidate emitted without the other two.
        let facts = decode(0x0042, &[b'T', 0x00, b'e', b's', b't', 0xFF]);
        assert!(facts.contains(&Fact::field("Possible text content", "\"Test\"")));
    }

    #[test]
    fn test_mostly_binary_payload_has_no_candidate() {
        let facts = decode(0x0042, &[0x00, 0x01, 0x02, b'A']);
        assert!(!facts.iter().any(|f| matches!(
            f,
            Fact::Field { label: "Possible text content", .. }
        )));
    }

    #[test]
    fn test_ibeacon_like_window() {
        let facts = decode(0x9999, &[0u8; 16]);
        assert!(facts.contains(&Fact::note("Possible iBeacon-like format detected")));

        let facts = decode(0x9999, &[0u8; 26]);
        assert!(!facts.contains(&Fact::note("Possible iBeacon-like format detected")));
    }

    #[test]
    fn test_empty_payload() {
        let facts = decode(0xABCD, &[]);
        assert_eq!(facts, vec![Fact::field("Company ID", "0xabcd")]);
    }
}
