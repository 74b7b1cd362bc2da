//! Microsoft (0x0006) manufacturer payload decoding.

use crate::decode::manufacturer::Fact;

pub(crate) fn decode(payload: &[u8]) -> Vec<Fact> {
    let mut facts = Vec::new();

    let Some(&scenario) = payload.first() else {
        facts.push(Fact::note("Incomplete Microsoft data (empty payload)"));
        return facts;
    };
    facts.push(Fact::field("Microsoft Scenario", format!("0x{:02x}", scenario)));

    match scenario {
        0x01 => facts.push(Fact::note("Microsoft CDP (Cross Device Protocol)")),
        0x03 => facts.push(Fact::note("Microsoft Surface device")),
        _ => facts.push(Fact::note(format!(
            "Unknown Microsoft scenario 0x{:02x}",
            scenario
        ))),
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_scenarios() {
        let facts = decode(&[0x01, 0xFF]);
        assert!(facts.contains(&Fact::field("Microsoft Scenario", "0x01")));
        assert!(facts.contains(&Fact::note("Microsoft CDP (Cross Device Protocol)")));

        let facts = decode(&[0x03]);
        assert!(facts.contains(&Fact::note("Microsoft Surface device")));
    }

    #[test]
    fn test_unknown_scenario() {
        let facts = decode(&[0x7F]);
        assert!(facts.contains(&Fact::note("Unknown Microsoft scenario 0x7f")));
    }

    #[test]
    fn test_empty_payload() {
        let facts = decode(&[]);
        assert_eq!(facts, vec![Fact::note("Incomplete Microsoft data (empty payload)")]);
    }
}
