//! Advertisement decoding core.
//!
//! Pure, synchronous functions over raw advertisement bytes: company
//! identifier lookup, vendor-aware manufacturer-data decoding, signal
//! estimation, and hex dump rendering. Nothing here does I/O or holds
//! state across calls, so callers may decode distinct events concurrently
//! without synchronization.

pub mod company;
pub mod hexdump;
pub mod manufacturer;
pub mod signal;

mod apple;
mod generic;
mod govee;
mod microsoft;
mod nordic;
mod samsung;

pub use company::company_name;
pub use hexdump::hexdump;
pub use manufacturer::{parse, Fact, ParsedManufacturerData, Vendor};
pub use signal::{estimate, DistanceBucket, SignalEstimate, SignalQuality};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_never_panics(raw in proptest::collection::vec(any::<u8>(), 0..64)) {
            let parsed = parse(&raw);
            prop_assert_eq!(parsed.is_incomplete(), raw.len() < 2);
            prop_assert!(!parsed.facts.is_empty());
        }

        #[test]
        fn hexdump_is_idempotent(data in proptest::collection::vec(any::<u8>(), 0..128)) {
            let first = hexdump(&data);
            prop_assert_eq!(&first, &hexdump(&data));
            prop_assert_eq!(first.lines().count(), (data.len() + 15) / 16);
        }

        #[test]
        fn estimate_total(rssi in -500i32..500) {
            // Just must not panic and must stay self-consistent.
            prop_assert_eq!(estimate(rssi), estimate(rssi));
        }
    }
}
