// Allow unusual byte groupings for UUIDs which have standard format
#![allow(clippy::unusual_byte_groupings)]

//! # blescout
//!
//! A cross-platform Rust library for observing Bluetooth Low Energy
//! advertisements and rendering their contents as structured, human-readable
//! diagnostic output.
//!
//! The core is a pure, synchronous decoding pipeline: it takes the raw
//! binary fields of an advertisement (manufacturer-specific data, service
//! UUIDs, signal strength) and turns them into typed, vendor-aware facts.
//! A thin `btleplug`-based scanner supplies discovery events; everything
//! else is bytes in, text out.
//!
//! ## Features
//!
//! - **Vendor-aware decoding**: dedicated decoders for Apple (iBeacon,
//!   Nearby, Handoff, AirPods), Microsoft, Samsung, Nordic Semiconductor,
//!   and Govee payloads, with a generic fallback for everyone else
//! - **Company registry**: vendor names for common Bluetooth SIG company
//!   identifiers
//! - **Signal estimation**: coarse quality and distance buckets from RSSI
//! - **Hex dumps**: canonical hex+ASCII rendering of raw payloads
//! - **Lossless reports**: unrecognized advertisement fields are surfaced
//!   verbatim, never dropped
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blescout::{AdvertisementRecord, BleScanner, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scanner = BleScanner::new().await?;
//!     let mut events = scanner.subscribe();
//!     scanner.start_scanning().await?;
//!
//!     while let Ok(event) = events.recv().await {
//!         let record = AdvertisementRecord::from_event(&event);
//!         println!("{}", record.render());
//!     }
//!
//!     scanner.stop_scanning().await?;
//!     Ok(())
//! }
//! ```
//!
//! The decoder itself needs no radio at all:
//!
//! ```rust
//! use blescout::decode;
//!
//! let parsed = decode::parse(&[0x4C, 0x00, 0x10, 0x05]);
//! assert_eq!(parsed.company_name, Some("Apple, Inc."));
//! ```
//!
//! ## Decoding caveats
//!
//! Vendor payloads are proprietary. Outside the published iBeacon layout,
//! the decoded facts are best-effort interpretations of observed traffic
//! and are labeled as such; treat them as diagnostics, not ground truth.
//!
//! ## Platform Notes
//!
//! ### macOS
//! Requires Bluetooth permission. Add `NSBluetoothAlwaysUsageDescription`
//! to your Info.plist for bundled apps.
//!
//! ### Linux
//! Requires BlueZ. User may need to be in the `bluetooth` group.
//!
//! ### Windows
//! Requires Windows 10 or later with Bluetooth LE support.

// Public modules
pub mod ble;
pub mod decode;
pub mod error;
pub mod report;
pub mod utils;

// Re-exports for convenience
pub use ble::BleScanner;
pub use error::{Error, Result};
pub use report::{AdvertisementRecord, DiscoveryEvent, FieldValue};

// Re-export commonly used types from submodules
pub use decode::{
    company_name, estimate, hexdump, Fact, ParsedManufacturerData, SignalEstimate, SignalQuality,
    Vendor,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that key types are exported
        let _ = std::any::TypeId::of::<BleScanner>();
        let _ = std::any::TypeId::of::<Error>();
        let _ = std::any::TypeId::of::<AdvertisementRecord>();
        let _ = std::any::TypeId::of::<DiscoveryEvent>();
        let _ = std::any::TypeId::of::<ParsedManufacturerData>();
        let _ = std::any::TypeId::of::<SignalEstimate>();
    }

    #[test]
    fn test_decode_pipeline_end_to_end() {
        let parsed = decode::parse(&[0x59, 0x00, 0x01, 0x02]);
        assert_eq!(parsed.vendor, Some(Vendor::Nordic));
        assert_eq!(parsed.company_name, Some("Nordic Semiconductor ASA"));
        assert!(!parsed.facts.is_empty());
    }
}
