//! BLE platform glue.
//!
//! Supplies raw discovery events to the decode core and nothing more:
//! connection management, pairing, and device tracking are out of scope.

pub mod scanner;

pub use scanner::BleScanner;
