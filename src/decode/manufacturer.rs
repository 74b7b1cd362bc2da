//! Manufacturer-specific data parsing.
//!
//! Splits a raw manufacturer-data blob into its company identifier and
//! payload, then dispatches the payload to the matching vendor decoder.

use crate::decode::company::company_name;
use crate::decode::{apple, generic, govee, microsoft, nordic, samsung};

/// One human-readable fact produced by a vendor decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// A labeled value, rendered as `label: value`.
    Field {
        /// The field label.
        label: &'static str,
        /// The rendered value.
        value: String,
    },
    /// Free-text observation.
    Note(String),
}

impl Fact {
    /// Create a labeled field fact.
    pub fn field(label: &'static str, value: impl Into<String>) -> Self {
        Self::Field {
            label,
            value: value.into(),
        }
    }

    /// Create a free-text fact.
    pub fn note(text: impl Into<String>) -> Self {
        Self::Note(text.into())
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field { label, value } => write!(f, "{}: {}", label, value),
            Self::Note(text) => write!(f, "{}", text),
        }
    }
}

/// Vendors with dedicated payload decoders.
///
/// Closed set: every company identifier maps to exactly one variant, with
/// `Other` carrying anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Apple, Inc. (0x004C) — iBeacon, Nearby, Handoff, AirPods.
    Apple,
    /// Microsoft (0x0006) — cross-device / Surface scenarios.
    Microsoft,
    /// Samsung Electronics (0x0075).
    Samsung,
    /// Nordic Semiconductor (0x0059) — typically development devices.
    Nordic,
    /// Govee Life (0x8803) — smart lighting.
    Govee,
    /// Any other company; decoded generically.
    Other(u16),
}

impl Vendor {
    /// Map a company identifier to its decoder variant. Total function.
    pub fn from_company_id(company_id: u16) -> Self {
        match company_id {
            0x004C => Self::Apple,
            0x0006 => Self::Microsoft,
            0x0075 => Self::Samsung,
            0x0059 => Self::Nordic,
            0x8803 => Self::Govee,
            other => Self::Other(other),
        }
    }
}

/// Result of parsing one manufacturer-data blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedManufacturerData {
    /// Company identifier from the first two bytes; `None` when the blob is
    /// too short to carry one.
    pub company_id: Option<u16>,
    /// Vendor name resolved from the company registry.
    pub company_name: Option<&'static str>,
    /// Which decoder handled the payload.
    pub vendor: Option<Vendor>,
    /// Decoded facts, in decoder order.
    pub facts: Vec<Fact>,
}

impl ParsedManufacturerData {
    /// Whether the blob was too short to contain a company identifier.
    pub fn is_incomplete(&self) -> bool {
        self.company_id.is_none()
    }
}

/// Parse a raw manufacturer-data blob.
///
/// The company identifier occupies the first two bytes, little-endian; the
/// remainder is the vendor payload. A blob under two bytes produces an
/// incomplete result rather than an error: advertisement data from the wild
/// is untrusted and a best-effort rendering is always possible.
pub fn parse(raw: &[u8]) -> ParsedManufacturerData {
    if raw.len() < 2 {
        return ParsedManufacturerData {
            company_id: None,
            company_name: None,
            vendor: None,
            facts: vec![Fact::note(format!(
                "Incomplete manufacturer data ({} bytes, need at least 2)",
                raw.len()
            ))],
        };
    }

    let company_id = u16::from(raw[0]) | (u16::from(raw[1]) << 8);
    let payload = &raw[2..];
    let vendor = Vendor::from_company_id(company_id);

    let facts = match vendor {
        Vendor::Apple => apple::decode(payload),
        Vendor::Microsoft => microsoft::decode(payload),
        Vendor::Samsung => samsung::decode(payload),
        Vendor::Nordic => nordic::decode(payload),
        Vendor::Govee => govee::decode(payload),
        Vendor::Other(id) => generic::decode(id, payload),
    };

    ParsedManufacturerData {
        company_id: Some(company_id),
        company_name: company_name(company_id),
        vendor: Some(vendor),
        facts,
    }
}
