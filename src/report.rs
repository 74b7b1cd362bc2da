//! Per-discovery advertisement records and their text rendering.
//!
//! One [`DiscoveryEvent`] in, one immutable [`AdvertisementRecord`] out,
//! one rendered text block per record. Records never outlive the event that
//! produced them; there is no cross-record aggregation or deduplication.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use uuid::Uuid;

use crate::decode::hexdump::hexdump;
use crate::decode::manufacturer::{self, ParsedManufacturerData};
use crate::decode::signal::{estimate, SignalEstimate};
use crate::utils::hex_string;

/// Advertisement field keys recognized by the record builder.
///
/// These mirror the advertisement dictionary keys a platform radio stack
/// hands over per discovery. Anything outside [`keys::RECOGNIZED`] is
/// surfaced verbatim in the record's "other" section so no information is
/// lost.
pub mod keys {
    /// Advertised local name.
    pub const LOCAL_NAME: &str = "local_name";
    /// Manufacturer-specific data blob (company id + payload).
    pub const MANUFACTURER_DATA: &str = "manufacturer_data";
    /// Advertised service UUID list.
    pub const SERVICE_UUIDS: &str = "service_uuids";
    /// Per-service-UUID data map.
    pub const SERVICE_DATA: &str = "service_data";
    /// Advertised TX power level.
    pub const TX_POWER_LEVEL: &str = "tx_power_level";
    /// Whether the peripheral accepts connections.
    pub const IS_CONNECTABLE: &str = "is_connectable";
    /// Solicited service UUID list.
    pub const SOLICITED_SERVICE_UUIDS: &str = "solicited_service_uuids";
    /// Overflow service UUID list.
    pub const OVERFLOW_SERVICE_UUIDS: &str = "overflow_service_uuids";

    /// The fixed set of keys the record builder extracts typed fields from.
    pub const RECOGNIZED: [&str; 8] = [
        LOCAL_NAME,
        MANUFACTURER_DATA,
        SERVICE_UUIDS,
        SERVICE_DATA,
        TX_POWER_LEVEL,
        IS_CONNECTABLE,
        SOLICITED_SERVICE_UUIDS,
        OVERFLOW_SERVICE_UUIDS,
    ];
}

/// Value of one advertisement field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// UTF-8 text.
    Text(String),
    /// Signed integer (TX power and similar).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// List of service UUIDs.
    Uuids(Vec<Uuid>),
    /// Per-UUID byte blobs.
    DataMap(BTreeMap<Uuid, Vec<u8>>),
    /// Anything the glue could not type; kept as display text.
    Opaque(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes(data) => write!(f, "{}", hex_string(data)),
            Self::Text(text) => write!(f, "{}", text),
            Self::Int(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Uuids(uuids) => {
                let rendered: Vec<String> = uuids.iter().map(|u| u.to_string()).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Self::DataMap(map) => {
                let rendered: Vec<String> = map
                    .iter()
                    .map(|(uuid, data)| format!("{}: {}", uuid, hex_string(data)))
                    .collect();
                write!(f, "{}", rendered.join("; "))
            }
            Self::Opaque(text) => write!(f, "{}", text),
        }
    }
}

/// One discovery event as supplied by the radio glue.
///
/// `fields` holds every advertisement key the platform reported, recognized
/// or not. Advertisement packets are sparse, so most fields are usually
/// absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryEvent {
    /// Opaque peripheral identifier.
    pub peer_id: String,
    /// Peripheral name, if the platform resolved one.
    pub name: Option<String>,
    /// Signal strength in dBm.
    pub rssi: i16,
    /// Advertisement fields keyed by name.
    pub fields: BTreeMap<String, FieldValue>,
}

/// Decoded manufacturer data together with the raw blob it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerSection {
    /// The raw blob, company id included.
    pub raw: Vec<u8>,
    /// Parse result.
    pub parsed: ParsedManufacturerData,
}

/// The per-discovery aggregate: every field of one advertisement, typed and
/// decoded. Built in full from one [`DiscoveryEvent`] and never edited
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisementRecord {
    /// Opaque peripheral identifier.
    pub peer_id: String,
    /// Resolved display name, "Unknown" when nothing was advertised.
    pub display_name: String,
    /// Signal strength in dBm.
    pub rssi: i16,
    /// Quality and distance estimate for the RSSI.
    pub signal: SignalEstimate,
    /// Advertised local name, when present as a field.
    pub local_name: Option<String>,
    /// Manufacturer data decode, when the field was present.
    pub manufacturer: Option<ManufacturerSection>,
    /// Advertised service UUIDs.
    pub service_uuids: Vec<Uuid>,
    /// Per-UUID service data.
    pub service_data: BTreeMap<Uuid, Vec<u8>>,
    /// Advertised TX power level in dBm.
    pub tx_power_level: Option<i64>,
    /// Whether the peripheral accepts connections.
    pub is_connectable: Option<bool>,
    /// Solicited service UUIDs.
    pub solicited_service_uuids: Vec<Uuid>,
    /// Overflow service UUIDs.
    pub overflow_service_uuids: Vec<Uuid>,
    /// Unrecognized fields, sorted by key.
    pub other: BTreeMap<String, String>,
}

impl AdvertisementRecord {
    /// Build a record from one discovery event.
    ///
    /// Recognized fields are pulled out by key and typed; everything else
    /// lands in `other` as display text, so the record always carries the
    /// whole advertisement.
    pub fn from_event(event: &DiscoveryEvent) -> Self {
        let fields = &event.fields;

        let local_name = match fields.get(keys::LOCAL_NAME) {
            Some(FieldValue::Text(name)) => Some(name.clone()),
            _ => None,
        };

        let display_name = event
            .name
            .clone()
            .or_else(|| local_name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let manufacturer = match fields.get(keys::MANUFACTURER_DATA) {
            Some(FieldValue::Bytes(raw)) => Some(ManufacturerSection {
                raw: raw.clone(),
                parsed: manufacturer::parse(raw),
            }),
            _ => None,
        };

        let service_uuids = match fields.get(keys::SERVICE_UUIDS) {
            Some(FieldValue::Uuids(uuids)) => uuids.clone(),
            _ => Vec::new(),
        };

        let service_data = match fields.get(keys::SERVICE_DATA) {
            Some(FieldValue::DataMap(map)) => map.clone(),
            _ => BTreeMap::new(),
        };

        let tx_power_level = match fields.get(keys::TX_POWER_LEVEL) {
            Some(FieldValue::Int(level)) => Some(*level),
            _ => None,
        };

        let is_connectable = match fields.get(keys::IS_CONNECTABLE) {
            Some(FieldValue::Bool(flag)) => Some(*flag),
            _ => None,
        };

        let solicited_service_uuids = match fields.get(keys::SOLICITED_SERVICE_UUIDS) {
            Some(FieldValue::Uuids(uuids)) => uuids.clone(),
            _ => Vec::new(),
        };

        let overflow_service_uuids = match fields.get(keys::OVERFLOW_SERVICE_UUIDS) {
            Some(FieldValue::Uuids(uuids)) => uuids.clone(),
            _ => Vec::new(),
        };

        // Set difference against the recognized keys; BTreeMap keeps the
        // remainder sorted for deterministic rendering.
        let other: BTreeMap<String, String> = fields
            .iter()
            .filter(|(key, _)| !keys::RECOGNIZED.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();

        Self {
            peer_id: event.peer_id.clone(),
            display_name,
            rssi: event.rssi,
            signal: estimate(i32::from(event.rssi)),
            local_name,
            manufacturer,
            service_uuids,
            service_data,
            tx_power_level,
            is_connectable,
            solicited_service_uuids,
            overflow_service_uuids,
            other,
        }
    }

    /// Render the record as a fixed-structure text block.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "--- Discovered Device ---");
        let _ = writeln!(out, "Name: {}", self.display_name);
        let _ = writeln!(out, "Identifier: {}", self.peer_id);
        let _ = writeln!(out, "RSSI: {} dBm", self.rssi);
        let _ = writeln!(
            out,
            "Signal Quality: {}, Estimated Distance: {}",
            self.signal.quality, self.signal.distance
        );

        if let Some(local_name) = &self.local_name {
            let _ = writeln!(out, "Local Name: {}", local_name);
        }

        if let Some(section) = &self.manufacturer {
            let _ = writeln!(out, "Manufacturer Data ({} bytes):", section.raw.len());
            out.push_str(&hexdump(&section.raw));
            for fact in &section.parsed.facts {
                let _ = writeln!(out, "  {}", fact);
            }
            let _ = writeln!(
                out,
                "Manufacturer: {}",
                section.parsed.company_name.unwrap_or("<Unknown>")
            );
        }

        if !self.service_uuids.is_empty() {
            let rendered: Vec<String> =
                self.service_uuids.iter().map(|u| u.to_string()).collect();
            let _ = writeln!(out, "Service UUIDs: {}", rendered.join(", "));
        }

        for (uuid, data) in &self.service_data {
            let _ = writeln!(out, "Service Data ({}): {}", uuid, hex_string(data));
        }

        if let Some(level) = self.tx_power_level {
            let _ = writeln!(out, "TX Power Level: {} dBm", level);
        }

        if let Some(connectable) = self.is_connectable {
            let _ = writeln!(
                out,
                "Is Connectable: {}",
                if connectable { "Yes" } else { "No" }
            );
        }

        if !self.solicited_service_uuids.is_empty() {
            let rendered: Vec<String> = self
                .solicited_service_uuids
                .iter()
                .map(|u| u.to_string())
                .collect();
            let _ = writeln!(out, "Solicited Service UUIDs: {}", rendered.join(", "));
        }

        if !self.overflow_service_uuids.is_empty() {
            let rendered: Vec<String> = self
                .overflow_service_uuids
                .iter()
                .map(|u| u.to_string())
                .collect();
            let _ = writeln!(out, "Overflow Service UUIDs: {}", rendered.join(", "));
        }

        if !self.other.is_empty() {
            let _ = writeln!(out, "Other Advertisement Data:");
            for (key, value) in &self.other {
                let _ = writeln!(out, "  {}: {}", key, value);
            }
        }

        let _ = writeln!(out, "------------------------");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event_with_fields(fields: BTreeMap<String, FieldValue>) -> DiscoveryEvent {
        DiscoveryEvent {
            peer_id: "AA:BB:CC:DD:EE:FF".to_string(),
            name: None,
            rssi: -55,
            fields,
        }
    }

    #[test]
    fn test_display_name_fallback() {
        let record = AdvertisementRecord::from_event(&event_with_fields(BTreeMap::new()));
        assert_eq!(record.display_name, "Unknown");

        let mut fields = BTreeMap::new();
        fields.insert(
            keys::LOCAL_NAME.to_string(),
            FieldValue::Text("Kitchen Strip".to_string()),
        );
        let record = AdvertisementRecord::from_event(&event_with_fields(fields));
        assert_eq!(record.display_name, "Kitchen Strip");
        assert_eq!(record.local_name.as_deref(), Some("Kitchen Strip"));
    }

    #[test]
    fn test_other_keys_are_the_set_difference() {
        let mut fields = BTreeMap::new();
        fields.insert(
            keys::LOCAL_NAME.to_string(),
            FieldValue::Text("A".to_string()),
        );
        fields.insert(keys::TX_POWER_LEVEL.to_string(), FieldValue::Int(4));
        fields.insert(
            "vendor_blob".to_string(),
            FieldValue::Bytes(vec![0x01, 0x02]),
        );

        let record = AdvertisementRecord::from_event(&event_with_fields(fields));
        assert_eq!(record.other.len(), 1);
        assert_eq!(record.other.get("vendor_blob").map(String::as_str), Some("01 02"));
    }

    #[test]
    fn test_record_carries_signal_estimate() {
        let record = AdvertisementRecord::from_event(&event_with_fields(BTreeMap::new()));
        assert_eq!(record.signal.quality.label(), "Good");
        assert_eq!(record.signal.distance.label(), "5-10m");
    }

    #[test]
    fn test_render_full_record() {
        let mut service_data = BTreeMap::new();
        let uuid = Uuid::from_u128(0x0000_180a_0000_1000_8000_0080_5f9b_34fb);
        service_data.insert(uuid, vec![0xDE, 0xAD]);

        let mut fields = BTreeMap::new();
        fields.insert(
            keys::MANUFACTURER_DATA.to_string(),
            FieldValue::Bytes(vec![0x06, 0x00, 0x01]),
        );
        fields.insert(
            keys::SERVICE_UUIDS.to_string(),
            FieldValue::Uuids(vec![uuid]),
        );
        fields.insert(
            keys::SERVICE_DATA.to_string(),
            FieldValue::DataMap(service_data),
        );
        fields.insert(keys::TX_POWER_LEVEL.to_string(), FieldValue::Int(12));
        fields.insert(keys::IS_CONNECTABLE.to_string(), FieldValue::Bool(true));
        fields.insert(
            "zz_unknown".to_string(),
            FieldValue::Opaque("mystery".to_string()),
        );

        let mut event = event_with_fields(fields);
        event.name = Some("Desk Mouse".to_string());
        event.rssi = -42;

        let rendered = AdvertisementRecord::from_event(&event).render();

        assert!(rendered.starts_with("--- Discovered Device ---\n"));
        assert!(rendered.ends_with("------------------------\n"));
        assert!(rendered.contains("Name: Desk Mouse\n"));
        assert!(rendered.contains("Identifier: AA:BB:CC:DD:EE:FF\n"));
        assert!(rendered.contains("RSSI: -42 dBm\n"));
        assert!(rendered.contains("Signal Quality: Very Good, Estimated Distance: 2-5m\n"));
        assert!(rendered.contains("Manufacturer Data (3 bytes):\n"));
        assert!(rendered.contains("  Microsoft Scenario: 0x01\n"));
        assert!(rendered.contains("  Microsoft CDP (Cross Device Protocol)\n"));
        assert!(rendered.contains("Manufacturer: Microsoft\n"));
        assert!(rendered.contains("Service Data (0000180a-0000-1000-8000-00805f9b34fb): de ad\n"));
        assert!(rendered.contains("TX Power Level: 12 dBm\n"));
        assert!(rendered.contains("Is Connectable: Yes\n"));
        assert!(rendered.contains("Other Advertisement Data:\n  zz_unknown: mystery\n"));
    }

    #[test]
    fn test_render_unknown_vendor_placeholder() {
        let mut fields = BTreeMap::new();
        fields.insert(
            keys::MANUFACTURER_DATA.to_string(),
            FieldValue::Bytes(vec![0x34, 0x12, 0xAA]),
        );
        let rendered = AdvertisementRecord::from_event(&event_with_fields(fields)).render();
        assert!(rendered.contains("Manufacturer: <Unknown>\n"));
        assert!(rendered.contains("  Company ID: 0x1234\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut fields = BTreeMap::new();
        fields.insert("b_key".to_string(), FieldValue::Opaque("two".to_string()));
        fields.insert("a_key".to_string(), FieldValue::Opaque("one".to_string()));
        let event = event_with_fields(fields);

        let first = AdvertisementRecord::from_event(&event).render();
        let second = AdvertisementRecord::from_event(&event).render();
        assert_eq!(first, second);

        // Sorted other keys.
        let a = first.find("a_key").unwrap();
        let b = first.find("b_key").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_connectable_renders_no() {
        let mut fields = BTreeMap::new();
        fields.insert(keys::IS_CONNECTABLE.to_string(), FieldValue::Bool(false));
        let rendered = AdvertisementRecord::from_event(&event_with_fields(fields)).render();
        assert!(rendered.contains("Is Connectable: No\n"));
    }
}
