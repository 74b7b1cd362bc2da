//! Bluetooth SIG company identifier lookup.
//!
//! Maps the 16-bit company identifier that prefixes manufacturer-specific
//! advertisement data to a vendor name. Partial list; identifiers not in the
//! table resolve to `None`, which renders as `<Unknown>` downstream.

/// Look up the vendor name for a company identifier.
///
/// Pure lookup over a compiled-in table. Unknown identifiers return `None`,
/// never an error.
pub fn company_name(company_id: u16) -> Option<&'static str> {
    let name = match company_id {
        0x0001 => "Ericsson Technology Licensing",
        0x0002 => "Nokia Mobile Phones",
        0x0003 => "Intel Corp.",
        0x0004 => "IBM Corp.",
        0x0005 => "Broadcom Corporation",
        0x0006 => "Microsoft",
        0x0007 => "Lucent",
        0x0008 => "Motorola",
        0x0009 => "Hewlett-Packard Company",
        0x000A => "Qualcomm",
        0x000D => "Texas Instruments Inc.",
        0x000F => "Broadcom Corporation",
        0x0010 => "Symbol Technologies, Inc.",
        0x0013 => "Toshiba Corp.",
        0x0015 => "Rohde & Schwarz GmbH & Co. KG",
        0x001D => "Qualcomm",
        0x001F => "AVM Berlin",
        0x0025 => "NEC Corporation",
        0x0030 => "ST Microelectronics",
        0x003A => "Medtronic, Inc.",
        0x0046 => "Mitel Semiconductor",
        0x0047 => "Cisco Systems, Inc.",
        0x004C => "Apple, Inc.",
        0x004F => "TomTom International BV",
        0x0059 => "Nordic Semiconductor ASA",
        0x0065 => "HP Inc.",
        0x006F => "Sony Corporation",
        0x0075 => "Samsung Electronics Co. Ltd.",
        0x0087 => "Garmin International",
        0x008B => "Fitbit, Inc.",
        0x008C => "Qualcomm",
        0x00BF => "Qualcomm Connected Experiences, Inc.",
        0x00D8 => "Garmin International",
        0x00E0 => "Google",
        0x0118 => "Xiaomi Inc.",
        0x0131 => "Nest Labs Inc.",
        0x0157 => "Tesla Motors",
        0x0171 => "NXP Semiconductors",
        0x01D7 => "Sony Corporation",
        0x0224 => "Amazon.com Services LLC",
        0x02E5 => "Linxens",
        0x037A => "Elgato Systems GmbH",
        0x03C1 => "Ember Technologies, Inc.",
        0x0702 => "SAF Tehnika JSC (Aranet)",
        0x3601 => "Shenzhen Minew Technologies Co., Ltd.",
        0x8802 => "Govee Life Inc.",
        0x8803 => "Govee Life Inc.",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_companies() {
        assert_eq!(company_name(0x004C), Some("Apple, Inc."));
        assert_eq!(company_name(0x0006), Some("Microsoft"));
        assert_eq!(company_name(0x0059), Some("Nordic Semiconductor ASA"));
        assert_eq!(company_name(0x8803), Some("Govee Life Inc."));
    }

    #[test]
    fn test_unknown_company() {
        assert_eq!(company_name(0x1234), None);
        assert_eq!(company_name(0xFFFF), None);
    }

    #[test]
    fn test_lookup_is_pure() {
        for id in [0x0000u16, 0x004C, 0x0075, 0xBEEF] {
            assert_eq!(company_name(id), company_name(id));
        }
    }
}
