//! Byte-formatting helpers shared across the decoders.

/// Render bytes as space-separated lowercase hex.
///
/// # Example
///
/// ```
/// use blescout::utils::hex_string;
///
/// assert_eq!(hex_string(&[0xDE, 0xAD, 0x01]), "de ad 01");
/// ```
pub fn hex_string(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a byte falls in the printable ASCII range (space through `~`).
#[inline]
pub fn is_printable_ascii(byte: u8) -> bool {
    (32..=126).contains(&byte)
}
