//! Canonical hex+ASCII dump rendering.

use crate::utils::is_printable_ascii;

const BYTES_PER_LINE: usize = 16;

/// Width of the hex column: 16 bytes at 3 chars each, plus the extra
/// mid-line space, plus trailing padding.
const HEX_COLUMN_WIDTH: usize = 50;

/// Render bytes as a hex dump, 16 bytes per line.
///
/// Each line carries a zero-padded 8-digit offset, the hex bytes (with an
/// extra space after the 8th for readability), and a `|`-delimited ASCII
/// gutter where non-printable bytes show as `.`. Empty input yields an
/// empty string.
///
/// # Example
///
/// ```
/// use blescout::decode::hexdump;
///
/// let dump = hexdump(b"hi");
/// assert_eq!(dump, "00000000  68 69                                             |hi|\n");
/// ```
pub fn hexdump(data: &[u8]) -> String {
    let mut result = String::new();

    for (line_index, line) in data.chunks(BYTES_PER_LINE).enumerate() {
        let offset = line_index * BYTES_PER_LINE;
        result.push_str(&format!("{:08x}  ", offset));

        let mut hex_part = String::new();
        for (index, byte) in line.iter().enumerate() {
            hex_part.push_str(&format!("{:02x} ", byte));
            if index == 7 {
                hex_part.push(' ');
            }
        }
        while hex_part.len() < HEX_COLUMN_WIDTH {
            hex_part.push(' ');
        }
        result.push_str(&hex_part);
        result.push('|');

        for &byte in line {
            if is_printable_ascii(byte) {
                result.push(byte as char);
            } else {
                result.push('.');
            }
        }
        result.push('|');
        result.push('\n');
    }

    result
}
