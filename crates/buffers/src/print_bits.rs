//! Debug utilities for printing bit patterns as binary strings.

use ieee_fp_codec::{Fields, Format};

/// Formats the low `width` bits of `bits` as binary digits, most significant first.
///
/// `width` is clamped to 64.
///
/// # Example
///
/// ```
/// use ieee_fp_buffers::print_bits;
///
/// assert_eq!(print_bits(0x3C00, 16), "0011110000000000");
/// assert_eq!(print_bits(0b101, 4), "0101");
/// assert_eq!(print_bits(0xFF, 0), "");
/// ```
pub fn print_bits(bits: u64, width: u32) -> String {
    let width = width.min(64);
    (0..width)
        .rev()
        .map(|i| if (bits >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Formats `bits` as `sign exponent fraction` groups for `format`.
///
/// # Example
///
/// ```
/// use ieee_fp_buffers::print_fields;
/// use ieee_fp_codec::Format;
///
/// assert_eq!(print_fields(Format::Half, 0xC000), "1 10000 0000000000");
/// ```
pub fn print_fields(format: Format, bits: u64) -> String {
    let fields = Fields::split(format, bits);
    format!(
        "{} {} {}",
        u8::from(fields.sign),
        print_bits(fields.exponent as u64, format.exponent_bits()),
        print_bits(fields.fraction, format.fraction_bits())
    )
}
