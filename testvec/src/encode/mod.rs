//! Fixed-width textual encodings shared by both generators.
//!
//! Field widths are derived from declared bit widths with integer arithmetic
//! only: a `w`-bit element occupies exactly `w / 4` hex digits or `w` binary
//! digits, zero-padded on the left.


use num_bigint::BigUint;

use crate::error::TestVecError;

/// Hex digits in a field of `bits` width, one digit per nibble.
pub fn hex_digits(bits: u32) -> usize {
    (bits / 4) as usize
}

/// Hex digits needed to hold `bits` without loss, partial nibbles round up.
pub fn hex_digits_ceil(bits: u32) -> usize {
    bits.div_ceil(4) as usize
}

/// Zero-padded uppercase hex at the field width for `bits`. The caller
/// guarantees `value < 2^bits`.
pub fn hex_field(value: u64, bits: u32) -> String {
    format!("{:0width$X}", value, width = hex_digits(bits))
}

/// Zero-padded uppercase hex for a product element. The value is reduced mod
/// `2^bits` (the legacy fixed-width product rule makes this lossy on
/// purpose); the field spans `ceil(bits / 4)` digits.
pub fn hex_field_wide(value: &BigUint, bits: u32) -> String {
    let mask = (BigUint::from(1u8) << bits) - 1u8;
    format!(
        "{:0width$X}",
        value & &mask,
        width = hex_digits_ceil(bits)
    )
}

/// Zero-padded binary at exactly `bits` digits.
pub fn bin_field(value: u64, bits: u32) -> String {
    format!("{:0width$b}", value, width = bits as usize)
}

/// Splits a rendered row back into `digits`-digit hex fields.
pub fn decode_hex_line(line: &str, digits: usize) -> Result<Vec<BigUint>, TestVecError> {
    if digits == 0 || line.len() % digits != 0 {
        return Err(TestVecError::FieldAlignment {
            len: line.len(),
            digits,
        });
    }
    line.as_bytes()
        .chunks(digits)
        .map(|chunk| {
            BigUint::parse_bytes(chunk, 16).ok_or_else(|| TestVecError::FieldParse {
                field: String::from_utf8_lossy(chunk).into_owned(),
            })
        })
        .collect()
}

/// Splits a concatenated binary literal back into `width`-bit elements.
pub fn decode_bin_line(line: &str, width: u32) -> Result<Vec<u64>, TestVecError> {
    let digits = width as usize;
    if digits == 0 || line.len() % digits != 0 {
        return Err(TestVecError::FieldAlignment {
            len: line.len(),
            digits,
        });
    }
    line.as_bytes()
        .chunks(digits)
        .map(|chunk| {
            let field = String::from_utf8_lossy(chunk);
            u64::from_str_radix(&field, 2).map_err(|_| TestVecError::FieldParse {
                field: field.into_owned(),
            })
        })
        .collect()
}
