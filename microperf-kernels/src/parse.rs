//! Integer Formatting Round Trip
//!
//! `parse_int` draws random `u32` values, renders each as `0x`-prefixed
//! lowercase hex and parses the text back. The first mismatch is returned
//! as an error instead of being counted.

use crate::KernelError;
use rand::Rng;

/// Round trips per timed `parse_int` call
pub const PARSE_INT_ITERATIONS: usize = 999;

/// Render `value` as lowercase hexadecimal with a `0x` prefix and no padding.
pub fn to_hex(value: u32) -> String {
    format!("{:#x}", value)
}

/// Parse base-16 text; the `0x`/`0X` prefix is optional.
///
/// Only hex digits may follow the prefix, so a sign such as `0x+ff` is
/// rejected.
pub fn parse_hex(text: &str) -> Result<u32, KernelError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.starts_with(['+', '-']) {
        return Err(KernelError::SignedHex {
            text: text.to_string(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|source| KernelError::ParseHex {
        text: text.to_string(),
        source,
    })
}

/// Run `iterations` random round trips through `to_hex` and `parse_hex`.
pub fn parse_int<R: Rng + ?Sized>(rng: &mut R, iterations: usize) -> Result<(), KernelError> {
    for _ in 0..iterations {
        let value: u32 = rng.gen();
        let text = to_hex(value);
        let parsed = parse_hex(&text)?;
        if parsed != value {
            return Err(KernelError::RoundTrip {
                value,
                text,
                parsed,
            });
        }
    }
    Ok(())
}
