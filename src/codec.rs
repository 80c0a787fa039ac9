//! Gray-code chromosome codec.
//!
//! Gray-coded individuals store one 8-bit [reflected Gray
//! code](https://en.wikipedia.org/wiki/Gray_code) per dimension. The codec
//! converts between that representation and the plain numeric vector the
//! objective function consumes.
//!
//! - Forward (initialization): scale a real value from its bounds into
//!   `[0, 255]`, round, then binary→gray via `v ^ (v >> 1)`.
//! - Backward (evaluation): gray→binary with the MSB-first XOR cascade;
//!   the unsigned interpretation of the result is the decoded gene.

use crate::bounds::Bounds;

/// Converts an 8-bit binary value to its reflected Gray code.
pub fn gray_encode(value: u8) -> u8 {
    value ^ (value >> 1)
}

/// Converts an 8-bit reflected Gray code back to binary.
///
/// Bit 7 is copied, then each lower binary bit is the XOR of the binary
/// bit above it and the gray bit at its own position. The shift cascade
/// below computes exactly that in three steps.
pub fn gray_decode(code: u8) -> u8 {
    let mut value = code;
    let mut mask = code >> 1;
    while mask != 0 {
        value ^= mask;
        mask >>= 1;
    }
    value
}

/// Scales `value` from `bounds` into `[0, 255]` and gray-encodes it.
///
/// `bounds.low` maps to code 0 and `bounds.high` to code 255. A
/// zero-width interval always encodes as 0.
pub fn encode_real(value: f64, bounds: &Bounds) -> u8 {
    let max = u8::MAX as f64;
    let width = bounds.width();
    let scaled = if width == 0.0 {
        0.0
    } else {
        (value - bounds.low) / width * max
    };
    gray_encode(scaled.round().clamp(0.0, max) as u8)
}

/// Decodes one gray-coded gene into the numeric value fed to the
/// objective function (the unsigned 0–255 interpretation as `f64`).
pub fn decode_gene(code: u8) -> f64 {
    gray_decode(code) as f64
}
