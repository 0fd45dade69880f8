//! Variable-length integer encoding used for length prefixes
//!
//! Values are split into 7-bit digits and written **most significant digit
//! first**. Every digit except the last has its high bit (0x80) set; the last
//! digit, the least significant one, has it clear and terminates the varint.
//! This is the reverse of LEB128 and must not be "fixed" or peers will
//! disagree on every length prefix.
//!
//! ```text
//! 0      -> 00
//! 127    -> 7F
//! 128    -> 81 00
//! 300    -> 82 2C
//! 16384  -> 81 80 00
//! ```

use crate::error::{Error, Result};

/// Maximum number of digits in a u64 varint (ceil(64 / 7))
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUE: u8 = 0x80;
const DIGIT_MASK: u8 = 0x7F;

/// Encode `value` into the start of `buf`, most significant digit first
///
/// Returns the number of bytes written.
#[inline]
pub fn encode(value: u64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
    if value == 0 {
        buf[0] = 0;
        return 1;
    }

    // Digits are collected least significant first, then emitted in reverse.
    let mut digits = [0u8; MAX_VARINT_LEN];
    let mut count = 0;
    let mut value = value;
    while value != 0 {
        digits[count] = (value as u8 & DIGIT_MASK) | CONTINUE;
        value >>= 7;
        count += 1;
    }
    digits[0] &= DIGIT_MASK;

    for (dst, src) in buf.iter_mut().zip(digits[..count].iter().rev()) {
        *dst = *src;
    }
    count
}

/// Number of bytes [`encode`] produces for `value`
#[inline]
pub const fn encoded_len(value: u64) -> usize {
    if value == 0 {
        return 1;
    }
    let bits = 64 - value.leading_zeros() as usize;
    (bits + 6) / 7
}

/// Decode a varint from the start of `buf`
///
/// Returns `(value, bytes_consumed)`. Fails with [`Error::TruncatedInput`]
/// if `buf` ends before the terminating digit, and with
/// [`Error::VarintOverflow`] if more than [`MAX_VARINT_LEN`] digits are
/// flagged or the value would exceed `u64::MAX`.
#[inline]
pub fn decode(buf: &[u8]) -> Result<(u64, usize)> {
    let mut result = 0u64;

    for (pos, &byte) in buf.iter().enumerate() {
        if pos >= MAX_VARINT_LEN || result > (u64::MAX >> 7) {
            return Err(Error::VarintOverflow);
        }

        result = (result << 7) | u64::from(byte & DIGIT_MASK);

        if byte & CONTINUE == 0 {
            return Ok((result, pos + 1));
        }
    }

    Err(Error::TruncatedInput)
}
