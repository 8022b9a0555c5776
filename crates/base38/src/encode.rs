//! Base38 encoding.

use crate::constants::{ALPHABET, BYTES_PER_CHUNK, CHARS_FOR_BYTES, RADIX};

/// Encodes little-endian bytes as a base38 string.
///
/// Each group of three bytes becomes five characters, a trailing group of
/// two bytes becomes four and a single trailing byte becomes two. This is the
/// inverse of [`crate::decode`] for canonical input.
///
/// # Example
///
/// ```
/// use mt_onboard_base38::{decode, encode};
///
/// let text = encode(&[0x40, 0x8c, 0x08]);
/// assert_eq!(decode(&text).unwrap().as_bytes_le(), &[0x40, 0x8c, 0x08]);
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let table = ALPHABET.as_bytes();
    let mut out = String::with_capacity(bytes.len().div_ceil(BYTES_PER_CHUNK) * 5);

    for chunk in bytes.chunks(BYTES_PER_CHUNK) {
        let mut value = chunk
            .iter()
            .rev()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        for _ in 0..CHARS_FOR_BYTES[chunk.len() - 1] {
            out.push(table[(value % RADIX) as usize] as char);
            value /= RADIX;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_lengths() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]).len(), 2);
        assert_eq!(encode(&[0, 0]).len(), 4);
        assert_eq!(encode(&[0, 0, 0]).len(), 5);
        assert_eq!(encode(&[0; 11]).len(), 19);
    }

    #[test]
    fn max_values_use_top_symbols() {
        // 255 = 6 * 38 + 27
        assert_eq!(encode(&[0xFF]), "R6");
        assert_eq!(encode(&[0xFF, 0xFF, 0xFF]), "PLS18");
    }
}
