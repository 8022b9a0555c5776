//! Base38 decoding.

use crate::constants::{BYTES_PER_CHUNK, CHARS_PER_CHUNK, RADIX};
use crate::{Base38Error, Base38Value};

/// Returns the digit value of `c`, or `None` if it is not a base38 symbol.
///
/// The alphabet is case-sensitive: lowercase letters are rejected.
#[inline]
pub fn symbol_index(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        '-' => Some(36),
        '.' => Some(37),
        _ => None,
    }
}

/// Decodes a base38 string into an unsigned integer.
///
/// The string is read in chunks of five characters. Inside a chunk the first
/// character is the least significant digit, and chunk `k` lands at bit
/// `24 * k` of the result, so three bytes of payload travel per full chunk.
/// A tail chunk may hold 1 to 4 characters. A chunk whose value exceeds its
/// byte capacity carries into the following bits.
///
/// Every character is validated before any arithmetic happens. An empty
/// string decodes to zero.
///
/// # Errors
///
/// Returns [`Base38Error::InvalidCharacter`] for the first character outside
/// the alphabet, with its 0-based character position.
///
/// # Example
///
/// ```
/// use mt_onboard_base38::decode;
///
/// assert_eq!(decode("A").unwrap().to_u128(), Some(10));
/// assert_eq!(decode("01").unwrap().to_u128(), Some(38));
/// ```
pub fn decode(encoded: &str) -> Result<Base38Value, Base38Error> {
    let digits = encoded
        .chars()
        .enumerate()
        .map(|(position, character)| {
            symbol_index(character).ok_or(Base38Error::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let mut value = Base38Value::default();
    for (k, chunk) in digits.chunks(CHARS_PER_CHUNK).enumerate() {
        let chunk_value = chunk
            .iter()
            .rev()
            .fold(0u64, |acc, &d| acc * RADIX + u64::from(d));
        value.add_at_byte(chunk_value, k * BYTES_PER_CHUNK);
    }
    value.normalize();
    Ok(value)
}
