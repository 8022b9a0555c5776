//! Base38 codec for Matter onboarding payloads.
//!
//! The alphabet is `0-9`, `A-Z`, `-` and `.`. Payload bytes travel in chunks
//! of three bytes per five characters, least significant character first.
//!
//! # Overview
//!
//! - [`decode`] - base38 text to a [`Base38Value`]
//! - [`encode`] - little-endian bytes to base38 text
//! - [`extract_bits`] - read a fixed-width bit field from a decoded value
//!
//! # Example
//!
//! ```
//! use mt_onboard_base38::{decode, extract_bits};
//!
//! let value = decode("YZ7A0WMV1710LO7D910").unwrap();
//! assert_eq!(extract_bits(&value, 3, 16), 4488);
//! ```

mod constants;
mod decode;
mod encode;
mod value;

pub use constants::{ALPHABET, BYTES_PER_CHUNK, CHARS_PER_CHUNK, RADIX};
pub use decode::{decode, symbol_index};
pub use encode::encode;
pub use value::Base38Value;

use thiserror::Error;

/// Error type for base38 decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base38Error {
    /// A character outside the 38-symbol alphabet.
    #[error("invalid base38 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Reads the `width`-bit field at bit offset `start` of `value`.
///
/// Bit 0 is the least significant bit of the whole value. Widths above 64
/// are clamped to 64. See [`Base38Value::extract_bits`].
#[inline]
pub fn extract_bits(value: &Base38Value, start: usize, width: u32) -> u64 {
    value.extract_bits(start, width)
}
