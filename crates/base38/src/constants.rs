/// Base38 alphabet used by Matter onboarding payloads.
///
/// The position of a symbol in this string is its digit value.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-.";

/// Number of symbols in [`ALPHABET`].
pub const RADIX: u64 = 38;

/// Characters in one full chunk.
pub const CHARS_PER_CHUNK: usize = 5;

/// Bytes carried by one full chunk.
pub const BYTES_PER_CHUNK: usize = 3;

/// Characters needed to encode a chunk of 1, 2 and 3 bytes.
pub const CHARS_FOR_BYTES: [usize; BYTES_PER_CHUNK] = [2, 4, 5];
