//! Arbitrary-width unsigned integer produced by [`crate::decode`].

use std::fmt;

/// An unsigned integer of unbounded width, stored as little-endian bytes.
///
/// Bit 0 is the least significant bit of byte 0. Bits past the stored bytes
/// read as zero, so a short payload zero-extends instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base38Value {
    bytes: Vec<u8>,
}

impl Base38Value {
    /// Builds a value from little-endian bytes.
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        let mut value = Self {
            bytes: bytes.to_vec(),
        };
        value.normalize();
        value
    }

    /// Little-endian bytes without high zero bytes. Zero is the empty slice.
    pub fn as_bytes_le(&self) -> &[u8] {
        &self.bytes
    }

    /// Little-endian bytes zero-padded to at least `len` bytes.
    pub fn to_bytes_le_padded(&self, len: usize) -> Vec<u8> {
        let mut out = self.bytes.clone();
        if out.len() < len {
            out.resize(len, 0);
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of significant bits.
    pub fn bit_len(&self) -> usize {
        match self.bytes.last() {
            Some(&top) => (self.bytes.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Returns the value if it fits in 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.bytes.len() > 16 {
            return None;
        }
        Some(
            self.bytes
                .iter()
                .rev()
                .fold(0u128, |acc, &b| (acc << 8) | u128::from(b)),
        )
    }

    /// Reads the `width`-bit field starting at bit `start`.
    ///
    /// A `width` above 64 is clamped to 64, so the result holds the low 64
    /// bits of the requested field. Bits beyond [`Self::bit_len`] are zero.
    /// The value itself is never modified.
    pub fn extract_bits(&self, start: usize, width: u32) -> u64 {
        let mut out = 0u64;
        for i in 0..width.min(64) {
            let Some(bit) = start.checked_add(i as usize) else {
                break;
            };
            let byte = self.bytes.get(bit / 8).copied().unwrap_or(0);
            out |= u64::from((byte >> (bit % 8)) & 1) << i;
        }
        out
    }

    /// Adds `value` shifted left by `offset` bytes.
    pub(crate) fn add_at_byte(&mut self, mut value: u64, offset: usize) {
        let mut i = offset;
        let mut carry = 0u64;
        while value != 0 || carry != 0 {
            if i >= self.bytes.len() {
                self.bytes.resize(i + 1, 0);
            }
            let sum = u64::from(self.bytes[i]) + (value & 0xFF) + carry;
            self.bytes[i] = sum as u8;
            carry = sum >> 8;
            value >>= 8;
            i += 1;
        }
    }

    /// Drops high zero bytes so equal numbers compare equal.
    pub(crate) fn normalize(&mut self) {
        while self.bytes.last() == Some(&0) {
            self.bytes.pop();
        }
    }
}

impl From<u128> for Base38Value {
    fn from(value: u128) -> Self {
        Self::from_bytes_le(&value.to_le_bytes())
    }
}

impl fmt::LowerHex for Base38Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = self.bytes.iter().rev();
        match bytes.next() {
            Some(top) => write!(f, "{top:x}")?,
            None => return f.write_str("0"),
        }
        for b in bytes {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bits_is_lsb_first() {
        let v = Base38Value::from(0b1011_0110u128);
        assert_eq!(v.extract_bits(0, 3), 0b110);
        assert_eq!(v.extract_bits(1, 4), 0b1011);
        assert_eq!(v.extract_bits(4, 4), 0b1011);
    }

    #[test]
    fn extract_bits_spans_bytes_and_zero_extends() {
        let v = Base38Value::from_bytes_le(&[0xFF, 0x01]);
        assert_eq!(v.extract_bits(4, 8), 0x1F);
        assert_eq!(v.extract_bits(8, 16), 0x01);
        assert_eq!(v.extract_bits(200, 64), 0);
        assert_eq!(v.extract_bits(usize::MAX, 8), 0);
    }

    #[test]
    fn extract_bits_reaches_past_96() {
        let v = Base38Value::from(1u128 << 95 | 0xABCD << 80);
        assert_eq!(v.extract_bits(80, 16), 0xABCD | 0x8000);
        assert_eq!(v.extract_bits(95, 1), 1);
        assert_eq!(v.extract_bits(64, 64), (1 << 31) | (0xABCD << 16));
    }

    #[test]
    fn extract_bits_clamps_width_to_64() {
        let v = Base38Value::from(u128::MAX);
        assert_eq!(v.extract_bits(0, 65), u64::MAX);
        assert_eq!(v.extract_bits(8, u32::MAX), u64::MAX);
        assert_eq!(v.extract_bits(100, 100), (1 << 28) - 1);
    }

    #[test]
    fn bit_len_and_normalization() {
        assert_eq!(Base38Value::default().bit_len(), 0);
        assert_eq!(Base38Value::from(1u128).bit_len(), 1);
        assert_eq!(Base38Value::from(0x100u128).bit_len(), 9);
        assert_eq!(
            Base38Value::from_bytes_le(&[5, 0, 0]),
            Base38Value::from_bytes_le(&[5])
        );
        assert_eq!(Base38Value::from_bytes_le(&[5]).to_bytes_le_padded(3), vec![5, 0, 0]);
    }

    #[test]
    fn add_at_byte_carries() {
        let mut v = Base38Value::from_bytes_le(&[0xFF, 0xFF]);
        v.add_at_byte(1, 0);
        assert_eq!(v.as_bytes_le(), &[0, 0, 1]);
        v.add_at_byte(0x0102, 3);
        assert_eq!(v.as_bytes_le(), &[0, 0, 1, 2, 1]);
    }

    #[test]
    fn lower_hex() {
        assert_eq!(format!("{:x}", Base38Value::default()), "0");
        assert_eq!(format!("{:x}", Base38Value::from(0x1_02_0Au128)), "1020a");
    }
}
