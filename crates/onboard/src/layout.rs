//! Bit layout of the onboarding payload.
//!
//! Fields are packed LSB first into the decoded integer, in the order below,
//! followed by four zero padding bits that round the payload up to 11 bytes.
//!
//! The layout was settled empirically against a payload whose fields were
//! confirmed with a reference commissioning tool. Reading fields MSB first,
//! from the byte-swapped integer, or with the discriminator at bit 35 all
//! fail to reproduce that payload.

use mt_onboard_base38::Base38Value;

/// A contiguous run of bits inside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub offset: usize,
    pub width: u32,
}

impl BitField {
    const fn new(name: &'static str, offset: usize, width: u32) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// One past the last bit of the field.
    pub const fn end(&self) -> usize {
        self.offset + self.width as usize
    }

    /// Largest value the field can hold.
    pub const fn max_value(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    pub fn read(&self, value: &Base38Value) -> u64 {
        value.extract_bits(self.offset, self.width)
    }

    /// Writes the low `width` bits of `value` into little-endian `bytes`.
    pub(crate) fn write(&self, bytes: &mut [u8], value: u64) {
        for i in 0..self.width as usize {
            let bit = self.offset + i;
            let mask = 1u8 << (bit % 8);
            if (value >> i) & 1 == 1 {
                bytes[bit / 8] |= mask;
            } else {
                bytes[bit / 8] &= !mask;
            }
        }
    }
}

pub const VERSION: BitField = BitField::new("version", 0, 3);
pub const VENDOR_ID: BitField = BitField::new("vendor_id", 3, 16);
pub const PRODUCT_ID: BitField = BitField::new("product_id", 19, 16);
pub const COMMISSIONING_FLOW: BitField = BitField::new("commissioning_flow", 35, 2);
pub const DISCOVERY_CAPABILITIES: BitField = BitField::new("discovery_capabilities", 37, 8);
pub const DISCRIMINATOR: BitField = BitField::new("discriminator", 45, 12);
pub const SETUP_PIN_CODE: BitField = BitField::new("setup_pin_code", 57, 27);

/// Every field of the payload, in bit order.
pub const FIELD_LAYOUT: [BitField; 7] = [
    VERSION,
    VENDOR_ID,
    PRODUCT_ID,
    COMMISSIONING_FLOW,
    DISCOVERY_CAPABILITIES,
    DISCRIMINATOR,
    SETUP_PIN_CODE,
];

/// Bits covered by [`FIELD_LAYOUT`].
pub const PAYLOAD_BITS: usize = 84;

/// Encoded payload size, including padding.
pub const PAYLOAD_BYTES: usize = PAYLOAD_BITS.div_ceil(8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_contiguous_disjoint_and_total_84_bits() {
        let mut next = 0;
        for field in FIELD_LAYOUT {
            assert_eq!(field.offset, next, "gap or overlap before {}", field.name);
            next = field.end();
        }
        assert_eq!(next, PAYLOAD_BITS);
        let total: u32 = FIELD_LAYOUT.iter().map(|f| f.width).sum();
        assert_eq!(total as usize, PAYLOAD_BITS);
    }

    #[test]
    fn no_two_fields_share_a_bit() {
        let mut seen = [false; PAYLOAD_BITS];
        for field in FIELD_LAYOUT {
            for bit in field.offset..field.end() {
                assert!(!seen[bit], "bit {bit} claimed twice ({})", field.name);
                seen[bit] = true;
            }
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn write_then_read_stays_inside_field() {
        let mut bytes = [0u8; PAYLOAD_BYTES];
        DISCRIMINATOR.write(&mut bytes, DISCRIMINATOR.max_value());
        let value = Base38Value::from_bytes_le(&bytes);
        assert_eq!(DISCRIMINATOR.read(&value), 0xFFF);
        assert_eq!(DISCOVERY_CAPABILITIES.read(&value), 0);
        assert_eq!(SETUP_PIN_CODE.read(&value), 0);
        assert_eq!(PAYLOAD_BYTES, 11);
    }
}
