//! Decode/encode matrix and bit-extraction checks for the base38 crate.

use mt_onboard_base38::{decode, encode, extract_bits, Base38Error, Base38Value, ALPHABET};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Alphabet coverage
// ---------------------------------------------------------------------------

#[test]
fn every_symbol_decodes_to_its_index() {
    assert_eq!(ALPHABET.len(), 38);
    for (i, c) in ALPHABET.chars().enumerate() {
        let value = decode(&c.to_string()).unwrap();
        assert_eq!(value.to_u128(), Some(i as u128), "symbol {c:?}");
    }
}

#[test]
fn lowercase_is_rejected_at_its_position() {
    assert_eq!(
        decode("ABc").unwrap_err(),
        Base38Error::InvalidCharacter {
            character: 'c',
            position: 2
        }
    );
}

#[test]
fn star_is_rejected_at_its_position() {
    assert_eq!(
        decode("*0").unwrap_err(),
        Base38Error::InvalidCharacter {
            character: '*',
            position: 0
        }
    );
}

#[test]
fn first_invalid_character_wins() {
    let err = decode("0a*").unwrap_err();
    assert_eq!(
        err,
        Base38Error::InvalidCharacter {
            character: 'a',
            position: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid base38 character 'a' at position 1"
    );
}

// ---------------------------------------------------------------------------
// Reference payload
// ---------------------------------------------------------------------------

#[test]
fn reference_payload_bytes() {
    let value = decode("YZ7A0WMV1710LO7D910").unwrap();
    assert_eq!(
        value.as_bytes_le(),
        &[0x40, 0x8c, 0x08, 0x08, 0x40, 0xe0, 0x25, 0x46, 0xf3, 0x07, 0x07]
    );
    assert_eq!(format!("{value:x}"), "707f34625e04008088c40");
}

#[test]
fn reference_payload_fields() {
    let value = decode("YZ7A0WMV1710LO7D910").unwrap();
    assert_eq!(extract_bits(&value, 0, 3), 0);
    assert_eq!(extract_bits(&value, 3, 16), 4488);
    assert_eq!(extract_bits(&value, 19, 16), 257);
    assert_eq!(extract_bits(&value, 35, 2), 0);
    assert_eq!(extract_bits(&value, 37, 8), 0x02);
    assert_eq!(extract_bits(&value, 45, 12), 303);
    assert_eq!(extract_bits(&value, 57, 27), 58_980_771);
    assert_eq!(extract_bits(&value, 84, 12), 0);
}

#[test]
fn reference_payload_reencodes() {
    let value = decode("YZ7A0WMV1710LO7D910").unwrap();
    assert_eq!(encode(&value.to_bytes_le_padded(11)), "YZ7A0WMV1710LO7D910");
}

#[test]
fn decoding_is_deterministic() {
    let a = decode("YZ7A0WMV1710LO7D910").unwrap();
    let b = decode("YZ7A0WMV1710LO7D910").unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Randomized
// ---------------------------------------------------------------------------

#[test]
fn random_bytes_survive_encode_decode() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x38);
    for _ in 0..200 {
        let len = rng.gen_range(0..40);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let text = encode(&bytes);
        assert!(text.chars().all(|c| ALPHABET.contains(c)));
        let value = decode(&text).unwrap();
        assert_eq!(value.to_bytes_le_padded(len), bytes);
    }
}

proptest! {
    #[test]
    fn extract_bits_matches_u128_shift(raw in any::<u128>(), start in 0usize..128, width in 0u32..=64) {
        let value = Base38Value::from(raw);
        let expected = if width == 0 {
            0
        } else {
            let shifted = raw.checked_shr(start as u32).unwrap_or(0);
            let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
            (shifted as u64) & mask
        };
        prop_assert_eq!(value.extract_bits(start, width), expected);
    }
}
