//! Round-trip tests against an independent LZW decoder.

use oxidoc_lzw::{LzwConfig, LzwEncoder, LzwEvent, encode};
use proptest::prelude::*;

fn decode(data: &[u8]) -> Vec<u8> {
    weezl::decode::Decoder::with_tiff_size_switch(weezl::BitOrder::Msb, 8)
        .decode(data)
        .expect("LZW decoder rejected the stream")
}

fn pseudo_random(size: usize, mut seed: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((seed >> 16) as u8);
    }
    data
}

#[test]
fn test_empty() {
    assert!(decode(&encode(b"")).is_empty());
}

#[test]
fn test_single_byte() {
    assert_eq!(decode(&encode(b"Z")), b"Z");
}

#[test]
fn test_tobeornot() {
    let original = b"TOBEORNOTTOBEORTOBEORNOT";
    let compressed = encode(original);
    assert!(compressed.len() < original.len());
    assert_eq!(decode(&compressed), original);
}

#[test]
fn test_310_bytes() {
    let original = b"This is a test of compression! ".repeat(10);
    assert_eq!(original.len(), 310);
    let decompressed = decode(&encode(&original));
    assert_eq!(decompressed.len(), 310);
    assert_eq!(decompressed, original);
}

#[test]
fn test_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    assert_eq!(decode(&encode(&original)), original);
}

#[test]
fn test_random_bytes_widen_and_reset() {
    let original = pseudo_random(5000, 12345);
    let mut compressed = Vec::new();
    let report = LzwEncoder::new().encode_with_report(&original, &mut compressed);

    assert!(report.widenings >= 1);
    assert!(report.resets >= 1);
    assert_eq!(report.max_width, 12);
    assert_eq!(decode(&compressed), original);
}

#[test]
fn test_widths_grow_within_each_epoch() {
    let original = pseudo_random(200_000, 1);
    let mut compressed = Vec::new();
    let report = LzwEncoder::new().encode_with_report(&original, &mut compressed);
    let config = LzwConfig::PDF;

    let mut width = config.min_bits;
    for event in &report.events {
        match *event {
            LzwEvent::Widen { next_code, width: w } => {
                assert_eq!(w, width + 1);
                assert_eq!(u32::from(next_code), 1u32 << width);
                width = w;
            }
            LzwEvent::Reset { next_code, width: w } => {
                assert_eq!(next_code, config.reset_threshold());
                assert_eq!(w, config.max_bits);
                width = config.min_bits;
            }
        }
    }
    assert!(report.resets > 10);
    assert_eq!(decode(&compressed), original);
}

#[test]
fn test_low_entropy_large() {
    let original: Vec<u8> = pseudo_random(100_000, 9).iter().map(|b| b & 3).collect();
    let compressed = encode(&original);
    assert!(compressed.len() < original.len() / 2);
    assert_eq!(decode(&compressed), original);
}

#[test]
fn test_length_sweep() {
    // Crosses every stream length where end-of-data lands on a width change.
    for len in (1..3000).step_by(7) {
        let original = pseudo_random(len, len as u32);
        assert_eq!(decode(&encode(&original)), original, "length {}", len);
    }
}

#[test]
fn test_deterministic_output() {
    let original = pseudo_random(20_000, 5);
    assert_eq!(encode(&original), encode(&original));
}

proptest! {
    #[test]
    fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..8192)) {
        prop_assert_eq!(decode(&encode(&data)), data);
    }

    #[test]
    fn prop_roundtrip_low_entropy(data in prop::collection::vec(0u8..3, 0..20_000)) {
        prop_assert_eq!(decode(&encode(&data)), data);
    }
}
