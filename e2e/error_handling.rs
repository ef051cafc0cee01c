//! E2E: error handling and edge cases
//!
//! Malformed input must come back as a `DecompressError`, never a panic or an
//! out-of-bounds access.
//!
//! Coverage:
//! - DestinationOverflow when the caller under-sizes the output
//! - InvalidMatchOffset from corrupted offset fields
//! - TruncatedInput from blocks cut at arbitrary points
//! - Arbitrary byte strings never panic and never overrun the destination

use lz4_block::{
    decompress_block, decompress_block_bounded, decompress_block_to_vec, decompress_safe,
    DecompressError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample() -> (Vec<u8>, Vec<u8>) {
    let original = b"Hello, this is a test message for LZ4 decompression! Hello, this is a test.".repeat(6);
    let compressed = lz4_flex::block::compress(&original);
    (original, compressed)
}

// ═════════════════════════════════════════════════════════════════════════════
// DestinationOverflow
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_dst_too_small() {
    let (_, compressed) = sample();
    let mut dst = vec![0u8; 10];
    match decompress_safe(&compressed, &mut dst) {
        Err(DecompressError::DestinationOverflow { capacity, .. }) => assert_eq!(capacity, 10),
        other => panic!("expected DestinationOverflow, got {other:?}"),
    }
}

#[test]
fn test_dst_one_byte_short() {
    let (original, compressed) = sample();
    let mut dst = vec![0u8; original.len() - 1];
    assert!(matches!(
        decompress_safe(&compressed, &mut dst),
        Err(DecompressError::DestinationOverflow { .. })
    ));
}

#[test]
fn test_bounded_limit_one_byte_short() {
    let (original, compressed) = sample();
    let mut dst = vec![0u8; original.len() * 2];
    let limit = original.len() - 1;
    assert!(matches!(
        decompress_block_bounded(&compressed, &mut dst, 0, compressed.len(), 0, limit),
        Err(DecompressError::DestinationOverflow { capacity, .. }) if capacity == limit
    ));
    assert_eq!(
        decompress_block_bounded(&compressed, &mut dst, 0, compressed.len(), 0, original.len()),
        Ok(original.len())
    );
}

#[test]
fn test_dst_start_leaves_too_little_room() {
    let (original, compressed) = sample();
    let mut dst = vec![0u8; original.len() + 3];
    assert!(matches!(
        decompress_block(&compressed, &mut dst, 0, compressed.len(), 4),
        Err(DecompressError::DestinationOverflow { .. })
    ));
    assert_eq!(
        decompress_block(&compressed, &mut dst, 0, compressed.len(), 3),
        Ok(original.len() + 3)
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// InvalidMatchOffset
// ═════════════════════════════════════════════════════════════════════════════

/// Position of the first match offset field in a block produced by `sample`.
fn first_offset_field(block: &[u8]) -> usize {
    let token = block[0];
    let mut ip = 1;
    let mut lit = (token >> 4) as usize;
    if lit == 15 {
        loop {
            let b = block[ip];
            ip += 1;
            lit += b as usize;
            if b != 255 {
                break;
            }
        }
    }
    ip + lit
}

#[test]
fn test_corrupted_offset_zero() {
    let (original, mut compressed) = sample();
    let at = first_offset_field(&compressed);
    compressed[at] = 0;
    compressed[at + 1] = 0;
    let mut dst = vec![0u8; original.len()];
    assert!(matches!(
        decompress_safe(&compressed, &mut dst),
        Err(DecompressError::InvalidMatchOffset { offset: 0, .. })
    ));
}

#[test]
fn test_corrupted_offset_too_far_back() {
    let (original, mut compressed) = sample();
    let at = first_offset_field(&compressed);
    compressed[at] = 0xFF;
    compressed[at + 1] = 0xFF;
    let mut dst = vec![0u8; original.len()];
    assert!(matches!(
        decompress_safe(&compressed, &mut dst),
        Err(DecompressError::InvalidMatchOffset { offset: 65_535, .. })
    ));
}

#[test]
fn test_offset_cannot_reach_before_dst_start() {
    // Valid bytes sit before dst_start, but a block cannot use them as history.
    let block = [0x00, 0x04, 0x00, 0x00];
    let mut dst = *b"abcd\0\0\0\0";
    assert_eq!(
        decompress_block(&block, &mut dst, 0, block.len(), 4),
        Err(DecompressError::InvalidMatchOffset { offset: 4, position: 4, window_start: 4 })
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// TruncatedInput
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_truncation_is_an_error_or_a_shorter_prefix() {
    // Cutting a block exactly after a literal run yields a shorter valid block;
    // every other cut must be rejected. Either way nothing may panic.
    let (original, compressed) = sample();
    for cut in 0..compressed.len() {
        let mut dst = vec![0u8; original.len()];
        match decompress_safe(&compressed[..cut], &mut dst) {
            Ok(n) => {
                assert!(n <= original.len());
                assert_eq!(&dst[..n], &original[..n], "cut {cut}");
            }
            Err(e) => assert!(
                matches!(e, DecompressError::TruncatedInput { .. }),
                "cut {cut}: {e:?}"
            ),
        }
    }
}

#[test]
fn test_source_range_outside_buffer() {
    let (_, compressed) = sample();
    let mut dst = vec![0u8; 1024];
    assert!(matches!(
        decompress_block(&compressed, &mut dst, 1, compressed.len(), 0),
        Err(DecompressError::TruncatedInput { needed: 1, .. })
    ));
    assert!(matches!(
        decompress_block(&compressed, &mut dst, compressed.len() + 5, 1, 0),
        Err(DecompressError::TruncatedInput { .. })
    ));
}

// ═════════════════════════════════════════════════════════════════════════════
// Arbitrary input
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_random_garbage_never_panics() {
    let mut rng = StdRng::seed_from_u64(0xBAD_B10C);
    for _ in 0..2000 {
        let len = rng.gen_range(0..96);
        let src: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        for cap in [0usize, 16, 4096] {
            let mut dst = vec![0u8; cap];
            if let Ok(n) = decompress_safe(&src, &mut dst) {
                assert!(n <= cap);
            }
        }
    }
}

#[test]
fn test_random_bit_flips_never_panic() {
    let (original, compressed) = sample();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let mut corrupt = compressed.clone();
        let i = rng.gen_range(0..corrupt.len());
        corrupt[i] ^= 1 << rng.gen_range(0..8);
        let _ = decompress_block_to_vec(&corrupt, original.len());
    }
}

#[test]
fn test_empty_block_decodes_to_nothing() {
    let mut dst = [0u8; 0];
    assert_eq!(decompress_safe(&[], &mut dst), Ok(0));
    assert_eq!(decompress_safe(&[0x00], &mut dst), Ok(0));
}
