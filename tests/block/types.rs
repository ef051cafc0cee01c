// Unit tests for block::types: format constants, read_le16, match-copy paths
//
//   - Constants match the LZ4 block format
//   - read_le16 is little-endian and position-relative
//   - fill_run / bulk copy / copy_match_repeating / copy_match all agree with
//     the byte-at-a-time reference copy_match_bytewise

use lz4_block::block::types::{
    copy_match, copy_match_bytewise, copy_match_repeating, fill_run, read_le16, KB,
    LZ4_DISTANCE_MAX, MB, MINMATCH, ML_BITS, ML_MASK, RUN_BITS, RUN_MASK,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn constants_minmatch() {
    assert_eq!(MINMATCH, 4);
}

#[test]
fn constants_token_nibbles() {
    assert_eq!(ML_BITS, 4);
    assert_eq!(ML_MASK, 15);
    assert_eq!(RUN_BITS, 4);
    assert_eq!(RUN_MASK, 15);
}

#[test]
fn constants_sizes() {
    assert_eq!(KB, 1024);
    assert_eq!(MB, 1024 * 1024);
    assert_eq!(LZ4_DISTANCE_MAX, u16::MAX as usize);
}

// ─────────────────────────────────────────────────────────────────────────────
// read_le16
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn read_le16_low_byte_first() {
    assert_eq!(read_le16(&[0x34, 0x12], 0), 0x1234);
}

#[test]
fn read_le16_at_position() {
    let buf = [0xAA, 0xBB, 0x01, 0x00, 0xCC];
    assert_eq!(read_le16(&buf, 2), 1);
    assert_eq!(read_le16(&buf, 3), 0xCC00);
}

// ─────────────────────────────────────────────────────────────────────────────
// Match copy
// ─────────────────────────────────────────────────────────────────────────────

/// A buffer whose first `history` bytes are a non-repeating pattern and the
/// rest is zeroed scratch space for the copy.
fn seeded(history: usize, extra: usize) -> Vec<u8> {
    let mut v: Vec<u8> = (0..history).map(|i| (i as u8).wrapping_mul(37).wrapping_add(11)).collect();
    v.resize(history + extra, 0);
    v
}

#[test]
fn bytewise_offset_3_length_10_repeats_period() {
    let mut dst = b"xyzabc\0\0\0\0\0\0\0\0\0\0".to_vec();
    copy_match_bytewise(&mut dst, 6, 3, 10);
    assert_eq!(&dst, b"xyzabcabcabcabca");
}

#[test]
fn bytewise_non_overlapping_is_plain_copy() {
    let mut dst = b"hello\0\0\0".to_vec();
    copy_match_bytewise(&mut dst, 5, 5, 3);
    assert_eq!(&dst, b"hellohel");
}

#[test]
fn fill_run_repeats_previous_byte() {
    let mut dst = vec![0u8; 9];
    dst[0] = b'z';
    fill_run(&mut dst, 1, 8);
    assert_eq!(dst, vec![b'z'; 9]);
}

#[test]
fn repeating_offset_3_length_10() {
    let mut dst = b"abc\0\0\0\0\0\0\0\0\0\0".to_vec();
    copy_match_repeating(&mut dst, 3, 3, 10);
    assert_eq!(&dst, b"abcabcabcabca");
}

#[test]
fn repeating_does_not_touch_bytes_past_the_match() {
    let mut dst = seeded(5, 20);
    dst[24] = 0xEE;
    copy_match_repeating(&mut dst, 5, 2, 19);
    assert_eq!(dst[24], 0xEE);
}

#[test]
fn zero_length_copy_is_noop() {
    let mut dst = seeded(8, 4);
    let before = dst.clone();
    copy_match(&mut dst, 8, 3, 0);
    assert_eq!(dst, before);
}

#[test]
fn every_path_matches_bytewise_reference() {
    for history in [1usize, 2, 7, 16, 40] {
        for offset in 1..=history {
            for length in 0..=72 {
                let mut expected = seeded(history, length);
                copy_match_bytewise(&mut expected, history, offset, length);

                let mut got = seeded(history, length);
                copy_match(&mut got, history, offset, length);
                assert_eq!(got, expected, "copy_match offset={offset} length={length}");

                if offset < length {
                    let mut got = seeded(history, length);
                    copy_match_repeating(&mut got, history, offset, length);
                    assert_eq!(got, expected, "repeating offset={offset} length={length}");
                }
                if offset == 1 {
                    let mut got = seeded(history, length);
                    fill_run(&mut got, history, length);
                    assert_eq!(got, expected, "fill offset=1 length={length}");
                }
            }
        }
    }
}

#[test]
fn copy_match_at_maximum_distance() {
    let mut dst = seeded(LZ4_DISTANCE_MAX, 64);
    let mut expected = dst.clone();
    copy_match_bytewise(&mut expected, LZ4_DISTANCE_MAX, LZ4_DISTANCE_MAX, 64);
    copy_match(&mut dst, LZ4_DISTANCE_MAX, LZ4_DISTANCE_MAX, 64);
    assert_eq!(dst, expected);
    assert_eq!(&dst[LZ4_DISTANCE_MAX..], &dst[..64]);
}
