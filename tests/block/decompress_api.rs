// Unit tests for block::decompress_api
//
//   - decompress_block: end-offset contract at zero and non-zero dst_start
//   - decompress_block_bounded: caller capacity bound
//   - decompress_block_with_prefix: history before dst_start
//   - decompress_safe / decompress_block_to_vec conveniences

use lz4_block::block::decompress_api::{
    decompress_block, decompress_block_bounded, decompress_block_to_vec,
    decompress_block_with_prefix, decompress_safe,
};
use lz4_block::block::DecompressError;
use lz4_block::config::MAX_DECOMPRESSED_SIZE;

// token 0x50 (ll=5, no match), literals "Hello"
const BLOCK_HELLO: &[u8] = &[0x50, b'H', b'e', b'l', b'l', b'o'];

// "ab" + 6-byte match at offset 2, then an empty last sequence -> "abababab"
const BLOCK_ABAB: &[u8] = &[0x22, b'a', b'b', 0x02, 0x00, 0x00];

// ll=0, ml=0+4 at offset 4, then an empty last sequence: only valid with history
const BLOCK_BACKREF_4: &[u8] = &[0x00, 0x04, 0x00, 0x00];

// ─────────────────────────────────────────────────────────────────────────────
// decompress_block
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_block_returns_end_offset() {
    let mut dst = [0u8; 16];
    let end = decompress_block(BLOCK_HELLO, &mut dst, 0, BLOCK_HELLO.len(), 0).unwrap();
    assert_eq!(end, 5);
    assert_eq!(&dst[..end], b"Hello");
}

#[test]
fn decompress_block_nonzero_dst_start() {
    let mut dst = [0u8; 32];
    let end = decompress_block(BLOCK_ABAB, &mut dst, 0, BLOCK_ABAB.len(), 10).unwrap();
    assert_eq!(end - 10, 8);
    assert_eq!(&dst[10..end], b"abababab");
    assert!(dst[..10].iter().all(|&b| b == 0));
}

#[test]
fn decompress_block_src_subrange() {
    let mut src = b"junk".to_vec();
    src.extend_from_slice(BLOCK_HELLO);
    src.extend_from_slice(b"more junk");
    let mut dst = [0u8; 8];
    let end = decompress_block(&src, &mut dst, 4, BLOCK_HELLO.len(), 1).unwrap();
    assert_eq!(&dst[1..end], b"Hello");
}

#[test]
fn decompress_block_history_starts_at_dst_start() {
    let mut dst = *b"wxyz\0\0\0\0\0\0";
    assert_eq!(
        decompress_block(BLOCK_BACKREF_4, &mut dst, 0, BLOCK_BACKREF_4.len(), 4),
        Err(DecompressError::InvalidMatchOffset { offset: 4, position: 4, window_start: 4 })
    );
}

#[test]
fn consecutive_blocks_into_one_buffer() {
    let mut dst = [0u8; 32];
    let mid = decompress_block(BLOCK_HELLO, &mut dst, 0, BLOCK_HELLO.len(), 0).unwrap();
    let end = decompress_block(BLOCK_ABAB, &mut dst, 0, BLOCK_ABAB.len(), mid).unwrap();
    assert_eq!(&dst[..end], b"Helloabababab");
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_block_bounded
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bounded_fits() {
    let mut dst = [0u8; 64];
    assert_eq!(decompress_block_bounded(BLOCK_ABAB, &mut dst, 0, BLOCK_ABAB.len(), 2, 10), Ok(10));
}

#[test]
fn bounded_rejects_past_limit() {
    let mut dst = [0u8; 64];
    assert_eq!(
        decompress_block_bounded(BLOCK_ABAB, &mut dst, 0, BLOCK_ABAB.len(), 2, 9),
        Err(DecompressError::DestinationOverflow { position: 4, needed: 6, capacity: 9 })
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_block_with_prefix
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn prefix_supplies_match_history() {
    let mut dst = *b"wxyz\0\0\0\0\0\0";
    let end = decompress_block_with_prefix(BLOCK_BACKREF_4, &mut dst, 0, BLOCK_BACKREF_4.len(), 0, 4)
        .unwrap();
    assert_eq!(&dst[..end], b"wxyzwxyz");
}

#[test]
fn prefix_window_is_bounded_by_prefix_start() {
    let mut dst = *b"vwxyz\0\0\0\0\0";
    // Only "xyz" (3 bytes) is declared history; offset 4 reaches past it.
    assert_eq!(
        decompress_block_with_prefix(BLOCK_BACKREF_4, &mut dst, 0, BLOCK_BACKREF_4.len(), 2, 5),
        Err(DecompressError::InvalidMatchOffset { offset: 4, position: 5, window_start: 2 })
    );
}

#[test]
fn prefix_equal_to_dst_start_behaves_like_decompress_block() {
    let mut a = [0u8; 16];
    let mut b = [0u8; 16];
    let ea = decompress_block(BLOCK_ABAB, &mut a, 0, BLOCK_ABAB.len(), 3).unwrap();
    let eb = decompress_block_with_prefix(BLOCK_ABAB, &mut b, 0, BLOCK_ABAB.len(), 3, 3).unwrap();
    assert_eq!(ea, eb);
    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "prefix_start")]
fn prefix_after_dst_start_panics() {
    let mut dst = [0u8; 16];
    let _ = decompress_block_with_prefix(BLOCK_HELLO, &mut dst, 0, BLOCK_HELLO.len(), 5, 4);
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_safe / decompress_block_to_vec
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_safe_returns_count() {
    let mut dst = [0u8; 16];
    assert_eq!(decompress_safe(BLOCK_ABAB, &mut dst), Ok(8));
    assert_eq!(&dst[..8], b"abababab");
}

#[test]
fn decompress_safe_empty_input() {
    let mut dst = [0u8; 4];
    assert_eq!(decompress_safe(&[], &mut dst), Ok(0));
}

#[test]
fn to_vec_exact_size() {
    assert_eq!(decompress_block_to_vec(BLOCK_HELLO, 5).unwrap(), b"Hello".to_vec());
}

#[test]
fn to_vec_truncates_to_decoded_length() {
    assert_eq!(decompress_block_to_vec(BLOCK_HELLO, 100).unwrap(), b"Hello".to_vec());
}

#[test]
fn to_vec_too_small() {
    assert!(matches!(
        decompress_block_to_vec(BLOCK_ABAB, 7),
        Err(DecompressError::DestinationOverflow { .. })
    ));
}

#[test]
fn to_vec_refuses_oversized_request() {
    assert_eq!(
        decompress_block_to_vec(BLOCK_HELLO, MAX_DECOMPRESSED_SIZE + 1),
        Err(DecompressError::DestinationOverflow {
            position: 0,
            needed: MAX_DECOMPRESSED_SIZE + 1,
            capacity: MAX_DECOMPRESSED_SIZE,
        })
    );
}
