//! Public LZ4 block decompression API.
//!
//!   - Offset-addressed decoding: [`decompress_block`],
//!     [`decompress_block_bounded`]
//!   - Linked-block decoding against earlier output:
//!     [`decompress_block_with_prefix`]
//!   - Slice / Vec conveniences: [`decompress_safe`],
//!     [`decompress_block_to_vec`]
//!
//! Every function is a pure transformation of caller-owned buffers; nothing is
//! retained between calls, so concurrent calls on disjoint destinations are
//! fine without any synchronisation.

use crate::config::MAX_DECOMPRESSED_SIZE;

use super::decompress_core::{decompress_generic, DecompressError};

/// Log the outcome of one block decode and hand the result back unchanged.
fn report(
    result: Result<usize, DecompressError>,
    src_len: usize,
    dst_start: usize,
) -> Result<usize, DecompressError> {
    match &result {
        Ok(end) => log::trace!(
            "lz4 block decoded: {} compressed byte(s) -> {} byte(s) at offset {}",
            src_len,
            end - dst_start,
            dst_start
        ),
        Err(e) => log::debug!("lz4 block rejected ({} compressed byte(s)): {}", src_len, e),
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Offset-addressed API
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress the block `src[src_start..src_start + src_len]` into `dst`,
/// writing from `dst_start`.
///
/// Returns the offset one past the last byte written; the decompressed length
/// is `end - dst_start`. Matches may only reference bytes written by this
/// call. The capacity is `dst.len()`.
///
/// ```
/// use lz4_block::decompress_block;
///
/// // literal "ab", then a match of 6 at offset 2
/// let src = [0x22, b'a', b'b', 0x02, 0x00, 0x00];
/// let mut dst = [0u8; 16];
/// let end = decompress_block(&src, &mut dst, 0, src.len(), 4).unwrap();
/// assert_eq!(&dst[4..end], b"abababab");
/// ```
pub fn decompress_block(
    src: &[u8],
    dst: &mut [u8],
    src_start: usize,
    src_len: usize,
    dst_start: usize,
) -> Result<usize, DecompressError> {
    report(
        decompress_generic(src, dst, src_start, src_len, dst_start, dst_start, dst.len()),
        src_len,
        dst_start,
    )
}

/// Like [`decompress_block`], but output may not extend past `dst_limit`
/// (clamped to `dst.len()`).
///
/// Use this when `dst` is a larger scratch buffer and the caller knows how
/// much of it belongs to this block.
pub fn decompress_block_bounded(
    src: &[u8],
    dst: &mut [u8],
    src_start: usize,
    src_len: usize,
    dst_start: usize,
    dst_limit: usize,
) -> Result<usize, DecompressError> {
    report(
        decompress_generic(src, dst, src_start, src_len, dst_start, dst_start, dst_limit),
        src_len,
        dst_start,
    )
}

/// Decompress a block whose matches may reach back into previously decoded
/// data at `dst[prefix_start..dst_start]`.
///
/// This is how consecutive linked blocks are decoded into one contiguous
/// buffer: each block uses everything already decoded as its history.
///
/// # Panics
/// Panics if `prefix_start > dst_start`.
pub fn decompress_block_with_prefix(
    src: &[u8],
    dst: &mut [u8],
    src_start: usize,
    src_len: usize,
    prefix_start: usize,
    dst_start: usize,
) -> Result<usize, DecompressError> {
    assert!(
        prefix_start <= dst_start,
        "prefix_start ({prefix_start}) must not be after dst_start ({dst_start})"
    );
    report(
        decompress_generic(src, dst, src_start, src_len, prefix_start, dst_start, dst.len()),
        src_len,
        dst_start,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Slice / Vec conveniences
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress all of `src` into the start of `dst`.
///
/// Returns the number of bytes written into `dst`.
pub fn decompress_safe(src: &[u8], dst: &mut [u8]) -> Result<usize, DecompressError> {
    decompress_block(src, dst, 0, src.len(), 0)
}

/// Decompress `src` into a freshly allocated `Vec` of at most
/// `uncompressed_size` bytes.
///
/// The result is truncated to the decoded length. Sizes above
/// [`MAX_DECOMPRESSED_SIZE`] are refused with
/// [`DecompressError::DestinationOverflow`] before allocating.
pub fn decompress_block_to_vec(
    src: &[u8],
    uncompressed_size: usize,
) -> Result<Vec<u8>, DecompressError> {
    if uncompressed_size > MAX_DECOMPRESSED_SIZE {
        log::debug!(
            "lz4 block rejected: requested output size {} exceeds {}",
            uncompressed_size,
            MAX_DECOMPRESSED_SIZE
        );
        return Err(DecompressError::DestinationOverflow {
            position: 0,
            needed: uncompressed_size,
            capacity: MAX_DECOMPRESSED_SIZE,
        });
    }
    let mut dst = vec![0u8; uncompressed_size];
    let n = decompress_safe(src, &mut dst)?;
    dst.truncate(n);
    Ok(dst)
}
