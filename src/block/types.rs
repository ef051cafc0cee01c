//! LZ4 block constants, little-endian read helper, and match-copy primitives.
//!
//!   - Format constants (MINMATCH, token nibble masks, distance limit)
//!   - `read_le16` for the 2-byte match offset
//!   - Match copy: the byte-at-a-time reference loop plus the fill / bulk /
//!     repeating fast paths that must reproduce it exactly

use crate::config::FAST_MATCH_COPY;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
///
/// Added to every decoded match length; shorter matches are never emitted.
pub const MINMATCH: usize = 4;

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

/// Maximum back-reference distance representable in the 2-byte offset field.
pub const LZ4_DISTANCE_MAX: usize = 65_535;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

// ─────────────────────────────────────────────────────────────────────────────
// Memory read helper
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u16` at `src[pos..pos + 2]`.
///
/// Panics if fewer than two bytes remain; the decoder checks this first.
#[inline(always)]
pub fn read_le16(src: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([src[pos], src[pos + 1]])
}

// ─────────────────────────────────────────────────────────────────────────────
// Match copy
//
// All functions below copy `length` bytes from `dst[op - offset..]` to
// `dst[op..]` and require `1 <= offset <= op` and `op + length <= dst.len()`.
// ─────────────────────────────────────────────────────────────────────────────

/// Reference match copy: one byte at a time, increasing index order.
///
/// When `offset < length` the source range runs into bytes written by this
/// same call, which is how LZ4 expands short repeated patterns.
#[inline]
pub fn copy_match_bytewise(dst: &mut [u8], op: usize, offset: usize, length: usize) {
    let mut mp = op - offset;
    for o in op..op + length {
        dst[o] = dst[mp];
        mp += 1;
    }
}

/// `offset == 1`: every output byte equals the byte just before `op`.
#[inline]
pub fn fill_run(dst: &mut [u8], op: usize, length: usize) {
    let b = dst[op - 1];
    dst[op..op + length].fill(b);
}

/// Overlapping match (`offset < length`) built from non-overlapping chunks.
///
/// After each chunk the copied prefix is a whole number of periods, so the
/// next chunk can be taken from `op - offset` again and may be as long as
/// everything already materialised (`offset + copied`). Chunk sizes double.
#[inline]
pub fn copy_match_repeating(dst: &mut [u8], op: usize, offset: usize, length: usize) {
    let start = op - offset;
    let mut copied = 0;
    while copied < length {
        let chunk = (offset + copied).min(length - copied);
        // Source ends at start + offset + copied == op + copied, the chunk's
        // destination start, so the ranges never overlap.
        dst.copy_within(start..start + chunk, op + copied);
        copied += chunk;
    }
}

/// Copy a match, picking the fastest path equivalent to [`copy_match_bytewise`].
#[inline]
pub fn copy_match(dst: &mut [u8], op: usize, offset: usize, length: usize) {
    debug_assert!(offset >= 1 && offset <= op);
    debug_assert!(op + length <= dst.len());

    if !FAST_MATCH_COPY {
        copy_match_bytewise(dst, op, offset, length);
    } else if offset == 1 {
        fill_run(dst, op, length);
    } else if offset >= length {
        dst.copy_within(op - offset..op - offset + length, op);
    } else {
        copy_match_repeating(dst, op, offset, length);
    }
}
