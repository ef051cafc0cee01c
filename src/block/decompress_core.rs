//! LZ4 block decompression core engine.
//!
//!   - `read_variable_length` — bounded decoder for the 255-continued length
//!     extension bytes
//!   - `decompress_generic`   — the sequence loop every public entry point
//!     funnels into
//!
//! # Security boundary
//!
//! Every read from the source region and every write to the destination is
//! checked before it happens. Malformed or truncated input returns a
//! [`DecompressError`]; it must **never** panic, read outside
//! `src[src_start..src_start + src_len]`, or write outside the capacity.

use thiserror::Error;

use super::types::{copy_match, read_le16, MINMATCH, ML_BITS, ML_MASK, RUN_MASK};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by LZ4 block decompression.
///
/// Any error aborts the call; the destination bytes written so far are
/// unspecified and should be discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// A token, length extension, offset field, or literal run needs bytes
    /// past the end of the source region.
    #[error("truncated input: {needed} more byte(s) needed at source offset {position}, block ends at {end}")]
    TruncatedInput {
        position: usize,
        needed: usize,
        end: usize,
    },

    /// A match offset is zero or reaches back before the start of the
    /// decoded history.
    #[error("invalid match offset {offset} at output position {position} (history starts at {window_start})")]
    InvalidMatchOffset {
        offset: usize,
        position: usize,
        window_start: usize,
    },

    /// A literal run or match copy would write past the destination capacity.
    #[error("destination overflow: {needed} byte(s) at output position {position} exceed capacity {capacity}")]
    DestinationOverflow {
        position: usize,
        needed: usize,
        capacity: usize,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// read_variable_length
// ─────────────────────────────────────────────────────────────────────────────

/// Read the extension bytes that follow a nibble equal to 15.
///
/// Adds bytes to a running sum while they equal 255; the first byte below
/// 255 is added too and ends the run. Returns the sum of the extension bytes
/// only (the caller adds the nibble).
///
/// The sum saturates at `usize::MAX`. A saturated length can never fit the
/// remaining input or output, so the caller's bounds check rejects it.
#[inline(always)]
pub fn read_variable_length(
    src: &[u8],
    ip: &mut usize,
    iend: usize,
) -> Result<usize, DecompressError> {
    let mut length: usize = 0;
    loop {
        if *ip >= iend {
            return Err(DecompressError::TruncatedInput {
                position: *ip,
                needed: 1,
                end: iend,
            });
        }
        let s = src[*ip];
        *ip += 1;
        length = length.saturating_add(s as usize);
        if s != 255 {
            return Ok(length);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_generic
// ─────────────────────────────────────────────────────────────────────────────

/// Core LZ4 block decompression loop.
///
/// | Parameter    | Meaning                                                   |
/// |--------------|-----------------------------------------------------------|
/// | `src`        | Buffer holding the compressed block                        |
/// | `dst`        | Output buffer                                              |
/// | `src_start`  | First byte of the block inside `src`                       |
/// | `src_len`    | Exact length of the block                                  |
/// | `low_prefix` | First `dst` index a match may reference (≤ `dst_start`)    |
/// | `dst_start`  | Where decoded output begins                                |
/// | `dst_limit`  | Capacity bound; clamped to `dst.len()`                     |
///
/// Returns the `dst` index one past the last byte written.
pub fn decompress_generic(
    src: &[u8],
    dst: &mut [u8],
    src_start: usize,
    src_len: usize,
    low_prefix: usize,
    dst_start: usize,
    dst_limit: usize,
) -> Result<usize, DecompressError> {
    // ── Validate top-level arguments ─────────────────────────────────────────
    let available = src.len().saturating_sub(src_start);
    if src_len > available {
        return Err(DecompressError::TruncatedInput {
            position: src_start,
            needed: src_len - available,
            end: src.len(),
        });
    }
    let iend = src_start + src_len;

    let oend = dst_limit.min(dst.len());
    if dst_start > oend {
        return Err(DecompressError::DestinationOverflow {
            position: dst_start,
            needed: 0,
            capacity: oend,
        });
    }
    debug_assert!(low_prefix <= dst_start);

    let mut ip = src_start;
    let mut op = dst_start;

    // An empty region decodes to nothing.
    if ip >= iend {
        return Ok(op);
    }

    'decode: loop {
        // Every iteration starts with a new token byte; ip < iend here.
        let token = src[ip];
        ip += 1;

        // ── Literals ──────────────────────────────────────────────────────────
        let mut lit_length = (token >> ML_BITS) as usize;
        if lit_length == RUN_MASK as usize {
            lit_length = lit_length.saturating_add(read_variable_length(src, &mut ip, iend)?);
        }

        if lit_length > iend - ip {
            return Err(DecompressError::TruncatedInput {
                position: ip,
                needed: lit_length - (iend - ip),
                end: iend,
            });
        }
        if lit_length > oend - op {
            return Err(DecompressError::DestinationOverflow {
                position: op,
                needed: lit_length,
                capacity: oend,
            });
        }
        dst[op..op + lit_length].copy_from_slice(&src[ip..ip + lit_length]);
        ip += lit_length;
        op += lit_length;

        // The last sequence is literals only.
        if ip >= iend {
            break 'decode;
        }

        // ── Match offset ──────────────────────────────────────────────────────
        if iend - ip < 2 {
            return Err(DecompressError::TruncatedInput {
                position: ip,
                needed: 2 - (iend - ip),
                end: iend,
            });
        }
        let offset = read_le16(src, ip) as usize;
        ip += 2;

        // ── Match length ──────────────────────────────────────────────────────
        let mut match_length = (token as u32 & ML_MASK) as usize;
        if match_length == ML_MASK as usize {
            match_length = match_length.saturating_add(read_variable_length(src, &mut ip, iend)?);
        }
        let match_length = match_length.saturating_add(MINMATCH);

        if offset == 0 || offset > op - low_prefix {
            return Err(DecompressError::InvalidMatchOffset {
                offset,
                position: op,
                window_start: low_prefix,
            });
        }
        if match_length > oend - op {
            return Err(DecompressError::DestinationOverflow {
                position: op,
                needed: match_length,
                capacity: oend,
            });
        }

        copy_match(dst, op, offset, match_length);
        op += match_length;

        // A block must end with a literal run; running out of input right
        // after a match means the closing sequence was cut off.
        if ip >= iend {
            return Err(DecompressError::TruncatedInput {
                position: ip,
                needed: 1,
                end: iend,
            });
        }
    }

    Ok(op)
}
