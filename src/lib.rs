// lz4-block — safe LZ4 block decompression

pub mod block;
pub mod config;

// ── Version constants ────────────────────────────────────────────────────────
pub const LZ4_BLOCK_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    LZ4_BLOCK_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::decompress_api::decompress_safe as lz4_decompress_safe;
pub use block::{
    decompress_block, decompress_block_bounded, decompress_block_to_vec,
    decompress_block_with_prefix, decompress_safe, DecompressError, LZ4_DISTANCE_MAX, MINMATCH,
};
