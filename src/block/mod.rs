//! LZ4 block decompression.
//!
//! Decodes one self-contained LZ4 block payload; frame headers, checksums and
//! compression are handled elsewhere.

pub mod decompress_api;
pub mod decompress_core;
pub mod types;

// Re-export the most important public API items at the module level.
pub use decompress_api::{
    decompress_block, decompress_block_bounded, decompress_block_to_vec,
    decompress_block_with_prefix, decompress_safe,
};
pub use decompress_core::DecompressError;
pub use types::{LZ4_DISTANCE_MAX, MINMATCH};
