// config.rs — Compile-time configuration constants.
//
// Nothing here is read at runtime: the decoder has no configuration files and
// no environment variables. The knobs are Cargo features folded into consts so
// the dispatch in block::types compiles down to a single path.

// Whether match copies may use the fill / bulk / repeating fast paths.
// Disabled by the `bytewise-match-copy` Cargo feature, which routes every match
// through the reference byte-at-a-time loop (same output, slower).
pub const FAST_MATCH_COPY: bool = !cfg!(feature = "bytewise-match-copy");

// Largest decompressed size `decompress_block_to_vec` will allocate for.
// Matches LZ4_MAX_INPUT_SIZE: no conformant encoder accepts more in one block.
pub const MAX_DECOMPRESSED_SIZE: usize = 0x7E00_0000;
