#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Compress with an independent encoder, then decode with ours.
    let compressed = lz4_flex::block::compress(data);

    let recovered = lz4_block::decompress_block_to_vec(&compressed, data.len())
        .unwrap_or_else(|e| panic!("valid block rejected ({} bytes): {e}", compressed.len()));
    assert_eq!(
        recovered, data,
        "block round-trip mismatch: compressed {} bytes back to {} bytes (expected {})",
        compressed.len(),
        recovered.len(),
        data.len()
    );

    // Dropping the final byte of a non-empty block must be detected.
    if !data.is_empty() {
        let cut = &compressed[..compressed.len() - 1];
        assert!(matches!(
            lz4_block::decompress_block_to_vec(cut, data.len()),
            Err(lz4_block::DecompressError::TruncatedInput { .. })
        ));
    }
});
