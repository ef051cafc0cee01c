#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the block decompressor.
    // Err results are expected and fine; what we verify is no panics and that
    // a success never claims more output than the buffer holds.

    // Zero-length output buffer.
    {
        let mut dst = vec![0u8; 0];
        if let Ok(n) = lz4_block::decompress_safe(data, &mut dst) {
            assert_eq!(n, 0);
        }
    }

    // 4 KiB output buffer, decoded at a non-zero offset.
    {
        let mut dst = vec![0u8; 4096];
        if let Ok(end) = lz4_block::decompress_block(data, &mut dst, 0, data.len(), 17) {
            assert!((17..=4096).contains(&end));
        }
    }

    // Sub-range of the input with bytes on both sides that must not be read.
    if data.len() > 2 {
        let mut dst = vec![0u8; data.len() * 4];
        let _ = lz4_block::decompress_block(data, &mut dst, 1, data.len() - 2, 0);
    }

    // Large output buffer to stress long length extensions.
    {
        // Cap at 1 MiB so the fuzzer doesn't OOM on tiny inputs that claim huge output.
        let large = (data.len().saturating_mul(255)).min(1 << 20);
        let _ = lz4_block::decompress_block_to_vec(data, large);
    }
});
