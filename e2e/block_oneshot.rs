//! E2E: block decoding of output from a conformant encoder
//!
//! Every block here is produced by `lz4_flex` (an independent LZ4 block
//! encoder). The suite checks:
//! - round-trip: decoding reproduces the encoder's input exactly
//! - length accounting: `end - dst_start` equals the reference decoder's size
//! - offset-addressed decoding inside larger source / destination buffers
//! - linked blocks decoded against earlier output via the prefix API
//! - removing the final byte of any block reports `TruncatedInput`

extern crate lz4_block;

use lz4_block::{
    decompress_block, decompress_block_to_vec, decompress_block_with_prefix, decompress_safe,
    DecompressError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Payloads covering literal-heavy, match-heavy, and run-length inputs.
fn corpus() -> Vec<(&'static str, Vec<u8>)> {
    let mut rng = StdRng::seed_from_u64(0x4C5A_3442);
    let random: Vec<u8> = (0..8192).map(|_| rng.gen()).collect();
    let small_alphabet: Vec<u8> = (0..20_000).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();
    let mut mixed = Vec::new();
    for i in 0..200u32 {
        mixed.extend_from_slice(format!("record {:05} status=ok;", i % 37).as_bytes());
        mixed.extend((0..(i % 23)).map(|_| rng.gen::<u8>()));
    }

    vec![
        ("one_byte", vec![0x7F]),
        ("short_text", b"hello".to_vec()),
        ("repeated_sentence", b"The quick brown fox jumps over the lazy dog. ".repeat(40)),
        ("zeros_64k", vec![0u8; 65_536]),
        ("single_byte_run", vec![b'z'; 1000]),
        ("period_3", b"abc".repeat(3000)),
        ("ascending", (0..=255u8).cycle().take(70_000).collect()),
        ("random", random),
        ("small_alphabet", small_alphabet),
        ("mixed", mixed),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip and length accounting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn roundtrip_corpus() {
    init_logging();
    for (name, original) in corpus() {
        let compressed = lz4_flex::block::compress(&original);
        let mut dst = vec![0u8; original.len()];
        let n = decompress_safe(&compressed, &mut dst)
            .unwrap_or_else(|e| panic!("{name}: decode failed: {e}"));
        assert_eq!(n, original.len(), "{name}: length");
        assert_eq!(dst, original, "{name}: content");
    }
}

#[test]
fn length_matches_reference_decoder() {
    for (name, original) in corpus() {
        let compressed = lz4_flex::block::compress(&original);
        let reference = lz4_flex::block::decompress(&compressed, original.len()).unwrap();
        let ours = decompress_block_to_vec(&compressed, original.len() + 64).unwrap();
        assert_eq!(ours.len(), reference.len(), "{name}");
        assert_eq!(ours, reference, "{name}");
    }
}

#[test]
fn roundtrip_many_small_random_sizes() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in 0..300usize {
        // Half random bytes, half a short repeating motif, so both literal
        // and match paths get exercised at every size.
        let motif: Vec<u8> = (0..rng.gen_range(1..8)).map(|_| rng.gen()).collect();
        let original: Vec<u8> = (0..len)
            .map(|i| if i % 2 == 0 { rng.gen() } else { motif[i % motif.len()] })
            .chain(motif.iter().copied().cycle().take(len))
            .collect();
        let compressed = lz4_flex::block::compress(&original);
        let out = decompress_block_to_vec(&compressed, original.len()).unwrap();
        assert_eq!(out, original, "len {len}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Offset-addressed decoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_from_subrange_into_offset() {
    let original = b"offset-addressed block decoding, offset-addressed block decoding!".repeat(8);
    let compressed = lz4_flex::block::compress(&original);

    // Surround the block with bytes that would decode to garbage if read.
    let mut src = vec![0xF0; 13];
    src.extend_from_slice(&compressed);
    src.extend_from_slice(&[0xFF; 9]);

    let dst_start = 100;
    let mut dst = vec![0xAAu8; dst_start + original.len() + 50];
    let end = decompress_block(&src, &mut dst, 13, compressed.len(), dst_start).unwrap();

    assert_eq!(end - dst_start, original.len());
    assert_eq!(&dst[dst_start..end], &original[..]);
    assert!(dst[..dst_start].iter().all(|&b| b == 0xAA));
    assert!(dst[end..].iter().all(|&b| b == 0xAA));
}

#[test]
fn independent_blocks_back_to_back() {
    let parts = vec![
        b"first block first block first block".repeat(5),
        vec![9u8; 300],
        b"tail".to_vec(),
    ];
    let blocks: Vec<Vec<u8>> = parts.iter().map(|p| lz4_flex::block::compress(p)).collect();

    let total: usize = parts.iter().map(|p| p.len()).sum();
    let mut dst = vec![0u8; total];
    let mut op = 0;
    for block in &blocks {
        op = decompress_block(block, &mut dst, 0, block.len(), op).unwrap();
    }
    assert_eq!(op, total);
    assert_eq!(dst, parts.concat());
}

#[test]
fn linked_block_uses_prefix_history() {
    let dict = b"shared dictionary text that the second block refers back to. ".repeat(4);
    let input = b"the second block refers back to shared dictionary text. ".repeat(3);
    let compressed = lz4_flex::block::compress_with_dict(&input, &dict);

    let mut dst = dict.clone();
    dst.resize(dict.len() + input.len(), 0);
    let end =
        decompress_block_with_prefix(&compressed, &mut dst, 0, compressed.len(), 0, dict.len())
            .unwrap();
    assert_eq!(&dst[dict.len()..end], &input[..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Truncation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn removing_final_byte_reports_truncation() {
    for (name, original) in corpus() {
        let compressed = lz4_flex::block::compress(&original);
        let cut = &compressed[..compressed.len() - 1];
        let mut dst = vec![0u8; original.len()];
        match decompress_safe(cut, &mut dst) {
            Err(DecompressError::TruncatedInput { .. }) => {}
            other => panic!("{name}: expected TruncatedInput, got {other:?}"),
        }
    }
}
