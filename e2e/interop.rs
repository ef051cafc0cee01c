//! E2E: interoperability with an external encoder
//!
//! The fixture below is a real LZ4 block captured from another LZ4
//! implementation (a 793-byte JSON document compressed to 330 bytes). It
//! mixes long literal runs, extended literal lengths, and many short
//! overlapping matches, and is decoded the way its consumer does: into a
//! larger pre-sized buffer whose tail is never touched.

use lz4_block::{decompress_block, decompress_block_to_vec, DecompressError};

const FIXTURE_BLOCK: &[u8] = &[
    0xf1, 0x16, 0x7b, 0x22, 0x62, 0x6f, 0x64, 0x79, 0x22, 0x3a, 0x7b, 0x22,
    0x69, 0x64, 0x22, 0x3a, 0x31, 0x39, 0x39, 0x36, 0x33, 0x38, 0x32, 0x30,
    0x32, 0x36, 0x2c, 0x22, 0x74, 0x65, 0x78, 0x22, 0x3a, 0x30, 0x2c, 0x22,
    0x70, 0x61, 0x74, 0x08, 0x00, 0x41, 0x6d, 0x61, 0x73, 0x6b, 0x09, 0x00,
    0xc0, 0x64, 0x79, 0x65, 0x22, 0x3a, 0x22, 0x28, 0x6e, 0x6f, 0x6e, 0x65,
    0x2c, 0x05, 0x00, 0x94, 0x29, 0x22, 0x7d, 0x2c, 0x22, 0x77, 0x69, 0x6e,
    0x67, 0x46, 0x00, 0x9f, 0x32, 0x36, 0x36, 0x38, 0x39, 0x38, 0x33, 0x34,
    0x31, 0x45, 0x00, 0x1d, 0x45, 0x68, 0x61, 0x69, 0x72, 0x45, 0x00, 0x9f,
    0x39, 0x32, 0x32, 0x38, 0x37, 0x30, 0x38, 0x30, 0x34, 0x46, 0x00, 0x1d,
    0x02, 0x1e, 0x00, 0x03, 0x46, 0x00, 0x8f, 0x35, 0x39, 0x32, 0x35, 0x30,
    0x31, 0x34, 0x33, 0xd1, 0x00, 0x1e, 0x35, 0x6e, 0x65, 0x63, 0x46, 0x00,
    0x9f, 0x33, 0x38, 0x30, 0x30, 0x38, 0x38, 0x34, 0x36, 0x39, 0xd2, 0x00,
    0x1e, 0x45, 0x66, 0x65, 0x65, 0x74, 0x5d, 0x01, 0x9f, 0x35, 0x33, 0x32,
    0x30, 0x39, 0x33, 0x39, 0x39, 0x30, 0x18, 0x01, 0x1e, 0x35, 0x6f, 0x72,
    0x6e, 0x8c, 0x00, 0x9f, 0x36, 0x38, 0x30, 0x34, 0x39, 0x39, 0x32, 0x32,
    0x39, 0x8c, 0x00, 0x1e, 0x35, 0x61, 0x63, 0x65, 0x46, 0x00, 0x9f, 0x35,
    0x39, 0x39, 0x39, 0x38, 0x36, 0x38, 0x38, 0x35, 0x46, 0x00, 0x1d, 0x45,
    0x70, 0x72, 0x6f, 0x70, 0x46, 0x00, 0x8f, 0x34, 0x31, 0x39, 0x32, 0x37,
    0x34, 0x32, 0x38, 0xd2, 0x00, 0x1f, 0x15, 0x61, 0x17, 0x01, 0x9f, 0x34,
    0x31, 0x37, 0x37, 0x39, 0x34, 0x33, 0x35, 0x36, 0xa3, 0x01, 0x1e, 0xf0,
    0x1b, 0x68, 0x65, 0x69, 0x67, 0x68, 0x74, 0x22, 0x3a, 0x31, 0x2e, 0x34,
    0x38, 0x38, 0x32, 0x35, 0x33, 0x38, 0x2c, 0x22, 0x73, 0x63, 0x61, 0x6c,
    0x65, 0x22, 0x3a, 0x2d, 0x30, 0x2e, 0x30, 0x33, 0x35, 0x38, 0x31, 0x34,
    0x35, 0x35, 0x2c, 0x22, 0x76, 0x6f, 0x69, 0xf9, 0x00, 0xb1, 0x31, 0x2c,
    0x22, 0x61, 0x74, 0x74, 0x69, 0x74, 0x75, 0x64, 0x65, 0x53, 0x00, 0x31,
    0x73, 0x65, 0x65, 0x21, 0x02, 0xf0, 0x08, 0x32, 0x30, 0x32, 0x2c, 0x22,
    0x72, 0x65, 0x66, 0x72, 0x65, 0x73, 0x68, 0x76, 0x65, 0x72, 0x73, 0x69,
    0x6f, 0x6e, 0x22, 0x3a, 0x30, 0x7d,
];

const FIXTURE_TEXT: &str = concat!(
    r#"{"body":{"id":1996382026,"tex":0,"pat":0,"mask":0,"dye":"(none,none)"},"wing":{""#,
    r#"id":266898341,"tex":0,"pat":0,"mask":0,"dye":"(none,none)"},"hair":{"id":2922870"#,
    r#"804,"tex":0,"pat":0,"mask":0,"dye":"(none,none)"},"mask":{"id":2592501436,"tex":"#,
    r#"0,"pat":0,"mask":0,"dye":"(none,none)"},"neck":{"id":3800884691,"tex":0,"pat":0,"#,
    r#""mask":0,"dye":"(none,none)"},"feet":{"id":1532093990,"tex":0,"pat":0,"mask":0,""#,
    r#"dye":"(none,none)"},"horn":{"id":3680499229,"tex":0,"pat":0,"mask":0,"dye":"(non"#,
    r#"e,none)"},"face":{"id":3599986885,"tex":0,"pat":0,"mask":0,"dye":"(none,none)"},"#,
    r#""prop":{"id":3419274280,"tex":0,"pat":0,"mask":0,"dye":"(none,none)"},"hat":{"id"#,
    r#"":4177943566,"tex":0,"pat":0,"mask":0,"dye":"(none,none)"},"height":1.4882538,"s"#,
    r#"cale":-0.03581455,"voice":1,"attitude":0,"seed":25202,"refreshversion":0}"#,
);

#[test]
fn fixture_decodes_to_expected_text() {
    let out = decompress_block_to_vec(FIXTURE_BLOCK, 2000).unwrap();
    assert_eq!(out.len(), 793);
    assert_eq!(std::str::from_utf8(&out).unwrap(), FIXTURE_TEXT);
}

#[test]
fn fixture_into_oversized_buffer() {
    let mut dst = vec![0u8; 2000];
    let end = decompress_block(FIXTURE_BLOCK, &mut dst, 0, FIXTURE_BLOCK.len(), 0).unwrap();
    assert_eq!(end, FIXTURE_TEXT.len());
    assert_eq!(&dst[..end], FIXTURE_TEXT.as_bytes());
    assert!(dst[end..].iter().all(|&b| b == 0));
}

#[test]
fn fixture_at_nonzero_offsets() {
    let mut src = vec![0u8; 7];
    src.extend_from_slice(FIXTURE_BLOCK);
    let mut dst = vec![0u8; 1024];
    let end = decompress_block(&src, &mut dst, 7, FIXTURE_BLOCK.len(), 200).unwrap();
    assert_eq!(&dst[200..end], FIXTURE_TEXT.as_bytes());
}

#[test]
fn fixture_agrees_with_lz4_flex() {
    let reference = lz4_flex::block::decompress(FIXTURE_BLOCK, 793).unwrap();
    assert_eq!(reference, FIXTURE_TEXT.as_bytes());
}

#[test]
fn fixture_truncated_by_one_byte() {
    let cut = &FIXTURE_BLOCK[..FIXTURE_BLOCK.len() - 1];
    assert!(matches!(
        decompress_block_to_vec(cut, 2000),
        Err(DecompressError::TruncatedInput { .. })
    ));
}
