// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::codec::{
    base64_decode, base64_encode, base64url_decode, base64url_encode, hex_decode, hex_encode,
};
use crate::error::CodecError;

#[test]
fn test_hex_round_trip() {
    let data = [0xde, 0xad, 0xbe, 0xef];

    let encoded = hex_encode(&data);

    assert_eq!(encoded, "deadbeef");
    assert_eq!(hex_decode(&encoded).expect("Failed to decode"), data);
}

#[test]
fn test_hex_decode_accepts_uppercase() {
    assert_eq!(
        hex_decode("DEADBEEF").expect("Failed to decode"),
        [0xde, 0xad, 0xbe, 0xef]
    );
}

#[test]
fn test_hex_decode_empty_is_empty() {
    assert_eq!(hex_decode("").expect("Failed to decode"), Vec::<u8>::new());
}

#[test]
fn test_hex_decode_rejects_non_hex_characters() {
    assert_eq!(hex_decode("zz"), Err(CodecError::InvalidHex));
}

#[test]
fn test_hex_decode_rejects_odd_length() {
    assert_eq!(hex_decode("abc"), Err(CodecError::InvalidHex));
}

#[test]
fn test_base64_rfc4648_vectors() {
    // RFC 4648 §10.
    let vectors = [
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];

    for (plain, encoded) in vectors {
        assert_eq!(base64_encode(plain.as_bytes()), encoded);
        assert_eq!(
            base64_decode(encoded).expect("Failed to decode"),
            plain.as_bytes()
        );
    }
}

#[test]
fn test_base64url_is_unpadded_and_url_safe() {
    // 0xfb 0xef 0xff hits both alphabet positions that differ from the
    // standard engine.
    let data = [0xfb, 0xef, 0xff];

    assert_eq!(base64_encode(&data), "++//");
    assert_eq!(base64url_encode(&data), "--__");
    assert_eq!(base64url_encode(b"foob"), "Zm9vYg");

    assert_eq!(base64url_decode("--__").expect("Failed to decode"), data);
}

#[test]
fn test_base64_decode_empty_is_empty() {
    assert_eq!(base64_decode("").expect("Failed to decode"), Vec::<u8>::new());
    assert_eq!(
        base64url_decode("").expect("Failed to decode"),
        Vec::<u8>::new()
    );
}

#[test]
fn test_base64_decode_rejects_malformed_input() {
    assert_eq!(base64_decode("a"), Err(CodecError::InvalidBase64));
    assert_eq!(base64_decode("Zm9v!!"), Err(CodecError::InvalidBase64));

    // The URL-safe engine rejects the standard alphabet's padding.
    assert_eq!(
        base64url_decode("Zm9vYg=="),
        Err(CodecError::InvalidBase64)
    );
}
