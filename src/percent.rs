// Copyright 2018-2021 the Deno authors. All rights reserved. MIT license.

//! Percent-codec over raw bytes. Decoding is tolerant: a `%` that is not
//! followed by two hex digits stays literal. Encoding takes a caller
//! supplied byte predicate and always emits uppercase hex.

use crate::byte_string::ByteString;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn hex_value(b: u8) -> Option<u8> {
  match b {
    b'0'..=b'9' => Some(b - b'0'),
    b'a'..=b'f' => Some(b - b'a' + 10),
    b'A'..=b'F' => Some(b - b'A' + 10),
    _ => None,
  }
}

/// Decodes every valid `%HH` triple exactly once.
pub fn decode_once(input: &[u8]) -> ByteString {
  let mut out = Vec::with_capacity(input.len());
  let mut i = 0;
  while i < input.len() {
    if input[i] == b'%' && i + 2 < input.len() {
      if let (Some(hi), Some(lo)) =
        (hex_value(input[i + 1]), hex_value(input[i + 2]))
      {
        out.push(hi << 4 | lo);
        i += 3;
        continue;
      }
    }
    out.push(input[i]);
    i += 1;
  }
  ByteString::from(out)
}

/// Applies [decode_once] until the bytes stop changing.
pub fn decode_to_fixed_point(input: &[u8]) -> ByteString {
  let mut current = ByteString::from(input);
  loop {
    let decoded = decode_once(&current);
    if decoded == current {
      return decoded;
    }
    current = decoded;
  }
}

/// Percent-encodes every byte for which `should_encode` returns true.
pub fn encode(input: &[u8], should_encode: fn(u8) -> bool) -> ByteString {
  let mut out = Vec::with_capacity(input.len());
  for &b in input {
    if should_encode(b) {
      out.push(b'%');
      out.push(HEX_UPPER[(b >> 4) as usize]);
      out.push(HEX_UPPER[(b & 0xf) as usize]);
    } else {
      out.push(b);
    }
  }
  ByteString::from(out)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decode_once() {
    assert_eq!(decode_once(b"%41%62c"), ByteString::from("Abc"));
    assert_eq!(decode_once(b"%2541"), ByteString::from("%41"));
    // invalid triples stay literal
    assert_eq!(decode_once(b"%zz%4"), ByteString::from("%zz%4"));
    assert_eq!(decode_once(b"100%"), ByteString::from("100%"));
    assert_eq!(decode_once(b"%00"), ByteString::from(&b"\x00"[..]));
  }

  #[test]
  fn test_decode_to_fixed_point() {
    assert_eq!(decode_to_fixed_point(b"%2541"), ByteString::from("A"));
    assert_eq!(decode_to_fixed_point(b"%252541"), ByteString::from("A"));
    assert_eq!(decode_to_fixed_point(b"%25"), ByteString::from("%"));
  }

  #[test]
  fn test_encode_uppercase_hex() {
    let encoded = encode(b"a b\xff", |b| b == b' ' || b >= 0x7f);
    assert_eq!(encoded, ByteString::from_text("a%20b%FF"));
  }

  #[test]
  fn test_encode_nothing() {
    assert_eq!(encode(b"plain", |_| false), ByteString::from("plain"));
  }
}
