// Copyright 2018-2021 the Deno authors. All rights reserved. MIT license.

use std::fmt;

use derive_more::Deref;
use derive_more::From;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A Latin-1 transparent byte string.
///
/// URL slots hold raw bytes, not decoded text. Text enters and leaves
/// through a Latin-1 bijection (one code point per byte), so every input
/// byte survives a round-trip through `from_text`/`to_text`. Code points
/// above U+00FF cannot be a single byte and fall back to their UTF-8
/// encoding, keeping the constructor total.
#[derive(
  Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, From,
)]
pub struct ByteString(Vec<u8>);

impl ByteString {
  pub fn new() -> ByteString {
    ByteString(Vec::new())
  }

  pub fn from_text(text: &str) -> ByteString {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
      if (c as u32) <= 0xff {
        bytes.push(c as u32 as u8);
      } else {
        let mut buf = [0; 4];
        bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
      }
    }
    ByteString(bytes)
  }

  /// Decodes the bytes as Latin-1. Lossless for any byte value.
  pub fn to_text(&self) -> String {
    self.0.iter().map(|&b| b as char).collect()
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.0
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }

  pub fn to_ascii_lowercase(&self) -> ByteString {
    ByteString(self.0.to_ascii_lowercase())
  }
}

impl From<&[u8]> for ByteString {
  fn from(bytes: &[u8]) -> ByteString {
    ByteString(bytes.to_vec())
  }
}

impl From<&str> for ByteString {
  fn from(text: &str) -> ByteString {
    ByteString::from_text(text)
  }
}

impl fmt::Display for ByteString {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.to_text())
  }
}

impl fmt::Debug for ByteString {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "b\"")?;
    for &b in &self.0 {
      if (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\' {
        write!(f, "{}", b as char)?;
      } else {
        write!(f, "\\x{:02x}", b)?;
      }
    }
    write!(f, "\"")
  }
}

impl PartialEq<[u8]> for ByteString {
  fn eq(&self, other: &[u8]) -> bool {
    self.0 == other
  }
}

impl PartialEq<&[u8]> for ByteString {
  fn eq(&self, other: &&[u8]) -> bool {
    self.0 == *other
  }
}

impl Serialize for ByteString {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_text())
  }
}

impl<'de> Deserialize<'de> for ByteString {
  fn deserialize<D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<ByteString, D::Error> {
    struct Visitor;
    impl<'de> de::Visitor<'de> for Visitor {
      type Value = ByteString;
      fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a Latin-1 string")
      }
      fn visit_str<E: de::Error>(self, text: &str) -> Result<ByteString, E> {
        Ok(ByteString::from_text(text))
      }
    }
    deserializer.deserialize_str(Visitor)
  }
}

#[cfg(test)]
mod tests {
  use super::ByteString;

  #[test]
  fn test_latin1_round_trip() {
    let all_bytes: Vec<u8> = (0u8..=255).collect();
    let bs = ByteString::from(all_bytes.clone());
    assert_eq!(ByteString::from_text(&bs.to_text()), bs);
    assert_eq!(bs.as_bytes(), all_bytes.as_slice());
  }

  #[test]
  fn test_from_text_latin1() {
    let bs = ByteString::from_text("b\u{fc}cher.ch");
    assert_eq!(bs.as_bytes(), b"b\xfccher.ch" as &[u8]);
    assert_eq!(bs.to_text(), "b\u{fc}cher.ch");
  }

  #[test]
  fn test_from_text_above_latin1_is_utf8() {
    let bs = ByteString::from_text("\u{2603}");
    assert_eq!(bs.as_bytes(), "\u{2603}".as_bytes());
  }

  #[test]
  fn test_lowercase() {
    let bs = ByteString::from_text("HTTP\u{df}");
    assert_eq!(bs.to_ascii_lowercase().as_bytes(), b"http\xdf" as &[u8]);
  }
}
