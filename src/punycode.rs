// Copyright 2018-2021 the Deno authors. All rights reserved. MIT license.

//! The IDNA bridge. Hosts reach this module as raw bytes; they are read as
//! UTF-8 when valid and as Latin-1 otherwise, so no input can fail to make
//! it into the encoder. A host the encoder refuses passes through
//! unchanged.

use std::borrow::Cow;

use crate::byte_string::ByteString;

pub(crate) fn domain_to_ascii(host: &[u8]) -> ByteString {
  let text: Cow<str> = match std::str::from_utf8(host) {
    Ok(text) => Cow::Borrowed(text),
    Err(_) => Cow::Owned(host.iter().map(|&b| b as char).collect()),
  };
  match idna::domain_to_ascii(&text) {
    Ok(ascii) if !ascii.is_empty() => ByteString::from(ascii.into_bytes()),
    _ => {
      log::debug!(
        "punycoding failed for host {:?}, passing it through",
        ByteString::from(host)
      );
      ByteString::from(host)
    }
  }
}
