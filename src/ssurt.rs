// Copyright 2018-2021 the Deno authors. All rights reserved. MIT license.

//! SSURT: a serialization that sorts hierarchically. The host is reversed
//! into comma-delimited segments and moved to the front, then the
//! remaining slots follow in an order that groups urls by site, port and
//! scheme.

use crate::byte_string::ByteString;
use crate::ip;
use crate::ParsedUrl;

pub(crate) fn ssurt(url: &ParsedUrl) -> ByteString {
  let host = ssurt_host(&url.host);
  let slots: [&[u8]; 17] = [
    &url.leading_junk,
    &host,
    &url.slashes,
    &url.port,
    &url.colon_before_port,
    &url.scheme,
    &url.at_sign,
    &url.username,
    &url.colon_before_password,
    &url.password,
    &url.colon_after_scheme,
    &url.path,
    &url.question_mark,
    &url.query,
    &url.hash_sign,
    &url.fragment,
    &url.trailing_junk,
  ];
  let mut out = Vec::with_capacity(slots.iter().map(|s| s.len()).sum());
  for slot in &slots {
    out.extend_from_slice(slot);
  }
  ByteString::from(out)
}

// ip addresses and the empty host sort as themselves
pub(crate) fn ssurt_host(host: &[u8]) -> ByteString {
  if host.is_empty() || host[0] == b'[' || ip::parse_ipv4(host).is_some() {
    ByteString::from(host)
  } else {
    reverse_host(host)
  }
}

/// Reverses the dot-delimited host segments into a comma-delimited,
/// trailing-comma form that sorts hierarchically: `x,y.b.c` becomes
/// `c,b,x.y,`. Commas inside a segment turn into dots so the comma stays
/// an unambiguous delimiter.
pub fn reverse_host(host: &[u8]) -> ByteString {
  let mut segments: Vec<Vec<u8>> = host
    .split(|&b| b == b'.')
    .map(|segment| {
      segment
        .iter()
        .map(|&b| if b == b',' { b'.' } else { b })
        .collect()
    })
    .collect();
  segments.reverse();
  let mut out = Vec::with_capacity(host.len() + 1);
  for (i, segment) in segments.iter().enumerate() {
    if i > 0 {
      out.push(b',');
    }
    out.extend_from_slice(segment);
  }
  out.push(b',');
  ByteString::from(out)
}
