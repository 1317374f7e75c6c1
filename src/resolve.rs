// Copyright 2018-2021 the Deno authors. All rights reserved. MIT license.

use crate::byte_string::ByteString;
use crate::ParsedUrl;

/// Resolves `relative` against `base`. Both inputs are already parsed and
/// neither is mutated; the result is a new record. Dot segments are left
/// alone, normalizing them is a canonicalization step.
pub fn resolve(base: &ParsedUrl, relative: &ParsedUrl) -> ParsedUrl {
  let mut url = relative.clone();

  // network-path relative: at most the scheme is missing
  if !url.slashes.is_empty() {
    if url.scheme.is_empty() {
      url.scheme = base.scheme.clone();
      url.colon_after_scheme = base.colon_after_scheme.clone();
    }
    return url;
  }

  // a different scheme resolves to the relative itself
  if !url.scheme.is_empty() && !url.scheme.eq_ignore_ascii_case(&base.scheme)
  {
    return url;
  }

  url.scheme = base.scheme.clone();
  url.colon_after_scheme = base.colon_after_scheme.clone();
  url.slashes = base.slashes.clone();
  url.username = base.username.clone();
  url.colon_before_password = base.colon_before_password.clone();
  url.password = base.password.clone();
  url.at_sign = base.at_sign.clone();
  url.host = base.host.clone();
  url.colon_before_port = base.colon_before_port.clone();
  url.port = base.port.clone();

  // a bare authority like `http:foo` parses with a host and an empty path;
  // relative to a base it is a path reference
  if url.path.is_empty() && !relative.host.is_empty() {
    url.path = relative.host.clone();
  }

  if url.path.is_empty() || url.path.starts_with(b"/") {
    return url;
  }
  let mut path = Vec::from(dirname(&base.path));
  path.extend_from_slice(&url.path);
  url.path = ByteString::from(path);
  url
}

// the base path up to and including its last slash
fn dirname(path: &[u8]) -> &[u8] {
  match path.iter().rposition(|&b| b == b'/') {
    Some(i) => &path[..=i],
    None => b"",
  }
}

#[cfg(test)]
mod tests {
  use super::resolve;
  use crate::ParsedUrl;

  fn resolve_text(base: &str, relative: &str) -> String {
    let base = ParsedUrl::parse(base);
    let relative = ParsedUrl::parse(relative);
    resolve(&base, &relative).to_bytes().to_text()
  }

  #[test]
  fn test_relative_path() {
    assert_eq!(
      resolve_text("http://example.com/a/b", "c/d"),
      "http://example.com/a/c/d"
    );
  }

  #[test]
  fn test_absolute_path() {
    assert_eq!(
      resolve_text("http://example.com/a/b", "/x"),
      "http://example.com/x"
    );
  }

  #[test]
  fn test_network_path() {
    assert_eq!(
      resolve_text("http://example.com/a", "//other.example/p"),
      "http://other.example/p"
    );
  }

  #[test]
  fn test_cross_scheme() {
    assert_eq!(
      resolve_text("http://example.com/a", "https://secure.example/"),
      "https://secure.example/"
    );
  }

  #[test]
  fn test_same_scheme_bare_authority() {
    assert_eq!(
      resolve_text("http://example.com/a/b", "http:c"),
      "http://example.com/a/c"
    );
  }

  #[test]
  fn test_userinfo_and_port_inherited() {
    assert_eq!(
      resolve_text("http://u:p@example.com:8080/a/b", "c"),
      "http://u:p@example.com:8080/a/c"
    );
  }

  #[test]
  fn test_base_without_slash_in_path() {
    assert_eq!(resolve_text("http://example.com", "c"), "http://example.comc");
  }

  #[test]
  fn test_inputs_unchanged() {
    let base = ParsedUrl::parse("http://example.com/a/b");
    let relative = ParsedUrl::parse("c");
    let _ = resolve(&base, &relative);
    assert_eq!(base.to_bytes().to_text(), "http://example.com/a/b");
    assert_eq!(relative.to_bytes().to_text(), "c");
  }
}
