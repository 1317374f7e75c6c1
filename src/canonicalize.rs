// Copyright 2018-2021 the Deno authors. All rights reserved. MIT license.

//! The canonicalization operations and the named pipelines composed from
//! them. Every operation is total: it takes a parsed url and mutates slots
//! in place, never failing. Pipelines are ordered lists of operations so
//! each step stays testable in isolation.

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::byte_string::ByteString;
use crate::ip;
use crate::parser;
use crate::parser::clean_scheme;
use crate::parser::is_special_scheme;
use crate::parser::special_scheme_default_port;
use crate::percent;
use crate::punycode;
use crate::ParsedUrl;

lazy_static! {
  static ref LEADING_DOTS_REGEX: Regex =
    Regex::new(r"(?-u)\A\.+").expect("failed to compile leading dots regex");
  static ref TRAILING_DOTS_REGEX: Regex =
    Regex::new(r"(?-u)\.+\z").expect("failed to compile trailing dots regex");
  static ref DOT_RUNS_REGEX: Regex =
    Regex::new(r"(?-u)\.\.+").expect("failed to compile dot runs regex");
  static ref SLASH_RUNS_REGEX: Regex =
    Regex::new(r"(?-u)//+").expect("failed to compile slash runs regex");
  static ref WWW_PREFIX_REGEX: Regex = Regex::new(r"(?-u)\Awww[0-9]*\.")
    .expect("failed to compile www prefix regex");
  // Whole query params that look like session ids, bounded by `&` or the
  // ends of the query. The bounds are consumed (the regex crate has no
  // lookaround); the rewrite re-glues and loops to a fixed point.
  static ref QUERY_SESSIONID_REGEX: Regex = Regex::new(
    r"(?i-u)(?:\A|&)(?:jsessionid=[0-9a-z$]{10,}|sessionid=[0-9a-z]{16,}|phpsessid=[0-9a-z]{16,}|sid=[0-9a-z]{16,}|aspsessionid[a-z]{8}=[0-9a-z]{16,}|cfid=[0-9]+&cftoken=[0-9a-z\-]+)(?:&|\z)"
  )
  .expect("failed to compile query sessionid regex");
  static ref ASPX_SUFFIX_REGEX: Regex = Regex::new(r"(?i-u)\.aspx\z")
    .expect("failed to compile aspx suffix regex");
  // Cookieless ASP.NET path segments: /(24 chars)/ or /(s(24 chars))/
  static ref ASPX_PATH_SESSIONID_REGEX: Regex = Regex::new(
    r"(?i-u)/\((?:[0-9a-z]{24}|(?:[a-z]\([0-9a-z]{24}\))+)\)/"
  )
  .expect("failed to compile aspx path sessionid regex");
  static ref TRAILING_JSESSIONID_REGEX: Regex =
    Regex::new(r"(?i-u);jsessionid=[0-9a-z]{32}\z")
      .expect("failed to compile trailing jsessionid regex");
  static ref AMP_RUNS_REGEX: Regex =
    Regex::new(r"(?-u)&&+").expect("failed to compile amp runs regex");
  static ref LEADING_AMPS_REGEX: Regex =
    Regex::new(r"(?-u)\A&+").expect("failed to compile leading amps regex");
  static ref TRAILING_AMPS_REGEX: Regex =
    Regex::new(r"(?-u)&+\z").expect("failed to compile trailing amps regex");
}

fn special(url: &ParsedUrl) -> bool {
  is_special_scheme(&clean_scheme(&url.scheme))
}

fn without_tabs_and_newlines(bytes: &[u8]) -> ByteString {
  ByteString::from(
    bytes
      .iter()
      .filter(|&&b| !matches!(b, b'\r' | b'\n' | b'\t'))
      .copied()
      .collect::<Vec<u8>>(),
  )
}

// Numeric port value, tolerant of leading zeros. None for anything that is
// not all digits.
fn port_number(port: &[u8]) -> Option<u32> {
  if port.is_empty() || !port.iter().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let digits = match port.iter().position(|&b| b != b'0') {
    Some(i) => &port[i..],
    None => return Some(0),
  };
  if digits.len() > 9 {
    return None;
  }
  let mut value: u32 = 0;
  for &b in digits {
    value = value * 10 + u32::from(b - b'0');
  }
  Some(value)
}

// WHATWG percent-encode sets.
// Ref: https://url.spec.whatwg.org/#percent-encoded-bytes
fn in_c0_set(b: u8) -> bool {
  b <= 0x1f || b >= 0x7f
}

fn in_fragment_set(b: u8) -> bool {
  in_c0_set(b) || matches!(b, b' ' | b'"' | b'<' | b'>' | b'`')
}

fn in_query_set(b: u8) -> bool {
  in_c0_set(b) || matches!(b, b' ' | b'"' | b'#' | b'<' | b'>')
}

fn in_path_set(b: u8) -> bool {
  in_query_set(b) || matches!(b, b'?' | b'`' | b'{' | b'}')
}

fn in_userinfo_set(b: u8) -> bool {
  in_path_set(b)
    || matches!(
      b,
      b'/' | b':' | b';' | b'=' | b'@' | b'[' | b'\\' | b']' | b'^' | b'|'
    )
}

// The semantic canonicalizers re-encode far less than WHATWG does.
fn in_semantic_set(b: u8) -> bool {
  b <= 0x20 || b >= 0x7f || b == b'#' || b == b'%'
}

fn in_semantic_userinfo_set(b: u8) -> bool {
  in_semantic_set(b) || b == b':' || b == b'@'
}

fn in_semantic_path_set(b: u8) -> bool {
  in_semantic_set(b) || b == b'?'
}

fn in_semantic_query_set(b: u8) -> bool {
  in_semantic_set(b) || b == b'&' || b == b'='
}

pub fn remove_leading_trailing_junk(url: &mut ParsedUrl) {
  url.leading_junk.clear();
  url.trailing_junk.clear();
}

pub fn remove_tabs_and_newlines(url: &mut ParsedUrl) {
  for slot in [
    &mut url.scheme,
    &mut url.colon_after_scheme,
    &mut url.slashes,
    &mut url.username,
    &mut url.colon_before_password,
    &mut url.password,
    &mut url.at_sign,
    &mut url.host,
    &mut url.colon_before_port,
    &mut url.port,
    &mut url.path,
    &mut url.question_mark,
    &mut url.query,
    &mut url.hash_sign,
    &mut url.fragment,
  ] {
    *slot = without_tabs_and_newlines(slot);
  }
}

pub fn lowercase_scheme(url: &mut ParsedUrl) {
  url.scheme = url.scheme.to_ascii_lowercase();
}

pub fn fix_backslashes(url: &mut ParsedUrl) {
  if !special(url) {
    return;
  }
  for slot in [&mut url.slashes, &mut url.path] {
    *slot = ByteString::from(
      slot
        .iter()
        .map(|&b| if b == b'\\' { b'/' } else { b })
        .collect::<Vec<u8>>(),
    );
  }
}

pub fn elide_default_port(url: &mut ParsedUrl) {
  let default = match special_scheme_default_port(&clean_scheme(&url.scheme))
  {
    Some(port) => port,
    None => return,
  };
  if port_number(&url.port) == Some(default) {
    url.port.clear();
    url.colon_before_port.clear();
  }
}

pub fn clean_up_userinfo(url: &mut ParsedUrl) {
  if url.at_sign.is_empty() {
    url.username.clear();
    url.colon_before_password.clear();
    url.password.clear();
  } else if url.colon_before_password.is_empty() {
    url.password.clear();
  }
}

/// Normalizes the slashes run to exactly `//`. Fires for special schemes
/// with slashes or a host: a bare authority (`http:example.com`, or the
/// result of `default_scheme_http` re-parsing) gains its `//` here.
pub fn two_slashes(url: &mut ParsedUrl) {
  if special(url) && (!url.slashes.is_empty() || !url.host.is_empty()) {
    url.slashes = ByteString::from("//");
  }
}

/// Decodes every valid percent triple in every component once.
pub fn pct_decode(url: &mut ParsedUrl) {
  for slot in [
    &mut url.scheme,
    &mut url.username,
    &mut url.password,
    &mut url.host,
    &mut url.port,
    &mut url.path,
    &mut url.query,
    &mut url.fragment,
  ] {
    *slot = percent::decode_once(slot);
  }
}

pub fn normalize_ip_address(url: &mut ParsedUrl) {
  if url.host.is_empty() {
    return;
  }
  if url.host.starts_with(b"[") {
    if let Some(normalized) = ip::normalize_ipv6(&url.host) {
      url.host = normalized;
    }
  } else if let Some(ipv4) = ip::parse_ipv4(&url.host) {
    url.host = ip::format_ipv4(ipv4);
  }
}

pub fn punycode_special_host(url: &mut ParsedUrl) {
  let scheme = clean_scheme(&url.scheme);
  if is_special_scheme(&scheme)
    && scheme != b"file"
    && !url.host.is_empty()
    && !url.host.starts_with(b"[")
  {
    url.host = punycode::domain_to_ascii(&url.host);
  }
}

/// Re-encodes each slot with the WHATWG encode set for that slot. The host
/// is only touched for non-special schemes (opaque hosts).
pub fn whatwg_pct_encode(url: &mut ParsedUrl) {
  url.username = percent::encode(&url.username, in_userinfo_set);
  url.password = percent::encode(&url.password, in_userinfo_set);
  if !special(url) {
    url.host = percent::encode(&url.host, in_c0_set);
  }
  url.path = percent::encode(&url.path, in_path_set);
  url.query = percent::encode(&url.query, in_query_set);
  url.fragment = percent::encode(&url.fragment, in_fragment_set);
}

pub fn leading_slash(url: &mut ParsedUrl) {
  if special(url) && !url.path.is_empty() && !url.path.starts_with(b"/") {
    let mut path = Vec::with_capacity(url.path.len() + 1);
    path.push(b'/');
    path.extend_from_slice(&url.path);
    url.path = ByteString::from(path);
  }
}

fn pop_segment(output: &mut Vec<u8>) {
  match output.iter().rposition(|&b| b == b'/') {
    Some(i) => output.truncate(i),
    None => output.clear(),
  }
}

// Ref: https://tools.ietf.org/html/rfc3986#section-5.2.4
fn remove_dot_segments(path: &[u8]) -> Vec<u8> {
  let mut input: &[u8] = path;
  let mut output: Vec<u8> = Vec::with_capacity(path.len());
  while !input.is_empty() {
    if input.starts_with(b"../") {
      input = &input[3..];
    } else if input.starts_with(b"./") {
      input = &input[2..];
    } else if input.starts_with(b"/./") {
      input = &input[2..];
    } else if input == b"/." {
      input = b"/";
    } else if input.starts_with(b"/../") {
      input = &input[3..];
      pop_segment(&mut output);
    } else if input == b"/.." {
      input = b"/";
      pop_segment(&mut output);
    } else if input == b"." || input == b".." {
      input = b"";
    } else {
      let start = if input[0] == b'/' { 1 } else { 0 };
      let end = input[start..]
        .iter()
        .position(|&b| b == b'/')
        .map(|i| i + start)
        .unwrap_or_else(|| input.len());
      output.extend_from_slice(&input[..end]);
      input = &input[end..];
    }
  }
  output
}

pub fn normalize_path_dots(url: &mut ParsedUrl) {
  if !special(url) || url.path.is_empty() {
    return;
  }
  url.path = ByteString::from(remove_dot_segments(&url.path));
}

pub fn empty_path_to_slash(url: &mut ParsedUrl) {
  if special(url) && url.path.is_empty() {
    url.path = ByteString::from("/");
  }
}

/// Gives schemeless urls the http scheme and re-splits the path to recover
/// the authority that landed there when the url was parsed without one.
pub fn default_scheme_http(url: &mut ParsedUrl) {
  if !url.scheme.is_empty() {
    return;
  }
  url.scheme = ByteString::from("http");
  url.colon_after_scheme = ByteString::from(":");
  if url.host.is_empty() && url.slashes.is_empty() && !url.path.is_empty() {
    let pathish = std::mem::take(&mut url.path);
    parser::parse_pathish(url, &pathish);
  }
}

pub fn pct_decode_repeatedly_except_query(url: &mut ParsedUrl) {
  for slot in [
    &mut url.scheme,
    &mut url.username,
    &mut url.password,
    &mut url.host,
    &mut url.port,
    &mut url.path,
    &mut url.fragment,
  ] {
    *slot = percent::decode_to_fixed_point(slot);
  }
}

pub fn fix_host_dots(url: &mut ParsedUrl) {
  if url.host.is_empty() {
    return;
  }
  let host = LEADING_DOTS_REGEX.replace(url.host.as_bytes(), &b""[..]);
  let host = TRAILING_DOTS_REGEX.replace(host.as_ref(), &b""[..]);
  let host = DOT_RUNS_REGEX.replace_all(host.as_ref(), &b"."[..]);
  url.host = ByteString::from(host.into_owned());
}

pub fn remove_userinfo(url: &mut ParsedUrl) {
  url.username.clear();
  url.colon_before_password.clear();
  url.password.clear();
  url.at_sign.clear();
}

pub fn less_dumb_pct_encode(url: &mut ParsedUrl) {
  url.scheme = percent::encode(&url.scheme, in_semantic_set);
  url.username = percent::encode(&url.username, in_semantic_userinfo_set);
  url.password = percent::encode(&url.password, in_semantic_userinfo_set);
  url.host = percent::encode(&url.host, in_semantic_set);
  url.port = percent::encode(&url.port, in_semantic_set);
  url.path = percent::encode(&url.path, in_semantic_path_set);
  url.fragment = percent::encode(&url.fragment, in_semantic_set);
}

fn recode_query_side(side: &[u8]) -> ByteString {
  percent::encode(
    &percent::decode_to_fixed_point(side),
    in_semantic_query_set,
  )
}

/// Splits the query on `&`, each param on its first `=`, and re-encodes
/// both sides from their fully decoded form.
pub fn less_dumb_pct_recode_query(url: &mut ParsedUrl) {
  if url.query.is_empty() {
    return;
  }
  let mut out: Vec<u8> = Vec::with_capacity(url.query.len());
  for (i, param) in url.query.split(|&b| b == b'&').enumerate() {
    if i > 0 {
      out.push(b'&');
    }
    match param.iter().position(|&b| b == b'=') {
      Some(eq) => {
        out.extend_from_slice(&recode_query_side(&param[..eq]));
        out.push(b'=');
        out.extend_from_slice(&recode_query_side(&param[eq + 1..]));
      }
      None => out.extend_from_slice(&recode_query_side(param)),
    }
  }
  url.query = ByteString::from(out);
}

pub fn collapse_consecutive_slashes(url: &mut ParsedUrl) {
  if !special(url) {
    return;
  }
  url.path = ByteString::from(
    SLASH_RUNS_REGEX
      .replace_all(url.path.as_bytes(), &b"/"[..])
      .into_owned(),
  );
}

/// Sorts query params byte-lexicographically. Empty params survive and
/// sort first.
pub fn alpha_reorder_query(url: &mut ParsedUrl) {
  if url.query.is_empty() {
    return;
  }
  let mut params: Vec<&[u8]> = url.query.split(|&b| b == b'&').collect();
  params.sort();
  let mut out = Vec::with_capacity(url.query.len());
  for (i, param) in params.iter().enumerate() {
    if i > 0 {
      out.push(b'&');
    }
    out.extend_from_slice(param);
  }
  url.query = ByteString::from(out);
}

pub fn https_to_http(url: &mut ParsedUrl) {
  if url.scheme.eq_ignore_ascii_case(b"https") {
    url.scheme = ByteString::from("http");
  }
}

pub fn strip_www(url: &mut ParsedUrl) {
  url.host = ByteString::from(
    WWW_PREFIX_REGEX
      .replace(url.host.as_bytes(), &b""[..])
      .into_owned(),
  );
}

pub fn lowercase_path(url: &mut ParsedUrl) {
  url.path = url.path.to_ascii_lowercase();
}

pub fn lowercase_query(url: &mut ParsedUrl) {
  url.query = url.query.to_ascii_lowercase();
}

pub fn strip_session_ids_from_query(url: &mut ParsedUrl) {
  loop {
    let (start, end) = match QUERY_SESSIONID_REGEX.find(&url.query) {
      Some(m) => (m.start(), m.end()),
      None => break,
    };
    let matched = &url.query[start..end];
    let glue: &[u8] =
      if matched.first() == Some(&b'&') && matched.last() == Some(&b'&') {
        b"&"
      } else {
        b""
      };
    let mut rebuilt = Vec::with_capacity(url.query.len());
    rebuilt.extend_from_slice(&url.query[..start]);
    rebuilt.extend_from_slice(glue);
    rebuilt.extend_from_slice(&url.query[end..]);
    url.query = ByteString::from(rebuilt);
  }
}

pub fn strip_session_ids_from_path(url: &mut ParsedUrl) {
  if ASPX_SUFFIX_REGEX.is_match(&url.path) {
    loop {
      let replaced = ASPX_PATH_SESSIONID_REGEX
        .replace_all(url.path.as_bytes(), &b"/"[..]);
      if replaced.as_ref() == url.path.as_bytes() {
        break;
      }
      url.path = ByteString::from(replaced.into_owned());
    }
  }
  url.path = ByteString::from(
    TRAILING_JSESSIONID_REGEX
      .replace(url.path.as_bytes(), &b""[..])
      .into_owned(),
  );
}

pub fn remove_redundant_ampersands_from_query(url: &mut ParsedUrl) {
  if url.query.is_empty() {
    return;
  }
  let query = AMP_RUNS_REGEX.replace_all(url.query.as_bytes(), &b"&"[..]);
  let query = LEADING_AMPS_REGEX.replace(query.as_ref(), &b""[..]);
  let query = TRAILING_AMPS_REGEX.replace(query.as_ref(), &b""[..]);
  url.query = ByteString::from(query.into_owned());
}

pub fn strip_trailing_slash_unless_empty(url: &mut ParsedUrl) {
  if url.path.len() > 1 && url.path.ends_with(b"/") {
    let len = url.path.len();
    url.path = ByteString::from(&url.path[..len - 1]);
  }
}

pub fn omit_question_mark_if_query_empty(url: &mut ParsedUrl) {
  if url.query.is_empty() {
    url.question_mark.clear();
  }
}

/// An ordered list of canonicalization operations.
pub struct Canonicalizer {
  steps: &'static [fn(&mut ParsedUrl)],
}

impl Canonicalizer {
  pub fn canonicalize(&self, url: &mut ParsedUrl) {
    for step in self.steps {
      step(url);
    }
  }

  pub fn steps(&self) -> &'static [fn(&mut ParsedUrl)] {
    self.steps
  }
}

/// WHATWG-conformant normalization: what a browser address bar would do.
pub static WHATWG: Canonicalizer = Canonicalizer {
  steps: &[
    remove_leading_trailing_junk,
    remove_tabs_and_newlines,
    lowercase_scheme,
    elide_default_port,
    clean_up_userinfo,
    two_slashes,
    normalize_ip_address,
    punycode_special_host,
    whatwg_pct_encode,
    fix_backslashes,
    leading_slash,
    normalize_path_dots,
    empty_path_to_slash,
  ],
};

/// WHATWG plus semantic cleanups that do not lose information a server
/// could reasonably distinguish on.
pub static SEMANTIC_PRECISE: Canonicalizer = Canonicalizer {
  steps: &[
    remove_leading_trailing_junk,
    default_scheme_http,
    remove_tabs_and_newlines,
    lowercase_scheme,
    elide_default_port,
    clean_up_userinfo,
    two_slashes,
    pct_decode_repeatedly_except_query,
    normalize_ip_address,
    fix_host_dots,
    punycode_special_host,
    remove_userinfo,
    less_dumb_pct_encode,
    less_dumb_pct_recode_query,
    fix_backslashes,
    leading_slash,
    normalize_path_dots,
    collapse_consecutive_slashes,
    empty_path_to_slash,
    alpha_reorder_query,
  ],
};

/// SEMANTIC_PRECISE plus dropping a dangling `?`.
pub static SEMANTIC: Canonicalizer = Canonicalizer {
  steps: &[
    remove_leading_trailing_junk,
    default_scheme_http,
    remove_tabs_and_newlines,
    lowercase_scheme,
    elide_default_port,
    clean_up_userinfo,
    two_slashes,
    pct_decode_repeatedly_except_query,
    normalize_ip_address,
    fix_host_dots,
    punycode_special_host,
    remove_userinfo,
    less_dumb_pct_encode,
    less_dumb_pct_recode_query,
    fix_backslashes,
    leading_slash,
    normalize_path_dots,
    collapse_consecutive_slashes,
    empty_path_to_slash,
    alpha_reorder_query,
    omit_question_mark_if_query_empty,
  ],
};

/// Fuzzy-match canonicalization for deduplication: merges urls that very
/// likely name the same resource even when the bytes differ.
pub static AGGRESSIVE: Canonicalizer = Canonicalizer {
  steps: &[
    remove_leading_trailing_junk,
    default_scheme_http,
    remove_tabs_and_newlines,
    lowercase_scheme,
    elide_default_port,
    clean_up_userinfo,
    two_slashes,
    pct_decode_repeatedly_except_query,
    normalize_ip_address,
    fix_host_dots,
    punycode_special_host,
    remove_userinfo,
    less_dumb_pct_encode,
    less_dumb_pct_recode_query,
    fix_backslashes,
    leading_slash,
    normalize_path_dots,
    collapse_consecutive_slashes,
    empty_path_to_slash,
    alpha_reorder_query,
    https_to_http,
    strip_www,
    lowercase_path,
    lowercase_query,
    strip_session_ids_from_query,
    strip_session_ids_from_path,
    strip_trailing_slash_unless_empty,
    remove_redundant_ampersands_from_query,
    omit_question_mark_if_query_empty,
    alpha_reorder_query,
  ],
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_elide_default_port() {
    let mut url = ParsedUrl::parse("http://example.com:80/");
    elide_default_port(&mut url);
    assert!(url.port.is_empty());
    assert!(url.colon_before_port.is_empty());

    let mut url = ParsedUrl::parse("http://example.com:0080/");
    elide_default_port(&mut url);
    assert!(url.port.is_empty());

    let mut url = ParsedUrl::parse("http://example.com:8080/");
    elide_default_port(&mut url);
    assert_eq!(url.port, ByteString::from("8080"));

    // wrong scheme for that port
    let mut url = ParsedUrl::parse("ftp://example.com:80/");
    elide_default_port(&mut url);
    assert_eq!(url.port, ByteString::from("80"));

    // file has no default port
    let mut url = ParsedUrl::parse("file://host:80/x");
    elide_default_port(&mut url);
    assert_eq!(url.port, ByteString::from(""));
  }

  #[test]
  fn test_two_slashes_bare_authority() {
    let mut url = ParsedUrl::parse("http:example.com");
    assert!(url.slashes.is_empty());
    two_slashes(&mut url);
    assert_eq!(url.slashes, ByteString::from("//"));

    // opaque urls are left alone
    let mut url = ParsedUrl::parse("foo:bar");
    two_slashes(&mut url);
    assert!(url.slashes.is_empty());
  }

  #[test]
  fn test_clean_up_userinfo() {
    let mut url = ParsedUrl::parse("http://example.com/");
    url.username = ByteString::from("stray");
    url.password = ByteString::from("stray");
    clean_up_userinfo(&mut url);
    assert!(url.username.is_empty());
    assert!(url.password.is_empty());

    let mut url = ParsedUrl::parse("http://user@example.com/");
    url.password = ByteString::from("stray");
    clean_up_userinfo(&mut url);
    assert_eq!(url.username, ByteString::from("user"));
    assert!(url.password.is_empty());
  }

  #[test]
  fn test_fix_host_dots() {
    let mut url = ParsedUrl::parse("http://..example...com../");
    fix_host_dots(&mut url);
    assert_eq!(url.host, ByteString::from("example.com"));
  }

  #[test]
  fn test_normalize_path_dots() {
    for (path, expected) in [
      ("/a/b/../c", "/a/c"),
      ("/a/./b", "/a/b"),
      ("/a/b/..", "/a/"),
      ("/..", "/"),
      ("/a/../../b", "/b"),
      ("/..../", "/..../"),
    ] {
      let mut url = ParsedUrl::parse("http://example.com/");
      url.path = ByteString::from(path);
      normalize_path_dots(&mut url);
      assert_eq!(url.path, ByteString::from(expected), "path {:?}", path);
    }
  }

  #[test]
  fn test_default_scheme_http_recovers_authority() {
    let mut url = ParsedUrl::parse("www.example.com/foo");
    default_scheme_http(&mut url);
    assert_eq!(url.scheme, ByteString::from("http"));
    assert_eq!(url.host, ByteString::from("www.example.com"));
    assert_eq!(url.path, ByteString::from("/foo"));

    // an existing authority is not reparsed
    let mut url = ParsedUrl::parse("//host/x");
    default_scheme_http(&mut url);
    assert_eq!(url.host, ByteString::from("host"));
    assert_eq!(url.path, ByteString::from("/x"));
  }

  #[test]
  fn test_alpha_reorder_query_keeps_empty_params() {
    let mut url = ParsedUrl::parse("http://x/?b=2&a=1&");
    alpha_reorder_query(&mut url);
    assert_eq!(url.query, ByteString::from("&a=1&b=2"));
  }

  #[test]
  fn test_strip_session_ids_from_query_adjacent() {
    let mut url = ParsedUrl::parse(
      "http://x/?sid=aaaaaaaaaaaaaaaa&sid=bbbbbbbbbbbbbbbb",
    );
    strip_session_ids_from_query(&mut url);
    assert!(url.query.is_empty());

    let mut url = ParsedUrl::parse(
      "http://x/?a=1&phpsessid=0123456789abcdef&b=2",
    );
    strip_session_ids_from_query(&mut url);
    assert_eq!(url.query, ByteString::from("a=1&b=2"));

    // too short to be a session id
    let mut url = ParsedUrl::parse("http://x/?sid=abc");
    strip_session_ids_from_query(&mut url);
    assert_eq!(url.query, ByteString::from("sid=abc"));
  }

  #[test]
  fn test_strip_session_ids_from_path() {
    let mut url = ParsedUrl::parse(
      "http://x/a/(s(lit3py55t21z5v55vlm25s55))/b.aspx",
    );
    strip_session_ids_from_path(&mut url);
    assert_eq!(url.path, ByteString::from("/a/b.aspx"));

    // the aspx segment form is only stripped from aspx paths
    let mut url = ParsedUrl::parse(
      "http://x/a/(s(lit3py55t21z5v55vlm25s55))/b.html",
    );
    strip_session_ids_from_path(&mut url);
    assert_eq!(
      url.path,
      ByteString::from("/a/(s(lit3py55t21z5v55vlm25s55))/b.html")
    );
  }

  #[test]
  fn test_remove_redundant_ampersands() {
    let mut url = ParsedUrl::parse("http://x/?&&a&&&b&&");
    remove_redundant_ampersands_from_query(&mut url);
    assert_eq!(url.query, ByteString::from("a&b"));
  }

  #[test]
  fn test_strip_trailing_slash_unless_empty() {
    let mut url = ParsedUrl::parse("http://x/a/");
    strip_trailing_slash_unless_empty(&mut url);
    assert_eq!(url.path, ByteString::from("/a"));

    let mut url = ParsedUrl::parse("http://x/");
    strip_trailing_slash_unless_empty(&mut url);
    assert_eq!(url.path, ByteString::from("/"));
  }

  #[test]
  fn test_pct_decode_once() {
    let mut url = ParsedUrl::parse("http://x/%2541?%41");
    pct_decode(&mut url);
    assert_eq!(url.path, ByteString::from("/%41"));
    assert_eq!(url.query, ByteString::from("A"));
  }

  #[test]
  fn test_pipelines_are_inspectable() {
    assert_eq!(WHATWG.steps().len(), 13);
    assert!(AGGRESSIVE.steps().len() > SEMANTIC_PRECISE.steps().len());
  }
}
