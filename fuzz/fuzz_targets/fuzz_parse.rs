#![no_main]
use libfuzzer_sys::fuzz_target;
use urlcanon::ParsedUrl;

fuzz_target!(|data: &[u8]| {
  let url = ParsedUrl::parse_bytes(data);
  // parsing is lossless for arbitrary bytes
  assert_eq!(url.to_bytes().as_bytes(), data);

  // canonicalization and ssurt are total
  let mut url = url;
  urlcanon::SEMANTIC_PRECISE.canonicalize(&mut url);
  let _ = url.ssurt();
});
