//! # Escape Sequence Decoding
//!
//! Decodes `\xHH` escape sequences embedded in `.netrc` token values so that
//! credentials containing characters awkward to type literally can still be
//! stored in the file.

use std::sync::LazyLock;

use regex::Regex;

static ESCAPE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\\x([0-9a-fA-F]{2})").expect("Failed to compile escape sequence regex"));

/// Decode every `\xHH` escape sequence in a token.
///
/// Matches are replaced left to right, rescanning from the start of the
/// string after each substitution, so a replacement that exposes a fresh
/// `\xHH` sequence is decoded as well. Sequences with fewer than two hex
/// digits never match and are left verbatim; there is no error path.
///
/// # Examples
///
/// ```
/// use netrc::escape::decode;
///
/// assert_eq!(decode(r"\x61\x62"), "ab");
/// assert_eq!(decode(r"p\x40ss"), "p@ss");
/// assert_eq!(decode(r"\xZZ"), r"\xZZ");
/// ```
pub fn decode(token: &str) -> String {
  let mut text = token.to_string();

  while let Some((start, end)) = ESCAPE_PATTERN.find(&text).map(|m| (m.start(), m.end())) {
    let code =
      u8::from_str_radix(&text[start + 2..end], 16).expect("escape pattern matches exactly two hex digits");
    text.replace_range(start..end, char::from(code).encode_utf8(&mut [0; 4]));
  }

  text
}
