use std::borrow::Cow;
use std::sync::OnceLock;

use regex::bytes::{Captures, Regex};

/// Messenger exports write each byte of non-ASCII UTF-8 text as its own `\u00XX` escape.
fn mojibake_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\\u00([0-9a-f]{2})").expect("mojibake regex should compile"))
}

/// Replace every `\u00XX` escape in raw file bytes with the literal byte `0xXX`
///
/// Runs before JSON decoding so the byte sequence the exporter split apart becomes UTF-8
/// again. Bytes outside the pattern are left as they are, and input without the pattern
/// is returned borrowed.
///
/// # Examples
///
/// ```
/// use messenger_dialogues::parsers::repair_mojibake;
///
/// let repaired = repair_mojibake(br#"{"content":"Caf\u00c3\u00a9"}"#);
/// assert_eq!(&*repaired, r#"{"content":"Café"}"#.as_bytes());
/// ```
pub fn repair_mojibake(bytes: &[u8]) -> Cow<'_, [u8]> {
    mojibake_regex().replace_all(bytes, |caps: &Captures<'_>| {
        let hex = &caps[1];
        [(hex_value(hex[0]) << 4) | hex_value(hex[1])]
    })
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => 0,
    }
}
