use std::borrow::Cow;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escape raw control bytes found inside JSON string literals
///
/// Exported archives (and the mojibake repair, which turns `\u000a` back into a raw newline)
/// leave bytes below 0x20 inside strings. Strict JSON rejects them, so each one is rewritten
/// as a `\u00XX` escape. Bytes outside string literals are never touched, and input that
/// needs no escaping is returned borrowed.
pub fn escape_control_chars(bytes: &[u8]) -> Cow<'_, [u8]> {
    let mut escaped_output: Option<Vec<u8>> = None;
    let mut in_string = false;
    let mut after_backslash = false;

    for (i, &byte) in bytes.iter().enumerate() {
        if in_string {
            if after_backslash {
                after_backslash = false;
            } else if byte == b'\\' {
                after_backslash = true;
            } else if byte == b'"' {
                in_string = false;
            } else if byte < 0x20 {
                let out = escaped_output.get_or_insert_with(|| {
                    let mut out = Vec::with_capacity(bytes.len() + 16);
                    out.extend_from_slice(&bytes[..i]);
                    out
                });
                out.extend_from_slice(&[
                    b'\\',
                    b'u',
                    b'0',
                    b'0',
                    HEX_DIGITS[usize::from(byte >> 4)],
                    HEX_DIGITS[usize::from(byte & 0x0f)],
                ]);
                continue;
            }
        } else if byte == b'"' {
            in_string = true;
        }

        if let Some(out) = escaped_output.as_mut() {
            out.push(byte);
        }
    }

    match escaped_output {
        Some(out) => Cow::Owned(out),
        None => Cow::Borrowed(bytes),
    }
}
