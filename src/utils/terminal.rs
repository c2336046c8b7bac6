//! Sanitizing message text before it is printed
//!
//! Message content comes straight from the archive, so the `conversation` command runs every
//! line through [`display_line`] before printing it. ANSI CSI sequences and control
//! characters are removed and embedded line breaks are shown as a visible `⏎` so that each
//! dialogue line occupies exactly one terminal line.

use std::sync::OnceLock;

use regex::Regex;

fn csi_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("csi regex should compile"))
}

/// Strips ANSI CSI escape codes and control characters other than tab and line breaks
///
/// # Examples
///
/// ```
/// use messenger_dialogues::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    csi_regex()
        .replace_all(text, "")
        .chars()
        .filter(|&ch| !ch.is_control() || matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}

/// One printable line for a dialogue entry
pub fn display_line(line: &str) -> String {
    strip_ansi_codes(line).replace("\r\n", "⏎").replace(['\n', '\r'], "⏎")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_codes_color() {
        assert_eq!(strip_ansi_codes("\x1b[31mRed text\x1b[0m normal"), "Red text normal");
    }

    #[test]
    fn test_strip_ansi_codes_cursor_movement() {
        assert_eq!(strip_ansi_codes("\x1b[2J\x1b[H Cleared screen"), " Cleared screen");
    }

    #[test]
    fn test_strip_ansi_codes_bell_and_backspace() {
        assert_eq!(strip_ansi_codes("Alert! \x07Test\x08"), "Alert! Test");
    }

    #[test]
    fn test_strip_ansi_codes_unicode() {
        let text = "<other> 👍 \x1b[31mok\x1b[0m 🙂";
        assert_eq!(strip_ansi_codes(text), "<other> 👍 ok 🙂");
    }

    #[test]
    fn test_display_line_flattens_line_breaks() {
        assert_eq!(display_line("<me> one\ntwo\r\nthree\rfour"), "<me> one⏎two⏎three⏎four");
    }

    #[test]
    fn test_display_line_keeps_tabs() {
        assert_eq!(display_line("<me> a\tb"), "<me> a\tb");
    }
}
