const SPECIAL_CHARS: &[char] = &['_', '*', '`', '['];

/// Backslash-escapes `_`, `*`, `` ` `` and `[`.
///
/// Each character is substituted across the whole string in turn, so text
/// that already carries escapes gets escaped again (`\*` becomes `\\*`).
pub fn escape_chars(text: &str) -> String {
    let mut text = text.to_string();
    for c in SPECIAL_CHARS {
        text = text.replace(*c, &format!("\\{}", c));
    }
    text
}

pub fn unescape_chars(text: &str) -> String {
    let mut text = text.to_string();
    for c in SPECIAL_CHARS {
        text = text.replace(&format!("\\{}", c), &c.to_string());
    }
    text
}
