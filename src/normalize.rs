use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static RE_NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Drops zero-width spaces and decodes the `&lt;`, `&gt;` and `&amp;` entities.
pub fn clean_input(text: &str) -> String {
    text.replace('\u{200B}', "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Whitespace normalization applied to the fully rewritten text.
///
/// Trailing spaces are stripped before blank-line runs are collapsed, so a
/// second application never finds anything left to change. Whitespace-only
/// lines therefore join the surrounding blank run: `"a\n  \n  \nb"` becomes
/// `"a\n\nb"`, where collapsing first would leave `"a\n\n\nb"`.
pub fn post_process(text: &str) -> String {
    let text = RE_TRAILING_SPACE.replace_all(text, "\n");
    let text = RE_NEWLINE_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_space_removed() {
        assert_eq!(clean_input("a\u{200B}b\u{200B}"), "ab");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(clean_input("&lt;b&gt; &amp; co"), "<b> & co");
    }

    #[test]
    fn test_amp_decoded_last() {
        // `&amp;lt;` only loses one level of escaping
        assert_eq!(clean_input("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(post_process("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(post_process("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_trailing_whitespace() {
        assert_eq!(post_process("hello  \t\nworld"), "hello\nworld");
    }

    #[test]
    fn test_whitespace_only_lines_collapse() {
        assert_eq!(post_process("a\n\n  \n\nb"), "a\n\nb");
    }

    #[test]
    fn test_whitespace_only_lines_counted_as_blank() {
        assert_eq!(post_process("a\n  \n  \nb"), "a\n\nb");
    }

    #[test]
    fn test_trim_ends() {
        assert_eq!(post_process("\n\n  text  \n\n"), "text");
        assert_eq!(post_process(""), "");
        assert_eq!(post_process(" \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = post_process("x \n\n \n\n\ny\t\n");
        assert_eq!(post_process(&once), once);
    }
}
