use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,3})[ \t]+(.+)$").unwrap());

fn heading_tag(level: usize) -> &'static str {
    match level {
        1 => "b",
        2 => "u",
        _ => "i",
    }
}

/// Rewrites `#`, `##` and `###` headings as bold, underline and italic
/// lines. Deeper headings are left alone.
pub fn heading(text: &str) -> String {
    RE_HEADING
        .replace_all(text, |caps: &Captures| {
            let tag = heading_tag(caps[1].len());
            format!("<{tag}>{}</{tag}>\n", caps[2].trim())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(heading("# Title"), "<b>Title</b>\n");
        assert_eq!(heading("## Title"), "<u>Title</u>\n");
        assert_eq!(heading("### Title"), "<i>Title</i>\n");
    }

    #[test]
    fn test_level_four_untouched() {
        assert_eq!(heading("#### Title"), "#### Title");
        assert_eq!(heading("###### Deep"), "###### Deep");
    }

    #[test]
    fn test_content_trimmed() {
        assert_eq!(heading("##   Spaced out  \t"), "<u>Spaced out</u>\n");
    }

    #[test]
    fn test_requires_whitespace() {
        assert_eq!(heading("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_only_at_line_start() {
        assert_eq!(heading("issue # 12"), "issue # 12");
    }

    #[test]
    fn test_heading_followed_by_text() {
        assert_eq!(heading("# A\nbody\n## B"), "<b>A</b>\n\nbody\n<u>B</u>\n");
    }

    #[test]
    fn test_does_not_span_lines() {
        assert_eq!(heading("#\nnext"), "#\nnext");
    }
}
