use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_FENCED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:([a-zA-Z0-9]+)\n)?(.+?)```").unwrap());
static RE_INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

/// Re-emits every fenced block with its body trimmed and the fences on
/// their own lines.
///
/// Only the fences are normalized. The body stays in the text, so later
/// passes still rewrite headings, list markers and emphasis inside it.
pub fn fenced_code_blocks(text: &str) -> String {
    RE_FENCED
        .replace_all(text, |caps: &Captures| {
            let code = caps[2].trim();
            match caps.get(1) {
                Some(lang) => format!("```{}\n{}\n```", lang.as_str(), code),
                None => format!("```\n{}\n```", code),
            }
        })
        .into_owned()
}

pub fn inline_code(text: &str) -> String {
    RE_INLINE_CODE.replace_all(text, "`${1}`").into_owned()
}
