use regex::Regex;
use std::sync::LazyLock;

static RE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[([^\]]*)\]\(([^\s)]+)(?:\s["']([^"']*)["'])?\)"#).unwrap()
});
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\]]+)\]\(([^\s)]+)(?:\s["']([^"']*)["'])?\)"#).unwrap()
});
static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Images have no counterpart in the output markup and are removed outright.
pub fn image(text: &str) -> String {
    RE_IMAGE.replace_all(text, "").into_owned()
}

/// `[text](url "title")` becomes an anchor; the title is dropped.
pub fn link(text: &str) -> String {
    RE_LINK
        .replace_all(text, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}

/// Bold must run first, otherwise the italic rule splits every `**` pair.
pub fn emphasis(text: &str) -> String {
    let text = RE_BOLD.replace_all(text, "<b>${1}</b>");
    RE_ITALIC.replace_all(&text, "<i>${1}</i>").into_owned()
}
