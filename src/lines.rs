const BULLET: &str = "\u{2022} ";

fn list_item(line: &str) -> Option<&str> {
    let t = line.trim();
    t.strip_prefix("- ").or_else(|| t.strip_prefix("* "))
}

/// Turns `- ` and `* ` items into bullets and separates each list from the
/// line that follows it with a blank line.
///
/// A list that ends the text gets no trailing blank line.
pub fn list(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in text.split('\n') {
        if let Some(item) = list_item(line) {
            in_list = true;
            out.push(format!("{}{}", BULLET, item));
            continue;
        }
        if in_list {
            in_list = false;
            out.push(String::new());
        }
        out.push(line.to_string());
    }

    out.join("\n")
}

/// Strips the `> ` marker from quoted lines. Each line is judged on its own.
pub fn quote(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim().strip_prefix("> ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_bulleted() {
        assert_eq!(list("- a\n* b"), "\u{2022} a\n\u{2022} b");
    }

    #[test]
    fn test_list_separated_from_following_line() {
        assert_eq!(list("- a\n- b\nc"), "\u{2022} a\n\u{2022} b\n\nc");
    }

    #[test]
    fn test_each_list_gets_separator() {
        assert_eq!(
            list("- a\nx\n- b\ny"),
            "\u{2022} a\n\nx\n\u{2022} b\n\ny"
        );
    }

    #[test]
    fn test_no_separator_after_final_item() {
        assert_eq!(list("intro\n- a"), "intro\n\u{2022} a");
    }

    #[test]
    fn test_indented_items_flattened() {
        assert_eq!(list("  - nested  "), "\u{2022} nested");
    }

    #[test]
    fn test_marker_needs_space() {
        assert_eq!(list("-a\n*b*"), "-a\n*b*");
    }

    #[test]
    fn test_non_list_lines_kept_verbatim() {
        assert_eq!(list("  keep  \n"), "  keep  \n");
    }

    #[test]
    fn test_quote_marker_stripped() {
        assert_eq!(quote("> hello\n  > indented"), "hello\nindented");
    }

    #[test]
    fn test_quote_needs_space() {
        assert_eq!(quote(">tight\nplain"), ">tight\nplain");
    }

    #[test]
    fn test_quote_no_separator() {
        assert_eq!(quote("> a\nb"), "a\nb");
    }
}
