//! Regex-level markup helpers. Not an HTML parser.

use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Strip tags and decode character entities.
pub fn to_text(fragment: &str) -> String {
    let stripped = RE_TAG.replace_all(fragment, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Collapse every whitespace run (newlines included) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read raw page bytes as text; invalid UTF-8 is replaced, never an error.
pub fn decode_page(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let html = r#"<span class="k">public</span> List&lt;int&gt; Foo(<a href="x">Bar</a> &amp; b)"#;
        assert_eq!(to_text(html), "public List<int> Foo(Bar & b)");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(collapse_whitespace("  a\n\t b\r\n  c "), "a b c");
    }

    #[test]
    fn decodes_invalid_utf8_lossily() {
        let text = decode_page(b"ok \xff done");
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" done"));
    }
}
