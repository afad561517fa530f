//! Separator splitting that respects `<...>`, `{...}` and `(...)` scopes.
//!
//! Type lists such as `Dict{K,V},System.String` and parameter lists such as
//! `List<int> values, Tuple<int, int> pair` carry commas inside generic or
//! tuple brackets; those must not produce a segment boundary.

/// Split `input` on `sep`, ignoring separators inside an open bracket scope.
///
/// Segments are trimmed and empty ones are dropped. Each bracket kind keeps
/// its own depth counter, clamped at zero on a stray closer. An unterminated
/// scope simply swallows the rest of the input into the final segment.
pub fn split_top_level(input: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut buf = String::new();
    let mut angle = 0usize;
    let mut curly = 0usize;
    let mut paren = 0usize;

    for ch in input.chars() {
        match ch {
            '<' => angle += 1,
            '>' => angle = angle.saturating_sub(1),
            '{' => curly += 1,
            '}' => curly = curly.saturating_sub(1),
            '(' => paren += 1,
            ')' => paren = paren.saturating_sub(1),
            c if c == sep && angle == 0 && curly == 0 && paren == 0 => {
                push_segment(&mut parts, &buf);
                buf.clear();
                continue;
            }
            _ => {}
        }
        buf.push(ch);
    }
    push_segment(&mut parts, &buf);
    parts
}

fn push_segment(parts: &mut Vec<String>, buf: &str) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_curly_generics_together() {
        assert_eq!(split_top_level("Dict{K,V}, str", ','), vec!["Dict{K,V}", "str"]);
    }

    #[test]
    fn keeps_angle_and_paren_scopes_together() {
        assert_eq!(
            split_top_level("List<int> a, (int, int) b, f(x, y)", ','),
            vec!["List<int> a", "(int, int) b", "f(x, y)"]
        );
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(split_top_level(" a ,, b , ", ','), vec!["a", "b"]);
        assert!(split_top_level("", ',').is_empty());
        assert!(split_top_level("   ", ',').is_empty());
    }

    #[test]
    fn stray_closer_does_not_go_negative() {
        // The `>` is unmatched; the following comma must still split.
        assert_eq!(split_top_level("a>b, c", ','), vec!["a>b", "c"]);
        assert_eq!(split_top_level("x), y, z", ','), vec!["x)", "y", "z"]);
    }

    #[test]
    fn unterminated_scope_flushes_remainder() {
        assert_eq!(split_top_level("a, Dict{K, V", ','), vec!["a", "Dict{K, V"]);
    }

    #[test]
    fn other_separator() {
        assert_eq!(split_top_level("a;b{c;d};e", ';'), vec!["a", "b{c;d}", "e"]);
    }

    proptest! {
        /// Commas wrapped in a balanced scope never become boundaries.
        #[test]
        fn never_splits_inside_scope(
            inner in "[a-z]{1,4}(,[a-z]{1,4}){0,3}",
            open in prop::sample::select(vec!['<', '{', '(']),
            head in "[a-z]{1,5}",
            tail in "[a-z]{1,5}",
        ) {
            let close = match open { '<' => '>', '{' => '}', _ => ')' };
            let scoped = format!("{head}{open}{inner}{close}");
            let input = format!("{scoped}, {tail}");
            let parts = split_top_level(&input, ',');
            prop_assert_eq!(parts, vec![scoped, tail]);
        }
    }
}
