//! "Parameters" and "Returns" sections of a function panel.
//!
//! Each section is a heading followed by a `<pre>` whose rows read like
//! `name (type): description` or `width, height (number, optional): ...`.

use crate::markup;
use crate::model::NOTHING;
use crate::types::prose::ProseTypeMapper;
use crate::types::{is_optional, optional_of};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_PARAMS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h[1-6][^>]*>\s*Parameters\s*:?\s*</h[1-6]>").unwrap()
});

static RE_RETURNS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h[1-6][^>]*>\s*Returns\s*:?\s*</h[1-6]>").unwrap()
});

static RE_PRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<pre[^>]*>([\s\S]*?)</pre>").unwrap());

static RE_PARAM_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_][\w,\s]*)\s*\(([^)]*)\)\s*:?").unwrap());

static RE_OPTIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\boptional\b").unwrap());

static RE_NONE_ON_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bNone on error\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Parameters,
    Returns,
}

impl Section {
    fn heading(self) -> &'static Regex {
        match self {
            Section::Parameters => &*RE_PARAMS_HEADING,
            Section::Returns => &*RE_RETURNS_HEADING,
        }
    }
}

/// Documented type of one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub ty: String,
    pub optional: bool,
}

/// Plain text of the first `<pre>` after the section heading.
pub fn section_text(panel: &str, section: Section) -> Option<String> {
    let heading = section.heading().find(panel)?;
    let caps = RE_PRE.captures(&panel[heading.end()..])?;
    Some(markup::to_text(&caps[1]))
}

/// Parameter rows keyed by name. Later rows win on duplicate names.
pub fn parse_params(text: &str, mapper: &ProseTypeMapper) -> HashMap<String, ParamDoc> {
    let mut rows = HashMap::new();
    for raw in text.lines() {
        let line = raw.trim_end();
        if line.trim().is_empty() {
            continue;
        }
        // indented continuation of the previous description
        if (line.starts_with("  ") || line.starts_with('\t')) && !rows.is_empty() {
            continue;
        }
        let Some((names, label)) = split_row(line.trim()) else {
            continue;
        };
        let ty = mapper.map(label.split(',').next().unwrap_or_default().trim());
        let optional = RE_OPTIONAL.is_match(line);
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            rows.insert(
                name.to_string(),
                ParamDoc {
                    ty: ty.clone(),
                    optional,
                },
            );
        }
    }
    rows
}

/// `(names, type label)` of a row; lenient when the strict shape fails.
fn split_row(line: &str) -> Option<(&str, &str)> {
    if let Some(caps) = RE_PARAM_ROW.captures(line) {
        let names = caps.get(1)?.as_str();
        let label = caps.get(2)?.as_str();
        return Some((names, label));
    }
    if !(line.contains('(') && line.contains(')')) {
        return None;
    }
    let left = line.split(':').next().unwrap_or(line);
    let open = left.find('(')?;
    let names = left[..open].trim();
    let inner = &left[open + 1..];
    let label = match inner.rfind(')') {
        Some(close) => &inner[..close],
        None => inner,
    };
    Some((names, label))
}

/// Reduce the Returns rows to one type. The first row's label decides;
/// a `None on error` row anywhere makes any non-`None` type optional.
pub fn parse_returns(text: &str, mapper: &ProseTypeMapper) -> String {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let none_on_error = rows.iter().any(|row| RE_NONE_ON_ERROR.is_match(row));
    let returns = rows
        .first()
        .map(|row| mapper.map(row.split(':').next().unwrap_or_default()))
        .unwrap_or_else(|| NOTHING.to_string());

    if none_on_error && returns != NOTHING && !is_optional(&returns) {
        optional_of(&returns)
    } else {
        returns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::prose::TypeStyle;
    use indoc::indoc;

    fn mapper() -> ProseTypeMapper {
        ProseTypeMapper::new(TypeStyle::Dotnet)
    }

    #[test]
    fn param_rows() {
        let text = indoc! {"
            plane_or_center (point|plane): center point or plane
            radius (number): the radius
              continued description (not a row)
            width, height (number, optional): size
        "};
        let rows = parse_params(text, &mapper());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows["radius"], ParamDoc { ty: "float".into(), optional: false });
        assert_eq!(rows["width"], ParamDoc { ty: "float".into(), optional: true });
        assert_eq!(rows["height"], rows["width"]);
        assert_eq!(rows["plane_or_center"].ty, "Rhino.Geometry.Point3d");
        assert!(!rows.contains_key("continued description"));
    }

    #[test]
    fn bracketed_guid_labels() {
        let text = "object_ids ([guid, ...]): ids to delete\ncurve_ids ([guid...]): curves\n";
        let rows = parse_params(text, &mapper());
        assert_eq!(rows["object_ids"].ty, "Any");
        assert_eq!(rows["curve_ids"].ty, "List[System.Guid]");
        assert!(!rows["object_ids"].optional);
        assert_eq!(parse_returns("[guid, ...]: ids of the new objects\n", &mapper()), "Any");
    }

    #[test]
    fn lenient_row_fallback() {
        let text = "obj-id (guid): the object\n";
        let rows = parse_params(text, &mapper());
        assert_eq!(rows["obj-id"].ty, "System.Guid");
    }

    #[test]
    fn rows_without_parens_are_ignored() {
        let rows = parse_params("just prose here\n\n", &mapper());
        assert!(rows.is_empty());
    }

    #[test]
    fn returns_first_row_decides() {
        assert_eq!(parse_returns("guid: id of the new curve\n", &mapper()), "System.Guid");
        assert_eq!(parse_returns("", &mapper()), "None");
        assert_eq!(
            parse_returns("bool: True or False\nnumber: never used\n", &mapper()),
            "bool"
        );
    }

    #[test]
    fn none_on_error_makes_optional() {
        let text = "guid: id of the new object\nNone on error\n";
        assert_eq!(parse_returns(text, &mapper()), "Optional[System.Guid]");

        // already nothing: stays nothing
        assert_eq!(parse_returns("None: None on error", &mapper()), "None");
        assert_eq!(
            parse_returns("thing: x\nNone on error", &mapper()),
            "Optional[Any]"
        );
    }

    #[test]
    fn locates_sections() {
        let panel = indoc! {r#"
            <h3>Parameters:</h3>
            <pre>radius (number): r</pre>
            <h3>Returns:</h3>
            <pre>guid: id&nbsp;of circle</pre>
        "#};
        assert_eq!(
            section_text(panel, Section::Parameters).as_deref(),
            Some("radius (number): r")
        );
        assert_eq!(
            section_text(panel, Section::Returns).as_deref(),
            Some("guid: id\u{a0}of circle")
        );
        assert_eq!(section_text("<h3>Example</h3><pre>x</pre>", Section::Returns), None);
    }
}
