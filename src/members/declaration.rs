//! C# declaration block from the page's Syntax section.
//!
//! Recovers what the help id lacks: parameter names, return type, and
//! whether the member is static. Types come from the help id instead.

use crate::markup;
use crate::model::{is_identifier, placeholder_name};
use crate::split::split_top_level;
use regex::Regex;
use std::sync::LazyLock;

/// The C# tab is conventionally the element whose id ends in `_code_Div1`.
static RE_CSHARP_PRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<div[^>]+id=["'][^"']*_code_Div1["'][\s\S]*?<pre[^>]*>([\s\S]*?)</pre>"#)
        .unwrap()
});

static RE_ANY_PRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<pre[^>]*>([\s\S]*?)</pre>").unwrap());

static RE_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*=\s*[^,]+$").unwrap());

static RE_PARAM_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(this|ref|out|params|in)\s+").unwrap());

const OPERATOR: &str = "operator";

/// Conversion operators name their result after the keyword: `implicit operator Point3d(...)`.
const CONVERSIONS: &[&str] = &["implicit", "explicit"];

const MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "virtual", "override", "sealed",
    "extern", "unsafe", "abstract", "new", "readonly", "partial", "async",
];

/// What a declaration contributes to a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// `None` when only the name precedes `(`, i.e. a constructor.
    pub return_type: Option<String>,
    /// Operators keep the keyword: `operator +`, `operator Point3d`.
    pub name: String,
    pub param_names: Vec<String>,
    pub is_static: bool,
}

/// Locate the C# declaration on a page and reduce it to plain text.
pub fn find(page: &str) -> Option<String> {
    let caps = RE_CSHARP_PRE
        .captures(page)
        .or_else(|| RE_ANY_PRE.captures(page))?;
    let text = markup::to_text(&caps[1]).replace('\r', "");
    Some(text.trim().to_string())
}

/// Parse declaration text such as `public static void SetColor( Color c, bool force )`.
pub fn parse(text: &str) -> Option<Declaration> {
    let text = text.trim();
    // Only the first signature: drops bodies, accessors and later overloads.
    let text = match text.find(')') {
        Some(close) => &text[..=close],
        None => text,
    };
    let oneline = markup::collapse_whitespace(text);

    let (head, rest) = oneline.split_once('(')?;
    let params = rest.rsplit_once(')').map_or(rest, |(inner, _)| inner).trim();

    let head_tokens: Vec<&str> = head.split_whitespace().collect();
    let is_static = head_tokens.contains(&"static");
    let kept: Vec<&str> = head_tokens
        .into_iter()
        .filter(|t| !MODIFIERS.contains(t))
        .collect();

    let (return_type, name) = match kept.as_slice() {
        [] => return None,
        [.., conversion, OPERATOR, target] if CONVERSIONS.contains(conversion) => {
            (Some(target.to_string()), format!("{} {}", OPERATOR, target))
        }
        [.., ret, OPERATOR, symbol] => {
            (Some(ret.to_string()), format!("{} {}", OPERATOR, symbol))
        }
        [name] => (None, name.to_string()),
        [.., ret, name] => (Some(ret.to_string()), name.to_string()),
    };

    Some(Declaration {
        return_type,
        name,
        param_names: param_names(params),
        is_static,
    })
}

impl Declaration {
    pub fn is_operator(&self) -> bool {
        self.name
            .strip_prefix(OPERATOR)
            .is_some_and(|rest| rest.starts_with(' '))
    }
}

fn param_names(params: &str) -> Vec<String> {
    let mut names = Vec::new();
    for segment in split_top_level(params, ',') {
        let without_default = RE_DEFAULT.replace(&segment, "");
        let bare = RE_PARAM_QUALIFIER.replace(&without_default, "");
        let name = bare
            .split_whitespace()
            .last()
            .map(|token| token.trim_end_matches(',').replace("[]", ""))
            .map(|token| token.trim_start_matches('@').to_string());
        match name {
            Some(name) if is_identifier(&name) => names.push(name),
            _ => names.push(placeholder_name(names.len() + 1)),
        }
    }
    names
}
