//! `Microsoft.Help.Id` metadata: the fully-qualified identity of a member page.
//!
//! Method ids look like `M:Rhino.Display.ColorHSL.CreateFromLCH(Rhino.Display.ColorLCH)`
//! and constructors like `M:Rhino.Display.ColorHSL.#ctor(System.Double,System.Double)`.

use crate::model::{Member, MethodIdentity};
use crate::split::split_top_level;
use regex::Regex;
use std::sync::LazyLock;

const METHOD_MARKER: &str = "M:";
const CTOR_MARKER: &str = "#ctor";

static RE_HELP_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+name=["']Microsoft\.Help\.Id["'][^>]+content=["']([^"']+)["']"#,
    )
    .unwrap()
});

/// Identity plus the raw (un-normalized) parameter types from a help id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpId {
    pub identity: MethodIdentity,
    pub param_types: Vec<String>,
}

/// Find the help id `content` attribute on a page, entity-decoded.
pub fn find(page: &str) -> Option<String> {
    RE_HELP_ID
        .captures(page)
        .map(|caps| html_escape::decode_html_entities(&caps[1]).into_owned())
}

/// Parse a method help id. `None` means "not a method page".
pub fn parse(help_id: &str) -> Option<HelpId> {
    let body = help_id.trim().strip_prefix(METHOD_MARKER)?;

    let (left, params) = match body.split_once('(') {
        Some((left, right)) => {
            let params = right.rsplit_once(')').map_or(right, |(inner, _)| inner);
            (left, params)
        }
        None => (body, ""),
    };

    let ctor_suffix = format!(".{}", CTOR_MARKER);
    let (container, member) = match left.split_once(&ctor_suffix) {
        Some((container, _)) => (container, Member::Constructor),
        None => {
            let (container, name) = left.rsplit_once('.')?;
            if name.is_empty() {
                return None;
            }
            (container, Member::Named(name.to_string()))
        }
    };
    if container.is_empty() {
        return None;
    }

    Some(HelpId {
        identity: MethodIdentity {
            container: container.to_string(),
            member,
        },
        param_types: split_top_level(params, ','),
    })
}
