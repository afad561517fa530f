//! The example invocation at the top of each function section, e.g.
//! `AddCircle(plane_or_center, radius)`. Names and defaults only, no types.

use crate::markup;
use crate::split::split_top_level;
use regex::Regex;
use std::sync::LazyLock;

static RE_PYTHON_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<pre[^>]*>\s*<code[^>]*class=["']language-python["'][^>]*>([\s\S]*?)</code>\s*</pre>"#,
    )
    .unwrap()
});

static RE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_]\w*)\s*\(\s*(.*?)\s*\)\s*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArg {
    pub name: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<InvocationArg>,
}

/// First python code block of a section, as plain text.
pub fn find(section: &str) -> Option<String> {
    RE_PYTHON_CODE
        .captures(section)
        .map(|caps| markup::to_text(&caps[1]).trim().to_string())
}

/// Parse the first line of an example as `name(arg, arg=default, ...)`.
pub fn parse(text: &str) -> Option<Invocation> {
    let first = text.replace('\r', "");
    let first = first.trim().lines().next()?;
    let caps = RE_CALL.captures(first)?;

    let args = split_top_level(&caps[2], ',')
        .into_iter()
        .map(|part| match part.split_once('=') {
            Some((name, default)) => InvocationArg {
                name: name.trim().to_string(),
                default: Some(default.trim().to_string()),
            },
            None => InvocationArg {
                name: part,
                default: None,
            },
        })
        .collect();

    Some(Invocation {
        name: caps[1].to_string(),
        args,
    })
}
