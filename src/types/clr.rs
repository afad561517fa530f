//! .NET type spellings → target vocabulary.
//!
//! Handles the forms that appear in help ids (`System.Double`,
//! `System.Collections.Generic.List{Rhino.Geometry.Point3d}`,
//! `System.Nullable{System.Int32}`) and in C# declarations (`double`,
//! `List<Point3d>`, `int?`, `Curve[]`). Anything unrecognised passes through.

use super::{list_of, optional_of};
use crate::model::{MethodIdentity, UNKNOWN};
use crate::split::split_top_level;
use regex::Regex;
use std::sync::LazyLock;

static RE_BRACE_GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w.]+)\{(.+)\}$").unwrap());

static RE_ANGLE_GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w.]+)<(.+)>$").unwrap());

const ALIASES: &[(&str, &str)] = &[
    ("System.Void", "None"),
    ("void", "None"),
    ("System.Boolean", "bool"),
    ("bool", "bool"),
    ("System.Double", "float"),
    ("double", "float"),
    ("System.Single", "float"),
    ("float", "float"),
    ("System.Decimal", "float"),
    ("decimal", "float"),
    ("System.Int32", "int"),
    ("int", "int"),
    ("System.Int64", "int"),
    ("long", "int"),
    ("System.Int16", "int"),
    ("short", "int"),
    ("System.UInt16", "int"),
    ("ushort", "int"),
    ("System.UInt32", "int"),
    ("uint", "int"),
    ("System.UInt64", "int"),
    ("ulong", "int"),
    ("System.Byte", "int"),
    ("byte", "int"),
    ("System.SByte", "int"),
    ("sbyte", "int"),
    ("System.String", "str"),
    ("string", "str"),
    ("System.Char", "str"),
    ("char", "str"),
    ("System.Object", "Any"),
    ("object", "Any"),
];

const CONTAINERS: &[(&str, &str)] = &[
    ("System.Collections.Generic.List", "List"),
    ("System.Collections.Generic.IList", "List"),
    ("System.Collections.Generic.IReadOnlyList", "Sequence"),
    ("System.Collections.Generic.ICollection", "Sequence"),
    ("System.Collections.Generic.IEnumerable", "Iterable"),
    ("System.Collections.Generic.Dictionary", "Dict"),
    ("System.Collections.Generic.IDictionary", "Dict"),
    ("System.Tuple", "Tuple"),
    ("System.Nullable", "Optional"),
];

fn alias(ty: &str) -> Option<&'static str> {
    ALIASES.iter().find(|(k, _)| *k == ty).map(|(_, v)| *v)
}

/// Container lookup by full name, or by simple name for unqualified bases
/// (declarations write `List<T>`, not the namespace path).
fn container(base: &str) -> Option<&'static str> {
    CONTAINERS
        .iter()
        .find(|(k, _)| {
            *k == base || (!base.contains('.') && k.rsplit('.').next() == Some(base))
        })
        .map(|(_, v)| *v)
}

/// Normalize one .NET type spelling.
///
/// `owner` enables self-reference qualification: a bare `ColorHSL` inside
/// `Rhino.Display.ColorHSL` becomes `Rhino.Display.ColorHSL`.
pub fn normalize(ty: &str, owner: Option<&MethodIdentity>) -> String {
    let t = ty.trim();
    if t.is_empty() {
        return UNKNOWN.to_string();
    }

    if let Some(inner) = t.strip_suffix("[]") {
        return list_of(&normalize(inner, owner));
    }

    if let Some(inner) = t.strip_suffix('?') {
        if !inner.ends_with('?') {
            return optional_of(&normalize(inner, owner));
        }
    }

    let generic = RE_BRACE_GENERIC
        .captures(t)
        .or_else(|| RE_ANGLE_GENERIC.captures(t));
    if let Some(caps) = generic {
        let base = &caps[1];
        let args: Vec<String> = split_top_level(&caps[2], ',')
            .iter()
            .map(|arg| normalize(arg, owner))
            .collect();
        let mapped_base = container(base)
            .unwrap_or_else(|| base.rsplit('.').next().unwrap_or(base));
        return format!("{}[{}]", mapped_base, args.join(", "));
    }

    if let Some(mapped) = alias(t) {
        return mapped.to_string();
    }

    if let Some(owner) = owner {
        if t == owner.container_simple() {
            return owner.container.clone();
        }
    }

    t.to_string()
}
