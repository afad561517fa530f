//! Free-text type labels (`number`, `list of point`, `guid or str`) →
//! target vocabulary.
//!
//! Best-effort: unusual phrasings fall to [`UNKNOWN`] rather than failing.

use super::list_of;
use crate::model::{NOTHING, UNKNOWN};
use clap::ValueEnum;
use regex::Regex;
use std::sync::LazyLock;

static RE_TUPLE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+([a-zA-Z0-9_.]+)s?$").unwrap());

static RE_WRAPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(List|Optional|Tuple|Dict|Sequence|Iterable)\[.*\]$").unwrap());

/// Which flavour of names the geometry nouns map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TypeStyle {
    /// RhinoCommon / .NET names (`Rhino.Geometry.Point3d`, `System.Guid`).
    #[default]
    Dotnet,
    /// Plain Python shapes (`Tuple[float, float, float]`, `str`).
    Python,
}

const DOTNET_TABLE: &[(&str, &str)] = &[
    ("none", "None"),
    ("void", "None"),
    ("bool", "bool"),
    ("boolean", "bool"),
    ("number", "float"),
    ("double", "float"),
    ("float", "float"),
    ("int", "int"),
    ("integer", "int"),
    ("str", "str"),
    ("string", "str"),
    ("guid", "System.Guid"),
    ("uuid", "System.Guid"),
    ("date", "datetime.date"),
    ("datetime.date", "datetime.date"),
    ("color", "System.Drawing.Color"),
    ("point", "Rhino.Geometry.Point3d"),
    ("point3d", "Rhino.Geometry.Point3d"),
    ("vector", "Rhino.Geometry.Vector3d"),
    ("vector3d", "Rhino.Geometry.Vector3d"),
    ("interval", "Tuple[float, float]"),
    ("plane", "Rhino.Geometry.Plane"),
    ("matrix", "Rhino.Geometry.Transform"),
    ("transform", "Rhino.Geometry.Transform"),
];

const PYTHON_TABLE: &[(&str, &str)] = &[
    ("none", "None"),
    ("void", "None"),
    ("bool", "bool"),
    ("boolean", "bool"),
    ("number", "float"),
    ("double", "float"),
    ("float", "float"),
    ("int", "int"),
    ("integer", "int"),
    ("str", "str"),
    ("string", "str"),
    ("guid", "str"),
    ("uuid", "str"),
    ("date", "datetime.date"),
    ("datetime.date", "datetime.date"),
    ("color", "Tuple[int, int, int]"),
    ("point", "Tuple[float, float, float]"),
    ("point3d", "Tuple[float, float, float]"),
    ("vector", "Tuple[float, float, float]"),
    ("vector3d", "Tuple[float, float, float]"),
    ("interval", "Tuple[float, float]"),
    ("plane", "Any"),
    ("matrix", "List[List[float]]"),
    ("transform", "List[List[float]]"),
];

/// Substring fallbacks, checked in order, each resolved through the table.
const NOUN_HINTS: &[(&str, &str)] = &[
    ("point", "point"),
    ("vector", "vector"),
    ("color", "color"),
    ("interval", "interval"),
    ("plane", "plane"),
    ("transform", "transform"),
    ("matrix", "transform"),
];

#[derive(Debug, Clone, Copy)]
pub struct ProseTypeMapper {
    style: TypeStyle,
}

impl ProseTypeMapper {
    pub fn new(style: TypeStyle) -> Self {
        Self { style }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self.style {
            TypeStyle::Dotnet => DOTNET_TABLE,
            TypeStyle::Python => PYTHON_TABLE,
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table().iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Output labels are fixed points of [`map`](Self::map).
    fn is_normalized(&self, label: &str) -> bool {
        label == UNKNOWN
            || label == NOTHING
            || self.table().iter().any(|(_, v)| *v == label)
            || RE_WRAPPED.is_match(label)
    }

    /// Map a documentation label to a normalized type. Never fails.
    pub fn map(&self, label: &str) -> String {
        let raw = label.trim();
        if self.is_normalized(raw) {
            return raw.to_string();
        }
        let folded = raw.to_lowercase().replace('\u{2013}', "-");
        self.map_folded(&folded)
    }

    fn map_folded(&self, label: &str) -> String {
        let t = label.trim();
        if t.is_empty() {
            return UNKNOWN.to_string();
        }

        if t.contains(" or ") {
            let mut alternatives = t.split(" or ").map(str::trim).filter(|p| !p.is_empty());
            if let Some(found) = alternatives.find_map(|p| self.lookup(p)) {
                return found.to_string();
            }
            let first = t.split(" or ").next().unwrap_or_default();
            return self.map_folded(first);
        }

        if let Some(inner) = t
            .strip_prefix("list of ")
            .or_else(|| t.strip_prefix("array of "))
        {
            return list_of(&self.map_folded(inner));
        }

        if let Some(inner) = t.strip_prefix("tuple of ") {
            return self.tuple_of(inner.trim());
        }

        if let Some(found) = self.lookup(t) {
            return found.to_string();
        }

        // "number, optional" and similar trailing qualifiers
        if let Some((first, _)) = t.split_once(',') {
            return self.map_folded(first);
        }

        // "[guid...]"
        if t.starts_with('[') && t.contains("...") && (t.contains("guid") || t.contains("uuid")) {
            return list_of(self.lookup("guid").unwrap_or(UNKNOWN));
        }

        NOUN_HINTS
            .iter()
            .find(|(needle, _)| t.contains(needle))
            .and_then(|(_, key)| self.lookup(key))
            .unwrap_or(UNKNOWN)
            .to_string()
    }

    fn tuple_of(&self, inner: &str) -> String {
        let counted = RE_TUPLE_COUNT.captures(inner).and_then(|caps| {
            let n: usize = caps[1].parse().ok()?;
            Some((n, self.map_folded(&caps[2])))
        });
        match counted {
            Some((n, element)) => format!("Tuple[{}]", vec![element; n].join(", ")),
            None => "Tuple[Any, ...]".to_string(),
        }
    }
}
