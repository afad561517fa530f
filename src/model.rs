//! Data model shared by both extraction pipelines.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*$").unwrap());

/// Label for a type that could not be resolved.
pub const UNKNOWN: &str = "Any";
/// Label for "returns nothing".
pub const NOTHING: &str = "None";
/// Emitted name of a constructor.
pub const INITIALIZER: &str = "__init__";
/// Synthetic receiver parameter of instance methods.
pub const SELF_PARAM: &str = "self";

/// Member part of a method identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Constructor,
    Named(String),
}

/// `(container, member)` pair recovered from metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodIdentity {
    /// Dot-separated, never empty.
    pub container: String,
    pub member: Member,
}

impl MethodIdentity {
    /// Last dot-segment of the container, e.g. `ColorHSL`.
    pub fn container_simple(&self) -> &str {
        self.container.rsplit('.').next().unwrap_or(&self.container)
    }
}

/// One parameter of an emitted signature. `ty` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)?;
        if let Some(ref default) = self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// One output line. Instance methods render the receiver parameter first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub qualified_name: String,
    pub params: Vec<Parameter>,
    pub returns: String,
    pub is_instance: bool,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.qualified_name)?;
        let mut first = true;
        if self.is_instance {
            f.write_str(SELF_PARAM)?;
            first = false;
        }
        for param in &self.params {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
            first = false;
        }
        write!(f, ") -> {}", self.returns)
    }
}

/// Plain ASCII identifier (`[A-Za-z_]\w*`).
pub fn is_identifier(name: &str) -> bool {
    RE_IDENT.is_match(name)
}

/// Placeholder for the parameter at 1-based `position`.
pub fn placeholder_name(position: usize) -> String {
    format!("arg{}", position)
}

/// Positional placeholder names `arg1..argN`.
pub fn placeholder_names(count: usize) -> Vec<String> {
    (1..=count).map(placeholder_name).collect()
}
