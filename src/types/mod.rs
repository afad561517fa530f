//! Type normalization into the shared target vocabulary.
//!
//! Two policies feed the same vocabulary (`int`, `float`, `bool`, `str`,
//! `None`, `Any`, `List[T]`, `Optional[T]`, `Dict[K, V]`, `Tuple[...]`, or an
//! opaque passthrough name):
//!
//! - [`clr`] maps .NET type spellings from metadata and declarations.
//! - [`prose`] maps free-text labels from documentation tables.

pub mod clr;
pub mod prose;

use crate::model::{NOTHING, UNKNOWN};

const OPTIONAL_PREFIX: &str = "Optional[";

/// `List[inner]`
pub fn list_of(inner: &str) -> String {
    format!("List[{}]", inner)
}

/// `Optional[inner]`
pub fn optional_of(inner: &str) -> String {
    format!("{}{}]", OPTIONAL_PREFIX, inner)
}

pub fn is_optional(ty: &str) -> bool {
    ty.starts_with(OPTIONAL_PREFIX)
}

/// Whether wrapping `ty` in `Optional[...]` adds information.
pub fn is_concrete(ty: &str) -> bool {
    ty != UNKNOWN && ty != NOTHING && !is_optional(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_excludes_unknown_nothing_and_optional() {
        assert!(is_concrete("float"));
        assert!(!is_concrete("Any"));
        assert!(!is_concrete("None"));
        assert!(!is_concrete("Optional[int]"));
    }

    #[test]
    fn wrappers() {
        assert_eq!(list_of("int"), "List[int]");
        assert_eq!(optional_of("str"), "Optional[str]");
        assert!(is_optional(&optional_of("str")));
    }
}
