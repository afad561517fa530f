//! Non-fatal outcomes of per-page and per-block extraction.
//!
//! Fatal conditions (unreadable inputs, failed writes) travel as
//! `anyhow::Error` instead; a `SkipReason` only ever drops one entry.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Error)]
pub enum SkipReason {
    /// No `M:` help id on the page.
    #[error("no method help id")]
    NotAMethodPage,
    /// Function section without a scripting-language invocation example.
    #[error("no invocation example")]
    NoInvocation,
    /// Invocation example present but not of the `name(args)` shape.
    #[error("malformed invocation example")]
    MalformedInvocation,
}
