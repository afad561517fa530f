//! Metadata-anchored pipeline: one HTML page per member.
//!
//! The help id gives the fully-qualified identity and parameter types; the
//! C# declaration gives parameter names, return type and static-ness.
//! Pages are independent, so they are processed in parallel and the
//! caller sorts the result.

pub mod assemble;
pub mod declaration;
pub mod help_id;

use crate::error::SkipReason;
use crate::markup;
use crate::model::Signature;
use crate::output::Extraction;
use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PAGE_PREFIX: &str = "M_";
const PAGE_EXTENSIONS: &[&str] = &[".htm", ".html"];

/// Extract the signature of one member page.
pub fn extract_page(page: &str) -> Result<Signature, SkipReason> {
    let help = help_id::find(page)
        .and_then(|id| help_id::parse(&id))
        .ok_or(SkipReason::NotAMethodPage)?;
    let decl = declaration::find(page).and_then(|text| declaration::parse(&text));
    Ok(assemble::assemble(&help, decl.as_ref()))
}

/// `M_*.htm` / `M_*.html`, extension case-insensitive.
pub fn is_member_page(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lower = name.to_lowercase();
    name.starts_with(PAGE_PREFIX) && PAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// All member pages under `dir`, recursively, in path order.
pub fn discover_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("input directory not found: {}", dir.display());
    }
    let root = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/**/{}*", root, PAGE_PREFIX);
    let mut pages: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && is_member_page(p))
        .collect();
    pages.sort();
    Ok(pages)
}

/// Run the pipeline over every member page under `dir`.
///
/// An unreadable page is fatal; a page without method content is skipped.
pub fn extract_dir(dir: &Path) -> Result<Extraction> {
    let pages = discover_pages(dir)?;
    debug!(count = pages.len(), dir = %dir.display(), "discovered member pages");

    let outcomes = pages
        .par_iter()
        .map(|path| -> Result<_> {
            let bytes =
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path, extract_page(&markup::decode_page(&bytes))))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut extraction = Extraction::default();
    for (path, outcome) in outcomes {
        extraction.record(&path.to_string_lossy(), outcome);
    }
    Ok(extraction)
}
