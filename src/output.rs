//! Accumulating, ordering and writing signature listings.

use crate::error::SkipReason;
use crate::model::Signature;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Lines and skip counts gathered over one run.
#[derive(Debug, Default)]
pub struct Extraction {
    pub lines: Vec<String>,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl Extraction {
    /// Record the outcome for one page or block; `source` only feeds the log.
    pub fn record(&mut self, source: &str, outcome: Result<Signature, SkipReason>) {
        match outcome {
            Ok(sig) => self.lines.push(sig.to_string()),
            Err(reason) => {
                debug!(source, %reason, "skipped");
                *self.skipped.entry(reason).or_default() += 1;
            }
        }
    }

    pub fn seen(&self) -> usize {
        self.lines.len() + self.skipped_total()
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn log_summary(&self, what: &str) {
        info!(
            "processed {} {}; extracted {} signatures; skipped {}",
            self.seen(),
            what,
            self.lines.len(),
            self.skipped_total()
        );
        for (reason, count) in &self.skipped {
            debug!("  {count} skipped: {reason}");
        }
    }
}

/// Sort lines; duplicates are kept.
pub fn sorted(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines
}

/// Sort lines and drop duplicates.
pub fn sorted_unique(mut lines: Vec<String>) -> Vec<String> {
    lines.sort();
    lines.dedup();
    lines
}

/// Lines whose qualified name starts with `prefix`.
pub fn in_namespace<'a>(lines: &'a [String], prefix: &'a str) -> impl Iterator<Item = &'a String> {
    lines.iter().filter(move |line| line.starts_with(prefix))
}

/// Write `\n`-terminated lines, creating parent directories as needed.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    info!("output written to {}", path.display());
    Ok(())
}

/// Copy the lines of an existing listing that start with `prefix`.
/// Returns how many lines were kept.
pub fn filter_file(input: &Path, output: &Path, prefix: &str) -> Result<usize> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    let kept: Vec<&String> = in_namespace(&lines, prefix).collect();
    write_lines(output, &kept)?;
    Ok(kept.len())
}
