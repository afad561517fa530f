//! Function sections of the script index page.
//!
//! The index is flat: each function is an accordion anchor followed by a
//! content panel, and nothing closes the panel. A section therefore runs
//! from the panel opener to the next anchor, the next `<h2>`, or the end of
//! the document. The scan is an explicit three-state machine:
//!
//! ```text
//! SeekingAnchor --anchor--> SeekingPanel --panel--> SeekingBoundary --emit--> SeekingAnchor
//!                           (no panel: resume after the anchor)
//! ```

use regex::Regex;
use std::sync::LazyLock;

static RE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)<a\s+role="button"\s+class="code_accordion"[^>]*>\s*"#,
        r#"<div[^>]+id=["']([^"']+)["'][^>]*>([^<]+)</div>\s*</a>"#
    ))
    .unwrap()
});

static RE_PANEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<div\s+class="code_panel">"#).unwrap());

static RE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s+role="button"\s+class="code_accordion"|<h2\b"#).unwrap()
});

/// One function section: the anchor's label and the panel markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub anchor: String,
    pub body: &'a str,
}

enum ScanState {
    SeekingAnchor,
    SeekingPanel { anchor: String, from: usize },
    SeekingBoundary { anchor: String, start: usize },
}

/// Iterator over the function sections of an index document.
pub struct Blocks<'a> {
    doc: &'a str,
    pos: usize,
}

pub fn blocks(doc: &str) -> Blocks<'_> {
    Blocks { doc, pos: 0 }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        let mut state = ScanState::SeekingAnchor;
        loop {
            state = match state {
                ScanState::SeekingAnchor => {
                    let caps = RE_ANCHOR.captures_at(self.doc, self.pos)?;
                    let whole = caps.get(0)?;
                    ScanState::SeekingPanel {
                        anchor: caps[2].trim().to_string(),
                        from: whole.end(),
                    }
                }
                ScanState::SeekingPanel { anchor, from } => {
                    match RE_PANEL.find_at(self.doc, from) {
                        Some(panel) => ScanState::SeekingBoundary {
                            anchor,
                            start: panel.end(),
                        },
                        None => {
                            self.pos = from;
                            ScanState::SeekingAnchor
                        }
                    }
                }
                ScanState::SeekingBoundary { anchor, start } => {
                    let end = RE_BOUNDARY
                        .find_at(self.doc, start)
                        .map_or(self.doc.len(), |m| m.start());
                    self.pos = end;
                    return Some(Block {
                        anchor,
                        body: &self.doc[start..end],
                    });
                }
            };
        }
    }
}
