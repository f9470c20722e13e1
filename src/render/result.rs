//! Build statistics for a laid-out document.

use serde::{Deserialize, Serialize};

use crate::model::{Block, LayoutDocument, LineRule, RegionKind};

/// Statistics collected from a layout stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of in-stream region breaks
    pub region_break_count: u32,

    /// Number of author-row regions
    pub author_row_count: u32,

    /// Number of numbered display equations
    pub equation_count: u32,

    /// Number of section and subsection headings
    pub heading_count: u32,

    /// Number of reference entries
    pub reference_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a layout stream.
    ///
    /// Paragraph roles are recognized by their formatting: equations carry
    /// tab stops, headings keep with the next paragraph, and references use
    /// exact line spacing.
    pub fn collect(doc: &LayoutDocument) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            match block {
                Block::RegionBreak(region) => {
                    stats.region_break_count += 1;
                    if region.kind == RegionKind::AuthorRow {
                        stats.author_row_count += 1;
                    }
                }
                Block::Paragraph(p) => {
                    stats.paragraph_count += 1;
                    stats.count_text(&p.plain_text());
                    if !p.style.tab_stops.is_empty() {
                        stats.equation_count += 1;
                    }
                    if p.style.keep_with_next {
                        stats.heading_count += 1;
                    }
                    if p
                        .style
                        .line_spacing
                        .is_some_and(|s| s.rule == LineRule::Exact)
                    {
                        stats.reference_count += 1;
                    }
                }
            }
        }
        stats
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }
}
