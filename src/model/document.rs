//! Document-level types.

use super::{Block, Paragraph, RegionBreak};
use serde::{Deserialize, Serialize};

/// A laid-out document: the ordered output stream plus the terminal region.
///
/// Produced by [`crate::layout::compose`] and consumed by the renderers. The
/// stream is never edited after composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Document properties (title, authors)
    pub properties: DocumentProperties,

    /// Paragraphs and region breaks in document order
    pub blocks: Vec<Block>,

    /// Document-level descriptor for the last region
    pub final_region: RegionBreak,
}

impl LayoutDocument {
    /// Iterate over the paragraphs, skipping region breaks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    /// Iterate over the in-stream region breaks.
    pub fn region_breaks(&self) -> impl Iterator<Item = &RegionBreak> {
        self.blocks.iter().filter_map(Block::as_region_break)
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraph_count() == 0
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document properties written to the package metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperties {
    /// Document title
    pub title: String,

    /// Author names in order
    pub authors: Vec<String>,

    /// Keywords
    pub keywords: String,
}

impl DocumentProperties {
    /// Author names joined for the creator field.
    pub fn creator(&self) -> String {
        self.authors.join("; ")
    }
}
