//! Page geometry, page regions and output blocks.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// Page size and margins, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width: u32,

    /// Page height
    pub height: u32,

    /// Page margins
    pub margins: Margins,

    /// Document grid line pitch
    pub line_pitch: u32,
}

impl PageGeometry {
    /// Width between the left and right margins.
    pub fn text_width(&self) -> u32 {
        self.width
            .saturating_sub(self.margins.left + self.margins.right)
    }
}

/// Page margins, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: u32,
    /// Right margin
    pub right: u32,
    /// Bottom margin
    pub bottom: u32,
    /// Left margin
    pub left: u32,
    /// Header distance from the top edge
    pub header: u32,
    /// Footer distance from the bottom edge
    pub footer: u32,
    /// Binding gutter
    pub gutter: u32,
}

/// Column configuration of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Number of columns
    pub count: u32,
    /// Gap between columns, in twips
    pub gap: u32,
    /// Columns share the text width equally
    pub equal_width: bool,
}

impl ColumnLayout {
    /// Width of one column for the given text width, in twips.
    pub fn column_width(&self, text_width: u32) -> u32 {
        let gaps = self.gap * self.count.saturating_sub(1);
        text_width.saturating_sub(gaps) / self.count.max(1)
    }
}

/// The role of a page region in the fixed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Single-column title block
    Title,
    /// One row of author columns
    AuthorRow,
    /// Two-column body, from the abstract through the references
    Body,
}

/// Start of a page region with its complete layout.
///
/// The target format has no inheritance between region descriptors, so every
/// break carries the full page geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBreak {
    /// Template role of the region
    pub kind: RegionKind,

    /// Column configuration
    pub columns: ColumnLayout,

    /// Continue on the same page instead of starting a new one
    pub continuous: bool,

    /// Page size and margins
    pub page: PageGeometry,
}

/// An item of the layout output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A formatted paragraph
    Paragraph(Paragraph),

    /// A zero-text marker starting a new page region
    RegionBreak(RegionBreak),
}

impl Block {
    /// The paragraph, if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            Block::RegionBreak(_) => None,
        }
    }

    /// The region descriptor, if this block is a region break.
    pub fn as_region_break(&self) -> Option<&RegionBreak> {
        match self {
            Block::RegionBreak(r) => Some(r),
            Block::Paragraph(_) => None,
        }
    }
}
