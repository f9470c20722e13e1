//! Document model types.
//!
//! Two models live here: the parsed paper ([`ParsedDocument`]) that the
//! markdown parser produces, and the layout output stream
//! ([`LayoutDocument`]) that the layout engine produces and the renderers
//! consume. Both are format-agnostic.

mod document;
mod page;
mod paper;
mod paragraph;

pub use document::{DocumentProperties, LayoutDocument};
pub use page::{Block, ColumnLayout, Margins, PageGeometry, RegionBreak, RegionKind};
pub use paper::{Author, ContentItem, ParsedDocument, Section, SectionLevel};
pub use paragraph::{
    Alignment, FontSize, Indentation, InlineContent, LineRule, LineSpacing, Paragraph,
    ParagraphStyle, Spacing, TabAlignment, TabStop, TextRun, TextStyle, VerticalAlign,
};
