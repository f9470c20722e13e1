//! Page geometry, font sizes and spacing of the IEEE conference template.
//!
//! Lengths are twips (1/20 pt, 1440 per inch) unless the name says otherwise.
//! Every rendering rule takes its values from here.

use crate::model::{ColumnLayout, FontSize, Margins, PageGeometry};

/// Twips per typographic point.
pub const TWIPS_PER_POINT: u32 = 20;

/// Twips per inch.
pub const TWIPS_PER_INCH: u32 = 1440;

/// Template font family.
pub const FONT: &str = "Times New Roman";

/// Non-breaking space.
pub const NBSP: char = '\u{00A0}';

/// Bullet glyph for unordered items.
pub const BULLET: &str = "\u{2022}";

// ---- Page -----------------------------------------------------------------

/// US Letter, 0.75" top, 1" bottom, 44.65pt sides.
pub const PAGE: PageGeometry = PageGeometry {
    width: 12240,
    height: 15840,
    margins: Margins {
        top: 1080,
        right: 893,
        bottom: 1440,
        left: 893,
        header: 720,
        footer: 720,
        gutter: 0,
    },
    line_pitch: 360,
};

/// Single column of the title block.
pub const TITLE_COLUMNS: ColumnLayout = ColumnLayout {
    count: 1,
    gap: BODY_COLUMN_GAP,
    equal_width: false,
};

/// Gap between the two body columns (0.25").
pub const BODY_COLUMN_GAP: u32 = 360;

/// Two-column body.
pub const BODY_COLUMNS: ColumnLayout = ColumnLayout {
    count: 2,
    gap: BODY_COLUMN_GAP,
    equal_width: true,
};

/// Gap between author columns (10.80pt).
pub const AUTHOR_COLUMN_GAP: u32 = 216;

/// Most authors placed side by side in one row.
pub const MAX_AUTHORS_PER_ROW: usize = 4;

// ---- Font sizes -----------------------------------------------------------

pub const TITLE_SIZE: FontSize = FontSize::pt(24);
pub const SINGLE_AUTHOR_SIZE: FontSize = FontSize::pt(11);
pub const SINGLE_AFFILIATION_SIZE: FontSize = FontSize::pt(10);
pub const AUTHOR_BLOCK_SIZE: FontSize = FontSize::pt(9);
pub const ABSTRACT_SIZE: FontSize = FontSize::pt(9);
pub const KEYWORDS_SIZE: FontSize = FontSize::pt(9);
pub const BODY_SIZE: FontSize = FontSize::pt(10);
pub const H1_SIZE: FontSize = FontSize::pt(10);
pub const H2_SIZE: FontSize = FontSize::pt(10);
pub const REFERENCE_SIZE: FontSize = FontSize::pt(8);

// ---- Paragraph spacing ----------------------------------------------------

/// Space after a paragraph that does not set its own.
pub const DEFAULT_SPACE_AFTER: u32 = 80;

/// Body line spacing (~11.4pt, auto rule).
pub const BODY_LINE_SPACING: u32 = 228;

pub const TITLE_SPACE_AFTER: u32 = 120;
pub const AUTHOR_SPACE_AFTER: u32 = 40;

pub const ABSTRACT_SPACE_BEFORE: u32 = 360;
pub const ABSTRACT_SPACE_AFTER: u32 = 200;
pub const ABSTRACT_FIRST_INDENT: u32 = 272;

pub const KEYWORDS_SPACE_AFTER: u32 = 120;
pub const KEYWORDS_FIRST_INDENT: u32 = 274;

pub const H1_SPACE_BEFORE: u32 = 160;
pub const H1_SPACE_AFTER: u32 = 80;
pub const H2_SPACE_BEFORE: u32 = 120;
pub const H2_SPACE_AFTER: u32 = 60;

pub const BODY_SPACE_AFTER: u32 = 120;
pub const BODY_FIRST_INDENT: u32 = 288;

/// Left edge of block quotes (0.2").
pub const QUOTE_LEFT_INDENT: u32 = 288;

/// Left edge and hang of labelled list items (0.25").
pub const LIST_INDENT: u32 = 360;

pub const BULLET_SPACE_AFTER: u32 = 40;
pub const BULLET_TEXT_INDENT: u32 = 576;
pub const BULLET_HANGING: u32 = 288;

pub const EQUATION_SPACE: u32 = 240;
/// Center tab of a display equation (half a body column).
pub const EQUATION_CENTER_TAB: u32 = 2520;
/// Right tab carrying the equation number (full body column).
pub const EQUATION_NUMBER_TAB: u32 = 5040;

pub const REFERENCES_HEADING_SPACE_BEFORE: u32 = 200;
pub const REFERENCE_SPACE_AFTER: u32 = 50;
pub const REFERENCE_INDENT: u32 = 354;
/// Reference line height (9pt exact).
pub const REFERENCE_LINE_SPACING: u32 = 180;

/// Convert whole points to twips.
pub const fn points(pt: u32) -> u32 {
    pt * TWIPS_PER_POINT
}
