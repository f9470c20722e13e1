//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

use crate::layout::units;

/// A font size, stored in half-points as the target format expects.
///
/// Only whole, positive point sizes are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontSize(u32);

impl FontSize {
    /// Create a size from whole points.
    ///
    /// # Panics
    ///
    /// Panics if `points` is zero. In const context this is a compile error.
    pub const fn pt(points: u32) -> Self {
        assert!(points > 0, "font size must be positive");
        Self(points * 2)
    }

    /// Size in points.
    pub const fn points(self) -> u32 {
        self.0 / 2
    }

    /// Size in half-points.
    pub const fn half_points(self) -> u32 {
        self.0
    }
}

/// Vertical position of a run relative to the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Normal text
    #[default]
    Baseline,
    /// Lowered, reduced size
    Subscript,
    /// Raised, reduced size
    Superscript,
}

/// Character formatting of a run.
///
/// A plain value: two styles with equal fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size
    pub size: FontSize,

    /// Bold weight
    pub bold: bool,

    /// Italic slant
    pub italic: bool,

    /// Small capitals
    pub small_caps: bool,

    /// Baseline, subscript or superscript
    pub vertical: VerticalAlign,

    /// Font family
    pub font: String,
}

impl TextStyle {
    /// Create a regular style in the template font.
    pub fn sized(size: FontSize) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            small_caps: false,
            vertical: VerticalAlign::Baseline,
            font: units::FONT.to_string(),
        }
    }

    /// Set bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic slant.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set small capitals.
    pub fn small_caps(mut self) -> Self {
        self.small_caps = true;
        self
    }

    /// Copy of this style with another vertical position.
    pub fn with_vertical(&self, vertical: VerticalAlign) -> Self {
        Self {
            vertical,
            ..self.clone()
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::sized(units::BODY_SIZE)
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// Advance to the next tab stop
    Tab,

    /// A soft line break inside the paragraph
    LineBreak {
        /// Size of the (empty) break run
        size: FontSize,
    },
}

impl From<TextRun> for InlineContent {
    fn from(run: TextRun) -> Self {
        InlineContent::Text(run)
    }
}

/// A paragraph of formatted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs, tabs and breaks in order
    pub content: Vec<InlineContent>,

    /// Paragraph formatting
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create an empty paragraph with the given formatting.
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            content: Vec::new(),
            style,
        }
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a tab.
    pub fn add_tab(&mut self) {
        self.content.push(InlineContent::Tab);
    }

    /// Add a soft line break.
    pub fn add_line_break(&mut self, size: FontSize) {
        self.content.push(InlineContent::LineBreak { size });
    }

    /// Text runs of the paragraph, skipping tabs and breaks.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::Tab => "\t",
                InlineContent::LineBreak { .. } => "\n",
            })
            .collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs().all(|r| r.text.trim().is_empty())
    }
}

/// Paragraph formatting properties. Lengths are in twips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// Space before and after
    pub spacing: Spacing,

    /// Indentation model
    pub indent: Indentation,

    /// Line spacing, or `None` to inherit
    pub line_spacing: Option<LineSpacing>,

    /// Keep on the same page as the next paragraph
    pub keep_with_next: bool,

    /// Custom tab stops in order
    pub tab_stops: Vec<TabStop>,
}

impl Default for ParagraphStyle {
    /// Justified, 4pt after, body line spacing.
    fn default() -> Self {
        Self {
            alignment: Alignment::Justify,
            spacing: Spacing {
                before: 0,
                after: units::DEFAULT_SPACE_AFTER,
            },
            indent: Indentation::None,
            line_spacing: Some(LineSpacing::auto(units::BODY_LINE_SPACING)),
            keep_with_next: false,
            tab_stops: Vec::new(),
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Justified alignment (default)
    #[default]
    Justify,
    /// Center alignment
    Center,
    /// Left alignment
    Left,
    /// Right alignment
    Right,
}

impl Alignment {
    /// Map a logical alignment name; unknown names fall back to justify.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" => Alignment::Center,
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            _ => Alignment::Justify,
        }
    }
}

/// Vertical spacing around a paragraph, in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Space before the paragraph
    pub before: u32,
    /// Space after the paragraph
    pub after: u32,
}

/// Paragraph indentation, in twips.
///
/// First-line and hanging indents cannot be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Indentation {
    /// No indentation
    #[default]
    None,
    /// Indent the first line only
    FirstLine(u32),
    /// Indent every line from the left
    Left(u32),
    /// Indent every line, then pull the first line back by `hanging`
    Hanging {
        /// Left edge of the text block
        left: u32,
        /// How far the first line hangs left of `left`
        hanging: u32,
    },
}

impl Indentation {
    /// Combine optional indentation settings.
    ///
    /// A hanging indent wins over a first-line indent. A first-line indent
    /// given together with a left indent keeps only the left indent.
    pub fn from_parts(first_line: Option<u32>, left: Option<u32>, hanging: Option<u32>) -> Self {
        match (first_line, left, hanging) {
            (_, left, Some(hanging)) => Indentation::Hanging {
                left: left.unwrap_or(0),
                hanging,
            },
            (_, Some(left), None) => Indentation::Left(left),
            (Some(first), None, None) => Indentation::FirstLine(first),
            (None, None, None) => Indentation::None,
        }
    }
}

/// Line spacing rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRule {
    /// Value is in 240ths of a line
    #[default]
    Auto,
    /// Value is an exact height in twips
    Exact,
}

/// Line spacing of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpacing {
    /// Spacing value, interpreted per `rule`
    pub value: u32,
    /// How `value` is interpreted
    pub rule: LineRule,
}

impl LineSpacing {
    /// Proportional spacing.
    pub const fn auto(value: u32) -> Self {
        Self {
            value,
            rule: LineRule::Auto,
        }
    }

    /// Fixed line height.
    pub const fn exact(value: u32) -> Self {
        Self {
            value,
            rule: LineRule::Exact,
        }
    }
}

/// Alignment of text at a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlignment {
    /// Text starts at the stop
    Start,
    /// Text is centered on the stop
    Center,
    /// Text ends at the stop
    End,
}

/// A custom tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStop {
    /// Position from the left text edge, in twips
    pub position: u32,
    /// Alignment at the stop
    pub alignment: TabAlignment,
}
