//! Paragraph assembly and the template's paragraph styles.

use crate::model::{
    Alignment, Indentation, InlineContent, LineSpacing, Paragraph, ParagraphStyle, Spacing,
    TabAlignment, TabStop,
};

use super::units;

/// Compose inline content and formatting into a paragraph.
pub fn make_paragraph<I, C>(content: I, style: ParagraphStyle) -> Paragraph
where
    I: IntoIterator<Item = C>,
    C: Into<InlineContent>,
{
    Paragraph {
        content: content.into_iter().map(Into::into).collect(),
        style,
    }
}

impl Indentation {
    /// Split back into `(first_line, left, hanging)`.
    pub fn parts(self) -> (Option<u32>, Option<u32>, Option<u32>) {
        match self {
            Indentation::None => (None, None, None),
            Indentation::FirstLine(first) => (Some(first), None, None),
            Indentation::Left(left) => (None, Some(left), None),
            Indentation::Hanging { left, hanging } => (None, Some(left), Some(hanging)),
        }
    }
}

impl ParagraphStyle {
    /// Template default paragraph formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set space before and after, in twips.
    pub fn with_spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing = Spacing { before, after };
        self
    }

    /// Set a first-line indent. Ignored when a hanging indent is present.
    pub fn with_first_line(mut self, first_line: u32) -> Self {
        let (_, left, hanging) = self.indent.parts();
        self.indent = Indentation::from_parts(Some(first_line), left, hanging);
        self
    }

    /// Set the left edge of the text block.
    pub fn with_left(mut self, left: u32) -> Self {
        let (first, _, hanging) = self.indent.parts();
        self.indent = Indentation::from_parts(first, Some(left), hanging);
        self
    }

    /// Set a hanging indent. Clears any first-line indent.
    pub fn with_hanging(mut self, hanging: u32) -> Self {
        let (_, left, _) = self.indent.parts();
        self.indent = Indentation::from_parts(None, left, Some(hanging));
        self
    }

    /// Set the line spacing.
    pub fn with_line_spacing(mut self, line_spacing: LineSpacing) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    /// Keep this paragraph with the next one.
    pub fn keep_with_next(mut self) -> Self {
        self.keep_with_next = true;
        self
    }

    /// Append a custom tab stop.
    pub fn with_tab_stop(mut self, position: u32, alignment: TabAlignment) -> Self {
        self.tab_stops.push(TabStop {
            position,
            alignment,
        });
        self
    }
}

pub fn title_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_alignment(Alignment::Center)
        .with_spacing(0, units::TITLE_SPACE_AFTER)
}

pub fn author_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_alignment(Alignment::Center)
        .with_spacing(0, units::AUTHOR_SPACE_AFTER)
}

pub fn abstract_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(units::ABSTRACT_SPACE_BEFORE, units::ABSTRACT_SPACE_AFTER)
        .with_first_line(units::ABSTRACT_FIRST_INDENT)
}

pub fn keywords_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(0, units::KEYWORDS_SPACE_AFTER)
        .with_first_line(units::KEYWORDS_FIRST_INDENT)
}

pub fn section_heading_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_alignment(Alignment::Center)
        .with_spacing(units::H1_SPACE_BEFORE, units::H1_SPACE_AFTER)
        .keep_with_next()
}

pub fn subsection_heading_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_alignment(Alignment::Left)
        .with_spacing(units::H2_SPACE_BEFORE, units::H2_SPACE_AFTER)
        .keep_with_next()
}

/// Body text: first-line indent and body line spacing.
pub fn body_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(0, units::BODY_SPACE_AFTER)
        .with_first_line(units::BODY_FIRST_INDENT)
        .with_line_spacing(LineSpacing::auto(units::BODY_LINE_SPACING))
}

pub fn quote_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(0, units::BODY_SPACE_AFTER)
        .with_left(units::QUOTE_LEFT_INDENT)
}

pub fn labeled_item_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(0, units::BODY_SPACE_AFTER)
        .with_left(units::LIST_INDENT)
        .with_hanging(units::LIST_INDENT)
}

/// The bullet hangs left of the text block; a tab moves the text to it.
pub fn bullet_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(0, units::BULLET_SPACE_AFTER)
        .with_left(units::BULLET_TEXT_INDENT)
        .with_hanging(units::BULLET_HANGING)
        .with_line_spacing(LineSpacing::auto(units::BODY_LINE_SPACING))
}

/// Centered equation with its number flush right.
pub fn equation_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_alignment(Alignment::Left)
        .with_spacing(units::EQUATION_SPACE, units::EQUATION_SPACE)
        .with_tab_stop(units::EQUATION_CENTER_TAB, TabAlignment::Center)
        .with_tab_stop(units::EQUATION_NUMBER_TAB, TabAlignment::End)
}

pub fn references_heading_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_alignment(Alignment::Center)
        .with_spacing(units::REFERENCES_HEADING_SPACE_BEFORE, units::H1_SPACE_AFTER)
}

pub fn reference_style() -> ParagraphStyle {
    ParagraphStyle::new()
        .with_spacing(0, units::REFERENCE_SPACE_AFTER)
        .with_left(units::REFERENCE_INDENT)
        .with_hanging(units::REFERENCE_INDENT)
        .with_line_spacing(LineSpacing::exact(units::REFERENCE_LINE_SPACING))
}
