//! Parsed paper model produced by the markdown parser.

use serde::{Deserialize, Serialize};

/// A paper as read from the IEEE markdown dialect.
///
/// Built once by [`crate::parser::MarkdownParser`] and consumed read-only by
/// the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Paper title
    pub title: String,

    /// Authors in display order
    pub authors: Vec<Author>,

    /// Abstract paragraphs (joined with a space when rendered)
    pub abstract_paragraphs: Vec<String>,

    /// Index terms, already stripped of markup
    pub keywords: String,

    /// Sections and subsections in document order
    pub sections: Vec<Section>,

    /// Reference entries without their `[n]` labels
    pub references: Vec<String>,
}

impl ParsedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of display equations across all sections.
    pub fn equation_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.content.iter())
            .filter(|item| item.is_equation())
            .count()
    }

    /// Abstract text as a single line.
    pub fn abstract_text(&self) -> String {
        self.abstract_paragraphs.join(" ")
    }
}

/// One author and their affiliation lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name
    pub name: String,

    /// Affiliation lines (department, organization, city, email, ...)
    pub lines: Vec<String>,
}

impl Author {
    /// Create an author without affiliation lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Append an affiliation line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// Heading depth of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLevel {
    /// Top-level section, numbered I, II, III, ...
    Section,
    /// Subsection, lettered A, B, C, ... within its section
    Subsection,
}

impl SectionLevel {
    /// Numeric depth (1 or 2).
    pub fn depth(self) -> u8 {
        match self {
            SectionLevel::Section => 1,
            SectionLevel::Subsection => 2,
        }
    }
}

/// A section or subsection with its body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading depth
    pub level: SectionLevel,

    /// Heading text as written (may carry its own numbering prefix)
    pub heading: String,

    /// 1-based position within its scope; 0 lets the composer count
    pub number: u32,

    /// Body items in order
    pub content: Vec<ContentItem>,
}

impl Section {
    /// Create a top-level section.
    pub fn new(heading: impl Into<String>, number: u32) -> Self {
        Self {
            level: SectionLevel::Section,
            heading: heading.into(),
            number,
            content: Vec::new(),
        }
    }

    /// Create a subsection.
    pub fn subsection(heading: impl Into<String>, number: u32) -> Self {
        Self {
            level: SectionLevel::Subsection,
            ..Self::new(heading, number)
        }
    }

    /// Append a text line.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(ContentItem::Text(text.into()));
        self
    }

    /// Append a display equation.
    pub fn with_equation(mut self, latex: impl Into<String>) -> Self {
        self.content.push(ContentItem::Equation(latex.into()));
        self
    }
}

/// A body item inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentItem {
    /// A line of prose, list item, quote, ...
    Text(String),
    /// A display equation body (between `$$` delimiters)
    Equation(String),
}

impl ContentItem {
    /// Check if this is a display equation.
    pub fn is_equation(&self) -> bool {
        matches!(self, ContentItem::Equation(_))
    }
}
