//! # ieee-docx
//!
//! Markdown to IEEE two-column conference paper layout engine.
//!
//! This library reads a paper written in a small markdown dialect (title,
//! authors, abstract, keywords, numbered sections, display equations,
//! references), lays it out on the fixed US Letter conference template and
//! writes the result as a WordprocessingML (`.docx`) package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ieee_docx::{convert_file, output_path_for, render::DocxOptions};
//!
//! fn main() -> ieee_docx::Result<()> {
//!     let input = "paper.md";
//!     convert_file(input, output_path_for(input), &DocxOptions::default())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: [`parser::MarkdownParser`] produces a [`ParsedDocument`]
//! - **Lay out**: [`layout::compose`] produces a [`LayoutDocument`], the
//!   ordered stream of region breaks and formatted paragraphs
//! - **Write**: [`render::to_docx`] serializes the stream into a package
//!
//! ## Features
//!
//! - **Template regions**: single-column title, author rows of up to four
//!   columns, two-column body
//! - **Math notation**: Greek letters, operators, `\frac`, `\mathbb`,
//!   sub- and superscripts rendered as Unicode runs
//! - **Numbering**: Roman section numbers, lettered subsections, sequential
//!   equation numbers, bracketed references

pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{check_input, output_path_for, InputWarning};
pub use error::{Error, Result};
pub use layout::compose;
pub use model::{
    Author, Block, ContentItem, LayoutDocument, Paragraph, ParagraphStyle, ParsedDocument,
    RegionBreak, RegionKind, Section, SectionLevel, TextRun, TextStyle,
};
pub use parser::{ErrorMode, MarkdownParser, ParseOptions};
pub use render::{BuildStats, CompressionMethod, DocxOptions, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Parse a markdown file into a paper model.
///
/// # Example
///
/// ```no_run
/// use ieee_docx::parse_file;
///
/// let paper = parse_file("paper.md").unwrap();
/// println!("Sections: {}", paper.sections.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    MarkdownParser::open(path)?.parse()
}

/// Parse a markdown file with custom options.
///
/// # Example
///
/// ```no_run
/// use ieee_docx::{parse_file_with_options, ParseOptions};
///
/// let paper = parse_file_with_options("paper.md", ParseOptions::new().strict()).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedDocument> {
    MarkdownParser::open_with_options(path, options)?.parse()
}

/// Parse markdown held in memory.
///
/// # Example
///
/// ```
/// use ieee_docx::parse_str;
///
/// let paper = parse_str("# Title\n\n## Intro\n\nHello.\n").unwrap();
/// assert_eq!(paper.title, "Title");
/// ```
pub fn parse_str(text: &str) -> Result<ParsedDocument> {
    MarkdownParser::from_text(text).parse()
}

/// Parse markdown from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<ParsedDocument> {
    MarkdownParser::from_reader(reader)?.parse()
}

/// Lay out a markdown file and serialize it to DOCX bytes.
pub fn to_docx<P: AsRef<Path>>(path: P, options: &DocxOptions) -> Result<Vec<u8>> {
    let paper = parse_file(path)?;
    let layout = compose(&paper)?;
    render::to_docx(&layout, options)
}

/// Convert a markdown file into a DOCX file.
///
/// Nothing is written unless the whole package was built.
///
/// # Example
///
/// ```no_run
/// use ieee_docx::{convert_file, DocxOptions};
///
/// let stats = convert_file("paper.md", "paper_IEEE.docx", &DocxOptions::default()).unwrap();
/// println!("{} paragraphs", stats.paragraph_count);
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &DocxOptions,
) -> Result<BuildStats> {
    IeeeDocx::new()
        .with_docx_options(options.clone())
        .parse(input)?
        .write_docx(output)
}

/// Builder for converting IEEE markdown papers.
///
/// # Example
///
/// ```no_run
/// use ieee_docx::IeeeDocx;
///
/// let bytes = IeeeDocx::new()
///     .strict()
///     .stored()
///     .parse("paper.md")?
///     .to_docx()?;
/// # Ok::<(), ieee_docx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IeeeDocx {
    parse_options: ParseOptions,
    docx_options: DocxOptions,
}

impl IeeeDocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject structural problems instead of repairing them.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Repair structural problems with a warning.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Store package parts without compression.
    pub fn stored(mut self) -> Self {
        self.docx_options = self.docx_options.stored();
        self
    }

    /// Fix the package timestamp.
    pub fn with_timestamp(mut self, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        self.docx_options = self.docx_options.with_timestamp(timestamp);
        self
    }

    /// Replace the DOCX options.
    pub fn with_docx_options(mut self, options: DocxOptions) -> Self {
        self.docx_options = options;
        self
    }

    /// Parse and lay out a markdown file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<IeeeDocxResult> {
        let parser = MarkdownParser::open_with_options(path, self.parse_options.clone())?;
        self.finish(parser)
    }

    /// Parse and lay out markdown held in memory.
    pub fn parse_str(self, text: &str) -> Result<IeeeDocxResult> {
        let parser = MarkdownParser::from_text_with_options(text, self.parse_options.clone());
        self.finish(parser)
    }

    fn finish(self, parser: MarkdownParser) -> Result<IeeeDocxResult> {
        let paper = parser.parse()?;
        let layout = compose(&paper)?;
        Ok(IeeeDocxResult {
            paper,
            layout,
            docx_options: self.docx_options,
        })
    }
}

/// A parsed and laid-out paper.
#[derive(Debug, Clone)]
pub struct IeeeDocxResult {
    /// The parsed paper
    pub paper: ParsedDocument,
    /// The layout stream
    pub layout: LayoutDocument,
    docx_options: DocxOptions,
}

impl IeeeDocxResult {
    /// Serialize to DOCX bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.layout, &self.docx_options)
    }

    /// Serialize and write to `path`, returning build statistics.
    pub fn write_docx<P: AsRef<Path>>(&self, path: P) -> Result<BuildStats> {
        render::write_docx(path, &self.layout, &self.docx_options)?;
        Ok(self.stats())
    }

    /// Dump the layout stream as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.layout, format)
    }

    /// Statistics of the layout stream.
    pub fn stats(&self) -> BuildStats {
        BuildStats::collect(&self.layout)
    }

    /// Plain text of the laid-out paragraphs.
    pub fn plain_text(&self) -> String {
        self.layout.plain_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER: &str = "# Title\n\n**Ada**\n*Lab*\n\n## Abstract\n\nShort.\n\n## Intro\n\nText.\n\n## References\n\n[1] Ref.\n";

    #[test]
    fn test_builder_options() {
        let builder = IeeeDocx::new().strict().stored();
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Strict);
        assert_eq!(builder.docx_options.compression, CompressionMethod::Stored);

        let builder = builder.lenient();
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Lenient);
    }

    #[test]
    fn test_builder_default() {
        let builder = IeeeDocx::default();
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Lenient);
        assert_eq!(builder.docx_options.compression, CompressionMethod::Deflated);
    }

    #[test]
    fn test_parse_str_pipeline() {
        let result = IeeeDocx::new().parse_str(PAPER).unwrap();
        assert_eq!(result.paper.title, "Title");
        assert!(result.plain_text().contains("I. Intro"));
        assert!(result.plain_text().contains("[1]\u{00A0}Ref."));

        let stats = result.stats();
        assert_eq!(stats.reference_count, 1);
        assert_eq!(stats.heading_count, 1);
    }

    #[test]
    fn test_strict_rejects_orphan() {
        let result = IeeeDocx::new().strict().parse_str("### Orphan\n");
        assert!(matches!(result, Err(Error::OrphanSubsection(_))));
    }

    #[test]
    fn test_to_docx_bytes() {
        let bytes = IeeeDocx::new().stored().parse_str(PAPER).unwrap().to_docx().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/no/such/paper.md");
        assert!(matches!(result, Err(Error::MissingInputFile(_))));
    }

    #[test]
    fn test_parse_reader() {
        let paper = parse_reader(PAPER.as_bytes()).unwrap();
        assert_eq!(paper.authors.len(), 1);
        assert_eq!(paper.references, vec!["Ref."]);
    }
}
