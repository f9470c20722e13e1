//! IEEE markdown parser.
//!
//! A line scanner for the paper dialect: `# Title`, bold author names with
//! italic affiliation lines, `## Abstract`, `## Keywords`, `##`/`###`
//! headings, `$$...$$` display equations and a numbered reference list.
//! Lines that match no rule are never an error; they become body text or are
//! dropped.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::layout::strip_markup;
use crate::model::{Author, ContentItem, ParsedDocument, Section};

use super::options::{ErrorMode, ParseOptions};

static RE_REFERENCES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s+References").expect("valid regex"));
static RE_ABSTRACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s+Abstract").expect("valid regex"));
static RE_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^##\s+Keywords").expect("valid regex"));
static RE_REFERENCE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+)\]\s*(.*)").expect("valid regex"));
static RE_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---+$").expect("valid regex"));
static RE_LEVEL2_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s").expect("valid regex"));
static RE_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*\s*$").expect("valid regex"));
static RE_AFFILIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*(.+?)\*\s*$").expect("valid regex"));
static RE_EQUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\$(.+?)\$\$$").expect("valid regex"));

/// IEEE markdown parser.
pub struct MarkdownParser {
    source: String,
    options: ParseOptions,
}

impl MarkdownParser {
    /// Open a markdown file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a markdown file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingInputFile(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path)?;
        Ok(Self::from_text_with_options(&source, options))
    }

    /// Parse markdown held in memory.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_options(text, ParseOptions::default())
    }

    /// Parse markdown held in memory with custom options.
    pub fn from_text_with_options(text: &str, options: ParseOptions) -> Self {
        Self {
            source: text.nfc().collect(),
            options,
        }
    }

    /// Parse markdown from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse markdown from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text_with_options(&text, options))
    }

    /// Parse the source into a paper model.
    pub fn parse(&self) -> Result<ParsedDocument> {
        let lines: Vec<&str> = self.source.lines().collect();
        let mut scanner = Scanner::new(self.options.error_mode);

        let mut i = 0;
        while i < lines.len() {
            i = scanner.line(&lines, i)?;
        }

        let doc = scanner.doc;
        log::debug!(
            "parsed \"{}\": {} authors, {} sections, {} references",
            doc.title,
            doc.authors.len(),
            doc.sections.len(),
            doc.references.len()
        );
        Ok(doc)
    }
}

/// Where the scanner is in the paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Front,
    PostTitle,
    Abstract,
    Keywords,
    Body,
}

struct Scanner {
    doc: ParsedDocument,
    phase: Phase,
    in_references: bool,
    current_section: Option<usize>,
    section_count: u32,
    subsection_count: u32,
    error_mode: ErrorMode,
}

impl Scanner {
    fn new(error_mode: ErrorMode) -> Self {
        Self {
            doc: ParsedDocument::new(),
            phase: Phase::Front,
            in_references: false,
            current_section: None,
            section_count: 0,
            subsection_count: 0,
            error_mode,
        }
    }

    /// Consume the line at `i` (and any continuation lines). Returns the index
    /// of the next unread line.
    fn line(&mut self, lines: &[&str], i: usize) -> Result<usize> {
        let line = lines[i].trim_end();
        let trimmed = line.trim();
        let next = i + 1;

        if RE_REFERENCES.is_match(trimmed) || trimmed == "REFERENCES" {
            self.in_references = true;
            self.current_section = None;
            return Ok(next);
        }

        if self.in_references {
            return Ok(self.reference(lines, trimmed, next));
        }

        if self.phase == Phase::Front {
            if let Some(title) = line.strip_prefix("# ") {
                self.doc.title = title.trim().to_string();
                self.phase = Phase::PostTitle;
                return Ok(next);
            }
        }

        if self.phase == Phase::PostTitle && self.author_line(trimmed) {
            return Ok(next);
        }

        if RE_ABSTRACT.is_match(trimmed) {
            self.phase = Phase::Abstract;
            self.current_section = None;
            return Ok(next);
        }

        if self.phase == Phase::Abstract {
            if trimmed.is_empty() || RE_RULE.is_match(trimmed) {
                return Ok(next);
            }
            if RE_LEVEL2_START.is_match(trimmed) {
                self.phase = Phase::Body;
            } else {
                self.doc.abstract_paragraphs.push(trimmed.to_string());
                return Ok(next);
            }
        }

        if RE_KEYWORDS.is_match(trimmed) {
            self.phase = Phase::Keywords;
            self.current_section = None;
            return Ok(next);
        }

        if self.phase == Phase::Keywords {
            if trimmed.is_empty() || RE_RULE.is_match(trimmed) {
                return Ok(next);
            }
            if RE_LEVEL2_START.is_match(trimmed) {
                self.phase = Phase::Body;
            } else {
                self.doc.keywords = strip_markup(trimmed);
                return Ok(next);
            }
        }

        if RE_RULE.is_match(trimmed) {
            return Ok(next);
        }

        if let Some(heading) = trimmed.strip_prefix("## ") {
            self.open_section(heading);
            return Ok(next);
        }

        if let Some(heading) = trimmed.strip_prefix("### ") {
            self.open_subsection(heading, trimmed)?;
            return Ok(next);
        }

        if self.phase == Phase::Body && !trimmed.is_empty() {
            if let Some(index) = self.current_section {
                let item = match RE_EQUATION.captures(trimmed) {
                    Some(caps) => ContentItem::Equation(caps[1].to_string()),
                    None => ContentItem::Text(trimmed.to_string()),
                };
                self.doc.sections[index].content.push(item);
            }
        }

        Ok(next)
    }

    /// Author block between the title and the abstract. Returns whether the
    /// line was consumed.
    fn author_line(&mut self, trimmed: &str) -> bool {
        if trimmed.is_empty() || RE_RULE.is_match(trimmed) {
            return true;
        }
        if let Some(caps) = RE_AUTHOR.captures(trimmed) {
            self.doc.authors.push(Author::new(caps[1].trim()));
            return true;
        }
        if let Some(caps) = RE_AFFILIATION.captures(trimmed) {
            if let Some(author) = self.doc.authors.last_mut() {
                author.lines.push(caps[1].trim().to_string());
                return true;
            }
        }
        false
    }

    /// A `[n] text` entry plus its continuation lines.
    fn reference(&mut self, lines: &[&str], trimmed: &str, mut next: usize) -> usize {
        let Some(caps) = RE_REFERENCE_ENTRY.captures(trimmed) else {
            return next;
        };

        let mut text = caps[2].to_string();
        while let Some(continuation) = lines.get(next).map(|l| l.trim()) {
            if continuation.is_empty() || RE_REFERENCE_ENTRY.is_match(continuation) {
                break;
            }
            text.push(' ');
            text.push_str(continuation);
            next += 1;
        }
        self.doc.references.push(text);
        next
    }

    fn open_section(&mut self, heading: &str) {
        self.phase = Phase::Body;
        self.section_count += 1;
        self.subsection_count = 0;
        self.doc
            .sections
            .push(Section::new(heading.trim(), self.section_count));
        self.current_section = Some(self.doc.sections.len() - 1);
    }

    fn open_subsection(&mut self, heading: &str, line: &str) -> Result<()> {
        if self.section_count == 0 {
            match self.error_mode {
                ErrorMode::Strict => return Err(Error::OrphanSubsection(line.to_string())),
                ErrorMode::Lenient => {
                    log::warn!("subsection before any section, promoted: {}", line);
                    self.open_section(heading);
                    return Ok(());
                }
            }
        }

        self.phase = Phase::Body;
        self.subsection_count += 1;
        self.doc
            .sections
            .push(Section::subsection(heading.trim(), self.subsection_count));
        self.current_section = Some(self.doc.sections.len() - 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionLevel;

    #[test]
    fn test_patterns_compile() {
        for re in [
            &RE_REFERENCES,
            &RE_ABSTRACT,
            &RE_KEYWORDS,
            &RE_REFERENCE_ENTRY,
            &RE_RULE,
            &RE_LEVEL2_START,
            &RE_AUTHOR,
            &RE_AFFILIATION,
            &RE_EQUATION,
        ] {
            LazyLock::force(re);
        }
    }

    fn parse(text: &str) -> ParsedDocument {
        MarkdownParser::from_text(text).parse().unwrap()
    }

    const PAPER: &str = "\
# A Study of Widgets

**Ada Lovelace**
*Dept. of Mathematics*
*London, UK*

**Grace Hopper**
*US Navy*

---

## Abstract

We study **widgets**.
They are useful.

## Keywords

*widgets, layout*

## 1. Introduction

Widgets matter.

$$E = mc^2$$

### Background

Prior work exists.

## Method

---

Text.

## References

[1] A. Author, \"Title,\"
    Journal, 2020.
[2] B. Author, Book, 2021.
";

    #[test]
    fn test_front_matter() {
        let doc = parse(PAPER);
        assert_eq!(doc.title, "A Study of Widgets");
        assert_eq!(doc.authors.len(), 2);
        assert_eq!(doc.authors[0].name, "Ada Lovelace");
        assert_eq!(
            doc.authors[0].lines,
            vec!["Dept. of Mathematics", "London, UK"]
        );
        assert_eq!(doc.authors[1].lines, vec!["US Navy"]);
        assert_eq!(
            doc.abstract_paragraphs,
            vec!["We study **widgets**.", "They are useful."]
        );
        assert_eq!(doc.keywords, "widgets, layout");
    }

    #[test]
    fn test_sections_and_numbering() {
        let doc = parse(PAPER);
        assert_eq!(doc.sections.len(), 3);

        let intro = &doc.sections[0];
        assert_eq!(intro.level, SectionLevel::Section);
        assert_eq!(intro.heading, "1. Introduction");
        assert_eq!(intro.number, 1);
        assert_eq!(
            intro.content,
            vec![
                ContentItem::Text("Widgets matter.".into()),
                ContentItem::Equation("E = mc^2".into()),
            ]
        );

        let background = &doc.sections[1];
        assert_eq!(background.level, SectionLevel::Subsection);
        assert_eq!(background.number, 1);

        let method = &doc.sections[2];
        assert_eq!(method.number, 2);
        assert_eq!(method.content, vec![ContentItem::Text("Text.".into())]);
    }

    #[test]
    fn test_references_with_continuation() {
        let doc = parse(PAPER);
        assert_eq!(
            doc.references,
            vec![
                "A. Author, \"Title,\" Journal, 2020.",
                "B. Author, Book, 2021."
            ]
        );
    }

    #[test]
    fn test_uppercase_references_marker() {
        let doc = parse("# T\n\n## Intro\n\nBody.\n\nREFERENCES\n[1] Ref one.\n");
        assert_eq!(doc.references, vec!["Ref one."]);
        assert_eq!(doc.sections[0].content.len(), 1);
    }

    #[test]
    fn test_subsection_numbering_resets() {
        let doc = parse("## One\n### A\n### B\n## Two\n### C\n");
        let numbers: Vec<_> = doc
            .sections
            .iter()
            .map(|s| (s.level.depth(), s.number))
            .collect();
        assert_eq!(numbers, vec![(1, 1), (2, 1), (2, 2), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_orphan_subsection_lenient() {
        let doc = parse("# T\n\n### Orphan\n\nText.\n");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].level, SectionLevel::Section);
        assert_eq!(doc.sections[0].number, 1);
        assert_eq!(doc.sections[0].content.len(), 1);
    }

    #[test]
    fn test_orphan_subsection_strict() {
        let parser =
            MarkdownParser::from_text_with_options("### Orphan\n", ParseOptions::new().strict());
        let err = parser.parse().unwrap_err();
        assert!(matches!(err, Error::OrphanSubsection(line) if line == "### Orphan"));
    }

    #[test]
    fn test_text_before_section_dropped() {
        let doc = parse("# T\n\nStray line.\n\n## Intro\n\nKept.\n");
        assert!(doc.authors.is_empty());
        assert_eq!(doc.sections[0].content, vec![ContentItem::Text("Kept.".into())]);
    }

    #[test]
    fn test_nfc_normalization() {
        let doc = parse("# Cafe\u{0301}\n");
        assert_eq!(doc.title, "Caf\u{00E9}");
    }

    #[test]
    fn test_crlf_lines() {
        let doc = parse("# Title\r\n\r\n## Intro\r\n\r\nBody.\r\n");
        assert_eq!(doc.title, "Title");
        assert_eq!(doc.sections[0].content, vec![ContentItem::Text("Body.".into())]);
    }

    #[test]
    fn test_missing_file() {
        let err = MarkdownParser::open("/nonexistent/paper.md").err().unwrap();
        assert!(matches!(err, Error::MissingInputFile(_)));
    }
}
