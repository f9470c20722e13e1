//! Document composition.
//!
//! One forward pass over a [`ParsedDocument`] that appends region breaks and
//! paragraphs to the output stream in template order.

use crate::error::Result;
use crate::model::{
    Author, Block, ContentItem, DocumentProperties, InlineContent, LayoutDocument, Paragraph,
    ParsedDocument, RegionBreak, Section, SectionLevel, TextStyle,
};

use super::classify::{classify, strip_heading_prefix, strip_markup, ContentKind};
use super::math::transliterate;
use super::numbering::{to_letter, to_roman};
use super::paragraph::{self as styles, make_paragraph};
use super::region::{author_rows, RegionSequencer};
use super::run::{make_math_runs, make_run};
use super::units::{self, NBSP};

/// Lay out a parsed paper.
///
/// # Example
///
/// ```
/// use ieee_docx::layout::compose;
/// use ieee_docx::model::{Author, ParsedDocument, Section};
///
/// let mut paper = ParsedDocument::new();
/// paper.title = "A Study".into();
/// paper.authors.push(Author::new("Ada Lovelace"));
/// paper.sections.push(Section::new("Introduction", 1).with_text("Hello."));
///
/// let layout = compose(&paper).unwrap();
/// assert_eq!(layout.final_region.columns.count, 2);
/// ```
pub fn compose(doc: &ParsedDocument) -> Result<LayoutDocument> {
    Composer::new(doc).compose()
}

/// Counters threaded through one composition.
#[derive(Debug, Default)]
struct ComposeState {
    section: u32,
    subsection: u32,
    equation: u32,
}

impl ComposeState {
    /// Advance the counters for a heading and return its effective level and
    /// label. A stated number wins over the running counter; 0 means unstated.
    /// A subsection before any section is promoted to a section.
    fn next_heading(&mut self, level: SectionLevel, number: u32) -> (SectionLevel, String) {
        match level {
            SectionLevel::Subsection if self.section > 0 => {
                self.subsection = stated_or_next(number, self.subsection);
                (SectionLevel::Subsection, to_letter(self.subsection))
            }
            SectionLevel::Subsection => {
                log::debug!("subsection before any section rendered as a section");
                self.section += 1;
                self.subsection = 0;
                (SectionLevel::Section, to_roman(self.section))
            }
            SectionLevel::Section => {
                self.section = stated_or_next(number, self.section);
                self.subsection = 0;
                (SectionLevel::Section, to_roman(self.section))
            }
        }
    }

    fn next_equation(&mut self) -> u32 {
        self.equation += 1;
        self.equation
    }
}

fn stated_or_next(number: u32, counter: u32) -> u32 {
    if number > 0 {
        number
    } else {
        counter + 1
    }
}

struct Composer<'a> {
    doc: &'a ParsedDocument,
    blocks: Vec<Block>,
    regions: RegionSequencer,
    state: ComposeState,
}

impl<'a> Composer<'a> {
    fn new(doc: &'a ParsedDocument) -> Self {
        Self {
            doc,
            blocks: Vec::new(),
            regions: RegionSequencer::new(),
            state: ComposeState::default(),
        }
    }

    fn compose(mut self) -> Result<LayoutDocument> {
        self.regions.open(&mut self.blocks, RegionBreak::title())?;
        self.title();
        self.authors()?;

        self.regions.open(&mut self.blocks, RegionBreak::body())?;
        self.abstract_paragraph();
        self.keywords();
        let doc = self.doc;
        for section in &doc.sections {
            self.section(section);
        }
        self.references();

        log::debug!(
            "composed {} blocks, {} region breaks, {} equations",
            self.blocks.len(),
            self.regions.break_count(),
            self.state.equation
        );

        let final_region = self.regions.finish()?;
        Ok(LayoutDocument {
            properties: DocumentProperties {
                title: self.doc.title.clone(),
                authors: self.doc.authors.iter().map(|a| a.name.clone()).collect(),
                keywords: self.doc.keywords.clone(),
            },
            blocks: self.blocks,
            final_region,
        })
    }

    fn push(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    fn title(&mut self) {
        let style = TextStyle::sized(units::TITLE_SIZE);
        self.push(make_paragraph(
            [make_run(&self.doc.title, &style)],
            styles::title_style(),
        ));
    }

    fn authors(&mut self) -> Result<()> {
        let doc = self.doc;
        let authors = &doc.authors;
        match authors.len() {
            0 => {}
            1 => self.single_author(&authors[0]),
            count => {
                for row in author_rows(count) {
                    self.regions
                        .open(&mut self.blocks, RegionBreak::author_row(row.len() as u32))?;
                    for author in &authors[row] {
                        let paragraph = author_block(author);
                        self.push(paragraph);
                    }
                }
            }
        }
        Ok(())
    }

    /// A single author stays in the title region as plain centered lines.
    fn single_author(&mut self, author: &Author) {
        let name = TextStyle::sized(units::SINGLE_AUTHOR_SIZE);
        self.push(make_paragraph(
            [make_run(&author.name, &name)],
            styles::author_style(),
        ));

        let affiliation = TextStyle::sized(units::SINGLE_AFFILIATION_SIZE).italic();
        for line in &author.lines {
            self.push(make_paragraph(
                [make_run(line, &affiliation)],
                styles::author_style(),
            ));
        }
    }

    fn abstract_paragraph(&mut self) {
        let text = strip_markup(&self.doc.abstract_text());
        let base = TextStyle::sized(units::ABSTRACT_SIZE).bold();
        let mut runs = vec![
            make_run("Abstract", &base.clone().italic()),
            make_run("\u{2014}", &base),
        ];
        if !text.trim().is_empty() {
            runs.extend(make_math_runs(&text, &base));
        }
        self.push(make_paragraph(runs, styles::abstract_style()));
    }

    fn keywords(&mut self) {
        if self.doc.keywords.is_empty() {
            return;
        }
        let style = TextStyle::sized(units::KEYWORDS_SIZE).bold().italic();
        self.push(make_paragraph(
            [
                make_run("Keywords\u{2014}", &style),
                make_run(&self.doc.keywords, &style),
            ],
            styles::keywords_style(),
        ));
    }

    fn section(&mut self, section: &Section) {
        let (level, label) = self.state.next_heading(section.level, section.number);
        let display = format!("{}. {}", label, strip_heading_prefix(&section.heading));

        let paragraph = match level {
            SectionLevel::Section => make_paragraph(
                [make_run(display, &TextStyle::sized(units::H1_SIZE).small_caps())],
                styles::section_heading_style(),
            ),
            SectionLevel::Subsection => make_paragraph(
                [make_run(display, &TextStyle::sized(units::H2_SIZE).italic())],
                styles::subsection_heading_style(),
            ),
        };
        self.push(paragraph);

        for item in &section.content {
            if let Some(paragraph) = self.content_item(item) {
                self.push(paragraph);
            }
        }
    }

    fn content_item(&mut self, item: &ContentItem) -> Option<Paragraph> {
        let body = TextStyle::sized(units::BODY_SIZE);

        let paragraph = match classify(item) {
            ContentKind::Equation(latex) => {
                let number = self.state.next_equation();
                let text: String = transliterate(&strip_markup(latex))
                    .chars()
                    .map(|c| if c == ' ' { NBSP } else { c })
                    .collect();

                let mut content = vec![InlineContent::Tab];
                content.extend(make_math_runs(&text, &body).into_iter().map(Into::into));
                content.push(InlineContent::Tab);
                content.push(make_run(format!("({number})"), &body).into());
                make_paragraph(content, styles::equation_style())
            }
            ContentKind::Quote(quote) => make_paragraph(
                make_math_runs(&strip_markup(quote), &body.clone().italic()),
                styles::quote_style(),
            ),
            ContentKind::LabeledItem {
                number,
                label,
                rest,
            } => make_paragraph(
                [
                    make_run(format!("{number}. "), &body),
                    make_run(format!("{label} "), &body.clone().bold()),
                    make_run(strip_markup(rest), &body),
                ],
                styles::labeled_item_style(),
            ),
            ContentKind::BoldLabel { label, rest } => {
                let mut runs = vec![make_run(format!("{label} "), &body.clone().bold())];
                runs.extend(make_math_runs(&strip_markup(rest), &body));
                make_paragraph(runs, styles::body_style())
            }
            ContentKind::Bullet(item) => {
                let mut content: Vec<InlineContent> =
                    vec![make_run(units::BULLET, &body).into(), InlineContent::Tab];
                content.extend(
                    make_math_runs(&strip_markup(item), &body)
                        .into_iter()
                        .map(Into::into),
                );
                make_paragraph(content, styles::bullet_style())
            }
            ContentKind::Plain(text) => {
                let cleaned = strip_markup(text);
                if cleaned.trim().is_empty() {
                    return None;
                }
                make_paragraph(make_math_runs(&cleaned, &body), styles::body_style())
            }
        };
        Some(paragraph)
    }

    fn references(&mut self) {
        let heading = TextStyle::sized(units::H1_SIZE).small_caps();
        self.push(make_paragraph(
            [make_run("References", &heading)],
            styles::references_heading_style(),
        ));

        let style = TextStyle::sized(units::REFERENCE_SIZE);
        for (i, reference) in self.doc.references.iter().enumerate() {
            let runs = [
                make_run(format!("[{}]{}", i + 1, NBSP), &style),
                make_run(strip_markup(reference), &style),
            ];
            self.push(make_paragraph(runs, styles::reference_style()));
        }
    }
}

/// One author cell of a multi-author row: name, then each affiliation line
/// after a soft break.
fn author_block(author: &Author) -> Paragraph {
    let size = units::AUTHOR_BLOCK_SIZE;
    let name = TextStyle::sized(size);
    let line = TextStyle::sized(size).italic();

    let mut paragraph = Paragraph::new(styles::author_style());
    paragraph.add_run(make_run(&author.name, &name));
    for text in &author.lines {
        paragraph.add_line_break(size);
        paragraph.add_run(make_run(text, &line));
    }
    paragraph
}
