//! WordprocessingML serialization.
//!
//! A `w:sectPr` inside a paragraph describes the section that ends at that
//! paragraph, while the layout stream places each region break before the
//! region it opens. The writer therefore holds on to the open region and
//! emits it, in an empty paragraph, when the next break arrives. The opening
//! break writes nothing; the terminal region becomes the body-level
//! `w:sectPr`.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Indentation, InlineContent, LayoutDocument, LineRule, Paragraph,
    ParagraphStyle, RegionBreak, TabAlignment, TextRun, VerticalAlign,
};

use super::options::DocxOptions;
use super::package::PackageWriter;
use super::parts;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Serialize a laid-out document to DOCX bytes.
///
/// # Example
///
/// ```
/// use ieee_docx::layout::compose;
/// use ieee_docx::model::ParsedDocument;
/// use ieee_docx::render::{to_docx, DocxOptions};
///
/// let layout = compose(&ParsedDocument::new()).unwrap();
/// let bytes = to_docx(&layout, &DocxOptions::default()).unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
pub fn to_docx(doc: &LayoutDocument, options: &DocxOptions) -> Result<Vec<u8>> {
    let timestamp = options.resolved_timestamp();
    let mut package = PackageWriter::new(options.compression, timestamp);

    package.add(parts::CONTENT_TYPES, parts::content_types().as_bytes())?;
    package.add(parts::ROOT_RELS, parts::root_rels().as_bytes())?;
    package.add(parts::DOCUMENT, document_xml(doc)?.as_bytes())?;
    package.add(parts::STYLES, parts::styles().as_bytes())?;
    package.add(parts::SETTINGS, parts::settings().as_bytes())?;
    package.add(parts::DOCUMENT_RELS, parts::document_rels().as_bytes())?;
    package.add(
        parts::CORE_PROPS,
        parts::core_props(&doc.properties, timestamp).as_bytes(),
    )?;
    package.add(parts::APP_PROPS, parts::app_props().as_bytes())?;

    package.finish()
}

/// Serialize a laid-out document and write it to `path`.
///
/// The package is assembled in memory first, so a failed build leaves no
/// file behind.
pub fn write_docx<P: AsRef<Path>>(
    path: P,
    doc: &LayoutDocument,
    options: &DocxOptions,
) -> Result<()> {
    let bytes = to_docx(doc, options)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// The `word/document.xml` part.
pub fn document_xml(doc: &LayoutDocument) -> Result<String> {
    let mut writer = DocumentWriter::new();
    writer.document(doc)?;
    writer.finish()
}

struct DocumentWriter {
    writer: Writer<Vec<u8>>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::Xml(e.to_string()))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Start(tag))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Empty(tag))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn document(&mut self, doc: &LayoutDocument) -> Result<()> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        self.start("w:document", &[("xmlns:w", NS_W), ("xmlns:r", NS_R)])?;
        self.start("w:body", &[])?;

        let mut open_region: Option<&RegionBreak> = None;
        for block in &doc.blocks {
            match block {
                Block::Paragraph(paragraph) => self.paragraph(paragraph)?,
                Block::RegionBreak(region) => {
                    if let Some(previous) = open_region {
                        self.region_end(previous)?;
                    }
                    open_region = Some(region);
                }
            }
        }

        self.section_properties(&doc.final_region)?;
        self.end("w:body")?;
        self.end("w:document")
    }

    /// Empty paragraph closing `region`.
    fn region_end(&mut self, region: &RegionBreak) -> Result<()> {
        self.start("w:p", &[])?;
        self.start("w:pPr", &[])?;
        self.section_properties(region)?;
        self.end("w:pPr")?;
        self.end("w:p")
    }

    fn section_properties(&mut self, region: &RegionBreak) -> Result<()> {
        let page = &region.page;
        let margins = &page.margins;

        self.start("w:sectPr", &[])?;
        if region.continuous {
            self.empty("w:type", &[("w:val", "continuous")])?;
        }
        self.empty(
            "w:pgSz",
            &[
                ("w:w", page.width.to_string().as_str()),
                ("w:h", page.height.to_string().as_str()),
            ],
        )?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", margins.top.to_string().as_str()),
                ("w:right", margins.right.to_string().as_str()),
                ("w:bottom", margins.bottom.to_string().as_str()),
                ("w:left", margins.left.to_string().as_str()),
                ("w:header", margins.header.to_string().as_str()),
                ("w:footer", margins.footer.to_string().as_str()),
                ("w:gutter", margins.gutter.to_string().as_str()),
            ],
        )?;

        let count = region.columns.count.to_string();
        let gap = region.columns.gap.to_string();
        let mut cols = vec![("w:num", count.as_str()), ("w:space", gap.as_str())];
        if region.columns.equal_width {
            cols.push(("w:equalWidth", "1"));
        }
        self.empty("w:cols", &cols)?;

        self.empty("w:docGrid", &[("w:linePitch", page.line_pitch.to_string().as_str())])?;
        self.end("w:sectPr")
    }

    fn paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.start("w:p", &[])?;
        self.paragraph_properties(&paragraph.style)?;
        for item in &paragraph.content {
            match item {
                InlineContent::Text(run) => self.run(run)?,
                InlineContent::Tab => {
                    self.start("w:r", &[])?;
                    self.empty("w:tab", &[])?;
                    self.end("w:r")?;
                }
                InlineContent::LineBreak { size } => {
                    let half_points = size.half_points().to_string();
                    self.start("w:r", &[])?;
                    self.start("w:rPr", &[])?;
                    self.empty("w:sz", &[("w:val", half_points.as_str())])?;
                    self.empty("w:szCs", &[("w:val", half_points.as_str())])?;
                    self.end("w:rPr")?;
                    self.empty("w:br", &[])?;
                    self.end("w:r")?;
                }
            }
        }
        self.end("w:p")
    }

    fn paragraph_properties(&mut self, style: &ParagraphStyle) -> Result<()> {
        self.start("w:pPr", &[])?;

        if style.keep_with_next {
            self.empty("w:keepNext", &[])?;
        }

        if !style.tab_stops.is_empty() {
            self.start("w:tabs", &[])?;
            for stop in &style.tab_stops {
                let val = match stop.alignment {
                    TabAlignment::Start => "start",
                    TabAlignment::Center => "center",
                    TabAlignment::End => "end",
                };
                self.empty(
                    "w:tab",
                    &[("w:val", val), ("w:pos", stop.position.to_string().as_str())],
                )?;
            }
            self.end("w:tabs")?;
        }

        let before = style.spacing.before.to_string();
        let after = style.spacing.after.to_string();
        let mut spacing = vec![("w:before", before.as_str()), ("w:after", after.as_str())];
        let line = style.line_spacing.map(|l| {
            let rule = match l.rule {
                LineRule::Auto => "auto",
                LineRule::Exact => "exact",
            };
            (l.value.to_string(), rule)
        });
        if let Some((value, rule)) = &line {
            spacing.push(("w:line", value.as_str()));
            spacing.push(("w:lineRule", *rule));
        }
        self.empty("w:spacing", &spacing)?;

        match style.indent {
            Indentation::None => {}
            Indentation::FirstLine(first) => {
                self.empty("w:ind", &[("w:firstLine", first.to_string().as_str())])?
            }
            Indentation::Left(left) => self.empty("w:ind", &[("w:left", left.to_string().as_str())])?,
            Indentation::Hanging { left, hanging } => self.empty(
                "w:ind",
                &[
                    ("w:left", left.to_string().as_str()),
                    ("w:hanging", hanging.to_string().as_str()),
                ],
            )?,
        }

        let jc = match style.alignment {
            Alignment::Justify => "both",
            Alignment::Center => "center",
            Alignment::Left => "start",
            Alignment::Right => "end",
        };
        self.empty("w:jc", &[("w:val", jc)])?;

        self.end("w:pPr")
    }

    fn run(&mut self, run: &TextRun) -> Result<()> {
        let style = &run.style;
        let half_points = style.size.half_points().to_string();

        self.start("w:r", &[])?;
        self.start("w:rPr", &[])?;
        self.empty(
            "w:rFonts",
            &[
                ("w:ascii", style.font.as_str()),
                ("w:hAnsi", style.font.as_str()),
                ("w:cs", style.font.as_str()),
            ],
        )?;
        if style.bold {
            self.empty("w:b", &[])?;
            self.empty("w:bCs", &[])?;
        }
        if style.italic {
            self.empty("w:i", &[])?;
            self.empty("w:iCs", &[])?;
        }
        if style.small_caps {
            self.empty("w:smallCaps", &[])?;
        }
        self.empty("w:sz", &[("w:val", half_points.as_str())])?;
        self.empty("w:szCs", &[("w:val", half_points.as_str())])?;
        match style.vertical {
            VerticalAlign::Baseline => {}
            VerticalAlign::Subscript => self.empty("w:vertAlign", &[("w:val", "subscript")])?,
            VerticalAlign::Superscript => {
                self.empty("w:vertAlign", &[("w:val", "superscript")])?
            }
        }
        self.end("w:rPr")?;

        self.start("w:t", &[("xml:space", "preserve")])?;
        if run.text.chars().all(is_xml_char) {
            self.event(Event::Text(BytesText::new(&run.text)))?;
        } else {
            log::warn!("dropping XML-illegal characters from run {:?}", run.text);
            let text: String = run.text.chars().filter(|&c| is_xml_char(c)).collect();
            self.event(Event::Text(BytesText::new(&text)))?;
        }
        self.end("w:t")?;
        self.end("w:r")
    }
}

/// Characters allowed in XML 1.0 text.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
}
