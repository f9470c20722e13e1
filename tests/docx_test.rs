//! Integration tests for DOCX output.

use chrono::{TimeZone, Utc};
use ieee_docx::render::{document_xml, parts, DocxOptions};
use ieee_docx::{compose, convert_file, parse_str, IeeeDocx};
use std::fs;

const PAPER: &str = "\
# Widgets at Scale

**Ada Lovelace**
*Analytical Engines Ltd.*
*London, UK*

**Grace Hopper**
*US Navy*

## Abstract

We study widgets with $\\alpha$ precision.

## Keywords

widgets, layout

## 1. Introduction

Widgets & gadgets are <everywhere>.

$$E = mc^2$$

### Motivation

- first point
- second point

## References

[1] A. Author, \"On widgets,\" 2020.
";

fn layout_xml() -> String {
    let layout = compose(&parse_str(PAPER).unwrap()).unwrap();
    document_xml(&layout).unwrap()
}

#[test]
fn test_single_body_sect_pr_last() {
    let xml = layout_xml();

    let body_end = xml.find("</w:body>").unwrap();
    let last_sect = xml.rfind("<w:sectPr>").unwrap();
    let last_para = xml.rfind("</w:p>").unwrap();
    assert!(last_sect > last_para);
    assert!(last_sect < body_end);

    let tail = &xml[last_sect..body_end];
    assert!(tail.contains(r#"<w:cols w:num="2""#));
    assert!(tail.contains(r#"w:equalWidth="1""#));
    assert!(tail.ends_with("</w:sectPr>"));
}

#[test]
fn test_section_boundaries_for_two_authors() {
    let xml = layout_xml();
    // title, one author row, body (terminal)
    assert_eq!(xml.matches("<w:sectPr>").count(), 3);
    assert_eq!(xml.matches(r#"<w:type w:val="continuous"/>"#).count(), 2);
}

#[test]
fn test_text_escaped() {
    let xml = layout_xml();
    assert!(xml.contains("Widgets &amp; gadgets are &lt;everywhere&gt;."));
}

#[test]
fn test_package_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("paper.md");
    let output = dir.path().join("paper_IEEE.docx");
    fs::write(&input, PAPER).unwrap();

    let options = DocxOptions::new()
        .stored()
        .with_timestamp(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap());
    let stats = convert_file(&input, &output, &options).unwrap();
    assert_eq!(stats.equation_count, 1);
    assert_eq!(stats.reference_count, 1);
    assert_eq!(stats.author_row_count, 1);

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[..4], b"PK\x03\x04");

    // Stored parts keep their names and contents readable in the archive.
    let haystack = String::from_utf8_lossy(&bytes);
    for part in parts::ALL_PARTS {
        assert!(haystack.contains(part), "missing part {part}");
    }
    assert!(haystack.contains("<dc:title>Widgets at Scale</dc:title>"));
    assert!(haystack.contains("2024-05-06T07:08:09Z"));
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.docx");

    let result = convert_file(dir.path().join("nope.md"), &output, &DocxOptions::default());
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_deflated_smaller_than_stored() {
    let result = IeeeDocx::new().parse_str(PAPER).unwrap();
    let deflated = result.to_docx().unwrap();
    let stored = IeeeDocx::new()
        .stored()
        .parse_str(PAPER)
        .unwrap()
        .to_docx()
        .unwrap();
    assert!(deflated.len() < stored.len());
}
