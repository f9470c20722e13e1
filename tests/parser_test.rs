//! Integration tests for the markdown parser.

use ieee_docx::model::{ContentItem, SectionLevel};
use ieee_docx::{parse_file, parse_file_with_options, Error, ParseOptions};
use std::fs;

const PAPER: &str = "\
# A Survey of Widgets

**Ada Lovelace**
*Dept. of Mathematics*
*ada@example.com*

**Charles Babbage**
*Difference Engines*

---

## Abstract

Widgets are common.

They are also useful.

## Keywords

*widgets*, **layout**

## Introduction

Widgets appear in $O(n)$ time.

$$\\sum_{i=1}^{n} x_i$$

### Background

1. **Origins** widgets predate gadgets.

## References

[1] A. Author, \"Widgets,\"
    Journal of Things, 2020.
[2] B. Author, \"Gadgets,\" 2021.
";

fn write_paper(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.md");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_parse_full_paper() {
    let (_dir, path) = write_paper(PAPER);
    let paper = parse_file(&path).unwrap();

    assert_eq!(paper.title, "A Survey of Widgets");
    assert_eq!(paper.authors.len(), 2);
    assert_eq!(paper.authors[0].name, "Ada Lovelace");
    assert_eq!(
        paper.authors[0].lines,
        vec!["Dept. of Mathematics", "ada@example.com"]
    );
    assert_eq!(paper.authors[1].lines, vec!["Difference Engines"]);

    assert_eq!(
        paper.abstract_paragraphs,
        vec!["Widgets are common.", "They are also useful."]
    );
    assert_eq!(paper.keywords, "widgets, layout");
}

#[test]
fn test_parse_sections_and_content() {
    let (_dir, path) = write_paper(PAPER);
    let paper = parse_file(&path).unwrap();

    assert_eq!(paper.sections.len(), 2);
    assert_eq!(paper.sections[0].level, SectionLevel::Section);
    assert_eq!(paper.sections[0].heading, "Introduction");
    assert_eq!(paper.sections[1].level, SectionLevel::Subsection);
    assert_eq!(paper.sections[1].number, 1);

    assert_eq!(
        paper.sections[0].content,
        vec![
            ContentItem::Text("Widgets appear in $O(n)$ time.".into()),
            ContentItem::Equation(r"\sum_{i=1}^{n} x_i".into()),
        ]
    );
    assert_eq!(paper.equation_count(), 1);
}

#[test]
fn test_parse_references_with_continuation() {
    let (_dir, path) = write_paper(PAPER);
    let paper = parse_file(&path).unwrap();

    assert_eq!(
        paper.references,
        vec![
            "A. Author, \"Widgets,\" Journal of Things, 2020.",
            "B. Author, \"Gadgets,\" 2021.",
        ]
    );
}

#[test]
fn test_orphan_subsection_modes() {
    let (_dir, path) = write_paper("# T\n\n### Early\n\nText.\n");

    let paper = parse_file(&path).unwrap();
    assert_eq!(paper.sections[0].level, SectionLevel::Section);
    assert_eq!(paper.sections[0].heading, "Early");

    let result = parse_file_with_options(&path, ParseOptions::new().strict());
    match result {
        Err(Error::OrphanSubsection(line)) => assert_eq!(line, "### Early"),
        other => panic!("expected orphan error, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_file(dir.path().join("absent.md"));
    assert!(matches!(result, Err(Error::MissingInputFile(_))));
}

#[test]
fn test_parse_nfc_normalized() {
    // "e" followed by a combining acute accent
    let (_dir, path) = write_paper("# Caf\u{0065}\u{0301}\n");
    let paper = parse_file(&path).unwrap();
    assert_eq!(paper.title, "Caf\u{00E9}");
}
