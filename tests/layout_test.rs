//! Integration tests for the layout engine.

use ieee_docx::layout::{compose, transliterate};
use ieee_docx::model::{
    Author, Block, Indentation, LayoutDocument, LineRule, ParsedDocument, RegionKind, Section,
};
use ieee_docx::parse_str;

fn paper_with_authors(count: usize) -> ParsedDocument {
    ParsedDocument {
        title: "Region Test".into(),
        authors: (0..count)
            .map(|i| Author::new(format!("Author {}", i + 1)).with_line("Lab"))
            .collect(),
        sections: vec![Section::new("Intro", 1).with_text("Body text.")],
        ..Default::default()
    }
}

fn region_kinds(layout: &LayoutDocument) -> Vec<RegionKind> {
    layout.region_breaks().map(|r| r.kind).collect()
}

fn texts(layout: &LayoutDocument) -> Vec<String> {
    layout.paragraphs().map(|p| p.plain_text()).collect()
}

#[test]
fn test_region_order_and_single_terminal() {
    let layout = compose(&paper_with_authors(6)).unwrap();

    assert!(matches!(
        layout.blocks.first(),
        Some(Block::RegionBreak(r)) if r.kind == RegionKind::Title
    ));
    assert_eq!(
        region_kinds(&layout),
        vec![
            RegionKind::Title,
            RegionKind::AuthorRow,
            RegionKind::AuthorRow,
            RegionKind::Body
        ]
    );

    let title = layout.region_breaks().next().unwrap();
    assert_eq!(title.columns.count, 1);
    assert!(!title.continuous);

    assert_eq!(layout.final_region.kind, RegionKind::Body);
    assert_eq!(layout.final_region.columns.count, 2);
    assert!(layout.final_region.columns.equal_width);
}

#[test]
fn test_no_authors_no_rows() {
    let layout = compose(&paper_with_authors(0)).unwrap();
    assert_eq!(region_kinds(&layout), vec![RegionKind::Title, RegionKind::Body]);
}

#[test]
fn test_single_author_plain_paragraphs() {
    let layout = compose(&paper_with_authors(1)).unwrap();
    assert_eq!(region_kinds(&layout), vec![RegionKind::Title, RegionKind::Body]);

    let texts = texts(&layout);
    assert_eq!(texts[1], "Author 1");
    assert_eq!(texts[2], "Lab");
}

#[test]
fn test_two_authors_one_row() {
    let layout = compose(&paper_with_authors(2)).unwrap();
    let rows: Vec<_> = layout
        .region_breaks()
        .filter(|r| r.kind == RegionKind::AuthorRow)
        .collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns.count, 2);
    assert!(rows[0].continuous);
}

#[test]
fn test_five_authors_rows_of_four_and_one() {
    let layout = compose(&paper_with_authors(5)).unwrap();
    let columns: Vec<u32> = layout
        .region_breaks()
        .filter(|r| r.kind == RegionKind::AuthorRow)
        .map(|r| r.columns.count)
        .collect();
    assert_eq!(columns, vec![4, 1]);

    let single_row = layout
        .region_breaks()
        .find(|r| r.columns.count == 1 && r.kind == RegionKind::AuthorRow)
        .unwrap();
    assert!(!single_row.columns.equal_width);
}

#[test]
fn test_heading_numbering() {
    let paper = ParsedDocument {
        title: "T".into(),
        sections: vec![
            Section::new("One", 1),
            Section::subsection("Alpha", 1),
            Section::subsection("Beta", 2),
            Section::new("Two", 2),
            Section::subsection("Gamma", 1),
        ],
        ..Default::default()
    };
    let layout = compose(&paper).unwrap();
    let headings: Vec<String> = layout
        .paragraphs()
        .filter(|p| p.style.keep_with_next)
        .map(|p| p.plain_text())
        .collect();

    assert_eq!(
        headings,
        vec!["I. One", "A. Alpha", "B. Beta", "II. Two", "A. Gamma"]
    );
}

#[test]
fn test_stated_section_number() {
    let paper = ParsedDocument {
        sections: vec![Section::new("2. Existing Prefix Title", 2)],
        ..Default::default()
    };
    let layout = compose(&paper).unwrap();
    assert!(texts(&layout).contains(&"II. Existing Prefix Title".to_string()));
}

#[test]
fn test_existing_heading_prefix_replaced() {
    let layout = parse_str("# T\n\n## Intro\n\n## 2. Existing Prefix Title\n")
        .and_then(|paper| compose(&paper))
        .unwrap();
    assert!(texts(&layout).contains(&"II. Existing Prefix Title".to_string()));
}

#[test]
fn test_equations_numbered_across_sections() {
    let markdown = "# T\n\n## One\n\n$$a$$\n\n$$b$$\n\n## Two\n\n### Sub\n\n$$c$$\n";
    let layout = compose(&parse_str(markdown).unwrap()).unwrap();

    let numbers: Vec<String> = layout
        .paragraphs()
        .filter(|p| !p.style.tab_stops.is_empty())
        .filter_map(|p| p.runs().last().map(|r| r.text.clone()))
        .collect();
    assert_eq!(numbers, vec!["(1)", "(2)", "(3)"]);
}

#[test]
fn test_references_bracketed_with_hanging_indent() {
    let paper = ParsedDocument {
        title: "T".into(),
        references: vec!["First ref.".into(), "Second ref.".into()],
        ..Default::default()
    };
    let layout = compose(&paper).unwrap();

    let refs: Vec<_> = layout
        .paragraphs()
        .filter(|p| p.style.line_spacing.is_some_and(|s| s.rule == LineRule::Exact))
        .collect();
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].plain_text(), "[1]\u{00A0}First ref.");
    assert_eq!(refs[1].plain_text(), "[2]\u{00A0}Second ref.");

    for reference in refs {
        assert!(matches!(reference.style.indent, Indentation::Hanging { .. }));
        assert_eq!(reference.style.line_spacing.unwrap().value, 180);
        assert!(reference.runs().all(|r| r.style.size.points() == 8));
    }
}

#[test]
fn test_transliteration_idempotent() {
    let input = r"\alpha + \frac{a+b}{c} \leq \beta \times \mathbb{R}";
    let once = transliterate(input);
    assert_eq!(transliterate(&once), once);
}

#[test]
fn test_nested_fraction() {
    assert_eq!(transliterate(r"\frac{a+b}{c}"), "(a+b)/(c)");
    assert_eq!(transliterate(r"\frac{\frac{a}{b}}{c}"), "((a)/(b))/(c)");
}

#[test]
fn test_body_paragraphs_after_body_break() {
    let layout = compose(&paper_with_authors(3)).unwrap();
    let body_index = layout
        .blocks
        .iter()
        .position(|b| matches!(b, Block::RegionBreak(r) if r.kind == RegionKind::Body))
        .unwrap();

    let after: Vec<String> = layout.blocks[body_index..]
        .iter()
        .filter_map(Block::as_paragraph)
        .map(|p| p.plain_text())
        .collect();
    assert_eq!(
        after.iter().take(2).map(String::as_str).collect::<Vec<_>>(),
        vec!["Abstract\u{2014}", "I. Intro"]
    );
    assert!(after.contains(&"Body text.".to_string()));
}

#[test]
fn test_abstract_lead_in_without_abstract() {
    let layout = compose(&parse_str("# T

## References

[1] Ref.
").unwrap()).unwrap();
    assert_eq!(texts(&layout), vec!["T", "Abstract\u{2014}", "References", "[1]\u{00A0}Ref."]);

    let lead_in = layout.paragraphs().nth(1).unwrap();
    let first = lead_in.runs().next().unwrap();
    assert_eq!(first.text, "Abstract");
    assert!(first.style.bold && first.style.italic);
}
