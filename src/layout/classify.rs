//! Content item classification.
//!
//! Each text item is tested against an ordered list of matchers; the first
//! match decides how the item is laid out. Classification is stateless.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ContentItem;

static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static RE_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));
static RE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid regex"));
static RE_HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+\.\s*").expect("valid regex"));
static RE_LABELED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+\*\*(.+?)\*\*\s*(.*)").expect("valid regex"));
static RE_BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*\s*(.*)").expect("valid regex"));
static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+").expect("valid regex"));

/// How a content item is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind<'a> {
    /// Display equation body
    Equation(&'a str),
    /// `> ` quotation, marker removed
    Quote(&'a str),
    /// `n. **label** rest`
    LabeledItem {
        number: &'a str,
        label: &'a str,
        rest: &'a str,
    },
    /// `**label** rest` with non-empty rest
    BoldLabel { label: &'a str, rest: &'a str },
    /// `- item` or `* item`, marker removed
    Bullet(&'a str),
    /// Anything else
    Plain(&'a str),
}

type Matcher = for<'a> fn(&'a str) -> Option<ContentKind<'a>>;

/// Text matchers in priority order.
const MATCHERS: &[Matcher] = &[match_quote, match_labeled_item, match_bold_label, match_bullet];

/// Classify a content item. Equations are tagged by the parser; text items go
/// through the matchers and fall back to [`ContentKind::Plain`].
pub fn classify(item: &ContentItem) -> ContentKind<'_> {
    match item {
        ContentItem::Equation(latex) => ContentKind::Equation(latex),
        ContentItem::Text(text) => classify_text(text),
    }
}

/// Classify a line of body text.
pub fn classify_text(text: &str) -> ContentKind<'_> {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(text))
        .unwrap_or(ContentKind::Plain(text))
}

fn match_quote(text: &str) -> Option<ContentKind<'_>> {
    text.strip_prefix("> ").map(ContentKind::Quote)
}

fn match_labeled_item(text: &str) -> Option<ContentKind<'_>> {
    let caps = RE_LABELED_ITEM.captures(text)?;
    Some(ContentKind::LabeledItem {
        number: caps.get(1)?.as_str(),
        label: caps.get(2)?.as_str(),
        rest: caps.get(3).map_or("", |m| m.as_str()),
    })
}

fn match_bold_label(text: &str) -> Option<ContentKind<'_>> {
    let caps = RE_BOLD_LABEL.captures(text)?;
    let rest = caps.get(2).map_or("", |m| m.as_str());
    if rest.is_empty() {
        return None;
    }
    Some(ContentKind::BoldLabel {
        label: caps.get(1)?.as_str(),
        rest,
    })
}

fn match_bullet(text: &str) -> Option<ContentKind<'_>> {
    let marker = RE_BULLET.find(text)?;
    Some(ContentKind::Bullet(&text[marker.end()..]))
}

/// Remove `**bold**`, `*italic*` and `` `code` `` markers, keeping the text.
pub fn strip_markup(text: &str) -> String {
    let text = RE_BOLD.replace_all(text, "${1}");
    let text = RE_ITALIC.replace_all(&text, "${1}");
    RE_CODE.replace_all(&text, "${1}").into_owned()
}

/// Remove an existing `word.` numbering prefix from a heading.
pub fn strip_heading_prefix(heading: &str) -> &str {
    match RE_HEADING_PREFIX.find(heading) {
        Some(prefix) => &heading[prefix.end()..],
        None => heading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        for re in [
            &RE_BOLD,
            &RE_ITALIC,
            &RE_CODE,
            &RE_HEADING_PREFIX,
            &RE_LABELED_ITEM,
            &RE_BOLD_LABEL,
            &RE_BULLET,
        ] {
            LazyLock::force(re);
        }
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("a **bold** and *it* `code`"), "a bold and it code");
        assert_eq!(strip_markup("no markup"), "no markup");
        assert_eq!(strip_markup("lone * star"), "lone * star");
    }

    #[test]
    fn test_strip_heading_prefix() {
        assert_eq!(strip_heading_prefix("2. Existing Prefix Title"), "Existing Prefix Title");
        assert_eq!(strip_heading_prefix("IV. Results"), "Results");
        assert_eq!(strip_heading_prefix("A.Method"), "Method");
        assert_eq!(strip_heading_prefix("Introduction"), "Introduction");
        assert_eq!(strip_heading_prefix("Dr Who. Notes"), "Dr Who. Notes");
    }

    #[test]
    fn test_equation() {
        let item = ContentItem::Equation("E = mc^2".into());
        assert_eq!(classify(&item), ContentKind::Equation("E = mc^2"));
    }

    #[test]
    fn test_quote() {
        assert_eq!(classify_text("> quoted"), ContentKind::Quote("quoted"));
        assert_eq!(classify_text(">no space"), ContentKind::Plain(">no space"));
    }

    #[test]
    fn test_labeled_item() {
        assert_eq!(
            classify_text("1. **Speed** is high"),
            ContentKind::LabeledItem {
                number: "1",
                label: "Speed",
                rest: "is high"
            }
        );
        assert_eq!(
            classify_text("12. **Only**"),
            ContentKind::LabeledItem {
                number: "12",
                label: "Only",
                rest: ""
            }
        );
    }

    #[test]
    fn test_bold_label_requires_rest() {
        assert_eq!(
            classify_text("**Note:** details follow"),
            ContentKind::BoldLabel {
                label: "Note:",
                rest: "details follow"
            }
        );
        assert_eq!(classify_text("**Alone**"), ContentKind::Plain("**Alone**"));
    }

    #[test]
    fn test_bullet() {
        assert_eq!(classify_text("- first"), ContentKind::Bullet("first"));
        assert_eq!(classify_text("*   second"), ContentKind::Bullet("second"));
        assert_eq!(classify_text("-dash"), ContentKind::Plain("-dash"));
    }

    #[test]
    fn test_first_match_wins() {
        // A bold label that is also a bullet candidate is never a bullet:
        // `**` is not followed by whitespace.
        assert!(matches!(
            classify_text("**Bold** then text"),
            ContentKind::BoldLabel { .. }
        ));
        assert!(matches!(classify_text("> - nested"), ContentKind::Quote(_)));
    }
}
