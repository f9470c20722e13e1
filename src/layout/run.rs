//! Run construction.

use crate::model::{TextRun, TextStyle, VerticalAlign};

use super::math::{self, ScriptPart};

/// Build a single styled run. Empty text is allowed; callers drop empty runs
/// where it matters.
pub fn make_run(text: impl Into<String>, style: &TextStyle) -> TextRun {
    TextRun::new(text, style.clone())
}

/// Transliterate `text` and split it into baseline, subscript and superscript
/// runs sharing `style`.
///
/// Text without script notation yields exactly one run.
pub fn make_math_runs(text: &str, style: &TextStyle) -> Vec<TextRun> {
    let resolved = math::transliterate(text);
    let runs: Vec<TextRun> = math::split_scripts(&resolved)
        .into_iter()
        .map(|part| match part {
            ScriptPart::Base(s) => make_run(s, style),
            ScriptPart::Sub(s) => make_run(s, &style.with_vertical(VerticalAlign::Subscript)),
            ScriptPart::Super(s) => {
                make_run(s, &style.with_vertical(VerticalAlign::Superscript))
            }
        })
        .collect();

    if runs.is_empty() {
        vec![make_run(resolved, style)]
    } else {
        runs
    }
}
