//! Input validation and output path derivation.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem for the output file.
const OUTPUT_SUFFIX: &str = "_IEEE.docx";

/// A recoverable problem with the input. Processing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWarning {
    /// The file does not have a `.md` extension (the found extension, if any)
    UnexpectedExtension(Option<String>),
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::UnexpectedExtension(Some(ext)) => {
                write!(f, "Expected .md file, got .{}", ext)
            }
            InputWarning::UnexpectedExtension(None) => {
                write!(f, "Expected .md file, got no extension")
            }
        }
    }
}

/// Check that the input exists and collect warnings about it.
///
/// # Returns
/// * `Ok(warnings)` if the file exists
/// * `Err(Error::MissingInputFile)` if it does not
///
/// # Example
/// ```no_run
/// use ieee_docx::detect::check_input;
///
/// for warning in check_input("paper.txt").unwrap() {
///     eprintln!("Warning: {}", warning);
/// }
/// ```
pub fn check_input<P: AsRef<Path>>(path: P) -> Result<Vec<InputWarning>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::MissingInputFile(path.to_path_buf()));
    }

    let mut warnings = Vec::new();
    if !is_markdown(path) {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
        log::warn!("unexpected input extension: {:?}", ext);
        warnings.push(InputWarning::UnexpectedExtension(ext));
    }
    Ok(warnings)
}

/// Check for a `.md` extension (case-insensitive).
pub fn is_markdown<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Output path next to the input: `<stem>_IEEE.docx`.
pub fn output_path_for<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Clean up a path typed or pasted at a prompt: surrounding whitespace and
/// quotes are removed and a leading `~` expands to the home directory.
pub fn clean_prompt_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches('"').trim_matches('\'');

    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    match (trimmed.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with(['/', '\\']) => {
            let mut path = PathBuf::from(home);
            let rest = rest.trim_start_matches(['/', '\\']);
            if !rest.is_empty() {
                path.push(rest);
            }
            path
        }
        _ => PathBuf::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for("/papers/draft.md"),
            PathBuf::from("/papers/draft_IEEE.docx")
        );
        assert_eq!(output_path_for("notes.txt"), PathBuf::from("notes_IEEE.docx"));
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown("a.md"));
        assert!(is_markdown("A.MD"));
        assert!(!is_markdown("a.txt"));
        assert!(!is_markdown("README"));
    }

    #[test]
    fn test_check_input_missing() {
        let err = check_input("/definitely/not/here.md").unwrap_err();
        assert!(matches!(err, Error::MissingInputFile(_)));
    }

    #[test]
    fn test_check_input_extension_warning() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "# Title").unwrap();

        let warnings = check_input(file.path()).unwrap();
        assert_eq!(
            warnings,
            vec![InputWarning::UnexpectedExtension(Some("txt".into()))]
        );
        assert_eq!(warnings[0].to_string(), "Expected .md file, got .txt");
    }

    #[test]
    fn test_check_input_markdown_clean() {
        let file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        assert!(check_input(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_clean_prompt_path_quotes() {
        assert_eq!(
            clean_prompt_path("  \"/tmp/my paper.md\"  "),
            PathBuf::from("/tmp/my paper.md")
        );
        assert_eq!(clean_prompt_path("'/tmp/a.md'"), PathBuf::from("/tmp/a.md"));
    }

    #[test]
    fn test_clean_prompt_path_home() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                clean_prompt_path("~/paper.md"),
                PathBuf::from(home).join("paper.md")
            );
        }
        assert_eq!(clean_prompt_path("~user/x"), PathBuf::from("~user/x"));
    }
}
