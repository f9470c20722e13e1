//! IEEE markdown parsing module.

mod markdown;
mod options;

pub use markdown::MarkdownParser;
pub use options::{ErrorMode, ParseOptions};
