//! Rendering module for writing laid-out documents.
//!
//! The main output is a WordprocessingML package (`.docx`); a JSON dump of
//! the layout stream is available for inspection.

mod docx;
mod json;
mod options;
mod package;
pub mod parts;
mod result;

pub use docx::{document_xml, to_docx, write_docx};
pub use json::{to_json, JsonFormat};
pub use options::{CompressionMethod, DocxOptions};
pub use package::PackageWriter;
pub use result::BuildStats;
