//! Error types for the ieee-docx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::RegionKind;

/// Result type alias for ieee-docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing, laying out or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input markdown file does not exist.
    #[error("File not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    /// A subsection heading appeared before any section heading (strict parsing).
    #[error("Subsection without an enclosing section: {0}")]
    OrphanSubsection(String),

    /// The layout tried to open page regions out of their fixed order.
    #[error("Invalid region transition: {from:?} -> {to:?}")]
    RegionOrder {
        /// Region that was open
        from: Option<RegionKind>,
        /// Region that was requested
        to: RegionKind,
    },

    /// Error writing WordprocessingML markup.
    #[error("XML write error: {0}")]
    Xml(String),

    /// Error assembling the package container.
    #[error("Package error: {0}")]
    Package(String),

    /// Error during rendering (JSON dump).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
