//! DOCX output options.

use chrono::{DateTime, Utc};

/// Options for writing a DOCX package.
#[derive(Debug, Clone, Default)]
pub struct DocxOptions {
    /// How package parts are stored in the ZIP container
    pub compression: CompressionMethod,

    /// Creation and modification time; `None` uses the current time
    pub timestamp: Option<DateTime<Utc>>,
}

impl DocxOptions {
    /// Create new DOCX options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression method.
    pub fn with_compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    /// Store parts without compression.
    pub fn stored(mut self) -> Self {
        self.compression = CompressionMethod::Stored;
        self
    }

    /// Fix the package timestamp, for reproducible output.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The timestamp to write.
    pub fn resolved_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }
}

/// ZIP compression method for package parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMethod {
    /// DEFLATE compression
    #[default]
    Deflated,
    /// No compression
    Stored,
}
