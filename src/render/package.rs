//! ZIP container for package parts.
//!
//! Writes a single-disk ZIP archive in memory: one local header plus data per
//! part, then the central directory. Names are UTF-8. No ZIP64, so every part
//! and the archive itself must stay below 4 GiB.

use std::io::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::write::DeflateEncoder;
use flate2::Compression;

use super::options::CompressionMethod;
use crate::error::{Error, Result};

const LOCAL_HEADER_SIGNATURE: u32 = 0x0403_4b50;
const CENTRAL_HEADER_SIGNATURE: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4b50;

/// Version 2.0: DEFLATE and folders.
const ZIP_VERSION: u16 = 20;
/// General purpose flag bit 11: names are UTF-8.
const FLAG_UTF8: u16 = 0x0800;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATED: u16 = 8;

/// Central directory record of a written part.
#[derive(Debug)]
struct Entry {
    name: String,
    method: u16,
    crc: u32,
    compressed_size: u32,
    size: u32,
    offset: u32,
}

/// In-memory ZIP writer.
#[derive(Debug)]
pub struct PackageWriter {
    buf: Vec<u8>,
    entries: Vec<Entry>,
    compression: CompressionMethod,
    dos_time: u16,
    dos_date: u16,
}

impl PackageWriter {
    /// Create a writer stamping every part with `timestamp`.
    pub fn new(compression: CompressionMethod, timestamp: DateTime<Utc>) -> Self {
        let (dos_time, dos_date) = dos_date_time(timestamp);
        Self {
            buf: Vec::new(),
            entries: Vec::new(),
            compression,
            dos_time,
            dos_date,
        }
    }

    /// Append a part.
    pub fn add(&mut self, name: &str, data: &[u8]) -> Result<()> {
        if self.entries.iter().any(|e| e.name == name) {
            return Err(Error::Package(format!("duplicate part: {}", name)));
        }

        let (method, payload) = match self.compression {
            CompressionMethod::Stored => (METHOD_STORED, data.to_vec()),
            CompressionMethod::Deflated => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                (METHOD_DEFLATED, encoder.finish()?)
            }
        };

        let entry = Entry {
            name: name.to_string(),
            method,
            crc: crc32fast::hash(data),
            compressed_size: to_u32(payload.len(), name)?,
            size: to_u32(data.len(), name)?,
            offset: to_u32(self.buf.len(), name)?,
        };
        let name_len = to_u16(name.len(), name)?;

        log::debug!(
            "package part {}: {} -> {} bytes",
            name,
            entry.size,
            entry.compressed_size
        );

        let buf = &mut self.buf;
        put_u32(buf, LOCAL_HEADER_SIGNATURE);
        put_u16(buf, ZIP_VERSION);
        put_u16(buf, FLAG_UTF8);
        put_u16(buf, entry.method);
        put_u16(buf, self.dos_time);
        put_u16(buf, self.dos_date);
        put_u32(buf, entry.crc);
        put_u32(buf, entry.compressed_size);
        put_u32(buf, entry.size);
        put_u16(buf, name_len);
        put_u16(buf, 0); // extra field length
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(&payload);

        self.entries.push(entry);
        Ok(())
    }

    /// Names of the parts written so far, in order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Write the central directory and return the archive bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let directory_offset = to_u32(self.buf.len(), "central directory")?;
        let count = to_u16(self.entries.len(), "central directory")?;

        for entry in &self.entries {
            let buf = &mut self.buf;
            put_u32(buf, CENTRAL_HEADER_SIGNATURE);
            put_u16(buf, ZIP_VERSION); // version made by
            put_u16(buf, ZIP_VERSION); // version needed
            put_u16(buf, FLAG_UTF8);
            put_u16(buf, entry.method);
            put_u16(buf, self.dos_time);
            put_u16(buf, self.dos_date);
            put_u32(buf, entry.crc);
            put_u32(buf, entry.compressed_size);
            put_u32(buf, entry.size);
            put_u16(buf, to_u16(entry.name.len(), &entry.name)?);
            put_u16(buf, 0); // extra field length
            put_u16(buf, 0); // comment length
            put_u16(buf, 0); // disk number start
            put_u16(buf, 0); // internal attributes
            put_u32(buf, 0); // external attributes
            put_u32(buf, entry.offset);
            buf.extend_from_slice(entry.name.as_bytes());
        }

        let directory_size = to_u32(self.buf.len(), "central directory")? - directory_offset;

        let buf = &mut self.buf;
        put_u32(buf, END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        put_u16(buf, 0); // this disk
        put_u16(buf, 0); // disk with central directory
        put_u16(buf, count);
        put_u16(buf, count);
        put_u32(buf, directory_size);
        put_u32(buf, directory_offset);
        put_u16(buf, 0); // comment length

        Ok(self.buf)
    }
}

/// MS-DOS time and date fields. Times before 1980 clamp to 1980-01-01.
fn dos_date_time(timestamp: DateTime<Utc>) -> (u16, u16) {
    if timestamp.year() < 1980 {
        return (0, (1 << 5) | 1);
    }
    let time = (timestamp.hour() << 11) | (timestamp.minute() << 5) | (timestamp.second() / 2);
    let year = (timestamp.year() - 1980).min(127) as u32;
    let date = (year << 9) | (timestamp.month() << 5) | timestamp.day();
    (time as u16, date as u16)
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn to_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::Package(format!("{} exceeds 4 GiB", what)))
}

fn to_u16(value: usize, what: &str) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::Package(format!("{} exceeds ZIP field limit", what)))
}
