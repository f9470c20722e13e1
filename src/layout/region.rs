//! Page-region sequencing.
//!
//! The template is a fixed progression of regions: a single-column title
//! block, zero or more rows of author columns, then the two-column body. A
//! region starts with a [`Block::RegionBreak`] placed directly before its first
//! paragraph. After the last block the document carries one terminal
//! descriptor, which restates the body layout.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::model::{Block, ColumnLayout, RegionBreak, RegionKind};

use super::units;

impl RegionBreak {
    /// Opening single-column title region. The only non-continuous region:
    /// it starts the first page.
    pub fn title() -> Self {
        Self {
            kind: RegionKind::Title,
            columns: units::TITLE_COLUMNS,
            continuous: false,
            page: units::PAGE,
        }
    }

    /// A row of `columns` author blocks on the current page.
    pub fn author_row(columns: u32) -> Self {
        Self {
            kind: RegionKind::AuthorRow,
            columns: ColumnLayout {
                count: columns,
                gap: units::AUTHOR_COLUMN_GAP,
                equal_width: columns > 1,
            },
            continuous: true,
            page: units::PAGE,
        }
    }

    /// Two-column body on the current page.
    pub fn body() -> Self {
        Self {
            kind: RegionKind::Body,
            columns: units::BODY_COLUMNS,
            continuous: true,
            page: units::PAGE,
        }
    }
}

/// Split `count` authors into rows of at most four.
///
/// All rows use the width of the first row (`min(count, 4)`); the last row
/// holds what remains. Fewer than two authors produce no rows: zero authors
/// have nothing to lay out and a single author stays in the title region.
pub fn author_rows(count: usize) -> Vec<Range<usize>> {
    if count < 2 {
        return Vec::new();
    }
    let per_row = count.min(units::MAX_AUTHORS_PER_ROW);
    (0..count)
        .step_by(per_row)
        .map(|start| start..(start + per_row).min(count))
        .collect()
}

/// Tracks the open region and appends region breaks in template order.
#[derive(Debug, Default)]
pub struct RegionSequencer {
    current: Option<RegionKind>,
    breaks: usize,
}

impl RegionSequencer {
    /// Create a sequencer with no region open.
    pub fn new() -> Self {
        Self::default()
    }

    /// The region currently open.
    pub fn current(&self) -> Option<RegionKind> {
        self.current
    }

    /// Number of region breaks emitted so far.
    pub fn break_count(&self) -> usize {
        self.breaks
    }

    /// Append a break opening `region`, checking it may follow the open one.
    pub fn open(&mut self, out: &mut Vec<Block>, region: RegionBreak) -> Result<()> {
        if !Self::may_follow(self.current, region.kind) {
            return Err(Error::RegionOrder {
                from: self.current,
                to: region.kind,
            });
        }

        log::debug!(
            "region {:?}: {} column(s), gap {}, continuous={}",
            region.kind,
            region.columns.count,
            region.columns.gap,
            region.continuous
        );
        out.push(Block::RegionBreak(region));
        self.current = Some(region.kind);
        self.breaks += 1;
        Ok(())
    }

    /// Close the stream and produce the terminal descriptor.
    ///
    /// The terminal descriptor always describes the body, so the body must be
    /// open.
    pub fn finish(self) -> Result<RegionBreak> {
        match self.current {
            Some(RegionKind::Body) => Ok(RegionBreak::body()),
            from => Err(Error::RegionOrder {
                from,
                to: RegionKind::Body,
            }),
        }
    }

    fn may_follow(from: Option<RegionKind>, to: RegionKind) -> bool {
        matches!(
            (from, to),
            (None, RegionKind::Title)
                | (Some(RegionKind::Title), RegionKind::AuthorRow)
                | (Some(RegionKind::AuthorRow), RegionKind::AuthorRow)
                | (Some(RegionKind::Title), RegionKind::Body)
                | (Some(RegionKind::AuthorRow), RegionKind::Body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_rows() {
        assert!(author_rows(0).is_empty());
        assert!(author_rows(1).is_empty());
        assert_eq!(author_rows(2), vec![0..2]);
        assert_eq!(author_rows(4), vec![0..4]);
        assert_eq!(author_rows(5), vec![0..4, 4..5]);
        assert_eq!(author_rows(9), vec![0..4, 4..8, 8..9]);
    }

    #[test]
    fn test_region_descriptors_restate_page() {
        for region in [
            RegionBreak::title(),
            RegionBreak::author_row(3),
            RegionBreak::body(),
        ] {
            assert_eq!(region.page, units::PAGE);
        }
        assert!(!RegionBreak::title().continuous);
        assert!(RegionBreak::author_row(2).continuous);
        assert_eq!(RegionBreak::author_row(3).columns.gap, 216);
        assert_eq!(RegionBreak::body().columns.count, 2);
    }

    #[test]
    fn test_sequence_in_order() {
        let mut out = Vec::new();
        let mut seq = RegionSequencer::new();
        seq.open(&mut out, RegionBreak::title()).unwrap();
        seq.open(&mut out, RegionBreak::author_row(4)).unwrap();
        seq.open(&mut out, RegionBreak::author_row(1)).unwrap();
        seq.open(&mut out, RegionBreak::body()).unwrap();
        assert_eq!(seq.break_count(), 4);
        assert_eq!(out.len(), 4);

        let terminal = seq.finish().unwrap();
        assert_eq!(terminal, RegionBreak::body());
    }

    #[test]
    fn test_rejects_out_of_order() {
        let mut out = Vec::new();
        let mut seq = RegionSequencer::new();
        assert!(seq.open(&mut out, RegionBreak::body()).is_err());

        seq.open(&mut out, RegionBreak::title()).unwrap();
        seq.open(&mut out, RegionBreak::body()).unwrap();
        let err = seq.open(&mut out, RegionBreak::author_row(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::RegionOrder {
                from: Some(RegionKind::Body),
                to: RegionKind::AuthorRow
            }
        ));
    }

    #[test]
    fn test_finish_requires_body() {
        let mut out = Vec::new();
        let mut seq = RegionSequencer::new();
        seq.open(&mut out, RegionBreak::title()).unwrap();
        assert!(seq.finish().is_err());
    }
}
