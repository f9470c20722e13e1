//! Layout engine.
//!
//! Turns a [`ParsedDocument`](crate::model::ParsedDocument) into the ordered
//! output stream of a [`LayoutDocument`](crate::model::LayoutDocument):
//! region breaks and fully formatted paragraphs for the two-column
//! conference template.
//!
//! The pieces build on each other leaf first:
//!
//! - [`units`]: page geometry, font sizes and spacing in twips
//! - [`math`]: LaTeX-style notation to Unicode
//! - [`run`] and [`paragraph`]: styled runs and paragraph formatting
//! - [`region`]: page-region sequencing
//! - [`classify`]: content item classification
//! - [`composer`]: the single pass over the paper

pub mod classify;
pub mod composer;
pub mod math;
pub mod numbering;
pub mod paragraph;
pub mod region;
pub mod run;
pub mod units;

pub use classify::{classify, strip_markup, ContentKind};
pub use composer::compose;
pub use math::transliterate;
pub use paragraph::make_paragraph;
pub use region::RegionSequencer;
pub use run::{make_math_runs, make_run};
