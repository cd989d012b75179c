//! Turning a fetched document into data points
//!
//! [`extract`] walks the [`EffectiveCatalog`](crate::selectors::EffectiveCatalog)
//! in order and resolves each selector against the document. Three outcomes are
//! possible per selector:
//!
//! - the value is found and numeric: a [`DataPoint`] is produced, with dimensions
//!   from [`resolve_dimensions`];
//! - the value is absent: nothing happens, since fields come and go between
//!   snapshots;
//! - the value is found but is not a number: an error is recorded in
//!   [`Extraction::errors`] and the cycle carries on.
//!
//! Everything here works on an in-memory document and performs no I/O.

mod data_point;
mod dimensions;
mod extractor;

pub use data_point::{DataPoint, DataPointValue};
pub use dimensions::resolve_dimensions;
pub use extractor::{Extraction, extract};
