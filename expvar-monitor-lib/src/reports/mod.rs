//! Rendering data points for people and for other programs
//!
//! Two generators are provided, each accessed through a `generate` function that
//! writes into any [`core::fmt::Write`]:
//! - **Console**: one aligned line per data point, optionally colored
//! - **JSON**: one self-contained JSON object per line, stamped with the fetch time
//!
//! Where the rendered text ends up is decided by a [`DataPointSink`], which the
//! monitor loop hands every cycle's [`Extraction`](crate::extract::Extraction).

mod console;
mod json;
mod sink;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use sink::DataPointSink;
