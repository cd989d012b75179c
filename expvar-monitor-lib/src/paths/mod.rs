//! Addressing of values inside a fetched JSON document
//!
//! Paths are dotted sequences of segments (`memstats.BySize.0.Size`). A segment
//! made only of ASCII digits doubles as an array index, and the bracketed form
//! (`memstats.BySize[0].Size`) is accepted as a synonym that normalizes to the
//! same segments.
//!
//! Parsing is where malformed expressions are reported. Resolution itself never
//! fails: a path that does not exist in a given document is a normal outcome and
//! yields `None`.

mod json_path;

pub use json_path::JsonPath;
