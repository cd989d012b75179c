use crate::Result;
use crate::extract::Extraction;
use chrono::{DateTime, Utc};

/// Destination for the data points produced by each fetch cycle.
pub trait DataPointSink {
    /// Deliver the outcome of one cycle, stamped with the time the document was fetched.
    fn emit(&mut self, timestamp: DateTime<Utc>, extraction: &Extraction) -> Result<()>;

    /// Told when a cycle produced nothing because the document could not be fetched.
    fn fetch_failed(&mut self, _error: &ohno::AppError) {}
}

impl<S: DataPointSink + ?Sized> DataPointSink for &mut S {
    fn emit(&mut self, timestamp: DateTime<Utc>, extraction: &Extraction) -> Result<()> {
        (**self).emit(timestamp, extraction)
    }

    fn fetch_failed(&mut self, error: &ohno::AppError) {
        (**self).fetch_failed(error);
    }
}
