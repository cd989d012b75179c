use super::Fetcher;
use crate::Result;
use crate::extract::{Extraction, extract};
use crate::reports::DataPointSink;
use crate::selectors::EffectiveCatalog;
use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::app_err;
use tokio::time::MissedTickBehavior;

const LOG_TARGET: &str = "   monitor";

/// Periodically fetches one endpoint and turns each document into data points.
#[derive(Debug)]
pub struct Monitor {
    fetcher: Fetcher,
    catalog: EffectiveCatalog,
    interval: Duration,
}

impl Monitor {
    pub fn new(fetcher: Fetcher, catalog: EffectiveCatalog, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(app_err!("the fetch interval must be greater than zero"));
        }

        Ok(Self {
            fetcher,
            catalog,
            interval,
        })
    }

    /// Fetch the document once and extract it.
    ///
    /// The returned timestamp is the moment the document arrived.
    pub async fn run_cycle(&self) -> Result<(DateTime<Utc>, Extraction)> {
        let document = self.fetcher.fetch().await?;
        let timestamp = Utc::now();
        Ok((timestamp, extract(&document, &self.catalog)))
    }

    /// Run `cycles` fetch cycles, or keep going forever when `cycles` is `None`.
    ///
    /// The first cycle starts immediately. A failed fetch is reported to the sink and
    /// the loop moves on to the next tick; only a failing sink stops it.
    pub async fn run(&self, sink: &mut impl DataPointSink, cycles: Option<u64>) -> Result<()> {
        log::info!(
            target: LOG_TARGET,
            "Monitoring '{}' every {:?} with {} selectors",
            self.fetcher.url(),
            self.interval,
            self.catalog.len()
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut completed = 0_u64;
        while cycles.is_none_or(|limit| completed < limit) {
            let _ = ticker.tick().await;

            match self.run_cycle().await {
                Ok((timestamp, extraction)) => sink.emit(timestamp, &extraction)?,
                Err(e) => {
                    log::error!(target: LOG_TARGET, "Fetch cycle failed: {e}");
                    sink.fetch_failed(&e);
                }
            }

            completed += 1;
        }

        log::debug!(target: LOG_TARGET, "Completed {completed} fetch cycles");
        Ok(())
    }
}
