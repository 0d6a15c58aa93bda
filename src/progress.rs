// src/progress.rs
use log::{info, warn};

use crate::error::VariantFailure;

/// Lightweight progress reporting for a scrape run.
/// Front ends implement this to surface status; nothing here affects results.
pub trait Progress {
    /// Called at the start with the number of variants to fetch.
    fn begin(&mut self, _total: usize) {}

    /// One variant produced a record.
    fn item_done(&mut self, _variant_id: &str, _maf: &str) {}

    /// One variant produced no record.
    fn item_failed(&mut self, _failure: &VariantFailure) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Reports through the `log` facade; used by the CLI.
#[derive(Default)]
pub struct LogProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl LogProgress {
    pub fn new() -> Self { Self::default() }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("fetching {total} variant(s)");
    }
    fn item_done(&mut self, variant_id: &str, maf: &str) {
        self.done += 1;
        info!("allele frequency for variant {variant_id} is {maf} ({}/{})", self.done + self.failed, self.total);
    }
    fn item_failed(&mut self, failure: &VariantFailure) {
        self.failed += 1;
        warn!("{failure} ({}/{})", self.done + self.failed, self.total);
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            info!("fetch complete ({}/{})", self.done, self.total);
        } else {
            warn!("fetch complete: {} ok, {} failed, {} total", self.done, self.failed, self.total);
        }
    }
}
