// src/scrape.rs
//! Drives one browser page through the variant list, one variant at a time.
//!
//! Each variant ends as a [`VariantOutcome`]; the run's [`FailurePolicy`]
//! decides whether a failed outcome stops the run or is collected. The page is
//! closed exactly once before `run` returns, whichever way it returns.

use log::{debug, trace, warn};

use crate::{
    config::options::{FailurePolicy, RunOptions},
    core::{sanitize::normalize_ws, ElementHandle, PageLoader},
    error::{Error, FailureReason, VariantFailure},
    progress::{NullProgress, Progress},
    records::{ExtractedRecord, ExtractedRecordSet},
    specs::{extract_filter_status, extract_maf},
};

pub type VariantOutcome = Result<ExtractedRecord, VariantFailure>;

/// Records in input order, plus whatever failed under `FailurePolicy::Continue`.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: ExtractedRecordSet,
    pub failures: Vec<VariantFailure>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool { self.failures.is_empty() }
}

/// Fetch every variant, then close `page`.
pub fn run<L: PageLoader>(
    variant_ids: &[String],
    opts: &RunOptions,
    mut page: L,
    progress: Option<&mut dyn Progress>,
) -> Result<RunReport, Error> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.begin(variant_ids.len());
    let collected = collect(variant_ids, opts, &mut page, &mut *progress);
    let closed = page.close();
    progress.finish();

    let report = match collected {
        Ok(report) => report,
        Err(e) => {
            if let Err(close_err) = closed {
                warn!("{close_err}");
            }
            return Err(e);
        }
    };
    closed?;
    Ok(report)
}

fn collect<L: PageLoader>(
    variant_ids: &[String],
    opts: &RunOptions,
    page: &mut L,
    progress: &mut (dyn Progress + '_),
) -> Result<RunReport, Error> {
    let mut records = ExtractedRecordSet::with_capacity(variant_ids.len());
    let mut failures = Vec::new();

    for variant_id in variant_ids {
        match fetch_variant(page, opts, variant_id) {
            Ok(record) => {
                progress.item_done(&record.variant_id, &record.maf);
                records.push(record);
            }
            Err(failure) => {
                progress.item_failed(&failure);
                match opts.policy {
                    FailurePolicy::Abort => return Err(failure.into()),
                    FailurePolicy::Continue => failures.push(failure),
                }
            }
        }
    }

    Ok(RunReport { records, failures })
}

/// Navigate, wait for the population table, read MAF and filter badges.
pub fn fetch_variant<L: PageLoader>(page: &mut L, opts: &RunOptions, variant_id: &str) -> VariantOutcome {
    fetch_record(page, opts, variant_id).map_err(|reason| VariantFailure::new(variant_id, reason))
}

fn fetch_record<L: PageLoader>(
    page: &mut L,
    opts: &RunOptions,
    variant_id: &str,
) -> Result<ExtractedRecord, FailureReason> {
    let site = &opts.site;
    let url = site.variant_url(variant_id);
    debug!("{variant_id}: {url}");

    page.navigate(&url)?;
    let table = page.wait_for_element(&site.table_selector, opts.wait_timeout)?;
    let table_text = table.text()?;
    trace!("{variant_id}: table text: {}", normalize_ws(&table_text));

    let maf = extract_maf(&table_text)?;
    let filters = extract_filter_status(page, &site.badge_selector)?;
    Ok(ExtractedRecord::new(variant_id, maf, filters))
}
