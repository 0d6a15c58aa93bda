// src/error.rs
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of the page loader (browser session).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not start a {browser} session at {url}: {message}")]
    Connect { browser: String, url: String, message: String },

    #[error("navigation to {url} failed: {message}")]
    Navigate { url: String, message: String },

    #[error("`{selector}` did not appear within {}s", .waited.as_secs())]
    Timeout { selector: String, waited: Duration },

    #[error("query for `{selector}` failed: {message}")]
    Query { selector: String, message: String },

    #[error("could not read element text: {0}")]
    Text(String),

    #[error("could not close the browser session: {0}")]
    Close(String),

    #[error("the browser session is already closed")]
    Closed,
}

/// Failures of the text heuristics applied to a rendered page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("anchor `{0}` not found in the frequency table")]
    AnchorMissing(&'static str),

    #[error("no letter follows the anchor, cannot bound the frequency row")]
    NoTrailingLetter,

    #[error("expected at least 4 tokens after the anchor, found {found}")]
    TooFewTokens { found: usize },

    #[error("expected 2 filter badges (exome, genome), found {found}")]
    MissingBadges { found: usize },
}

#[derive(Debug, Error)]
pub enum FailureReason {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// One variant that produced no record, and why.
#[derive(Debug, Error)]
#[error("variant {variant_id}: {reason}")]
pub struct VariantFailure {
    pub variant_id: String,
    pub reason: FailureReason,
}

impl VariantFailure {
    pub fn new(variant_id: &str, reason: impl Into<FailureReason>) -> Self {
        Self { variant_id: s!(variant_id), reason: reason.into() }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.reason, FailureReason::Driver(DriverError::Timeout { .. }))
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("please use one of the two supported web browser: Firefox or Google Chrome (got `{0}`)")]
    UnsupportedBrowser(String),

    #[error("unsupported variant file {}: expected .csv, .txt, .tsv, .xlsx, .xls or .ods", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("{} has no `{column}` column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} has no worksheet", .0.display())]
    EmptyWorkbook(PathBuf),

    #[error(transparent)]
    Variant(#[from] VariantFailure),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Spreadsheet(#[from] calamine::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
