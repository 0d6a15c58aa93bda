// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
use crate::error::Error;

/// Everything a run needs, built once by the front end and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub variants_path: PathBuf,
    pub output_path: PathBuf,
    pub driver: DriverOptions,
    pub run: RunOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Browser {
    Firefox,
    Chrome,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self { Browser::Firefox => "firefox", Browser::Chrome => "chrome" }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = Error;

    /// Case-insensitive; only the two supported browsers are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firefox" => Ok(Browser::Firefox),
            "chrome" => Ok(Browser::Chrome),
            _ => Err(Error::UnsupportedBrowser(s!(s))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverOptions {
    pub browser: Browser,
    pub webdriver_url: String,
    pub headless: bool,
}

impl DriverOptions {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            webdriver_url: s!(DEFAULT_WEBDRIVER_URL),
            headless: true,
        }
    }
}

/// Where a variant page lives and how its pieces are found once rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub url_prefix: String,
    pub url_suffix: String,
    pub table_selector: String,
    pub badge_selector: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self::for_dataset(DEFAULT_DATASET)
    }
}

impl SiteOptions {
    pub fn for_dataset(dataset: &str) -> Self {
        Self {
            url_prefix: s!(URL_PREFIX),
            url_suffix: join!(DATASET_QUERY, dataset),
            table_selector: s!(POPULATION_TABLE_SELECTOR),
            badge_selector: s!(FILTER_BADGE_SELECTOR),
        }
    }

    /// prefix + id + suffix, no escaping.
    pub fn variant_url(&self, variant_id: &str) -> String {
        join!(&self.url_prefix, variant_id, &self.url_suffix)
    }
}

/// What to do when one variant fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure; nothing is written.
    #[default]
    Abort,
    /// Record the failure, keep going, write the rows that succeeded.
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub site: SiteOptions,
    pub wait_timeout: Duration,
    pub policy: FailurePolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            site: SiteOptions::default(),
            wait_timeout: Duration::from_secs(DEFAULT_WAIT_SECS),
            policy: FailurePolicy::Abort,
        }
    }
}
