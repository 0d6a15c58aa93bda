// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use crate::config::consts::{DEFAULT_DATASET, DEFAULT_WEBDRIVER_URL, DRIVER_LOG};
use crate::config::options::{AppOptions, Browser, DriverOptions, FailurePolicy, RunOptions, SiteOptions};
use crate::core::{webdriver, PageLoader};
use crate::error::{DriverError, Result};
use crate::progress::LogProgress;
use crate::scrape::RunReport;
use crate::{file, input, scrape};

/// Pull the non-Finnish European allele frequency and filter status of each
/// variant from the gnomAD browser into a TSV.
#[derive(Debug, Parser)]
#[command(name = "gnomad_scrape", version, about)]
pub struct Args {
    /// Variant list (.csv, .txt, .tsv, .xlsx, .xls, .ods) with an `RS Name` column
    #[arg(short = 'v', long = "variants", value_name = "PATH")]
    pub variants: PathBuf,

    /// Output TSV; overwritten if present
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// firefox or chrome
    #[arg(short = 'b', long = "browser", value_name = "NAME")]
    pub browser: String,

    /// Seconds to wait for each variant's frequency table (20 works well)
    #[arg(short = 't', long = "wait-time", value_name = "SECONDS")]
    pub wait_time: u64,

    /// WebDriver server (geckodriver, chromedriver, selenium)
    #[arg(long, value_name = "URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// gnomAD dataset id used in the page URL
    #[arg(long, value_name = "ID", default_value = DEFAULT_DATASET)]
    pub dataset: String,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Skip variants that fail instead of stopping; write the rest
    #[arg(long)]
    pub keep_going: bool,

    /// -v is taken by --variants; repeat for debug, then trace
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Turn raw arguments into run options. Fails on an unsupported browser.
    pub fn into_options(self) -> Result<AppOptions> {
        let browser: Browser = self.browser.parse()?;

        let mut driver = DriverOptions::new(browser);
        driver.webdriver_url = self.webdriver_url;
        driver.headless = !self.headed;

        let run = RunOptions {
            site: SiteOptions::for_dataset(&self.dataset),
            wait_timeout: Duration::from_secs(self.wait_time),
            policy: if self.keep_going { FailurePolicy::Continue } else { FailurePolicy::Abort },
        };

        Ok(AppOptions {
            variants_path: self.variants,
            output_path: self.output,
            driver,
            run,
        })
    }
}

/// Parse the process arguments and run.
pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    let opts = args.into_options()?;
    run_with(&opts).map(|_| ())
}

/// Load, fetch, write with a real browser session.
pub fn run_with(opts: &AppOptions) -> Result<RunReport> {
    file::remove_stale_log(Path::new(DRIVER_LOG));
    run_with_loader(opts, |driver| {
        info!("starting {} (headless: {})", driver.browser, driver.headless);
        webdriver::connect(driver)
    })
}

/// Load the variant list, then `connect`, fetch and write. The loader is only
/// started once the list has loaded. Nothing is written when the run aborts.
pub fn run_with_loader<L, F>(opts: &AppOptions, connect: F) -> Result<RunReport>
where
    L: PageLoader,
    F: FnOnce(&DriverOptions) -> std::result::Result<L, DriverError>,
{
    let ids = input::load_variant_ids(&opts.variants_path)?;
    let page = connect(&opts.driver)?;

    let mut progress = LogProgress::new();
    let report = scrape::run(&ids, &opts.run, page, Some(&mut progress))?;

    file::write_records(&report.records, &opts.output_path)?;

    for failure in &report.failures {
        warn!("skipped {failure}");
    }
    Ok(report)
}
