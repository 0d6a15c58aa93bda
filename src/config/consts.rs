// src/config/consts.rs

// Site
pub const URL_PREFIX: &str = "https://gnomad.broadinstitute.org/variant/";
pub const DATASET_QUERY: &str = "?dataset=";
pub const DEFAULT_DATASET: &str = "gnomad_r2_1";

// Rendered page structure (styled-components class signatures)
pub const POPULATION_TABLE_SELECTOR: &str =
    ".Table__BaseTable-sc-7fgtt2-0.PopulationsTable__Table-yt4zj1-0.gRZyOM";
pub const FILTER_BADGE_SELECTOR: &str = ".Badge__BadgeWrapper-j4izdp-1.bhuqae";

// Frequency table text
pub const POPULATION_ANCHOR: &str = "(non-Finnish)";
pub const MAF_TOKEN_INDEX: usize = 3;

// Driver
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_WAIT_SECS: u64 = 20;
pub const POLL_INTERVAL_MS: u64 = 500;
pub const DRIVER_LOG: &str = "geckodriver.log";

// Input / output
pub const VARIANT_COLUMN: &str = "RS Name";
pub const OUTPUT_HEADERS: [&str; 4] = ["RS Name", "MAF", "exome_filter_status", "genome_filter_status"];
