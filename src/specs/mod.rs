// src/specs/mod.rs
//! # Page "specs"
//!
//! Each spec knows where one piece of ground truth lives on a rendered gnomAD
//! variant page and how to read it:
//!
//! - `frequency` – the non-Finnish European allele frequency, cut out of the
//!   population table's rendered text by anchor and offsets.
//! - `filters` – the exome and genome filter status badges.
//!
//! Specs do not navigate, wait, log progress or write files; `scrape` drives
//! the page and decides what a failure means for the run.
//!
//! ## Conventions
//! - Work on rendered text, not on a DOM tree.
//! - Return values verbatim (no numeric reformatting).
//! - Fail with an `ExtractError` rather than returning a guess.

pub mod filters;
pub mod frequency;

pub use filters::{extract_filter_status, FilterStatus};
pub use frequency::{extract_maf, tokenize_population_row, PopulationRow};
