// src/specs/frequency.rs
//! Reads the allele frequency out of the rendered *population frequencies* table.
//!
//! The table arrives as plain text, one population per line, e.g.
//!
//! ```text
//! European (Finnish)
//! 2001 25096 80 0.07974
//! European (non-Finnish)
//! 9251 126324 383 0.07323
//! Other
//! ...
//! ```
//!
//! The row we want follows the `(non-Finnish)` label and runs up to the next
//! letter, which is where the next population label starts. The row is cut on
//! single spaces (empty pieces kept) and the fourth piece is the frequency.
//! Values are returned exactly as rendered; nothing here parses numbers.

use crate::config::consts::{MAF_TOKEN_INDEX, POPULATION_ANCHOR};
use crate::core::sanitize::{first_ascii_letter, trim_newlines_then_spaces};
use crate::error::ExtractError;

/// The four columns that follow a population label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationRow<'a> {
    pub allele_count: &'a str,
    pub allele_number: &'a str,
    pub homozygote_count: &'a str,
    pub allele_frequency: &'a str,
}

/// Text between the anchor and the first ASCII letter after it.
pub fn row_window(table_text: &str) -> Result<&str, ExtractError> {
    let anchor_at = table_text
        .find(POPULATION_ANCHOR)
        .ok_or(ExtractError::AnchorMissing(POPULATION_ANCHOR))?;
    let window = &table_text[anchor_at + POPULATION_ANCHOR.len()..];
    let end = first_ascii_letter(window).ok_or(ExtractError::NoTrailingLetter)?;
    Ok(&window[..end])
}

pub fn tokenize_population_row(table_text: &str) -> Result<PopulationRow<'_>, ExtractError> {
    let window = row_window(table_text)?;
    let tokens: Vec<&str> = window.split(' ').collect();
    if tokens.len() <= MAF_TOKEN_INDEX {
        return Err(ExtractError::TooFewTokens { found: tokens.len() });
    }

    let field = |i: usize| trim_newlines_then_spaces(tokens[i]);
    Ok(PopulationRow {
        allele_count: field(0),
        allele_number: field(1),
        homozygote_count: field(2),
        allele_frequency: field(MAF_TOKEN_INDEX),
    })
}

/// MAF for the non-Finnish European row, as rendered.
pub fn extract_maf(table_text: &str) -> Result<String, ExtractError> {
    tokenize_population_row(table_text).map(|row| s!(row.allele_frequency))
}
