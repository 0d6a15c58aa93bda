// src/specs/filters.rs
//! Exome / genome filter status badges.
//!
//! A variant page carries one badge per dataset, same class, exome first and
//! genome second. Anything after the second badge is ignored.

use crate::core::driver::{ElementHandle, PageLoader};
use crate::error::{ExtractError, FailureReason};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterStatus {
    pub exome: String,
    pub genome: String,
}

pub fn extract_filter_status<L: PageLoader>(
    page: &mut L,
    badge_selector: &str,
) -> Result<FilterStatus, FailureReason> {
    let badges = page.find_elements(badge_selector)?;
    match badges.as_slice() {
        [exome, genome, ..] => Ok(FilterStatus { exome: exome.text()?, genome: genome.text()? }),
        _ => Err(ExtractError::MissingBadges { found: badges.len() }.into()),
    }
}
