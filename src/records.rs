// src/records.rs
//
// Per-variant results, kept as four parallel columns in processing order.
// `push` is the only mutator, so the columns can never drift apart.

use serde::{Deserialize, Serialize};

use crate::specs::FilterStatus;

/// One output row. Field names double as the TSV header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(rename = "RS Name")]
    pub variant_id: String,
    #[serde(rename = "MAF")]
    pub maf: String,
    pub exome_filter_status: String,
    pub genome_filter_status: String,
}

impl ExtractedRecord {
    pub fn new(variant_id: &str, maf: String, filters: FilterStatus) -> Self {
        Self {
            variant_id: s!(variant_id),
            maf,
            exome_filter_status: filters.exome,
            genome_filter_status: filters.genome,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedRecordSet {
    variant_ids: Vec<String>,
    mafs: Vec<String>,
    exome_statuses: Vec<String>,
    genome_statuses: Vec<String>,
}

impl ExtractedRecordSet {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            variant_ids: Vec::with_capacity(n),
            mafs: Vec::with_capacity(n),
            exome_statuses: Vec::with_capacity(n),
            genome_statuses: Vec::with_capacity(n),
        }
    }

    /// Append to all four columns at once.
    pub fn push(&mut self, record: ExtractedRecord) {
        self.variant_ids.push(record.variant_id);
        self.mafs.push(record.maf);
        self.exome_statuses.push(record.exome_filter_status);
        self.genome_statuses.push(record.genome_filter_status);
    }

    #[inline] pub fn len(&self) -> usize { self.variant_ids.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.variant_ids.is_empty() }

    pub fn variant_ids(&self) -> &[String] { &self.variant_ids }
    pub fn mafs(&self) -> &[String] { &self.mafs }
    pub fn exome_statuses(&self) -> &[String] { &self.exome_statuses }
    pub fn genome_statuses(&self) -> &[String] { &self.genome_statuses }

    /// Row `i`, rebuilt from the columns.
    pub fn get(&self, i: usize) -> Option<ExtractedRecord> {
        Some(ExtractedRecord {
            variant_id: self.variant_ids.get(i)?.clone(),
            maf: self.mafs[i].clone(),
            exome_filter_status: self.exome_statuses[i].clone(),
            genome_filter_status: self.genome_statuses[i].clone(),
        })
    }

    /// Row-major view in processing order.
    pub fn rows(&self) -> impl Iterator<Item = ExtractedRecord> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

impl FromIterator<ExtractedRecord> for ExtractedRecordSet {
    fn from_iter<I: IntoIterator<Item = ExtractedRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter { set.push(record); }
        set
    }
}
