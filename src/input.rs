// src/input.rs
//
// Variant lists. Whatever the container, the identifiers come from the
// `RS Name` column, in row order, untouched.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::info;

use crate::config::consts::VARIANT_COLUMN;
use crate::error::{Error, Result};

/// Load identifiers from a `.csv`/`.txt` (comma), `.tsv` (tab) or spreadsheet
/// (first worksheet). Dispatch by extension.
pub fn load_variant_ids(path: &Path) -> Result<Vec<String>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let ids = match ext.as_str() {
        "csv" | "txt" => read_delimited(path, b',')?,
        "tsv" => read_delimited(path, b'\t')?,
        "xlsx" | "xlsm" | "xls" | "ods" => read_spreadsheet(path)?,
        _ => return Err(Error::UnsupportedInput(path.to_path_buf())),
    };

    info!("{} variant(s) listed in {}", ids.len(), path.display());
    Ok(ids)
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let column = variant_column(reader.headers()?.iter(), path)?;

    let mut ids = Vec::new();
    for record in reader.records() {
        let record = record?;
        ids.push(s!(record.get(column).unwrap_or("")));
    }
    Ok(ids)
}

fn read_spreadsheet(path: &Path) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::EmptyWorkbook(path.to_path_buf()))??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let column = variant_column(header.iter().map(String::as_str), path)?;

    Ok(rows
        .map(|cells| cells.get(column).map(cell_text).unwrap_or_default())
        .collect())
}

fn variant_column<'a>(mut headers: impl Iterator<Item = &'a str>, path: &Path) -> Result<usize> {
    headers
        .position(|h| h.trim_start_matches('\u{feff}') == VARIANT_COLUMN)
        .ok_or_else(|| Error::MissingColumn { path: path.to_path_buf(), column: VARIANT_COLUMN })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => s!(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
