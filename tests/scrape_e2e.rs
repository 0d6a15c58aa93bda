// tests/scrape_e2e.rs
use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use gnomad_scrape::cli::run_with_loader;
use gnomad_scrape::config::options::{AppOptions, Browser, DriverOptions, FailurePolicy, RunOptions};
use gnomad_scrape::core::{ElementHandle, PageLoader};
use gnomad_scrape::error::{DriverError, Error, ExtractError, FailureReason};
use gnomad_scrape::file::write_records;
use gnomad_scrape::progress::Progress;
use gnomad_scrape::records::ExtractedRecord;
use gnomad_scrape::scrape;

/// What one scripted variant page renders.
#[derive(Clone)]
struct Page {
    table: Option<&'static str>,
    badges: Vec<&'static str>,
}

#[derive(Clone)]
struct Text(String);

impl ElementHandle for Text {
    fn text(&self) -> Result<String, DriverError> { Ok(self.0.clone()) }
}

/// Pages keyed by URL; unknown URLs render nothing.
#[derive(Default)]
struct MockLoader {
    pages: HashMap<String, Page>,
    current: Option<Page>,
    visited: Vec<String>,
    closes: usize,
}

impl MockLoader {
    fn with(mut self, id: &str, table: Option<&'static str>, badges: &[&'static str]) -> Self {
        let url = RunOptions::default().site.variant_url(id);
        self.pages.insert(url, Page { table, badges: badges.to_vec() });
        self
    }
}

impl PageLoader for &mut MockLoader {
    type Element = Text;

    fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.visited.push(url.to_string());
        self.current = self.pages.get(url).cloned();
        Ok(())
    }

    fn wait_for_element(&mut self, selector: &str, timeout: Duration) -> Result<Text, DriverError> {
        match self.current.as_ref().and_then(|p| p.table) {
            Some(t) => Ok(Text(t.to_string())),
            None => Err(DriverError::Timeout { selector: selector.to_string(), waited: timeout }),
        }
    }

    fn find_elements(&mut self, _selector: &str) -> Result<Vec<Text>, DriverError> {
        Ok(self
            .current
            .as_ref()
            .map(|p| p.badges.iter().map(|b| Text(b.to_string())).collect())
            .unwrap_or_default())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.closes += 1;
        Ok(())
    }
}

#[derive(Default)]
struct Tally {
    begun: Option<usize>,
    done: Vec<(String, String)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) { self.begun = Some(total); }
    fn item_done(&mut self, id: &str, maf: &str) { self.done.push((id.into(), maf.into())); }
    fn item_failed(&mut self, f: &gnomad_scrape::error::VariantFailure) { self.failed.push(f.variant_id.clone()); }
    fn finish(&mut self) { self.finished = true; }
}

const TABLE_A: &str = "Population\nAllele Count\nAllele Number\nNumber of Homozygotes\nAllele Frequency\n\
    European (Finnish)\n2001 25096 80 0.07974\n\
    European (non-Finnish)\n9251 126324 383 0.07323\n\
    Other\n512 7212 21 0.07099";

const TABLE_B: &str = "European (Finnish)\n3 25096 0 0.0001195\n\
    European (non-Finnish)\n17 128990 0 0.0001318\n\
    Latino\n0 35420 0 0";

const NO_ANCHOR: &str = "African/African American\n1 2 3 0.5\nOther";

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn two_variants_make_two_rows_with_exact_header() {
    let mut page = MockLoader::default()
        .with("rs429358", Some(TABLE_A), &["Pass", "Pass"])
        .with("rs7412", Some(TABLE_B), &["AC0", "RF"]);
    let mut tally = Tally::default();

    let report = scrape::run(&ids(&["rs429358", "rs7412"]), &RunOptions::default(), &mut page, Some(&mut tally))
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.records.variant_ids(), ["rs429358", "rs7412"]);
    assert_eq!(report.records.mafs(), ["0.07323", "0.0001318"]);
    assert_eq!(report.records.exome_statuses(), ["Pass", "AC0"]);
    assert_eq!(report.records.genome_statuses(), ["Pass", "RF"]);
    assert_eq!(page.closes, 1);
    assert_eq!(
        page.visited,
        [
            "https://gnomad.broadinstitute.org/variant/rs429358?dataset=gnomad_r2_1",
            "https://gnomad.broadinstitute.org/variant/rs7412?dataset=gnomad_r2_1",
        ]
    );
    assert_eq!(tally.begun, Some(2));
    assert_eq!(tally.done.len(), 2);
    assert!(tally.finished);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mafs.tsv");
    write_records(&report.records, &out).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("RS Name\tMAF\texome_filter_status\tgenome_filter_status"));
    assert_eq!(lines.next(), Some("rs429358\t0.07323\tPass\tPass"));
    assert_eq!(lines.next(), Some("rs7412\t0.0001318\tAC0\tRF"));
    assert_eq!(lines.next(), None);
}

#[test]
fn table_that_never_renders_aborts_the_run() {
    let mut page = MockLoader::default()
        .with("rs1", Some(TABLE_A), &["Pass", "Pass"])
        .with("rs2", None, &[])
        .with("rs3", Some(TABLE_B), &["Pass", "Pass"]);
    let mut tally = Tally::default();

    let err = scrape::run(&ids(&["rs1", "rs2", "rs3"]), &RunOptions::default(), &mut page, Some(&mut tally))
        .unwrap_err();

    match err {
        Error::Variant(f) => {
            assert_eq!(f.variant_id, "rs2");
            assert!(f.is_timeout());
        }
        other => panic!("expected a variant failure, got {other:?}"),
    }
    // nothing fetched after the failure
    assert_eq!(page.visited.len(), 2);
    assert_eq!(page.closes, 1);
    assert_eq!(tally.failed, ["rs2"]);
    assert!(tally.finished);
}

#[test]
fn keep_going_collects_failures_and_keeps_later_rows() {
    let mut page = MockLoader::default()
        .with("rs1", None, &[])
        .with("rs2", Some(NO_ANCHOR), &["Pass", "Pass"])
        .with("rs3", Some(TABLE_A), &["Pass"])
        .with("rs4", Some(TABLE_B), &["RF", "Pass"]);
    let opts = RunOptions { policy: FailurePolicy::Continue, ..RunOptions::default() };

    let report = scrape::run(&ids(&["rs1", "rs2", "rs3", "rs4"]), &opts, &mut page, None).unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.records.variant_ids(), ["rs4"]);
    assert_eq!(report.records.get(0).unwrap().maf, "0.0001318");

    let failed: Vec<_> = report.failures.iter().map(|f| f.variant_id.as_str()).collect();
    assert_eq!(failed, ["rs1", "rs2", "rs3"]);
    assert!(report.failures[0].is_timeout());
    assert!(matches!(
        report.failures[1].reason,
        FailureReason::Extract(ExtractError::AnchorMissing(_))
    ));
    assert!(matches!(
        report.failures[2].reason,
        FailureReason::Extract(ExtractError::MissingBadges { found: 1 })
    ));
    assert_eq!(page.closes, 1);
}

#[test]
fn duplicates_are_fetched_again_in_input_order() {
    let mut page = MockLoader::default()
        .with("rs7412", Some(TABLE_B), &["Pass", "RF"])
        .with("rs429358", Some(TABLE_A), &["Pass", "Pass"]);
    let list = ids(&["rs7412", "rs429358", "rs7412"]);

    let report = scrape::run(&list, &RunOptions::default(), &mut page, None).unwrap();

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records.variant_ids(), list.as_slice());
    assert_eq!(
        report.records.rows().last().unwrap(),
        ExtractedRecord {
            variant_id: "rs7412".into(),
            maf: "0.0001318".into(),
            exome_filter_status: "Pass".into(),
            genome_filter_status: "RF".into(),
        }
    );
    assert_eq!(page.visited.len(), 3);
}

#[test]
fn empty_list_still_closes_the_page() {
    let mut page = MockLoader::default();

    let report = scrape::run(&[], &RunOptions::default(), &mut page, None).unwrap();

    assert!(report.records.is_empty());
    assert!(page.visited.is_empty());
    assert_eq!(page.closes, 1);
}

fn app_options(dir: &tempfile::TempDir, ids: &str, policy: FailurePolicy) -> AppOptions {
    let variants_path = dir.path().join("variants.csv");
    fs::write(&variants_path, ids).unwrap();
    AppOptions {
        variants_path,
        output_path: dir.path().join("out").join("mafs.tsv"),
        driver: DriverOptions::new(Browser::Firefox),
        run: RunOptions { policy, ..RunOptions::default() },
    }
}

#[test]
fn aborted_run_writes_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = app_options(&dir, "RS Name\nrs1\nrs2\nrs3\n", FailurePolicy::Abort);
    let mut page = MockLoader::default()
        .with("rs1", Some(TABLE_A), &["Pass", "Pass"])
        .with("rs2", None, &[])
        .with("rs3", Some(TABLE_B), &["Pass", "Pass"]);

    let loader = &mut page;
    let err = run_with_loader(&opts, move |_| Ok(loader)).unwrap_err();

    assert!(matches!(err, Error::Variant(ref f) if f.variant_id == "rs2"));
    assert!(!opts.output_path.exists());
    assert_eq!(page.closes, 1);
}

#[test]
fn keep_going_run_writes_only_successful_rows() {
    let dir = tempfile::tempdir().unwrap();
    let opts = app_options(&dir, "RS Name\nrs1\nrs2\nrs3\n", FailurePolicy::Continue);
    let mut page = MockLoader::default()
        .with("rs1", Some(TABLE_A), &["Pass", "Pass"])
        .with("rs2", None, &[])
        .with("rs3", Some(TABLE_B), &["AC0", "RF"]);

    let loader = &mut page;
    let report = run_with_loader(&opts, move |_| Ok(loader)).unwrap();

    assert_eq!(report.failures.len(), 1);
    let text = fs::read_to_string(&opts.output_path).unwrap();
    assert_eq!(
        text,
        "RS Name\tMAF\texome_filter_status\tgenome_filter_status\n\
         rs1\t0.07323\tPass\tPass\n\
         rs3\t0.0001318\tAC0\tRF\n"
    );
    assert_eq!(page.closes, 1);
}

#[test]
fn unreadable_variant_list_never_starts_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    let opts = app_options(&dir, "rsid\nrs1\n", FailurePolicy::Abort);
    let mut page = MockLoader::default();
    let mut started = false;

    let loader = &mut page;
    let err = run_with_loader(&opts, |_| {
        started = true;
        Ok(loader)
    })
    .unwrap_err();

    assert!(matches!(err, Error::MissingColumn { .. }));
    assert!(!started);
    assert_eq!(page.closes, 0);
    assert!(!opts.output_path.exists());
}
