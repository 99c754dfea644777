//! Common test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use cuelist::loader::load_cue_file;
use cuelist::model::Production;
use cuelist::parser::parse_production;
use cuelist::report::{render_to_string, ReportMode};

/// Get the path to the testdata directory
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Path of a fixture by file stem, e.g. `"Rehearsal"`
pub fn fixture(name: &str) -> PathBuf {
    testdata_dir().join(format!("{}.xml", name))
}

/// Load and parse a fixture through the public pipeline
pub fn load_fixture(name: &str) -> Production {
    let bytes = load_cue_file(&fixture(name)).expect("Failed to read fixture");
    parse_production(&bytes).expect("Failed to parse fixture")
}

/// Render a fixture's report
pub fn report_for_fixture(name: &str, mode: ReportMode) -> String {
    render_to_string(&load_fixture(name), mode).expect("Failed to render report")
}

/// Render a report for an inline document
pub fn report_for_xml(xml: &str, mode: ReportMode) -> String {
    let production = parse_production(xml.as_bytes()).expect("Failed to parse XML");
    render_to_string(&production, mode).expect("Failed to render report")
}
