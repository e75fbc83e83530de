#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use flinta_space::models::{EventRecord, EventSource};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The CLI under test, with HOME pointed at a scratch directory so a real
/// `~/.flinta/flinta.conf` never leaks into the run.
pub fn flinta() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("flinta_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("flinta");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique events file path inside the system temp dir and remove any existing file
pub fn setup_events_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_events.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    fs::remove_file(format!("{p}.rejected.csv")).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn record(title: &str, date: &str, source: EventSource) -> EventRecord {
    EventRecord::new(
        title,
        NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
        "Hafenstraße 1, Hamburg",
        format!("{title} description"),
        source,
    )
}

/// Initialize the events file and add a small dataset useful for many tests
pub fn init_with_data(events_file: &str) {
    flinta()
        .args(["--events-file", events_file, "--test", "init"])
        .assert()
        .success();

    flinta()
        .args([
            "--events-file",
            events_file,
            "add",
            "--title",
            "Picnic",
            "--date",
            "2025-06-14",
            "--address",
            "Stadtpark",
            "--description",
            "Bring snacks",
            "--official",
        ])
        .assert()
        .success();

    flinta()
        .args([
            "--events-file",
            events_file,
            "add",
            "--title",
            "Open Mic",
            "--date",
            "2025-07-02",
            "--address",
            "Schanze 12",
            "--description",
            "Poetry and music",
        ])
        .assert()
        .success();
}

/// Data rows of a CSV file (header excluded).
pub fn data_rows(path: &str) -> usize {
    let mut rdr = csv::Reader::from_path(path).expect("open csv");
    rdr.records().count()
}
