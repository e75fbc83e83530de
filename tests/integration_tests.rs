use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{data_rows, flinta, init_with_data, setup_events_file, temp_out};

#[test]
fn test_init_creates_events_file() {
    let events = setup_events_file("cli_init");

    flinta()
        .args(["--events-file", &events, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Events file created"));

    let content = fs::read_to_string(&events).expect("events file");
    assert_eq!(content.trim(), "title,date,address,description,source");

    // second run leaves the file alone
    flinta()
        .args(["--events-file", &events, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_add_and_list_events() {
    let events = setup_events_file("cli_add_list");
    init_with_data(&events);

    assert_eq!(data_rows(&events), 2);

    flinta()
        .args(["--events-file", &events, "list"])
        .assert()
        .success()
        .stdout(contains("Picnic"))
        .stdout(contains("Open Mic"))
        .stdout(contains("official"))
        .stdout(contains("user"));
}

#[test]
fn test_add_with_empty_address_fails_and_writes_nothing() {
    let events = setup_events_file("cli_add_missing");
    init_with_data(&events);

    flinta()
        .args([
            "--events-file",
            &events,
            "add",
            "--title",
            "Drag Brunch",
            "--date",
            "2025-08-03",
            "--address",
            "",
            "--description",
            "Sunday fun",
        ])
        .assert()
        .failure()
        .stderr(contains("Please fill out all fields"))
        .stderr(contains("missing: address"));

    assert_eq!(data_rows(&events), 2);
}

#[test]
fn test_add_without_any_field_lists_all_of_them() {
    let events = setup_events_file("cli_add_nothing");

    flinta()
        .args(["--events-file", &events, "add"])
        .assert()
        .failure()
        .stderr(contains("missing: title, date, address, description"));
}

#[test]
fn test_add_with_bad_date_fails() {
    let events = setup_events_file("cli_add_bad_date");
    init_with_data(&events);

    flinta()
        .args([
            "--events-file",
            &events,
            "add",
            "--title",
            "Drag Brunch",
            "--date",
            "2025-13-40",
            "--address",
            "Somewhere",
            "--description",
            "Sunday fun",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert_eq!(data_rows(&events), 2);
}

#[test]
fn test_list_filters_by_source_and_period() {
    let events = setup_events_file("cli_list_filter");
    init_with_data(&events);

    flinta()
        .args(["--events-file", &events, "list", "--source", "user"])
        .assert()
        .success()
        .stdout(contains("Open Mic").and(contains("Picnic").not()));

    flinta()
        .args(["--events-file", &events, "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Picnic").and(contains("Open Mic").not()));

    flinta()
        .args(["--events-file", &events, "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}

#[test]
fn test_list_rejects_bad_period() {
    let events = setup_events_file("cli_list_bad_period");
    init_with_data(&events);

    flinta()
        .args(["--events-file", &events, "list", "--period", "June"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_render_writes_carousel() {
    let events = setup_events_file("cli_render");
    init_with_data(&events);
    let out = temp_out("cli_render", "html");

    flinta()
        .args(["--events-file", &events, "render", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Carousel written"));

    let html = fs::read_to_string(&out).expect("carousel file");
    assert!(html.contains("carousel-container"));
    assert_eq!(html.matches("<h2>").count(), 4);
    assert!(!html.starts_with("<!DOCTYPE html>"));

    flinta()
        .args(["--events-file", &events, "render", "--file", &out, "--page", "--force"])
        .assert()
        .success();

    let page = fs::read_to_string(&out).expect("carousel page");
    assert!(page.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_render_empty_store_shows_empty_state() {
    let events = setup_events_file("cli_render_empty");
    let out = temp_out("cli_render_empty", "html");

    flinta()
        .args(["--events-file", &events, "render", "--file", &out])
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("carousel file");
    assert!(html.contains("carousel-empty"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_export_csv_and_json() {
    let events = setup_events_file("cli_export");
    init_with_data(&events);

    let csv_out = temp_out("cli_export", "csv");
    flinta()
        .args(["--events-file", &events, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("exported csv");
    assert!(content.starts_with("row,title,date,address,description,source"));
    assert!(content.contains("Picnic"));
    assert!(content.contains("Open Mic"));

    let json_out = temp_out("cli_export", "json");
    flinta()
        .args([
            "--events-file",
            &events,
            "export",
            "--format",
            "json",
            "--file",
            &json_out,
            "--source",
            "official",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["title"], "Picnic");
    assert_eq!(rows[0]["row"], 1);
}

#[test]
fn test_export_xlsx() {
    let events = setup_events_file("cli_export_xlsx");
    init_with_data(&events);
    let out = temp_out("cli_export_xlsx", "xlsx");

    flinta()
        .args(["--events-file", &events, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("xlsx file");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_absolute_path() {
    let events = setup_events_file("cli_export_relative");
    init_with_data(&events);

    flinta()
        .args(["--events-file", &events, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let events = setup_events_file("cli_export_empty");
    init_with_data(&events);
    let out = temp_out("cli_export_empty", "csv");

    flinta()
        .args(["--events-file", &events, "export", "--file", &out, "--range", "2019"])
        .assert()
        .success()
        .stderr(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_plain_and_compressed() {
    let events = setup_events_file("cli_backup");
    init_with_data(&events);

    let plain = temp_out("cli_backup", "csv");
    flinta()
        .args(["--events-file", &events, "backup", "--file", &plain])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&plain).unwrap(),
        fs::read_to_string(&events).unwrap()
    );

    let zipped = temp_out("cli_backup", "zip");
    flinta()
        .args(["--events-file", &events, "backup", "--file", &plain, "--compress"])
        .assert()
        .success()
        .stdout(contains(".zip"));

    let bytes = fs::read(&zipped).expect("zip backup");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_missing_source_column_lists_as_official() {
    let events = setup_events_file("cli_no_source");
    fs::write(
        &events,
        "title,date,address,description\nPicnic,2025-06-14,Stadtpark,Bring snacks\n",
    )
    .unwrap();

    flinta()
        .args(["--events-file", &events, "list"])
        .assert()
        .success()
        .stdout(contains("treated as official"))
        .stdout(contains("official"));
}

#[test]
fn test_relative_events_file_is_the_same_for_every_command() {
    let mut workdir = std::env::temp_dir();
    workdir.push("flinta_relative_events");
    fs::remove_dir_all(&workdir).ok();
    fs::create_dir_all(&workdir).unwrap();

    flinta()
        .current_dir(&workdir)
        .args(["--events-file", "ev.csv", "--test", "init"])
        .assert()
        .success();

    flinta()
        .current_dir(&workdir)
        .args([
            "--events-file",
            "ev.csv",
            "add",
            "--title",
            "Picnic",
            "--date",
            "2025-06-14",
            "--address",
            "Stadtpark",
            "--description",
            "Bring snacks",
        ])
        .assert()
        .success();

    let events = workdir.join("ev.csv");
    assert_eq!(data_rows(&events.to_string_lossy()), 1);
    assert!(fs::read_to_string(&events).unwrap().contains("Picnic"));
}
