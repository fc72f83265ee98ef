mod common;
use common::{TEAM_DATASET, pt, temp_out, write_input};
use std::fs;

#[test]
fn test_export_report_csv() {
    let input = write_input("export_report_csv", TEAM_DATASET);
    let out = temp_out("export_report_csv", "csv");

    pt().args(["analyze", &input, "--export", &out, "--format", "csv"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("employee_a,employee_b,project_id,days,seconds")
    );
    assert_eq!(lines.next(), Some("1,2,10,5,432000"));
    assert_eq!(lines.next(), Some("1,2,12,6,518400"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_report_json() {
    let input = write_input("export_report_json", TEAM_DATASET);
    let out = temp_out("export_report_json", "json");

    pt().args(["analyze", &input, "--export", &out, "--format", "json"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["employee_a"], 1);
    assert_eq!(rows[0]["project_id"], 10);
    assert_eq!(rows[1]["days"], 6);
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let input = write_input("export_existing", TEAM_DATASET);
    let out = temp_out("export_existing", "csv");
    fs::write(&out, "keep me").unwrap();

    pt().args(["analyze", &input, "--export", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    pt().args(["analyze", &input, "--export", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("employee_a"));
}

#[test]
fn test_export_pairs_json() {
    let input = write_input("export_pairs_json", TEAM_DATASET);
    let out = temp_out("export_pairs_json", "json");

    pt().args(["pairs", &input, "--export", &out, "--format", "json"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["employee_a"], 1);
    assert!(rows[0]["project_id"].is_null());
    assert_eq!(rows[1]["employee_a"], 3);
}

#[test]
fn test_no_pair_exports_nothing() {
    let input = write_input(
        "export_no_pair",
        "1, 10, 2021-01-01, 2021-01-05\n2, 10, 2021-01-05, 2021-01-10\n",
    );
    let out = temp_out("export_no_pair", "csv");

    pt().args(["analyze", &input, "--export", &out])
        .assert()
        .success();

    assert!(!std::path::Path::new(&out).exists());
}
