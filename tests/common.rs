#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pt() -> Command {
    let mut cmd = cargo_bin_cmd!("pairtime");
    // never pick up the developer's own configuration or RUST_LOG
    cmd.args(["--config", &missing_config()]);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn missing_config() -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push("pairtime_tests_no_such_dir");
    path.push("pairtime.conf");
    path.to_string_lossy().to_string()
}

/// Write `content` to a unique input file inside the system temp dir
pub fn write_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pairtime.csv", name));
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small dataset: 1 and 2 share two projects, 3 and 4 share one
pub const TEAM_DATASET: &str = "\
1, 10, 2021-01-01, 2021-01-10
2, 10, 2021-01-05, 2021-01-15
3, 11, 2021-02-01, 2021-02-04
4, 11, 2021-02-01, 2021-02-03
1, 12, 2021-03-01, 2021-03-08
2, 12, 2021-03-02, 2021-03-31
";
