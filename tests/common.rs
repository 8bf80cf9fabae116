#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use regex::Regex;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dp() -> Command {
    cargo_bin_cmd!("dailypay")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailypay.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema without touching the config file
pub fn init_db(db_path: &str) {
    dp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry for `user` and return the id printed by the CLI
pub fn add_entry(db_path: &str, user: &str, date: &str, args: &[&str]) -> String {
    let mut full = vec!["--db", db_path, "--user", user, "add", "--date", date];
    full.extend_from_slice(args);

    let out = dp().args(&full).assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&out);

    let re = Regex::new(r"Saved ([0-9a-f-]{36}) for").expect("regex");
    re.captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("entry id in output")
}

/// Init a DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str, user: &str) -> Vec<String> {
    init_db(db_path);
    vec![
        add_entry(db_path, user, "2025-09-01", &["--gross", "100"]),
        add_entry(db_path, user, "2025-09-15", &["--gross", "200"]),
    ]
}
