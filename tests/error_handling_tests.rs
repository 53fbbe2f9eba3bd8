//! Error handling integration tests

mod common;

use common::TestSystem;
use predicates::prelude::*;

#[test]
fn test_malformed_timestamp_aborts() {
    let system = TestSystem::new();
    system.install("cat/pkg-1.0");
    system.write_log(
        "Mon Jan 01 10:00:00 2000 >>> cat/pkg-1.0\n\
         Mon Foo 01 10:00:00 2000 >>> cat/pkg-1.0\n",
    );

    system
        .cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid merge timestamp on line 2"));
}

#[test]
fn test_invalid_atom_aborts() {
    let system = TestSystem::new();
    system.write_log("Mon Jan 01 10:00:00 2000 >>> not-an-atom\n");

    system
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package atom on line 1"));
}

#[test]
fn test_missing_database() {
    let system = TestSystem::new();
    system.write_log("");

    common::stalepkg_cmd(&system.path)
        .arg("--db")
        .arg(system.path.join("no-such-db"))
        .arg("--history-file")
        .arg(system.log_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open package database"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_missing_history_file() {
    let system = TestSystem::new();

    system
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read merge log"));
}

#[test]
fn test_missing_history_command() {
    let system = TestSystem::new();

    common::stalepkg_cmd(&system.path)
        .arg("--db")
        .arg(system.db_path())
        .args(["--history-cmd", "stalepkg-test-no-such-qlop -l"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to run merge log command"));
}

#[cfg(unix)]
#[test]
fn test_failing_history_command() {
    let system = TestSystem::new();
    let qlop = system.write_fake_qlop("partial output", 2);

    common::stalepkg_cmd(&system.path)
        .arg("--db")
        .arg(system.db_path())
        .arg("--history-cmd")
        .arg(qlop.display().to_string())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exited with"));
}

#[test]
fn test_invalid_settings_file() {
    let system = TestSystem::new();
    system.write_log("");
    let config = system.write_file("bad.yaml", "monthz: 3\n");

    system
        .cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_months_out_of_range() {
    let system = TestSystem::new();
    system.write_log("");

    system
        .cmd()
        .arg("9999999999")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
