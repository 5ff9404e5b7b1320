//! Status command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_status_on_fresh_system() {
    let layout = common::TestInstall::new();

    layout
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Not installed"))
        .stdout(predicate::str::contains("Identifier: dev.appstage.app"));
}

#[test]
fn test_status_does_not_create_install_dir() {
    let layout = common::TestInstall::new();

    layout.cmd().arg("status").assert().success();

    assert!(!layout.install_dir.exists());
}

#[test]
fn test_status_after_install_reports_up_to_date() {
    let layout = common::TestInstall::new();
    let payload = layout.create_payload();

    layout
        .cmd()
        .args(["install", "--payload"])
        .arg(&payload)
        .assert()
        .success();

    layout
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Installed and up to date"));
}

#[test]
fn test_status_reports_newer_registered_version() {
    let layout = common::TestInstall::new();
    layout.write_manifest("99.0.0");

    layout
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Status: Installed with a newer version",
        ));
}

#[test]
fn test_status_reports_older_registered_version_as_not_installed() {
    let layout = common::TestInstall::new();
    layout.write_manifest("0.1.0");

    layout
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Not installed"));
}

#[test]
fn test_status_shows_install_directory() {
    let layout = common::TestInstall::new();

    layout
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            layout.install_dir.display().to_string(),
        ));
}
