use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::tempdir;

fn book(path: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG").arg("--file").arg(path);
    cmd
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("adresy_ksiazki.json");

    // Add a contact
    book(&path)
        .args([
            "add",
            "--first-name",
            "Anna",
            "--last-name",
            "Nowak",
            "--street",
            "Polna 2",
            "--city",
            "Łódź",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"))
        .stdout(predicate::str::contains("Anna Nowak, Polna 2, Łódź"))
        .stderr(predicate::str::contains("starting fresh"));

    let saved = fs::read_to_string(&path)?;
    assert!(saved.contains("\"nazwisko\": \"Nowak\""));
    assert!(saved.contains("\"miasto\": \"Łódź\""));

    // Confirm newly added contact exist
    book(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Anna Nowak, Polna 2, Łódź"))
        .stderr(predicate::str::is_empty());

    // Attempt to Add duplicate contacts
    book(&path)
        .args([
            "add",
            "--first-name",
            "ANNA",
            "--last-name",
            "nowak",
            "--phone",
            "600100200",
            "--street",
            "Inna 1",
            "--city",
            "Kraków",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact ANNA nowak already exists"));

    assert_eq!(fs::read_to_string(&path)?, saved);
    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("adresy_ksiazki.json");

    // INVALID COMMAND
    book(&path)
        .arg("ad")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));

    // BLANK REQUIRED FIELD
    book(&path)
        .args([
            "add",
            "--first-name",
            "Anna",
            "--last-name",
            "Nowak",
            "--street",
            "   ",
            "--city",
            "Łódź",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed: "))
        .stderr(predicate::str::contains("street"));

    // MISSING REQUIRED FLAG
    book(&path)
        .args(["add", "--first-name", "Anna", "--last-name", "Nowak"])
        .assert()
        .failure();

    assert!(!path.exists());
    Ok(())
}
