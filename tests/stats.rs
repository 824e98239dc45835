use assert_cmd::Command;
use predicates::str::{contains, diff};
use std::path::Path;
use tempfile::tempdir;

fn book(path: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG").arg("--file").arg(path);
    cmd
}

#[test]
fn city_statistics() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("book.json");

    book(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("No data to generate statistics."));

    for (first, city) in [("Anna", "Kraków"), ("Jan", "Gdańsk"), ("Ewa", "Kraków")] {
        book(&path)
            .args([
                "add",
                "--first-name",
                first,
                "--last-name",
                "Nowak",
                "--street",
                "Polna 2",
                "--city",
                city,
            ])
            .assert()
            .success();
    }

    book(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(diff("Addresses per city:\n- Gdańsk: 1\n- Kraków: 2\n"));

    Ok(())
}
