//! End-to-end tests for the `bear-hide` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "versions": [
        {
            "application": "GCCcore",
            "version": "9.3.0",
            "links": [{"bear_apps_version": "live", "architecture": "icelake"}]
        },
        {
            "application": "GCCcore",
            "version": "10.2.0",
            "links": [{"bear_apps_version": "live", "architecture": "icelake"}]
        },
        {
            "application": "zlib",
            "version": "1.2.11",
            "module_load": "zlib/1.2.11-GCCcore-9.3.0",
            "dependencies": [{"application": "GCCcore", "version": "9.3.0"}],
            "links": [
                {"bear_apps_version": "live", "architecture": "icelake"},
                {"bear_apps_version": "live", "architecture": "cascadelake"}
            ]
        },
        {
            "application": "Perl",
            "version": "5.30.2",
            "dependencies": [{"application": "zlib", "version": "1.2.11"}],
            "links": [{"bear_apps_version": "live", "architecture": "icelake"}]
        },
        {
            "application": "Python",
            "version": "3.8.6",
            "module_load": "Python/3.8.6-GCCcore-10.2.0",
            "dependencies": [{"application": "GCCcore", "version": "10.2.0"}],
            "links": [{"bear_apps_version": "live", "architecture": "icelake"}]
        },
        {
            "application": "Java",
            "version": "11",
            "links": [{"bear_apps_version": "live", "architecture": "icelake"}]
        },
        {
            "application": "R",
            "version": "4.0.0",
            "dependencies": [{"application": "GCCcore", "version": "9.3.0"}],
            "links": [{"bear_apps_version": "2020a", "architecture": "icelake"}]
        }
    ]
}"#;

const CYCLIC: &str = r#"{
    "versions": [
        {"application": "A", "version": "1", "dependencies": [{"application": "B", "version": "1"}]},
        {"application": "B", "version": "1", "dependencies": [{"application": "A", "version": "1"}]}
    ]
}"#;

/// Binary running inside `dir`, isolated from the caller's config.
fn bear_hide(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bear-hide").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("BEAR_HIDE_OUT_DIR")
        .env_remove("BEAR_HIDE_ENVIRONMENT")
        .env_remove("BEAR_HIDE_ANCHOR_APPLICATION")
        .env_remove("BEAR_HIDE_FILE_PREFIX")
        .env_remove("BEAR_HIDE_FILE_EXTENSION")
        .arg("--no-color");
    cmd
}

fn write_snapshot(dir: &Path, content: &str) {
    fs::write(dir.join("snapshot.json"), content).unwrap();
}

#[test]
fn test_generate_writes_one_file_per_anchor() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "--out-dir", "hide/nested"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "There are 6 modules in the live environment",
        ))
        .stderr(predicate::str::contains(
            "GCCcore 9.3.0: 3 modules will be hidden by",
        ))
        .stderr(predicate::str::contains(
            "GCCcore 10.2.0: 4 modules will be hidden by",
        ));

    let out = temp.path().join("hide/nested");
    assert_eq!(
        fs::read_to_string(out.join("gcc9.3.0.lua")).unwrap(),
        "hide_version(\"GCCcore/10.2.0\")\n\
         hide_version(\"Java/11\")\n\
         hide_version(\"Python/3.8.6-GCCcore-10.2.0\")\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("gcc10.2.0.lua")).unwrap(),
        "hide_version(\"GCCcore/9.3.0\")\n\
         hide_version(\"Java/11\")\n\
         hide_version(\"Perl/5.30.2\")\n\
         hide_version(\"zlib/1.2.11-GCCcore-9.3.0\")\n"
    );
    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn test_generate_rerun_is_identical() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);
    let file = temp.path().join("out/gcc9.3.0.lua");

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "-o", "out"])
        .assert()
        .success();
    let first = fs::read(&file).unwrap();

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "-o", "out"])
        .assert()
        .success();
    assert_eq!(fs::read(&file).unwrap(), first);
}

#[test]
fn test_generate_continues_after_failed_anchor() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    // A directory where the 9.3.0 hide file should go cannot be replaced.
    let out = temp.path().join("out");
    fs::create_dir_all(out.join("gcc9.3.0.lua")).unwrap();

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GCCcore 9.3.0: failed to write hide file"))
        .stderr(predicate::str::contains(
            "GCCcore 10.2.0: 4 modules will be hidden by",
        ))
        .stderr(predicate::str::contains(
            "1 of 2 hide files could not be written",
        ));

    assert!(out.join("gcc9.3.0.lua").is_dir());
    assert_eq!(
        fs::read_to_string(out.join("gcc10.2.0.lua")).unwrap(),
        "hide_version(\"GCCcore/9.3.0\")\n\
         hide_version(\"Java/11\")\n\
         hide_version(\"Perl/5.30.2\")\n\
         hide_version(\"zlib/1.2.11-GCCcore-9.3.0\")\n"
    );
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "-o", "out", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("GCCcore 9.3.0: 3 modules would be hidden by"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_generate_uses_config_file_and_env() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);
    fs::write(
        temp.path().join("bear-hide.toml"),
        "out_dir = \"from-file\"\nfile_prefix = \"gcccore-\"\n",
    )
    .unwrap();

    bear_hide(temp.path())
        .args(["generate", "snapshot.json"])
        .assert()
        .success();
    assert!(temp.path().join("from-file/gcccore-9.3.0.lua").exists());

    bear_hide(temp.path())
        .env("BEAR_HIDE_OUT_DIR", "from-env")
        .args(["generate", "snapshot.json", "--prefix", "cli-"])
        .assert()
        .success();
    assert!(temp.path().join("from-env/cli-10.2.0.lua").exists());
}

#[test]
fn test_generate_without_anchors_warns() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "-o", "out", "-e", "2020a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to write"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_generate_rejects_invalid_extension() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["generate", "snapshot.json", "--extension", "lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file_extension"));
}

#[test]
fn test_generate_missing_snapshot() {
    let temp = TempDir::new().unwrap();

    bear_hide(temp.path())
        .args(["generate", "missing.json", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_generate_missing_config_file() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["--config", "site.toml", "generate", "snapshot.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_why_prints_chain() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["why", "snapshot.json", "Perl/5.30.2", "GCCcore/9.3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Perl/5.30.2 -> zlib/1.2.11 -> GCCcore/9.3.0",
        ));
}

#[test]
fn test_why_without_dependency() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["why", "snapshot.json", "Java/11", "GCCcore/9.3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Java/11 does not depend on GCCcore/9.3.0",
        ));
}

#[test]
fn test_why_dependency_missing_from_snapshot() {
    let temp = TempDir::new().unwrap();
    write_snapshot(
        temp.path(),
        r#"{"versions": [
            {"application": "GCCcore", "version": "9.3.0"},
            {"application": "zlib", "version": "1.2.11",
             "dependencies": [{"application": "binutils", "version": "2.34"}]}
        ]}"#,
    );

    bear_hide(temp.path())
        .args(["why", "snapshot.json", "binutils/2.34", "GCCcore/9.3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "binutils/2.34 does not depend on GCCcore/9.3.0",
        ));

    bear_hide(temp.path())
        .args(["why", "snapshot.json", "zlib/1.2.11", "binutils/2.34"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zlib/1.2.11 -> binutils/2.34"));
}

#[test]
fn test_why_unknown_module() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["why", "snapshot.json", "Ruby/3.0", "GCCcore/9.3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Module not found in snapshot: Ruby/3.0"));
}

#[test]
fn test_check_clean_snapshot() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CATALOG);

    bear_hide(temp.path())
        .args(["check", "snapshot.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modules:              7"))
        .stdout(predicate::str::contains("environments:         2"));
}

#[test]
fn test_check_reports_cycles() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), CYCLIC);

    bear_hide(temp.path())
        .args(["check", "snapshot.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("cycle: A/1 -> B/1 -> A/1"))
        .stderr(predicate::str::contains("1 dependency cycle(s) found"));
}

#[test]
fn test_check_invalid_json() {
    let temp = TempDir::new().unwrap();
    write_snapshot(temp.path(), "{\"versions\": [");

    bear_hide(temp.path())
        .args(["check", "snapshot.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid snapshot"));
}
