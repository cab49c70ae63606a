use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn todo(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env_remove("TODO_DB");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    // Add an item
    todo(&db)
        .args(["-a", "buy", "milk"])
        .assert()
        .success()
        .stdout("Saved into todo item id #1\n");

    // List shows it, not done
    todo(&db)
        .arg("--list")
        .assert()
        .success()
        .stdout("✗ #1    buy milk\n");

    // Mark it done
    todo(&db).args(["-d", "1"]).assert().success().stdout("");

    todo(&db)
        .arg("-l")
        .assert()
        .success()
        .stdout("✓ #1    buy milk\n");

    // Remove done items
    todo(&db)
        .arg("-R")
        .assert()
        .success()
        .stdout("Removed 1 todo items\n");

    todo(&db).arg("-l").assert().success().stdout("");
}

#[test]
fn test_undo_and_remove_id_set() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    for text in ["a", "b", "c", "d"] {
        todo(&db).args(["--add", text]).assert().success();
    }

    todo(&db).args(["--done", "1-4"]).assert().success();
    todo(&db).args(["--undo", "2,4"]).assert().success();
    todo(&db)
        .arg("-l")
        .assert()
        .success()
        .stdout("✓ #1    a\n✗ #2    b\n✓ #3    c\n✗ #4    d\n");

    todo(&db)
        .args(["-r", "1,3,7"])
        .assert()
        .success()
        .stdout("Item #7 not found\n");
    todo(&db)
        .arg("-l")
        .assert()
        .success()
        .stdout("✗ #2    b\n✗ #4    d\n");
}

#[test]
fn test_mode_required() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    todo(&db).assert().failure();
    assert!(!db.exists());
}

#[test]
fn test_conflicting_modes_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    todo(&db)
        .args(["-l", "-R"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    assert!(!db.exists());
}

#[test]
fn test_invalid_id_set_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    todo(&db)
        .args(["-d", "3-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Range end id cannot be larger than begin id",
        ));
    todo(&db)
        .args(["-r", ",1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unexpected comma at beginning of id set",
        ));
}

#[test]
fn test_connection_failure() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("missing").join("todo.db");

    todo(&db)
        .arg("-l")
        .assert()
        .failure()
        .stdout("")
        .stderr("Could not connect to the database\n");
}

#[test]
fn test_db_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("env.db");

    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env("TODO_DB", &db).args(["-a", "from env"]);
    cmd.assert().success();

    assert!(db.exists());
}

#[test]
fn test_interactive_session() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    todo(&db)
        .arg("-i")
        .write_stdin("add buy milk\ndone abc\ndone 1\nls\n\nbogus\nremove done\nremove 1\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "todo interactive mode, type help or ? to list commands\n",
        ))
        .stdout(predicate::str::contains("Saved into todo item id #1"))
        .stdout(predicate::str::contains("Invalid id 'abc'"))
        .stdout(predicate::str::contains("✓ #1    buy milk"))
        .stdout(predicate::str::contains("Unknown command: 'bogus'"))
        .stdout(predicate::str::contains("Removed 1 todo items"))
        .stdout(predicate::str::contains("Item #1 not found"));

    todo(&db).arg("-l").assert().success().stdout("");
}

#[test]
fn test_interactive_eof() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    todo(&db)
        .arg("--interactive")
        .write_stdin("remove done\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 todo items"))
        .stdout(predicate::str::ends_with("todo> \n"));
}

#[test]
fn test_oversized_range_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("todo.db");

    todo(&db)
        .args(["-r", "0-9223372036854775807"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Too many ids in id set (at most 10000)",
        ))
        .stderr(predicate::str::contains("panicked").not());
    todo(&db)
        .args(["-d", "1-100000000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Too many ids in id set"));
    assert!(!db.exists());
}
