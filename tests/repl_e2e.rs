use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn addrbook(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("ADDRBOOK_HOME")
        .env_remove("RUST_LOG")
        .arg("--home")
        .arg(home)
        .arg("--today")
        .arg("30.12.2024");
    cmd
}

#[test]
fn test_add_and_show_phone() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("hello\nadd Ann 050-123-45-67\nchange Ann phone 0671112233\nphone Ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added: Ann"))
        .stdout(predicate::str::contains(
            "Enter a command: Ann:\n  0501234567\n  0671112233\n",
        ))
        .stdout(predicate::str::contains("not found").not())
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_contact_names_are_case_sensitive() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Ann 0501234567\nphone ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'ann' not found"));
}

#[test]
fn test_exit_inside_wizard_leaves_without_adding() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Bob\n0501234567\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Bob was not added"))
        .stdout(predicate::str::contains("Invalid format").not())
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_errors_do_not_stop_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Ann 0501234567\nadd Ann 0671112233\ndelete Bob\nfly\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Ann' already exists"))
        .stdout(predicate::str::contains("Contact 'Bob' not found"))
        .stdout(predicate::str::contains("Unknown command 'fly'"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_wizard_collects_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Bob\nabc\n0501234567\nbob@mail.com\nn\n02.01.1990\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone numbers for Bob"))
        .stdout(predicate::str::contains("Invalid format"))
        .stdout(predicate::str::contains("Contact added: Bob"))
        .stdout(predicate::str::contains("bob@mail.com"))
        .stdout(predicate::str::contains("02.01.1990"));
}

#[test]
fn test_birthdays_wrap_into_next_year() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin(
            "add Bob 0501234567\nchange Bob birthday 04.01.1990\n\
             add Eve 0671112233\nchange Eve birthday 20.01.1990\nbirthdays 7\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("04.01.2025"))
        .stdout(predicate::str::contains("06.01.2025"))
        .stdout(predicate::str::contains("20.01.2025").not());
}

#[test]
fn test_notes_and_tags() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin(
            "add-note Buy milk\nadd-note Call the plumber\nadd-tag 1 shopping\n\
             search-note SHOPPING\ndelete-tag 1 urgent\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 2 added"))
        .stdout(predicate::str::contains("#shopping"))
        .stdout(predicate::str::contains("Found 1 note"))
        .stdout(predicate::str::contains("Tag 'urgent' not found on note 1"));
}

#[test]
fn test_records_persist_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .write_stdin("add Ann 0501234567\nadd-note remember Ann\n")
        .assert()
        .success();
    assert!(temp_dir.path().join("addressbook.json").exists());

    addrbook(temp_dir.path())
        .write_stdin("search ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 contact and 1 note"));
}

#[test]
fn test_file_flag_overrides_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("other.json");

    addrbook(temp_dir.path())
        .arg("--file")
        .arg(&data_file)
        .write_stdin("add Ann 0501234567\nexit\n")
        .assert()
        .success();

    assert!(data_file.exists());
    assert!(!temp_dir.path().join("addressbook.json").exists());
}

#[test]
fn test_config_subcommand() {
    let temp_dir = tempfile::tempdir().unwrap();

    addrbook(temp_dir.path())
        .args(["config", "birthday-window", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday-window set to 14"));

    addrbook(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday-window = 14"))
        .stdout(predicate::str::contains("autosave = true"));

    addrbook(temp_dir.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key 'colour'"));
}

#[test]
fn test_corrupt_data_file_fails_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("addressbook.json"), "{ not json").unwrap();

    addrbook(temp_dir.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
