//! End-to-end tests driving the `inkr` binary against a temp data dir.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn new_then_ls_shows_both_notes() {
    let env = TestEnv::new();
    env.create_note("buy milk");
    env.create_note("call mom");

    env.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("call mom"))
        .stdout(predicate::str::contains("2 note(s)"));
}

#[test]
fn blank_content_saves_nothing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["new", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save."));

    env.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes saved yet."));
}

#[test]
fn notes_persist_across_invocations() {
    let env = TestEnv::new();
    env.cmd()
        .args(["new", "durable", "--title", "Keep", "--color", "teal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: Keep ["));

    // A fresh process reads the same blob back.
    env.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep"))
        .stdout(predicate::str::contains("[teal]"));
}

#[test]
fn show_prints_content_and_metadata() {
    let env = TestEnv::new();
    let id = env.create_note("remember the thing");

    env.cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("remember the thing"))
        .stdout(predicate::str::contains("created:"));
}

#[test]
fn search_matches_content_but_not_title() {
    let env = TestEnv::new();
    env.cmd()
        .args(["new", "call mom", "--title", "family"])
        .assert()
        .success();

    // The row shows the note's title once it has one.
    env.cmd()
        .args(["search", "mom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("family"))
        .stdout(predicate::str::contains("1 note(s)"));

    // Titles are not searched.
    env.cmd()
        .args(["search", "family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
}

#[test]
fn search_is_case_insensitive() {
    let env = TestEnv::new();
    env.create_note("Call Mom");

    env.cmd()
        .args(["search", "mom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Call Mom"));
}

#[test]
fn pinned_notes_group_first() {
    let env = TestEnv::new();
    env.create_note("regular note");
    let pinned = env.create_note("important note");

    env.cmd().args(["pin", &pinned]).assert().success().stdout(
        predicate::str::contains("Pinned: important note"),
    );

    let assert = env.cmd().arg("ls").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let pinned_at = stdout.find("Pinned").expect("pinned header");
    let others_at = stdout.find("Others").expect("others header");
    assert!(pinned_at < others_at, "pinned group renders first");
}

#[test]
fn pin_twice_returns_to_unpinned() {
    let env = TestEnv::new();
    let id = env.create_note("flip me");

    env.cmd()
        .args(["pin", &id])
        .assert()
        .stdout(predicate::str::contains("Pinned:"));
    env.cmd()
        .args(["pin", &id])
        .assert()
        .stdout(predicate::str::contains("Unpinned:"));
}

#[test]
fn favorites_view_filters() {
    let env = TestEnv::new();
    env.create_note("plain");
    let fav = env.create_note("starred");

    env.cmd()
        .args(["fav", &fav])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorited:"));

    env.cmd()
        .args(["ls", "--view", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starred"))
        .stdout(predicate::str::contains("1 note(s)"));
}

#[test]
fn oldest_view_reverses_order() {
    let env = TestEnv::new();
    env.create_note("first");
    env.create_note("second");

    let assert = env
        .cmd()
        .args(["ls", "--view", "all-oldest"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let first_at = stdout.find("first").unwrap();
    let second_at = stdout.find("second").unwrap();
    assert!(first_at < second_at, "oldest note listed first");
}

#[test]
fn trash_hides_note_and_undo_brings_it_back() {
    let env = TestEnv::new();
    let id = env.create_note("precious");

    env.cmd()
        .args(["trash", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note moved to trash."));

    env.cmd()
        .arg("ls")
        .assert()
        .stdout(predicate::str::contains("No notes found."));
    env.cmd()
        .args(["ls", "--trash"])
        .assert()
        .stdout(predicate::str::contains("precious"));

    // Within the default 5s window.
    env.cmd()
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note restored."));
    env.cmd()
        .arg("ls")
        .assert()
        .stdout(predicate::str::contains("precious"));
}

#[test]
fn undo_after_expiry_leaves_note_in_trash() {
    let env = TestEnv::new();
    env.write_config("undo_secs = 0\n");
    let id = env.create_note("stuck");

    env.cmd().args(["trash", &id]).assert().success();
    env.cmd()
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo."));
    env.cmd()
        .args(["ls", "--trash"])
        .assert()
        .stdout(predicate::str::contains("stuck"));
}

#[test]
fn undo_with_empty_window_is_a_noop() {
    let env = TestEnv::new();
    env.create_note("calm");

    env.cmd()
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to undo."));
}

#[test]
fn restore_and_purge_flow() {
    let env = TestEnv::new();
    let id = env.create_note("bin me");

    env.cmd().args(["trash", &id]).assert().success();
    env.cmd()
        .args(["restore", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored:"));
    env.cmd()
        .args(["restore", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note is not in the trash."));

    env.cmd().args(["trash", &id]).assert().success();
    env.cmd()
        .args(["purge", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Permanently deleted:"));

    // Purge is irreversible: undo cannot resurrect it.
    env.cmd()
        .arg("undo")
        .assert()
        .stdout(predicate::str::contains("Nothing to undo."));
    env.cmd()
        .arg("ls")
        .assert()
        .stdout(predicate::str::contains("No notes saved yet."));
}

#[test]
fn edit_changes_content_and_keeps_one_note() {
    let env = TestEnv::new();
    let id = env.create_note("first draft");

    env.cmd()
        .args(["edit", &id, "-C", "second draft", "--color", "pink"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:"));

    env.cmd()
        .arg("ls")
        .assert()
        .stdout(predicate::str::contains("second draft"))
        .stdout(predicate::str::contains("1 note(s)"));
}

#[test]
fn missing_note_reference_is_a_friendly_noop() {
    let env = TestEnv::new();
    env.create_note("present");

    env.cmd()
        .args(["trash", "01AAAAAA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No note matches '01AAAAAA'."));
    env.cmd()
        .arg("ls")
        .assert()
        .stdout(predicate::str::contains("1 note(s)"));
}

#[test]
fn json_listing_has_pinned_and_others_groups() {
    let env = TestEnv::new();
    env.create_note("loose");
    let pinned = env.create_note("tacked");
    env.cmd().args(["pin", &pinned]).assert().success();

    let assert = env.cmd().args(["ls", "-f", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    let pinned_group = parsed["data"]["pinned"].as_array().unwrap();
    let others_group = parsed["data"]["others"].as_array().unwrap();
    assert_eq!(pinned_group.len(), 1);
    assert_eq!(others_group.len(), 1);
    assert_eq!(pinned_group[0]["content"], "tacked");
    assert_eq!(pinned_group[0]["pinned"], true);
    assert_eq!(others_group[0]["content"], "loose");
}

#[test]
fn theme_preference_roundtrip() {
    let env = TestEnv::new();

    env.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    env.cmd()
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark."));

    env.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}
