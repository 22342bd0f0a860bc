//! Multi-command workflows exercised through the binary.

mod common;

use common::harness::{TestEnv, TestNote};
use predicates::prelude::*;

#[test]
fn capture_then_find_by_piping_list_into_view() {
    let env = TestEnv::new();
    env.cmd()
        .args(["quick", "remember the dentist", "-t", "health"])
        .assert()
        .success();

    let listing = env.cmd().args(["list", "--tag", "health"]).output_success();
    assert_eq!(listing.lines().count(), 1);

    env.cmd()
        .args(["view"])
        .stdin(listing)
        .assert()
        .success()
        .stdout(predicate::str::contains("remember the dentist"))
        .stdout(predicate::str::contains("Tags:    health"));
}

#[test]
fn context_scopes_capture_and_listing() {
    let env = TestEnv::new();
    env.add_note(&TestNote::new("unrelated"));

    env.cmd().args(["context", "set", "thesis"]).assert().success();
    env.cmd().quick("chapter two outline").assert().success();

    env.cmd()
        .list()
        .assert()
        .success()
        .stdout(predicate::str::contains("chapter two outline"))
        .stdout(predicate::str::contains("unrelated").not());

    env.cmd().args(["context", "clear"]).assert().success();

    let output = env.cmd().list().output_success();
    assert!(output.contains("chapter two outline"));
    assert!(output.contains("unrelated"));
}

#[test]
fn json_listing_round_trips_ids() {
    let env = TestEnv::new();
    let note = TestNote::new("first").id("aaaa1111");
    env.add_note(&note);
    env.add_note(&TestNote::new("second").id("bbbb2222"));

    let output: Vec<serde_json::Value> = env.cmd().timeline().json().output_json();
    let ids: Vec<&str> = output.iter().filter_map(|n| n["id"].as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&note.note_id().as_str()));

    env.cmd()
        .view("bbbb")
        .assert()
        .success()
        .stdout(predicate::str::contains("second"));
}

#[test]
fn edit_preserves_hand_written_fields() {
    let env = TestEnv::new();
    let path = env.write_raw(
        "abc12345.md",
        "---\nid: abc12345\ncreated_at: 2025-01-15T10:30:00Z\nupdated_at: 2025-01-15T10:30:00Z\ntags: [a]\n---\nHand written\n",
    );

    env.cmd().args(["edit", "abc"]).assert().success();

    let note = jot::infra::read_note(&path).unwrap();
    assert_eq!(note.tags(), ["a"]);
    assert_eq!(note.content(), "Hand written");
    assert!(note.updated_at() > note.created_at());
}
