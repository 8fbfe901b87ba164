//! NDJSON output of `agentic-repo --json init`.

mod common;

use common::TestEnv;

#[test]
fn json_init_emits_event_stream() {
    let env = TestEnv::new();
    env.write_project_file("go.mod", "module app\n");
    env.write_project_file("AGENTS.md", "old\n");

    let result = env.run(&["--json", "init"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let events = result.json_events();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();

    assert_eq!(kinds.first(), Some(&"start"));
    assert_eq!(kinds.last(), Some(&"complete"));
    assert_eq!(kinds[1], "detected");
    assert_eq!(kinds[2], "migrated");
    assert_eq!(kinds.iter().filter(|k| **k == "created").count(), 14);

    let detected = &events[1];
    assert_eq!(detected["monorepo"], false);
    assert_eq!(detected["projects"][0]["path"], ".");
    assert_eq!(detected["projects"][0]["stack"], "go");

    let complete = events.last().unwrap();
    assert_eq!(complete["created"], 14);
    assert_eq!(complete["migrated"], 1);
}

#[test]
fn json_dry_run_reports_would_create() {
    let env = TestEnv::new();
    env.write_project_file("requirements.txt", "requests\n");

    let result = env.run(&["--json", "init", "--dry-run"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let events = result.json_events();
    assert!(events.iter().all(|e| e["event"] != "created"));
    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["dry_run"], true);
    assert_eq!(complete["would_create"], 14);
    assert_not_generated!(env, "AGENTS.md");
}

#[test]
fn json_error_is_reported() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "init", "missing"]);
    assert!(!result.success);

    let error = result
        .json_events()
        .into_iter()
        .find(|e| e["event"] == "error")
        .expect("error event");
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("directory does not exist"));
}
