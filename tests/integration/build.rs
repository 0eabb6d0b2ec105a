//! Integration tests for the `navgen build` command.

use predicates::prelude::*;

use super::common::{Fixture, navgen, read_snapshot};

#[test]
fn build_emits_one_block_with_prod_before_test() {
    let fixture = Fixture::valid();
    let output = fixture.output_path();

    navgen(&fixture)
        .args(["build", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let snapshot = read_snapshot(&output);
    let blocks = snapshot["categoryBlocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["category"]["id"], "infra");

    let items = blocks[0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Production surfaces ahead of test regardless of declaration order.
    assert_eq!(items[0]["id"], "svc-prod");
    assert_eq!(items[0]["order"], 1);
    assert_eq!(items[1]["id"], "svc-test");
    assert_eq!(items[1]["order"], 3);
}

#[test]
fn build_drops_disabled_environments_entirely() {
    let fixture = Fixture::valid();
    fixture.write(
        "project-envs.yaml",
        "- projectId: svc\n  env: prod\n  url: https://prod.example.com\n  enabled: true\n\
         - projectId: svc\n  env: test\n  url: https://test.example.com\n  enabled: false\n",
    );
    let output = fixture.output_path();

    navgen(&fixture).args(["build", "--output"]).arg(&output).assert().success();

    let snapshot = read_snapshot(&output);
    let items = snapshot["categoryBlocks"][0]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "svc-prod");
}

#[test]
fn build_drops_categories_with_no_qualifying_items() {
    let fixture = Fixture::valid();
    fixture.write(
        "categories.yaml",
        "- id: infra\n  name: Infrastructure\n  order: 1\n- id: empty\n  name: Empty\n  order: 2\n",
    );
    let output = fixture.output_path();

    navgen(&fixture).args(["build", "--output"]).arg(&output).assert().success();

    let snapshot = read_snapshot(&output);
    let blocks = snapshot["categoryBlocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["category"]["id"], "infra");
}

#[test]
fn build_fails_loudly_on_a_missing_data_file() {
    let fixture = Fixture::valid();
    std::fs::remove_file(fixture.data_dir().join("projects.yaml")).unwrap();
    let output = fixture.output_path();

    navgen(&fixture)
        .args(["build", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("projects.yaml"));

    // A failed build must never leave a partial/empty snapshot behind.
    assert!(!output.exists());
}

#[test]
fn build_fails_loudly_on_a_structurally_broken_record() {
    let fixture = Fixture::valid();
    fixture.write(
        "project-envs.yaml",
        "- projectId: svc\n  env: volcano\n  url: https://x.example.com\n",
    );
    let output = fixture.output_path();

    navgen(&fixture)
        .args(["build", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("project-envs.yaml"));
    assert!(!output.exists());
}

#[test]
fn quiet_build_prints_nothing_but_still_writes() {
    let fixture = Fixture::valid();
    let output = fixture.output_path();

    navgen(&fixture)
        .arg("--quiet")
        .args(["build", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(output.exists());
}

#[test]
fn build_overwrites_an_existing_snapshot() {
    let fixture = Fixture::valid();
    let output = fixture.output_path();
    std::fs::create_dir_all(output.parent().unwrap()).unwrap();
    std::fs::write(&output, "stale").unwrap();

    navgen(&fixture).args(["build", "--output"]).arg(&output).assert().success();

    let snapshot = read_snapshot(&output);
    assert!(snapshot["categoryBlocks"].is_array());
}
