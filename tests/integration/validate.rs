//! Integration tests for the `navgen validate` command.

use predicates::prelude::*;

use super::common::{Fixture, navgen};

#[test]
fn a_valid_dataset_passes_with_exit_zero() {
    let fixture = Fixture::valid();

    navgen(&fixture)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ categories.yaml"))
        .stdout(predicate::str::contains("✓ projects.yaml"))
        .stdout(predicate::str::contains("✓ project-envs.yaml"))
        .stdout(predicate::str::contains("✓ links.yaml"))
        .stdout(predicate::str::contains("All data files are valid"));
}

#[test]
fn integrity_violations_fail_with_exit_one_and_name_the_offender() {
    let fixture = Fixture::valid();
    fixture.write(
        "project-envs.yaml",
        "- projectId: ghost\n  env: prod\n  url: https://a.example.com\n\
         - projectId: ghost\n  env: test\n  url: https://b.example.com\n",
    );

    navgen(&fixture)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ project-envs.yaml"))
        .stdout(predicate::str::contains("unknown projectId 'ghost'").count(1));
}

#[test]
fn schema_violations_report_field_paths() {
    let fixture = Fixture::valid();
    fixture.write("categories.yaml", "- name: No Id\n");

    navgen(&fixture)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ categories.yaml"))
        .stdout(predicate::str::contains("records[0].id"));
}

#[test]
fn cross_file_reference_violations_are_their_own_status_line() {
    let fixture = Fixture::valid();
    fixture.write(
        "projects.yaml",
        "- id: svc\n  name: Service\n  categoryId: nowhere\n",
    );

    navgen(&fixture)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ cross-file references"))
        .stdout(predicate::str::contains("unknown categoryId 'nowhere'"));
}

#[test]
fn json_format_emits_the_full_report() {
    let fixture = Fixture::valid();
    fixture.write(
        "categories.yaml",
        "- id: infra\n  name: A\n- id: infra\n  name: B\n",
    );

    let assert = navgen(&fixture).args(["validate", "--format", "json"]).assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["valid"], false);
    assert_eq!(report["categories_valid"], false);
    assert_eq!(report["projects_valid"], true);
    assert_eq!(
        report["errors"][0],
        "categories: duplicate id 'infra'"
    );
}

#[test]
fn json_format_on_a_valid_dataset_exits_zero() {
    let fixture = Fixture::valid();

    let assert = navgen(&fixture).args(["validate", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn a_missing_data_file_is_a_fatal_error_not_a_validation_result() {
    let fixture = Fixture::valid();
    std::fs::remove_file(fixture.data_dir().join("links.yaml")).unwrap();

    navgen(&fixture)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("links.yaml"));
}

#[test]
fn validate_reads_all_four_files_including_links() {
    let fixture = Fixture::valid();
    fixture.write(
        "links.yaml",
        "- id: docs\n  name: Docs\n  url: https://docs.example.com\n\
         - id: docs\n  name: Docs 2\n  url: https://docs2.example.com\n",
    );

    navgen(&fixture)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ links.yaml"))
        .stdout(predicate::str::contains("duplicate id 'docs'"));
}
