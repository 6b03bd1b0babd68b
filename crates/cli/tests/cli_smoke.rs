//! CLI smoke tests for mm.
//!
//! These tests run the binary against a temporary data directory of
//! exported JSON collections and check exit codes and key output.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the mm binary, isolated from the user's settings.
fn mm_cmd(home: &TempDir) -> Command {
  let mut cmd = cargo_bin_cmd!("mm");
  cmd
    .env("XDG_CONFIG_HOME", home.path().join("config"))
    .env_remove("MIGMAP_BASE_URL")
    .env_remove("MIGMAP_DATA_DIR")
    .env_remove("MIGMAP_PAGE_SIZE")
    .env_remove("RUST_LOG");
  cmd
}

const DISCOVERED: &str = r#"[
  {"id": "1", "data_entity_name": "Servers", "source_name": "CMDB", "source_type": "cmdb",
   "user": "ana", "created_time": "2024-03-02", "fields": [
    {"field_name": "host", "field_value": "srv-02"},
    {"field_name": "os", "field_value": "Linux"}
  ]},
  {"id": "2", "data_entity_name": "Apps", "source_name": "apps.xlsx", "source_type": "excel",
   "user": "bo", "created_time": "2024-03-01", "fields": [
    {"field_name": "app", "field_value": "Billing"}
  ]},
  {"id": "3", "data_entity_name": "Hosts", "source_name": "CMDB", "source_type": "cmdb",
   "user": "ana", "created_time": "2024-03-03", "fields": [
    {"field_name": "host", "field_value": "srv-01"},
    {"field_name": "rack", "field_value": "R7"}
  ]}
]"#;

const WORKLOADS: &str = r#"[
  {"id": "w1", "name": "Jira", "environment": "PROD", "ci_ids": ["c1", "c404"]},
  {"id": "w2", "name": "Wiki", "environment": "TEST", "ci_ids": ["c1"]},
  {"id": "w3", "name": "Mail", "environment": "PROD", "ci_ids": []}
]"#;

const ITEMS: &str = r#"[
  {"id": "c1", "name": "db-server", "type": "server"}
]"#;

const DEPENDENCIES: &str = r#"[
  {"source_workload_id": "w1", "target_workload_id": "w2", "level": "High", "latency_sensitive": true, "environment": "PROD"},
  {"source_workload_id": "w1", "target_workload_id": "ghost", "level": "Low"},
  {"source_workload_id": "w2", "target_workload_id": "w3", "level": "Medium"}
]"#;

/// Create a temp directory holding a `data/` directory of collections.
fn temp_data() -> TempDir {
  let temp = TempDir::new().unwrap();
  let data = temp.path().join("data");
  std::fs::create_dir_all(&data).unwrap();
  std::fs::write(data.join("discovered-data.json"), DISCOVERED).unwrap();
  std::fs::write(data.join("workloads.json"), WORKLOADS).unwrap();
  std::fs::write(data.join("items.json"), ITEMS).unwrap();
  std::fs::write(data.join("dependencies.json"), DEPENDENCIES).unwrap();
  temp
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
  serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  let temp = TempDir::new().unwrap();
  mm_cmd(&temp)
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  let temp = TempDir::new().unwrap();
  mm_cmd(&temp)
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("mm"));
}

#[test]
fn subcommand_help_works() {
  let temp = TempDir::new().unwrap();
  for cmd in &["browse", "graph", "screens"] {
    mm_cmd(&temp)
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// screens
// =============================================================================

#[test]
fn screens_lists_every_screen() {
  let temp = TempDir::new().unwrap();
  mm_cmd(&temp)
    .arg("screens")
    .assert()
    .success()
    .stdout(predicate::str::contains("discovered-data"))
    .stdout(predicate::str::contains("config-items"));
}

#[test]
fn screens_json_is_an_array() {
  let temp = TempDir::new().unwrap();
  let output = mm_cmd(&temp).args(["screens", "--format", "json"]).output().unwrap();
  assert!(output.status.success());
  assert_eq!(json_stdout(&output).as_array().unwrap().len(), 9);
}

// =============================================================================
// browse
// =============================================================================

#[test]
fn browse_prints_page_footer() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "discovered-data", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Entity Name"))
    .stdout(predicate::str::contains("Page 1 of 1 (3 items)"));
}

#[test]
fn browse_search_and_sort_json() {
  let temp = temp_data();
  let output = mm_cmd(&temp)
    .args(["browse", "discovered-data", "--search", "srv", "--sort", "data_entity_name", "--format", "json"])
    .arg("--data-dir")
    .arg(temp.path().join("data"))
    .output()
    .unwrap();
  assert!(output.status.success());

  let json = json_stdout(&output);
  assert_eq!(json["screen"], "discovered-data");
  assert_eq!(json["total_items"], 2);
  assert_eq!(json["mode"], "list");
  let names: Vec<_> = json["visible"]
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r["data_entity_name"].as_str().unwrap())
    .collect();
  assert_eq!(names, ["Hosts", "Servers"]);
}

#[test]
fn browse_scope_switches_to_wide_columns() {
  let temp = temp_data();
  let output = mm_cmd(&temp)
    .args(["browse", "discovered-data", "--scope", "CMDB", "--format", "json"])
    .arg("--data-dir")
    .arg(temp.path().join("data"))
    .output()
    .unwrap();
  assert!(output.status.success());

  let json = json_stdout(&output);
  assert_eq!(json["mode"], "wide");
  assert_eq!(json["columns"], serde_json::json!(["host", "os", "rack"]));
}

#[test]
fn browse_page_size_and_clamping() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "discovered-data", "--page-size", "2", "--page", "9", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Page 2 of 2 (3 items)"));
}

#[test]
fn browse_nested_fields_of_parent() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "discovered-data-fields", "--parent", "3", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .success()
    .stdout(predicate::str::contains("rack"))
    .stdout(predicate::str::contains("Page 1 of 1 (2 items)"));
}

#[test]
fn browse_field_screen_requires_parent() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "discovered-data-fields", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("--parent"));
}

#[test]
fn browse_reads_data_dir_from_env() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "workloads"])
    .env("MIGMAP_DATA_DIR", temp.path().join("data"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Jira"));
}

#[test]
fn browse_unknown_screen_fails() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "nope", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown screen"));
}

#[test]
fn browse_missing_collection_fails() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["browse", "raw-data", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("raw-data.json"));
}

#[test]
fn browse_missing_data_dir_fails() {
  let temp = TempDir::new().unwrap();
  mm_cmd(&temp)
    .args(["browse", "workloads", "--data-dir"])
    .arg(temp.path().join("nowhere"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn browse_without_source_fails() {
  let temp = TempDir::new().unwrap();
  mm_cmd(&temp)
    .args(["browse", "workloads"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("no record source configured"));
}

// =============================================================================
// graph
// =============================================================================

#[test]
fn graph_reports_skipped_references() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["graph", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Jira (PROD) [wl-w1]"))
    .stdout(predicate::str::contains("Workloads: 3"))
    .stderr(predicate::str::contains("c404"));
}

#[test]
fn graph_json_model() {
  let temp = temp_data();
  let output = mm_cmd(&temp)
    .args(["graph", "--format", "json", "--data-dir"])
    .arg(temp.path().join("data"))
    .output()
    .unwrap();
  assert!(output.status.success());

  let json = json_stdout(&output);
  let edges: Vec<_> = json["edges"]
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["id"].as_str().unwrap())
    .collect();
  assert_eq!(edges, ["dep-0", "dep-2"]);
  assert_eq!(json["skipped"].as_array().unwrap().len(), 2);
  assert_eq!(json["nodes"][1]["id"], "ci-c1-wl-w1");
  assert_eq!(json["nodes"][1]["parent"], "wl-w1");
}

#[test]
fn graph_focus_limits_to_neighbors() {
  let temp = temp_data();
  let output = mm_cmd(&temp)
    .args(["graph", "--focus", "w3", "--format", "json", "--data-dir"])
    .arg(temp.path().join("data"))
    .output()
    .unwrap();
  assert!(output.status.success());

  let json = json_stdout(&output);
  let ids: Vec<_> = json["nodes"]
    .as_array()
    .unwrap()
    .iter()
    .map(|n| n["id"].as_str().unwrap())
    .collect();
  assert_eq!(ids, ["wl-w2", "ci-c1-wl-w2", "wl-w3"]);
}

#[test]
fn graph_focus_unknown_workload_fails() {
  let temp = temp_data();
  mm_cmd(&temp)
    .args(["graph", "--focus", "zzz", "--data-dir"])
    .arg(temp.path().join("data"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Workload not found"));
}
