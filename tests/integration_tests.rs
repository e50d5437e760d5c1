//! Integration tests for quality-iq
//!
//! These tests drive the binary end to end against the built-in data set.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a quality-iq Command isolated from the caller's
/// environment and user config.
fn qiq(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("quality-iq");
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("QIQ_SECTOR")
        .env_remove("QIQ_USER")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Helper to create a temporary project directory
fn create_temp_project() -> TempDir {
    TempDir::new().unwrap()
}

fn write_config(dir: &TempDir, content: &str) {
    let config_dir = dir.path().join(".quality-iq");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("quality.toml"), content).unwrap();
}

fn json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn row_keys(view: &serde_json::Value) -> Vec<String> {
    view["grid"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["type"] == "data")
        .map(|r| r["key"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        let dir = create_temp_project();
        qiq(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("checklists"))
            .stdout(predicate::str::contains("certifications"));
    }

    #[test]
    fn test_version() {
        let dir = create_temp_project();
        qiq(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("quality-iq"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["--format", "xml", "dashboard"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid format 'xml'"));
    }

    #[test]
    fn test_invalid_sector_rejected() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["--sector", "plastics", "checklists"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid sector 'plastics'"));
    }

    #[test]
    fn test_dashboard_sections() {
        let dir = create_temp_project();
        qiq(&dir)
            .arg("dashboard")
            .assert()
            .success()
            .stdout(predicate::str::contains("Alex Johnson"))
            .stdout(predicate::str::contains("Failure Trend"))
            .stdout(predicate::str::contains("Certification Status"))
            .stdout(predicate::str::contains("Leaderboard"));
    }

    #[test]
    fn test_dashboard_json_stats() {
        let dir = create_temp_project();
        let view = json(qiq(&dir).arg("dashboard"));
        assert_eq!(view["sector"], "food");
        assert_eq!(view["stats"]["pending_checklists"], 1);
        assert_eq!(view["stats"]["open_issues"], 1);
        assert_eq!(view["leaderboard"].as_array().unwrap().len(), 5);

        let recent: Vec<&str> = view["recent_failures"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["id"].as_str().unwrap())
            .collect();
        assert_eq!(recent, vec!["fr1"]);
    }
}

// =============================================================================
// Grid Sorting and Filtering
// =============================================================================

mod grids {
    use super::*;

    #[test]
    fn test_checklists_default_sector_order() {
        let dir = create_temp_project();
        let view = json(qiq(&dir).arg("checklists"));
        assert_eq!(row_keys(&view), vec!["cl1", "cl3"]);
        assert_eq!(view["counts"]["completed"], 1);
        assert_eq!(view["counts"]["pending"], 1);
    }

    #[test]
    fn test_checklists_sort_then_reverse() {
        let dir = create_temp_project();
        let asc = json(qiq(&dir).args(["checklists", "--sort", "Status"]));
        assert_eq!(row_keys(&asc), vec!["cl1", "cl3"]);
        assert_eq!(asc["grid"]["headers"][2]["sort"], "ascending");

        let desc = json(qiq(&dir).args(["checklists", "--sort", "Status", "--sort", "status"]));
        assert_eq!(row_keys(&desc), vec!["cl3", "cl1"]);
        assert_eq!(desc["grid"]["headers"][2]["sort"], "descending");
    }

    #[test]
    fn test_checklists_empty_search_shows_placeholder() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["checklists", "--search", "no such checklist"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No data available"));
    }

    #[test]
    fn test_checklists_status_filter() {
        let dir = create_temp_project();
        let view = json(qiq(&dir).args(["checklists", "--status", "pending"]));
        assert_eq!(row_keys(&view), vec!["cl3"]);
    }

    #[test]
    fn test_sort_on_derived_column_fails() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["checklists", "--sort", "Items"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("derived"));
    }

    #[test]
    fn test_sort_on_unknown_column_fails() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["checklists", "--sort", "Owner"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown column 'Owner'"));
    }

    #[test]
    fn test_sector_flag_and_env() {
        let dir = create_temp_project();
        let by_flag = json(qiq(&dir).args(["--sector", "textile", "checklists"]));
        assert_eq!(row_keys(&by_flag), vec!["cl2"]);

        let by_env = json(qiq(&dir).env("QIQ_SECTOR", "textile").arg("checklists"));
        assert_eq!(row_keys(&by_env), vec!["cl2"]);
    }

    #[test]
    fn test_failure_hotspots_tab() {
        let dir = create_temp_project();
        let view = json(qiq(&dir).args(["failures", "--tab", "hotspots"]));
        assert_eq!(view["hotspots"][0]["area"], "Packaging Line 3");
        assert_eq!(row_keys(&view), vec!["hs1"]);
    }

    #[test]
    fn test_failure_analysis_heatmap() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["failures", "--tab", "analysis"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Packaging"))
            .stdout(predicate::str::contains("Mon"));

        qiq(&dir)
            .args(["failures", "--tab", "analysis", "--sort", "Date"])
            .assert()
            .failure();
    }

    #[test]
    fn test_certifications_compliance() {
        let dir = create_temp_project();
        let food = json(qiq(&dir).arg("certifications"));
        assert_eq!(food["percentage"], 100);
        assert_eq!(food["health"], "good");

        let textile = json(qiq(&dir).args(["--sector", "textile", "certifications"]));
        assert_eq!(textile["percentage"], 0);
        assert_eq!(textile["health"], "critical");
        assert_eq!(textile["needs_attention"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_leaderboard_limit() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["leaderboard", "--limit", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Taylor Smith"))
            .stdout(predicate::str::contains("Jordan Lee").not());
    }
}

// =============================================================================
// Record Detail
// =============================================================================

mod details {
    use super::*;

    #[test]
    fn test_show_resolved_failure() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["show", "failure", "fr2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Resolved"))
            .stdout(predicate::str::contains("Adjusted dye concentration"));
    }

    #[test]
    fn test_show_unknown_record() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["show", "checklist", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No checklist with id 'nope'"));
    }

    #[test]
    fn test_show_user_yaml() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["--format", "yaml", "show", "user", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("name: Alex Johnson"));
    }

    #[test]
    fn test_browse_requires_terminal() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["browse", "checklists"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("interactive terminal"));
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn test_config_show_defaults() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No quality.toml found"))
            .stdout(predicate::str::contains("leaderboard_limit = 5"));
    }

    #[test]
    fn test_config_init_creates_toml() {
        let dir = create_temp_project();
        qiq(&dir)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created quality.toml"));

        let path = dir.path().join(".quality-iq/quality.toml");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[display]"));
        assert!(content.contains("user_id = \"1\""));

        qiq(&dir)
            .args(["config", "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        qiq(&dir).args(["config", "init", "--force"]).assert().success();
    }

    #[test]
    fn test_config_validate_reports_warnings() {
        let dir = create_temp_project();
        write_config(
            &dir,
            r#"
[display]
description_width = 4
leaderboard_limit = 0
"#,
        );
        qiq(&dir)
            .args(["config", "validate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration warnings"))
            .stdout(predicate::str::contains("too narrow"))
            .stdout(predicate::str::contains("leaderboard_limit"));
    }

    #[test]
    fn test_config_validate_clean() {
        let dir = create_temp_project();
        write_config(&dir, "[session]\nuser_id = \"2\"\n");
        qiq(&dir)
            .args(["config", "validate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration is valid"));
    }

    #[test]
    fn test_config_file_sets_sector_and_limit() {
        let dir = create_temp_project();
        write_config(
            &dir,
            r#"
[display]
default_sector = "textile"
leaderboard_limit = 3
"#,
        );
        let view = json(qiq(&dir).arg("dashboard"));
        assert_eq!(view["sector"], "textile");
        assert_eq!(view["leaderboard"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_default() {
        let dir = create_temp_project();
        write_config(&dir, "[display]\ndate_format = \"%Q\"\n");

        qiq(&dir)
            .arg("checklists")
            .assert()
            .success()
            .stdout(predicate::str::contains("Daily Food Safety Inspection"))
            .stderr(predicate::str::contains("Invalid date_format '%Q'"));

        qiq(&dir)
            .args(["show", "failure", "fr1"])
            .assert()
            .success();

        qiq(&dir)
            .arg("dashboard")
            .assert()
            .success()
            .stdout(predicate::str::contains("Recent Failures"));

        qiq(&dir)
            .args(["config", "validate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid date_format '%Q'"));
    }

    #[test]
    fn test_unknown_session_user_fails() {
        let dir = create_temp_project();
        write_config(&dir, "[session]\nuser_id = \"99\"\n");
        qiq(&dir)
            .arg("dashboard")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown user '99'"));
    }

    #[test]
    fn test_broken_config_reports_parse_error() {
        let dir = create_temp_project();
        write_config(&dir, "[display\n");
        qiq(&dir)
            .arg("checklists")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load configuration"));
    }

    #[test]
    fn test_project_dir_flag() {
        let dir = create_temp_project();
        let project = create_temp_project();
        fs::create_dir_all(project.path().join(".quality-iq")).unwrap();
        fs::write(
            project.path().join(".quality-iq/quality.toml"),
            "[display]\ndefault_sector = \"textile\"\n",
        )
        .unwrap();

        let view = json(
            qiq(&dir)
                .arg("--project-dir")
                .arg(project.path())
                .arg("checklists"),
        );
        assert_eq!(view["sector"], "textile");
    }
}
