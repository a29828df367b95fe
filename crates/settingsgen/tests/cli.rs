//! Integration tests for the settingsgen binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn settingsgen() -> Command {
    Command::cargo_bin("settingsgen").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn help_lists_subcommands() {
    let help = stdout_of(settingsgen().arg("--help"));
    assert!(help.contains("generate"));
    assert!(help.contains("inspect"));
    assert!(help.contains("preview"));
}

#[test]
fn generate_writes_into_out_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{"Retry": 3}"#).unwrap();
    fs::write(dir.path().join("demo.settings.json"), r#"{"Secret": "x"}"#).unwrap();
    let out = dir.path().join("out");

    let listed = stdout_of(
        settingsgen()
            .arg("generate")
            .arg("--source-dir")
            .arg(dir.path())
            .arg("--program-name")
            .arg("demo")
            .arg("--out-dir")
            .arg(&out),
    );

    assert_eq!(listed.lines().count(), 3);
    let aggregate = fs::read_to_string(out.join("settingsgen.rs")).unwrap();
    assert!(aggregate.contains("pub mod demo_settings {"));
    assert!(aggregate.contains("pub mod demo_internal_settings {"));
}

#[test]
fn generate_reads_project_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settingsgen.toml"),
        "program_name = \"tool\"\nout_dir = \"gen\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("tool.settings.json"), r#"{"Key": 1}"#).unwrap();

    settingsgen()
        .arg("generate")
        .arg("--source-dir")
        .arg(dir.path())
        .assert()
        .success();

    let internal = fs::read_to_string(dir.path().join("gen/internal_settings_generated.rs")).unwrap();
    assert!(internal.contains("pub mod tool_internal_settings {"));
    assert!(!dir.path().join("gen/settings_generated.rs").exists());
}

#[test]
fn generate_to_stdout_skips_malformed_variant() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    fs::write(dir.path().join("demo.settings.json"), r#"{"Key": true}"#).unwrap();

    let text = stdout_of(
        settingsgen()
            .current_dir(dir.path())
            .args(["generate", "--program-name", "demo", "--stdout"]),
    );
    assert!(text.starts_with("// @generated by settingsgen from `demo.settings.json`"));
    assert!(!text.contains("pub mod demo_settings {"));
    assert!(!dir.path().join("generated").exists());
}

#[test]
fn inspect_prints_types() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.json");
    fs::write(&file, r#"{"Hosts": ["a"], "Db": {"Port": 5432}}"#).unwrap();

    let text = stdout_of(settingsgen().arg("inspect").arg(&file));
    assert_eq!(
        text,
        "Settings (settings.json)\n  Hosts: sequence<string>\n  Db: Db\nDb (Db)\n  Port: integer\n"
    );
}

#[test]
fn inspect_json_prints_the_tree() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.json");
    fs::write(&file, r#"{"A": 1}"#).unwrap();

    let text = stdout_of(settingsgen().arg("inspect").arg("--json").arg(&file));
    let tree: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(tree[0]["key"], "A");
    assert_eq!(tree[0]["path"], serde_json::json!(["A"]));
}

#[test]
fn preview_leaves_top_level_booleans_false() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.settings.json");
    fs::write(
        &file,
        r#"{
            // comment
            "Enabled": true,
            "Name": "svc",
            "Nested": { "On": true }
        }"#,
    )
    .unwrap();

    let text = stdout_of(settingsgen().arg("preview").arg(&file));
    let values: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        values,
        serde_json::json!({"Enabled": false, "Name": "svc", "Nested": {"On": true}})
    );
}

#[test]
fn missing_file_fails() {
    settingsgen()
        .args(["inspect", "does-not-exist.json"])
        .assert()
        .failure();
}
