//! Integration tests for the `playground` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn playground() -> Command {
    Command::cargo_bin("playground").expect("binary builds")
}

#[test]
fn test_templates_lists_bundled_ids() {
    playground()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("customer-support"))
        .stdout(predicate::str::contains("data-analysis"))
        .stdout(predicate::str::contains("workflow-automation"));
}

#[test]
fn test_templates_json_output_parses() {
    let output = playground()
        .args(["templates", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let templates: serde_json::Value =
        serde_json::from_slice(&output).expect("--json emits valid JSON");
    assert_eq!(templates.as_array().map(Vec::len), Some(5));
}

#[test]
fn test_generate_from_template() {
    playground()
        .args(["generate", "--template", "customer-support"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import { Agent } from '@mastra/core/agent';"))
        .stdout(predicate::str::contains("new Agent({"))
        .stdout(predicate::str::contains("console.log(result.text);"));
}

#[test]
fn test_generate_with_overrides() {
    playground()
        .args([
            "generate",
            "--template",
            "code-review",
            "--name",
            "Scripted Reviewer",
            "--model",
            "claude-3.5-sonnet",
            "--tool",
            "web-search",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: 'Scripted Reviewer',"))
        .stdout(predicate::str::contains("model: anthropic('claude-3.5-sonnet'),"))
        .stdout(predicate::str::contains("const web_searchTool = createTool({"));
}

#[test]
fn test_generate_without_template_uses_blank_config() {
    playground()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("model: openai('gpt-4o'),"));
}

#[test]
fn test_generate_json_includes_config_and_code() {
    let output = playground()
        .args(["generate", "--template", "customer-support", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value =
        serde_json::from_slice(&output).expect("--json emits valid JSON");
    assert_eq!(record["config"]["model"], "gpt-4o");
    assert!(record["code"]
        .as_str()
        .is_some_and(|code| code.contains("new Agent({")));
}

#[test]
fn test_generate_unknown_template_fails() {
    playground()
        .args(["generate", "--template", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template: does-not-exist"));
}

#[test]
fn test_generate_unknown_tool_fails() {
    playground()
        .args(["generate", "--tool", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool: does-not-exist"));
}
