//! Tests for prompt generation.

use super::generate::run;
use crate::cli::Cli;
use crate::error::{LangGptError, Result};
use crate::output::RESULT_BANNER;
use crate::template::BUILTIN_TEMPLATE;
use clap::Parser;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

struct RunOutput {
    result: Result<()>,
    stdout: String,
    stderr: String,
}

fn run_in(dir: &Path, args: &[&str], input: &str) -> RunOutput {
    let mut argv = vec!["langgpt"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run(
        &cli,
        dir,
        Cursor::new(input.as_bytes().to_vec()),
        &mut stdout,
        &mut stderr,
    );

    RunOutput {
        result,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

#[test]
fn test_flags_render_builtin_template() {
    let dir = TempDir::new().unwrap();
    let out = run_in(
        dir.path(),
        &[
            "--role",
            "Code reviewer",
            "--goal",
            "Find bugs",
            "--goal",
            "Suggest fixes",
            "--workflow",
            "Read the diff",
        ],
        "",
    );

    out.result.unwrap();
    assert!(out.stdout.starts_with("# Role: Code reviewer\n"));
    assert!(out.stdout.contains("## Goals\n- Find bugs\n- Suggest fixes\n\n## Constraints\n"));
    assert!(out.stdout.contains("## Workflow\n1. Read the diff\n"));
    assert!(out.stdout.contains("As a Code reviewer,"));
    assert!(!out.stdout.contains("{{"));
    assert!(!out.stdout.contains(RESULT_BANNER));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_custom_template_and_output_file() {
    let dir = TempDir::new().unwrap();
    let template = write(
        dir.path(),
        "tpl.md",
        "{{role}}:{{#each skills}}{{this}};{{/each}}",
    );
    let output = dir.path().join("out/prompt.md");
    let output_arg = output.display().to_string();

    let out = run_in(
        dir.path(),
        &[
            "--template",
            &template,
            "--role",
            "Expert",
            "--skill",
            "a",
            "--skill",
            "b",
            "--output",
            &output_arg,
        ],
        "",
    );

    out.result.unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Expert:a;b;");
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("Saved to:"));
}

#[test]
fn test_save_is_alias_for_output() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "tpl.md", "{{style}}");
    let output = dir.path().join("saved.md");
    let output_arg = output.display().to_string();

    let out = run_in(
        dir.path(),
        &["--template", &template, "--style", "Terse", "--save", &output_arg],
        "",
    );

    out.result.unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Terse");
}

#[test]
fn test_missing_template_is_fatal_before_prompting() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.md").display().to_string();

    let out = run_in(dir.path(), &["--template", &missing], "Role\n");

    assert!(matches!(out.result, Err(LangGptError::TemplateNotFound(_))));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_no_fields_enters_interactive_mode() {
    let dir = TempDir::new().unwrap();
    let template = write(
        dir.path(),
        "tpl.md",
        "{{role}}|{{#each goals}}{{this}},{{/each}}",
    );

    let out = run_in(
        dir.path(),
        &["--template", &template],
        "Tutor\n\nExplain\nQuiz\n\n",
    );

    out.result.unwrap();
    assert!(out.stdout.contains("interactive mode"));
    assert!(out.stdout.contains("Enter Role"));
    assert!(out.stdout.contains(RESULT_BANNER));
    assert!(out.stdout.ends_with("Tutor|Explain,Quiz,\n"));
}

#[test]
fn test_interactive_flag_keeps_flag_values_for_skipped_answers() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "tpl.md", "{{role}}/{{style}}");

    let out = run_in(
        dir.path(),
        &["--template", &template, "--interactive", "--style", "Formal"],
        "Editor\n",
    );

    out.result.unwrap();
    assert!(out.stdout.ends_with("Editor/Formal\n"));
}

#[test]
fn test_fields_file_with_flag_override() {
    let dir = TempDir::new().unwrap();
    let template = write(
        dir.path(),
        "tpl.md",
        "{{role}}|{{profile}}|{{#each rules}}{{this}};{{/each}}",
    );
    let fields = write(
        dir.path(),
        "fields.yaml",
        "role: From file\nprofile: Kept\nrules:\n  - r1\n  - r2\n",
    );

    let out = run_in(
        dir.path(),
        &["--template", &template, "--fields-file", &fields, "--role", "From flag"],
        "",
    );

    out.result.unwrap();
    assert_eq!(out.stdout, "From flag|Kept|r1;r2;\n");
}

#[test]
fn test_discovered_config_supplies_template_defaults_and_output() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "role.md", "{{role}} ({{style}})");
    let output = dir.path().join("generated.md");
    write(
        dir.path(),
        "langgpt.yaml",
        &format!(
            "template: role.md\noutput: {}\ndefaults:\n  style: Concise\n  role: Ignored\n",
            output.display()
        ),
    );

    let out = run_in(dir.path(), &["--role", "Analyst"], "");

    out.result.unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Analyst (Concise)");
    assert!(out.stderr.contains("Saved to:"));
}

#[test]
fn test_explicit_config_defaults() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "tpl.md", "{{role}} ({{style}})");
    let config = write(
        dir.path(),
        "custom.yaml",
        "defaults:\n  style: Concise\n  role: Ignored\n",
    );

    let out = run_in(
        dir.path(),
        &["--config", &config, "--template", &template, "--role", "Analyst"],
        "",
    );

    out.result.unwrap();
    assert_eq!(out.stdout, "Analyst (Concise)\n");
}

#[test]
fn test_dump_template_prints_builtin() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["--dump-template"], "");

    out.result.unwrap();
    assert_eq!(out.stdout, BUILTIN_TEMPLATE);
}

#[test]
fn test_bad_fields_file_is_user_error() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "fields.json", "{not json");

    let out = run_in(dir.path(), &["--fields-file", &fields], "");
    assert!(matches!(out.result, Err(LangGptError::UserError(_))));
}
