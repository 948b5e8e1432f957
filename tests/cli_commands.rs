mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::Value;

const CANONICAL_URL: &str = "https://deepwiki.com/Sui-Volo/volo-smart-contracts";
const REJECTION: &str = "#NoVulnerability found for this question.";

#[test]
fn questions_prompt_targets_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["questions", "liquid_staking/sources/stake_pool.move"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Focus question generation EXCLUSIVELY on `liquid_staking/sources/stake_pool.move`",
        ))
        .stdout(predicate::str::ends_with(
            "Begin generating questions for `liquid_staking/sources/stake_pool.move` now.\n",
        ));
}

#[test]
fn validate_reads_report_from_file() {
    let ctx = TestContext::new();
    let report = ctx.write_file("report.md", "## Title\nLoss tolerance bypass\n");

    ctx.cli()
        .args(["validate", "--file"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("**SECURITY CLAIM TO VALIDATE:**\n## Title\nLoss tolerance bypass\n"))
        .stdout(predicate::str::contains("'volo-vault/sources/oracle.move'"));
}

#[test]
fn validate_reads_report_from_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("validate")
        .write_stdin("claim from a pipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("claim from a pipe"));
}

#[test]
fn audit_accepts_inline_question() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["audit", "Can an operator skip the health limiter?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# VOLO PROTOCOL SECURITY AUDIT PROMPT"))
        .stdout(predicate::str::contains(
            "Begin investigation of: Can an operator skip the health limiter?",
        ));
}

#[test]
fn inline_text_and_file_conflict() {
    let ctx = TestContext::new();
    let report = ctx.write_file("report.md", "x");

    ctx.cli().args(["scan", "inline", "--file"]).arg(&report).assert().failure();
}

#[test]
fn scan_json_envelope_describes_prompt() {
    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["scan", "--json", "Rounding drift in ProtocolX vault"]);
    let value: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["kind"], "scan");
    assert_eq!(value["base_url"], CANONICAL_URL);
    assert_eq!(value["run_counter"], "0");
    assert_eq!(value["fingerprint"].as_str().unwrap().len(), 64);
    assert!(value["content"].as_str().unwrap().contains("Rounding drift in ProtocolX vault"));
}

#[test]
fn output_flag_writes_same_prompt_as_stdout() {
    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["audit", "q?"]);

    ctx.cli()
        .args(["audit", "q?", "-o", "audit.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote audit prompt"));

    assert_eq!(ctx.read_file("audit.md"), stdout);
}

#[test]
fn base_url_defaults_to_canonical() {
    let ctx = TestContext::new();

    ctx.cli().arg("base-url").assert().success().stdout(format!("{}\n", CANONICAL_URL));
}

#[test]
fn base_url_rotates_with_run_number() {
    let ctx = TestContext::new();

    for (run, suffix) in [("1", "-001"), ("30", "-030"), ("31", "-001"), ("47", "-017")] {
        ctx.cli()
            .arg("base-url")
            .env("GITHUB_RUN_NUMBER", run)
            .assert()
            .success()
            .stdout(predicate::str::ends_with(format!("volo-smart-contracts{}\n", suffix)));
    }
}

#[test]
fn malformed_run_number_is_fatal() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["questions", "a.move"])
        .env("GITHUB_RUN_NUMBER", "run-12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid run counter"));
}

#[test]
fn dotenv_file_supplies_run_number() {
    let ctx = TestContext::new();
    ctx.write_file(".env", "GITHUB_RUN_NUMBER=2\n");

    ctx.cli()
        .arg("base-url")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("grass-dev-pa/volo-smart-contracts-002\n"));
}

#[test]
fn environment_wins_over_dotenv_file() {
    let ctx = TestContext::new();
    ctx.write_file(".env", "GITHUB_RUN_NUMBER=2\n");

    ctx.cli()
        .arg("base-url")
        .env("GITHUB_RUN_NUMBER", "0")
        .assert()
        .success()
        .stdout(format!("{}\n", CANONICAL_URL));
}

#[test]
fn explicit_env_file_must_exist() {
    let ctx = TestContext::new();

    ctx.cli().args(["base-url", "--env-file", "missing.env"]).assert().failure();
}

#[test]
fn settings_file_overrides_mirrors() {
    let ctx = TestContext::new();
    let settings = ctx.write_file(
        "volo-prompts.toml",
        "[mirror]\norg = \"audit-mirrors\"\nmax_index = 4\n",
    );

    ctx.cli()
        .args(["base-url", "--settings"])
        .arg(&settings)
        .env("GITHUB_RUN_NUMBER", "6")
        .assert()
        .success()
        .stdout("https://deepwiki.com/audit-mirrors/volo-smart-contracts-002\n");
}

#[test]
fn invalid_settings_file_fails() {
    let ctx = TestContext::new();
    let settings = ctx.write_file("bad.toml", "[mirror]\nmax_index = 0\n");

    ctx.cli()
        .args(["base-url", "--settings"])
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_index"));
}

#[test]
fn scope_lists_unique_move_files() {
    let ctx = TestContext::new();
    let stdout = ctx.stdout_of(&["scope"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), volo_prompts::SCOPE_FILES.len());
    assert_eq!(lines[0], "liquid_staking/sources/stake_pool.move");
    assert!(lines.iter().all(|l| l.ends_with(".move")));
}

#[test]
fn scope_json_is_an_array() {
    let ctx = TestContext::new();
    let value: Value = serde_json::from_str(&ctx.stdout_of(&["scope", "--json"])).unwrap();

    assert_eq!(value.as_array().unwrap().len(), volo_prompts::SCOPE_FILES.len());
}

#[test]
fn verdict_recognises_rejection() {
    let ctx = TestContext::new();

    ctx.cli().arg("verdict").write_stdin(REJECTION).assert().success().stdout("no_vulnerability\n");
}

#[test]
fn verdict_treats_explained_rejection_as_rejection() {
    let ctx = TestContext::new();
    let reply = format!("## Summary\nThe withdraw path checks the receipt owner.\n\n{}\n", REJECTION);

    ctx.cli().arg("verdict").write_stdin(reply).assert().success().stdout("no_vulnerability\n");
}

#[test]
fn verdict_reports_title_and_missing_sections() {
    let ctx = TestContext::new();
    let reply = ctx.write_file("reply.md", "## Title\nFee cap bypass\n\n## Summary\nFees exceed cap.\n");

    ctx.cli()
        .args(["verdict", "-f"])
        .arg(&reply)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("report\ntitle: Fee cap bypass\n"))
        .stdout(predicate::str::contains("missing sections: Finding Description"));
}

#[test]
fn verdict_json_is_tagged() {
    let ctx = TestContext::new();
    let output = ctx
        .cli()
        .args(["verdict", "--json", "no idea"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["verdict"], "unrecognized");
}

#[test]
fn parse_questions_emits_json_array() {
    let ctx = TestContext::new();
    let reply = "questions = [\n    \"[File: a.move] [Function: f()] [Auth] bypass? (High)\",\n]\n";
    let output = ctx
        .cli()
        .arg("parse-questions")
        .write_stdin(reply)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let questions: Vec<String> = serde_json::from_slice(&output).unwrap();

    assert_eq!(questions, vec!["[File: a.move] [Function: f()] [Auth] bypass? (High)"]);
}
