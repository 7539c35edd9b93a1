mod common;

use common::{FILTER_CHAIN_YAML, TestContext};
use predicates::prelude::*;

#[test]
fn resolve_prints_ranked_order() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", FILTER_CHAIN_YAML);

    ctx.cli()
        .args(["resolve", "chain.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved order of 4 stage(s):"))
        .stdout(predicate::str::contains(
            "  0. request-log\n  1. cors\n  2. auth\n  3. dispatch\n",
        ));
}

#[test]
fn resolve_alias_reads_toml() {
    let ctx = TestContext::new();
    ctx.write_chain(
        "chain.toml",
        r#"
stages = ["metrics", "gzip"]

[[order]]
last = "metrics"
"#,
    );

    ctx.cli()
        .args(["r", "chain.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  0. gzip\n  1. metrics\n"));
}

#[test]
fn resolve_emits_json() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", FILTER_CHAIN_YAML);

    let output = ctx.cli().args(["resolve", "chain.yml", "--format", "json"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stages: Vec<&str> =
        value["order"].as_array().unwrap().iter().map(|e| e["stage"].as_str().unwrap()).collect();
    assert_eq!(stages, vec!["request-log", "cors", "auth", "dispatch"]);
    assert_eq!(value["order"][3]["rank"], 3);
}

#[test]
fn resolve_without_constraints_keeps_declared_order() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", "stages: [f1, f2, f3]\n");

    ctx.cli()
        .args(["resolve", "chain.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  0. f1\n  1. f2\n  2. f3\n"));
}

#[test]
fn resolve_fails_on_cycle() {
    let ctx = TestContext::new();
    ctx.write_chain(
        "chain.yml",
        "stages: [a, b, z]\norder:\n  - stage: a\n    depends_on: b\n  - stage: b\n    depends_on: a\n  - last: z\n",
    );

    ctx.cli()
        .args(["resolve", "chain.yml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: stage cycle detected: a -> b -> a"));
}

#[test]
fn resolve_fails_on_multiple_last_stages() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", "stages: [a, b]\norder:\n  - last: a\n  - last: b\n");

    ctx.cli()
        .args(["resolve", "chain.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly one last stage, found 2: [a, b]"));
}

#[test]
fn resolve_fails_on_missing_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["resolve", "absent.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chain file not found: absent.yml"));
}

#[test]
fn resolve_warns_about_unknown_stages_on_stderr() {
    let ctx = TestContext::new();
    ctx.write_chain(
        "chain.yml",
        "stages: [a, b]\norder:\n  - stage: a\n    depends_on: ghost\n  - last: b\n",
    );

    ctx.cli()
        .args(["resolve", "chain.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  0. a\n  1. b\n"))
        .stderr(predicate::str::contains("'ghost', which is not a declared stage"));
}

#[test]
fn verbose_logs_resolution() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", FILTER_CHAIN_YAML);

    ctx.cli()
        .args(["--verbose", "resolve", "chain.yml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved order of 4 stages"));
}

#[test]
fn check_reports_satisfiable_chain() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", FILTER_CHAIN_YAML);

    ctx.cli()
        .args(["check", "chain.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 stage(s), 2 constraint(s), order is satisfiable"));
}

#[test]
fn check_rejects_dependencies_without_last_stage() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.yml", "stages: [a, b]\norder:\n  - stage: a\n    depends_on: b\n");

    ctx.cli()
        .args(["check", "chain.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly one last stage, found 0: []"));
}

#[test]
fn check_rejects_unsupported_format() {
    let ctx = TestContext::new();
    ctx.write_chain("chain.json", "{}");

    ctx.cli()
        .args(["check", "chain.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported chain file format"));
}
