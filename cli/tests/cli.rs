//! Integration tests for the headless `folio` subcommands.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").expect("binary should build")
}

#[test]
fn tags_prints_the_vocabulary_case_insensitively_sorted() {
    folio()
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::eq("API\nAuth\nMongoDB\nNext.js\nReact\nTailwind\n"));
}

#[test]
fn list_without_filters_prints_all_projects_in_order() {
    let assert = folio().arg("list").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let weather = stdout.find("Weather Dashboard").expect("weather missing");
    let todo = stdout.find("To-Do App").expect("todo missing");
    let portfolio = stdout.find("Portfolio Website").expect("portfolio missing");
    assert!(weather < todo && todo < portfolio, "wrong order: {stdout}");
}

#[test]
fn list_with_mongo_query_matches_only_the_todo_app() {
    folio()
        .args(["list", "--query", "mongo"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("To-Do App")
                .and(predicate::str::contains("Weather Dashboard").not())
                .and(predicate::str::contains("Portfolio Website").not()),
        );
}

#[test]
fn list_with_nextjs_tag_matches_two_projects() {
    folio()
        .args(["list", "--tag", "Next.js"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("To-Do App")
                .and(predicate::str::contains("Portfolio Website"))
                .and(predicate::str::contains("Weather Dashboard").not()),
        );
}

#[test]
fn list_with_two_tags_requires_both() {
    folio()
        .args(["list", "--tag", "Next.js", "--tag", "MongoDB"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("To-Do App")
                .and(predicate::str::contains("Portfolio Website").not()),
        );
}

#[test]
fn list_reports_when_nothing_matches() {
    folio()
        .args(["list", "--query", "kubernetes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects match your search."));
}

#[test]
fn catalog_flag_loads_a_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[profile]
name = "Ada"
tagline = "Systems tinkerer"
about = "I build things."
email = "ada@example.com"

[[projects]]
title = "Ray Tracer"
description = "A weekend ray tracer."
tags = ["Rust", "Graphics"]
"#,
    )
    .expect("write catalog");

    folio()
        .args(["--catalog"])
        .arg(&path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::eq("Graphics\nRust\n"));
}

#[test]
fn broken_catalog_fails_with_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "not = valid [ toml").expect("write catalog");

    folio()
        .args(["--catalog"])
        .arg(&path)
        .arg("tags")
        .assert()
        .failure();
}
