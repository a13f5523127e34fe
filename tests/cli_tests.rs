use assert_cmd::Command;
use predicates::prelude::*;

fn holonet_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("holonet"))
}

// =============================================================================
// query
// =============================================================================

#[test]
fn test_query_hero_prints_r2d2() {
    holonet_cmd()
        .arg("query")
        .arg("{ hero { name } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("R2-D2"));
}

#[test]
fn test_query_with_aliases_returns_both() {
    holonet_cmd()
        .arg("query")
        .arg(r#"{ luke: human(id: "1000") { name } leia: human(id: "1003") { name } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Luke Skywalker"))
        .stdout(predicate::str::contains("Leia Organa"));
}

#[test]
fn test_query_missing_id_prints_null_and_succeeds() {
    holonet_cmd()
        .arg("query")
        .arg(r#"{ human(id: "99999") { name } }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""human": null"#));
}

#[test]
fn test_query_with_unknown_field_fails() {
    holonet_cmd()
        .arg("query")
        .arg("{ starship { name } }")
        .assert()
        .failure()
        .stdout(predicate::str::contains("errors"));
}

// =============================================================================
// schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    holonet_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Human implements Character"))
        .stdout(predicate::str::contains("hero"));
}

// =============================================================================
// config
// =============================================================================

#[test]
fn test_explicit_missing_config_fails() {
    holonet_cmd()
        .arg("--config")
        .arg("/nonexistent/holonet.yml")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
