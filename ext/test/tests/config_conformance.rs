//! Config conformance tests: validates the table config loading path.
//!
//! Run with: cargo test -p pathmatch-test --test config_conformance

#![cfg(feature = "fixtures")]

use pathmatch_test::config_fixture::{error_kind, ConfigFixture};
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run all config fixtures in a directory.
fn run_config_fixtures(dir: &Path) {
    assert!(
        dir.exists(),
        "Config fixtures directory does not exist: {}",
        dir.display()
    );

    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if !path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            continue;
        }

        println!("Loading config fixture: {}", path.display());
        let yaml = fs::read_to_string(&path).expect("read yaml");
        let fixtures = ConfigFixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {}", path.display(), e);
        });

        for fixture in fixtures {
            println!("  Running: {}", fixture.name);

            if let Some(expected) = &fixture.expect_error {
                let err = fixture.config.build().expect_err(&fixture.name);
                assert_eq!(
                    error_kind(&err),
                    expected,
                    "Fixture '{}' failed with {err}",
                    fixture.name
                );
                println!("    -> {err} (expected)");
                continue;
            }

            let matcher = fixture.config.build().unwrap_or_else(|e| {
                panic!("Fixture '{}' build failed: {}", fixture.name, e);
            });

            for case in &fixture.cases {
                let actual = matcher.lookup(&case.path).map(|m| m.pattern.to_owned());
                assert_eq!(
                    actual, case.expect,
                    "Fixture '{}' case '{}': expected {:?}, got {:?}",
                    fixture.name, case.name, case.expect, actual,
                );
            }
        }
    }
}

#[test]
fn test_config_conformance() {
    run_config_fixtures(&fixtures_dir().join("config"));
}

#[test]
fn json_and_yaml_configs_agree() {
    let json = r#"{ "patterns": ["/users/:id", "/users/me", "/static/*"] }"#;
    let yaml = "patterns:\n  - /users/:id\n  - /users/me\n  - /static/*\n";
    let from_json: pathmatch::TableConfig = serde_json::from_str(json).unwrap();
    let from_yaml: pathmatch::TableConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(from_json, from_yaml);
}
