//! Profile loading tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test defaults when no file or an empty profile is present.
//! - Test inheritance of the `default` profile and isolation between siblings.
//! - Test file discovery from subdirectories and the global fallback.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{resolver_at, write_config};
use crate::error::ConfigError;
use crate::types::Config;

#[test]
fn test_no_file_yields_defaults() {
    let dir = TempDir::new().unwrap();

    let resolved = resolver_at(dir.path(), &[]).resolve().unwrap();

    assert_eq!(resolved.profile(), "default");
    assert!(resolved.config_file().is_none());
    assert_eq!(resolved.root(), dir.path());
    let expected = Config {
        root: dir.path().to_path_buf(),
        ..Config::default()
    };
    assert_eq!(resolved.config(), &expected);
}

#[test]
fn test_empty_default_profile_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[profile.default]\n");

    let resolved = resolver_at(dir.path(), &[]).resolve().unwrap();

    assert_eq!(resolved.config_file(), Some(path.as_path()));
    assert_eq!(resolved.config().src, PathBuf::from("src"));
    assert_eq!(resolved.config().optimizer_runs, 200);
    assert_eq!(resolved.config().libs, vec![PathBuf::from("lib")]);
}

#[test]
fn test_active_profile_inherits_from_default() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        r#"
[profile.default]
src = "contracts"
optimizer_runs = 1000

[profile.ci]
optimizer_runs = 10000
fuzz_runs = 5000
"#,
    );

    let resolved = resolver_at(dir.path(), &[])
        .with_profile("ci")
        .resolve()
        .unwrap();

    assert_eq!(resolved.profile(), "ci");
    assert_eq!(resolved.config().src, PathBuf::from("contracts"));
    assert_eq!(resolved.config().optimizer_runs, 10000);
    assert_eq!(resolved.config().fuzz_runs, 5000);
    assert_eq!(resolved.src_dir(), dir.path().join("contracts"));
}

#[test]
fn test_sibling_profiles_do_not_leak() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        r#"
[profile.default]
[profile.fast]
fuzz_runs = 1
[profile.other]
verbosity = 3
"#,
    );

    let resolved = resolver_at(dir.path(), &[])
        .with_profile("other")
        .resolve()
        .unwrap();

    assert_eq!(resolved.config().fuzz_runs, 256);
    assert_eq!(resolved.config().verbosity, 3);
}

#[test]
fn test_unknown_profile_uses_default_profile() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.default]\nsrc = \"contracts\"\n");

    let resolved = resolver_at(dir.path(), &[])
        .with_profile("missing")
        .resolve()
        .unwrap();

    assert_eq!(resolved.profile(), "missing");
    assert_eq!(resolved.config().src, PathBuf::from("contracts"));
}

#[test]
fn test_legacy_top_level_profile_layout() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "[default]\nout = \"artifacts\"\n\n[local]\nffi = true\n",
    );

    let resolved = resolver_at(dir.path(), &[])
        .with_profile("local")
        .resolve()
        .unwrap();

    assert_eq!(resolved.config().out, PathBuf::from("artifacts"));
    assert!(resolved.config().ffi);
}

#[test]
fn test_finds_config_from_deep_subdirectory() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.default]\nsrc = \"contracts\"\n");
    let deep = dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();

    let resolved = resolver_at(&deep, &[]).resolve().unwrap();

    assert_eq!(resolved.config().src, PathBuf::from("contracts"));
    assert_eq!(resolved.root(), dir.path());
}

#[test]
fn test_relative_root_is_anchored_to_config_dir() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.default]\nroot = \"project\"\n");

    let resolved = resolver_at(dir.path(), &[]).resolve().unwrap();

    assert_eq!(resolved.root(), dir.path().join("project"));
    assert_eq!(resolved.out_dir(), dir.path().join("project").join("out"));
}

#[test]
fn test_global_config_does_not_move_root() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global_dir = home.path().join(".foundry");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("foundry.toml"),
        "[profile.default]\nverbosity = 2\n",
    )
    .unwrap();

    let resolved = resolver_at(project.path(), &[])
        .with_home(Some(home.path().to_path_buf()))
        .resolve()
        .unwrap();

    assert_eq!(
        resolved.config_file(),
        Some(global_dir.join("foundry.toml").as_path())
    );
    assert_eq!(resolved.config().verbosity, 2);
    assert_eq!(resolved.root(), project.path());
}

#[test]
fn test_config_path_override_by_name() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.default]\nverbosity = 1\n");
    fs::write(
        dir.path().join("alt.toml"),
        "[profile.default]\nverbosity = 4\n",
    )
    .unwrap();

    let resolved = resolver_at(dir.path(), &[])
        .with_config_path("alt.toml")
        .resolve()
        .unwrap();

    assert_eq!(resolved.config().verbosity, 4);
}

#[test]
fn test_missing_absolute_override_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = resolver_at(dir.path(), &[])
        .with_config_path(&missing)
        .resolve()
        .unwrap_err();

    assert!(matches!(err, ConfigError::FileNotReadable { path, .. } if path == missing));
}

#[test]
fn test_malformed_toml_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.default]\nsrc = \n");

    let err = resolver_at(dir.path(), &[]).resolve().unwrap_err();

    assert!(matches!(err, ConfigError::Parse { line: Some(2), .. }));
}

#[test]
fn test_nested_tables_merge_recursively() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        r#"
[profile.default.optimizer_details]
peephole = true
yul = true

[profile.ci.optimizer_details]
yul = false
"#,
    );

    let resolved = resolver_at(dir.path(), &[])
        .with_profile("ci")
        .resolve()
        .unwrap();

    let details = resolved.config().optimizer_details.clone().unwrap();
    assert_eq!(details.peephole, Some(true));
    assert_eq!(details.yul, Some(false));
    assert_eq!(
        resolved.get("optimizer_details.peephole").and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn test_unknown_keys_are_kept() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "[profile.default]\nplugin_mode = \"fast\"\n",
    );

    let resolved = resolver_at(dir.path(), &[]).resolve().unwrap();

    assert_eq!(
        resolved.extra("plugin_mode").and_then(|v| v.as_str()),
        Some("fast")
    );
}

#[test]
fn test_type_mismatch_in_file_is_invalid_value() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "[profile.default]\n[profile.ci]\noptimizer_runs = \"many\"\n",
    );

    let err = resolver_at(dir.path(), &[])
        .with_profile("ci")
        .resolve()
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { profile, .. } if profile == "ci"));
}

#[test]
fn test_render_active_profile_as_toml() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.ci]\nfuzz_runs = 7\n");

    let resolved = resolver_at(dir.path(), &[])
        .with_profile("ci")
        .resolve()
        .unwrap();
    let rendered = resolved.to_toml_string().unwrap();

    assert!(rendered.contains("[profile.ci]"));
    assert!(rendered.contains("fuzz_runs = 7"));
    assert!(!rendered.contains("root ="));

    let reparsed: toml::Table = toml::from_str(&rendered).unwrap();
    assert_eq!(
        reparsed["profile"]["ci"]["src"].as_str(),
        Some("src")
    );
}
