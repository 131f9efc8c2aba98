//! Tests for the constguard configuration system.

use std::sync::Mutex;

use constguard_core::config::{CliOverrides, ConstguardConfig, ReportFormat};
use constguard_core::errors::{ConfigError, RunError};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 4] = [
    "CONSTGUARD_FLAVOR",
    "CONSTGUARD_BUILD_TYPE",
    "CONSTGUARD_ANNOTATION_PACKAGE",
    "CONSTGUARD_REPORT_FORMAT",
];

/// Clear CONSTGUARD_ env vars and point HOME at an empty directory so a
/// developer's user config cannot leak into the test.
fn isolate_env(home: &std::path::Path) {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    isolate_env(home.path());

    let user_dir = home.path().join(".constguard");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[check]
flavor = "user-flavor"
annotation_package = "com.user.flags"

[report]
show_passes = false
"#,
    )
    .unwrap();

    let project = tempfile::tempdir().unwrap();
    std::fs::write(
        project.path().join("constguard.toml"),
        r#"
[check]
flavor = "project-flavor"
build_type = "debug"
"#,
    )
    .unwrap();

    std::env::set_var("CONSTGUARD_BUILD_TYPE", "release");

    let cli = CliOverrides {
        flavor: Some("prod".into()),
        ..Default::default()
    };
    let config = ConstguardConfig::load(project.path(), None, Some(&cli)).unwrap();

    // CLI beats project and user
    assert_eq!(config.check.flavor.as_deref(), Some("prod"));
    // Env beats project
    assert_eq!(config.check.build_type.as_deref(), Some("release"));
    // User config survives where nothing overrides it
    assert_eq!(config.check.effective_annotation_package(), "com.user.flags");
    assert!(!config.report.effective_show_passes());

    clear_env();
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    isolate_env(home.path());

    let project = tempfile::tempdir().unwrap();
    let config = ConstguardConfig::load(project.path(), None, None).unwrap();

    assert!(config.check.flavor.is_none());
    assert!(config.check.build_type.is_none());
    assert_eq!(
        config.check.effective_annotation_package(),
        "com.github.promeg.configchecker"
    );
    assert_eq!(config.report.effective_format(), ReportFormat::Text);
    assert!(config.report.effective_show_passes());
}

#[test]
fn test_explicit_config_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    isolate_env(home.path());

    let project = tempfile::tempdir().unwrap();
    let missing = project.path().join("nope.toml");
    let result = ConstguardConfig::load(project.path(), Some(&missing), None);
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn test_explicit_config_replaces_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    isolate_env(home.path());

    let project = tempfile::tempdir().unwrap();
    std::fs::write(
        project.path().join("constguard.toml"),
        "[check]\nflavor = \"ignored\"\n",
    )
    .unwrap();
    let explicit = project.path().join("ci.toml");
    std::fs::write(&explicit, "[check]\nflavor = \"ci\"\nbuild_type = \"release\"\n").unwrap();

    let config = ConstguardConfig::load(project.path(), Some(&explicit), None).unwrap();
    assert_eq!(config.check.flavor.as_deref(), Some("ci"));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempfile::tempdir().unwrap();
    isolate_env(home.path());

    let project = tempfile::tempdir().unwrap();
    std::fs::write(project.path().join("constguard.toml"), "[check\nflavor = ").unwrap();
    let result = ConstguardConfig::load(project.path(), None, None);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = ConstguardConfig::from_toml(
        r#"
[check]
flavor = "prod"
future_option = 42

[telemetry]
enabled = true
"#,
    )
    .unwrap();
    assert_eq!(config.check.flavor.as_deref(), Some("prod"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let empty_flavor = ConstguardConfig::from_toml("[check]\nflavor = \"  \"\n").unwrap();
    assert!(matches!(
        ConstguardConfig::validate(&empty_flavor),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "check.flavor"
    ));

    let bad_package =
        ConstguardConfig::from_toml("[check]\nannotation_package = \"com..flags\"\n").unwrap();
    assert!(matches!(
        ConstguardConfig::validate(&bad_package),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "check.annotation_package"
    ));

    let bad_format = ConstguardConfig::from_toml("[report]\nformat = \"xml\"\n").unwrap();
    assert!(matches!(
        ConstguardConfig::validate(&bad_format),
        Err(ConfigError::ValidationFailed { ref field, .. }) if field == "report.format"
    ));
}

#[test]
fn test_active_variant_requires_both_axes() {
    let config = ConstguardConfig::from_toml("[check]\nflavor = \"prod\"\n").unwrap();
    assert!(matches!(config.active_variant(), Err(RunError::Usage(_))));

    let config =
        ConstguardConfig::from_toml("[check]\nflavor = \"prod\"\nbuild_type = \"release\"\n")
            .unwrap();
    assert_eq!(config.active_variant().unwrap(), ("prod", "release"));
}

#[test]
fn test_toml_round_trip() {
    let config = ConstguardConfig::from_toml(
        "[check]\nflavor = \"prod\"\nbuild_type = \"release\"\n\n[report]\nformat = \"json\"\n",
    )
    .unwrap();
    let serialized = config.to_toml().unwrap();
    let reparsed = ConstguardConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.check.flavor.as_deref(), Some("prod"));
    assert_eq!(reparsed.report.effective_format(), ReportFormat::Json);
}
