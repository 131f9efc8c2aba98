//! Shared constants for the constguard engine.

/// constguard version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package that holds the six `Enforce*Value` annotation types.
pub const DEFAULT_ANNOTATION_PACKAGE: &str = "com.github.promeg.configchecker";

/// Annotation parameter carrying the expected value.
pub const ANNOTATION_KEY_VALUE: &str = "value";

/// Annotation parameter carrying the product flavor.
pub const ANNOTATION_KEY_FLAVOR: &str = "flavor";

/// Annotation parameter carrying the build type.
pub const ANNOTATION_KEY_BUILD_TYPE: &str = "buildType";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "constguard.toml";

/// Env var read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "CONSTGUARD_LOG";

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "text";

/// Expected size of the visited-class set for a typical application.
pub const VISITED_CLASSES_CAPACITY: usize = 10_000;

/// Process exit code: run succeeded.
pub const EXIT_OK: i32 = 0;

/// Process exit code: input could not be opened or parsed, or config is broken.
pub const EXIT_MALFORMED_INPUT: i32 = 1;

/// Process exit code: invalid invocation.
pub const EXIT_USAGE: i32 = 2;

/// Process exit code: an enforcement rule failed.
pub const EXIT_ENFORCEMENT_FAILED: i32 = 3;
