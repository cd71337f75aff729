//! Environment-variable layers of `ConfigLoader`.
//!
//! Kept in its own test binary: it mutates the process environment, which
//! would leak into the file-layer tests if they shared a process.

use express_config::{ConfigLoader, ENVIRONMENT_VAR};
use std::env;
use std::fs;
use tempfile::TempDir;

const MAX_SIZE_VAR: &str = "EXPRESS__PAGINATION__MAX_SIZE";

#[tokio::test]
async fn test_environment_variables_override_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "[pagination]\ndefault_size = 10\nmax_size = 50\n").unwrap();
    fs::write(dir.path().join("staging.toml"), "[pagination]\ndefault_size = 7\n").unwrap();
    fs::write(dir.path().join("local.toml"), "[pagination]\nmax_size = 200\n").unwrap();

    env::set_var(MAX_SIZE_VAR, "42");
    env::set_var(ENVIRONMENT_VAR, "staging");

    let explicit = ConfigLoader::with_environment(dir.path(), "test");
    let from_env = ConfigLoader::new(dir.path());

    env::remove_var(MAX_SIZE_VAR);
    env::remove_var(ENVIRONMENT_VAR);

    let explicit = explicit.unwrap();
    assert_eq!(explicit.get().await.pagination.max_size, 42);
    assert_eq!(explicit.get().await.pagination.default_size, 10);

    let from_env = from_env.unwrap();
    assert_eq!(from_env.environment(), "staging");
    let config = from_env.get().await;
    assert_eq!(config.pagination.default_size, 7);
    assert_eq!(config.pagination.max_size, 42);

    // Without the variable the local file wins again.
    from_env.reload().await.unwrap();
    assert_eq!(from_env.get().await.pagination.max_size, 200);
}
