// Installs the global subscriber, so it lives in its own test binary.

use std::fs;
use tempfile::TempDir;
use tracing::{info, instrument};

use yggdrasil::infrastructure::logging::{LoggerImpl, LOG_FILE_NAME};
use yggdrasil::{LogFormat, LoggingConfig, RotationPolicy};

#[test]
fn test_file_logging() {
    let temp_dir = TempDir::new().unwrap();

    let config = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config, false).unwrap();

    info!("registry loaded");
    info!(key = "USER_DB", "lookup with fields");
    assert_eq!(resolve(2), 4);

    // Dropping the guard flushes the non-blocking writer.
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
    assert!(contents.contains("registry loaded"));
    assert!(contents.contains("lookup with fields"));
    assert!(contents.contains("\"key\":\"USER_DB\""));
    assert!(contents.contains("resolving"));
    assert!(contents.lines().all(|line| serde_json::from_str::<serde_json::Value>(line).is_ok()));
}

#[instrument]
fn resolve(n: u32) -> u32 {
    info!("resolving");
    n * 2
}
