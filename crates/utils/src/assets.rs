use std::path::PathBuf;

use directories::ProjectDirs;

const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "QUEUE_CONFIG_PATH";

pub fn asset_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        return PathBuf::from(PROJECT_ROOT).join("../../dev_assets");
    }

    match ProjectDirs::from("app", "qdesk", "queue-desk") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            tracing::warn!("No home directory available, using working directory for assets");
            PathBuf::from(".")
        }
    }
}

pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => asset_dir().join("config.json"),
    }
}
