use std::path::PathBuf;

/// File locations resolved once at startup and handed to the components that
/// need them, so storage logic never reads the environment itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub ids_file: PathBuf,
    pub history_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            ids_file: env_path("FIDE_INPUT_FILE", "fide_ids.txt"),
            history_path: env_path("FIDE_HISTORY_FILE", "fide_history.json"),
        }
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => PathBuf::from(val.trim()),
        _ => PathBuf::from(default),
    }
}
