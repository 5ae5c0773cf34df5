use std::path::{Path, PathBuf};

/// Holds the deployment URL; same name the web frontend reads.
pub const CONVEX_URL_VAR: &str = "VITE_CONVEX_URL";

pub const DEFAULT_LOCAL_ENV_FILE: &str = ".env.local";

/// Loads `local_env_file`, then `.env`.
///
/// Variables that are already set are never overwritten, so the process
/// environment wins over `local_env_file`, which wins over `.env`. Missing
/// files are skipped. Returns the files that were loaded.
pub fn load_env(local_env_file: &Path) -> Vec<PathBuf> {
    load_env_files(&[local_env_file.to_path_buf(), PathBuf::from(".env")])
}

pub fn load_env_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    for path in paths {
        match dotenvy::from_path(path) {
            Ok(()) => {
                tracing::debug!("Loaded environment from {}", path.display());
                loaded.push(path.clone());
            }
            Err(e) if e.not_found() => {
                tracing::debug!("No environment file at {}", path.display());
            }
            Err(e) => {
                tracing::warn!("Ignoring environment file {}: {}", path.display(), e);
            }
        }
    }
    loaded
}

pub fn convex_url_from_env() -> Option<String> {
    std::env::var(CONVEX_URL_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
