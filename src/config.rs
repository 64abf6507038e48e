use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::types::{Config, DEFAULT_BASE_URL, DEFAULT_EXCLUDED_USERS_FILE, DEFAULT_OUTPUT_FILE};

/// Where `USER`, `TOKEN` and the optional path overrides are read from
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// The process environment, after `.env` has been merged into it
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory variables so config tests never touch the process environment
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Loads `.env` from the working directory, or the nearest parent that has
/// one, into the process environment.
pub fn load_env_file() -> Option<PathBuf> {
    let path = std::env::current_dir()
        .ok()
        .and_then(|cwd| {
            cwd.ancestors()
                .map(|dir| dir.join(".env"))
                .find(|candidate| candidate.is_file())
        })
        .unwrap_or_else(|| PathBuf::from(".env"));
    load_env_file_from(&path)
}

/// Never fails: a missing or unreadable file is logged and variables already
/// present in the environment are used as-is. Existing variables win over
/// the file.
pub fn load_env_file_from(path: &Path) -> Option<PathBuf> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            info!("Loading .env file from {}", path.display());
            Some(path.to_path_buf())
        }
        Err(e) if e.not_found() => {
            error!(".env file not found");
            None
        }
        Err(e) => {
            error!("Failed to load .env file {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_config() -> Config {
    load_config_with_env(&SystemEnvironment)
}

pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Config {
    let channel = env.get_var("USER").unwrap_or_else(|| {
        warn!("USER is not set, requests will target an empty channel");
        String::new()
    });

    let token = env.get_var("TOKEN").unwrap_or_else(|| {
        warn!("TOKEN is not set, requests will carry an empty bearer token");
        String::new()
    });

    let base_url = non_empty(env.get_var("STATS_BASE_URL"))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let excluded_users_path = non_empty(env.get_var("EXCLUDED_USERS_FILE"))
        .unwrap_or_else(|| DEFAULT_EXCLUDED_USERS_FILE.to_string());

    let output_path = non_empty(env.get_var("TOP_CHATTER_FILE"))
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    Config {
        channel,
        token,
        base_url,
        excluded_users_path: PathBuf::from(excluded_users_path),
        output_path: PathBuf::from(output_path),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading_with_env() {
        let env = MockEnvironment::new()
            .with_var("USER", "somestreamer")
            .with_var("TOKEN", "jwt-token")
            .with_var("STATS_BASE_URL", "http://localhost:1234/kappa/v2/")
            .with_var("EXCLUDED_USERS_FILE", "/etc/bots.txt")
            .with_var("TOP_CHATTER_FILE", "/tmp/overlay.txt");

        let config = load_config_with_env(&env);

        assert_eq!(config.channel, "somestreamer");
        assert_eq!(config.token, "jwt-token");
        assert_eq!(config.base_url, "http://localhost:1234/kappa/v2");
        assert_eq!(config.excluded_users_path, PathBuf::from("/etc/bots.txt"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/overlay.txt"));
    }

    #[test]
    fn test_config_loading_defaults() {
        let env = MockEnvironment::new()
            .with_var("USER", "somestreamer")
            .with_var("TOKEN", "jwt-token");

        let config = load_config_with_env(&env);

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.excluded_users_path, PathBuf::from("excluded_users.txt"));
        assert_eq!(config.output_path, PathBuf::from("top_chatter.txt"));
    }

    #[test]
    fn test_config_loading_missing_credentials_is_not_fatal() {
        let config = load_config_with_env(&MockEnvironment::new());

        assert_eq!(config.channel, "");
        assert_eq!(config.token, "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_blank_overrides_fall_back_to_defaults() {
        let env = MockEnvironment::new()
            .with_var("USER", "somestreamer")
            .with_var("TOKEN", "jwt-token")
            .with_var("STATS_BASE_URL", "   ")
            .with_var("EXCLUDED_USERS_FILE", "")
            .with_var("TOP_CHATTER_FILE", "\t");

        let config = load_config_with_env(&env);

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.excluded_users_path, PathBuf::from("excluded_users.txt"));
        assert_eq!(config.output_path, PathBuf::from("top_chatter.txt"));
    }

    #[test]
    fn test_missing_env_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_env_file_from(&dir.path().join(".env")), None);
    }

    #[test]
    fn test_env_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "TOP_CHATTER_REPORTER_ENV_FILE_TEST=from-dotenv\n").unwrap();

        assert_eq!(load_env_file_from(&path), Some(path.clone()));
        assert_eq!(
            SystemEnvironment.get_var("TOP_CHATTER_REPORTER_ENV_FILE_TEST").as_deref(),
            Some("from-dotenv")
        );
    }

    #[test]
    fn test_credentials_are_not_validated() {
        // whatever is in the environment goes straight into the request
        let env = MockEnvironment::new()
            .with_var("USER", " not a channel ")
            .with_var("TOKEN", "???");

        let config = load_config_with_env(&env);
        assert_eq!(config.channel, " not a channel ");
        assert_eq!(config.token, "???");
    }
}
