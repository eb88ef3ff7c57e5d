use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where the schedule lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Local,
    Github,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default = "default_remote_path")]
    pub path: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Name of the environment variable holding the token (never the token itself).
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Shared password gating every command; `None` leaves the editor open.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub github: GithubConfig,
}

fn default_backend() -> Backend {
    Backend::Local
}
fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}
fn default_remote_path() -> String {
    "data.csv".to_string()
}
fn default_branch() -> String {
    "main".to_string()
}
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_commit_message() -> String {
    "Update food truck schedule".to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repo: String::new(),
            path: default_remote_path(),
            branch: default_branch(),
            api_url: default_api_url(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
            commit_message: default_commit_message(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_file: default_data_file(),
            password: None,
            github: GithubConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `TRUCKPLAN_HOME` overrides it (tests, portable setups).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("TRUCKPLAN_HOME")
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("truckplan")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".truckplan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("truckplan.conf")
    }

    /// Return the default path of the schedule CSV
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("data.csv")
    }

    /// Return the path of the internal operation log
    pub fn log_file() -> PathBuf {
        Self::config_dir().join("truckplan.log.csv")
    }

    /// Schedule path with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration file and an empty local schedule.
    ///
    /// Returns the path of the local schedule file.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        if let Some(name) = custom_file {
            let p = expand_tilde(&name);
            let p = if p.is_absolute() { p } else { dir.join(p) };
            config.data_file = p.to_string_lossy().to_string();
        }

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.data_path())
    }

    /// Configured values that will make commands fail.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.backend == Backend::Github {
            if self.github.owner.trim().is_empty() {
                problems.push("github.owner is empty".to_string());
            }
            if self.github.repo.trim().is_empty() {
                problems.push("github.repo is empty".to_string());
            }
            if env::var(&self.github.token_env).is_err() {
                problems.push(format!(
                    "environment variable {} is not set (writes will be rejected)",
                    self.github.token_env
                ));
            }
        }

        if let Some(p) = &self.password
            && p.is_empty()
        {
            problems.push("password is set but empty".to_string());
        }

        problems
    }
}
