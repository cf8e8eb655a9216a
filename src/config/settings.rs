use crate::errors::{ImportError, Result};
use ::config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "JIRA_IMPORT";

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub jira: JiraConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub project_key: String,
}

impl Settings {
    /// Loads settings from `path` (or the default config file, if present)
    /// with `JIRA_IMPORT_*` environment overrides on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ImportError::ConfigNotFound(format!(
                        "{} does not exist",
                        path.display()
                    )));
                }
                Some(File::from(path).format(FileFormat::Toml).required(true))
            }
            None => Self::config_path(std::env::var_os("HOME").map(PathBuf::from))
                .map(|p| File::from(p).format(FileFormat::Toml).required(false)),
        };

        Self::from_sources(file, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn from_sources(
        file: Option<File<FileSourceFile, FileFormat>>,
        env: Environment,
    ) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let mut settings: Settings = builder
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&mut self) -> Result<()> {
        let jira = &mut self.jira;
        let missing: Vec<&str> = [
            ("jira.url", &jira.url),
            ("jira.email", &jira.email),
            ("jira.api_token", &jira.api_token),
            ("jira.project_key", &jira.project_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect();

        if !missing.is_empty() {
            return Err(ImportError::ConfigNotFound(format!(
                "Missing settings: {}",
                missing.join(", ")
            )));
        }

        if !jira.url.starts_with("http://") && !jira.url.starts_with("https://") {
            return Err(ImportError::ConfigInvalid(format!(
                "jira.url must start with http:// or https:// (got '{}')",
                jira.url
            )));
        }

        let trimmed = jira.url.trim_end_matches('/').len();
        jira.url.truncate(trimmed);

        Ok(())
    }

    /// `~/.yt-jira-import/config.toml`, or `None` without a home directory.
    fn config_path(home: Option<PathBuf>) -> Option<PathBuf> {
        home.map(|home| home.join(".yt-jira-import").join("config.toml"))
    }
}
