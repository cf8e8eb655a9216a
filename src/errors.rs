use colored::*;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ImportError {
    // Configuration errors
    ConfigNotFound(String),
    ConfigInvalid(String),

    // Input errors
    InputNotFound(PathBuf),
    InputInvalid(String),

    // Jira errors
    JiraAuthFailed(u16, String),
    JiraApiError(u16, String),

    // Network errors
    NetworkError(String),

    // Generic error
    Other(String),
}

impl ImportError {
    /// Builds the error for a non-success Jira response.
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 || status == 403 {
            ImportError::JiraAuthFailed(status, body)
        } else {
            ImportError::JiraApiError(status, body)
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Configuration errors
            ImportError::ConfigNotFound(msg) => {
                write!(f, "{}\n", "Jira configuration not found".red().bold())?;
                write!(f, "   {}\n\n", msg.dimmed())?;
                write!(f, "   To fix:\n")?;
                write!(f, "   1. Create ~/.yt-jira-import/config.toml with a [jira] section\n")?;
                write!(f, "   2. Or export {}", "JIRA_IMPORT_JIRA__URL, ..._EMAIL, ..._API_TOKEN, ..._PROJECT_KEY".green())
            }
            ImportError::ConfigInvalid(msg) => {
                write!(f, "{}\n", "Invalid configuration".red().bold())?;
                write!(f, "   {}\n\n", msg.dimmed())?;
                write!(f, "   To fix:\n")?;
                write!(f, "   1. Check your config file: ~/.yt-jira-import/config.toml\n")?;
                write!(f, "   2. Check JIRA_IMPORT_* environment variables")
            }

            // Input errors
            ImportError::InputNotFound(path) => {
                write!(f, "{}\n", format!("Input file '{}' not found", path.display()).red().bold())?;
                write!(f, "   {}\n\n", "Export your YouTrack issues as a JSON array first".dimmed())?;
                write!(f, "   Or point to the export: {}", "yt-jira-import --input <FILE>".green())
            }
            ImportError::InputInvalid(msg) => {
                write!(f, "{}\n", "Input file is not a valid YouTrack export".red().bold())?;
                write!(f, "   {}", msg.dimmed())
            }

            // Jira errors
            ImportError::JiraAuthFailed(status, body) => {
                write!(f, "{}", format!("Jira authentication failed ({})", status).red())?;
                if !body.is_empty() {
                    write!(f, ": {}", body)?;
                }
                Ok(())
            }
            ImportError::JiraApiError(status, body) => {
                write!(f, "Status code: {}, Response: {}", status, body)
            }

            // Network errors
            ImportError::NetworkError(msg) => {
                write!(f, "{}: {}", "Network error".red(), msg)
            }

            // Generic
            ImportError::Other(msg) => {
                write!(f, "{}\n", "Error".red().bold())?;
                write!(f, "   {}", msg.dimmed())
            }
        }
    }
}

impl std::error::Error for ImportError {}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Other(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::InputInvalid(err.to_string())
    }
}

impl From<::config::ConfigError> for ImportError {
    fn from(err: ::config::ConfigError) -> Self {
        match err {
            ::config::ConfigError::NotFound(key) => {
                ImportError::ConfigNotFound(format!("Missing setting '{}'", key))
            }
            other => ImportError::ConfigInvalid(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ImportError::NetworkError(err.to_string())
        } else if let Some(status) = err.status() {
            ImportError::from_status(status.as_u16(), err.to_string())
        } else {
            ImportError::Other(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_are_auth_failures() {
        assert!(matches!(
            ImportError::from_status(401, String::new()),
            ImportError::JiraAuthFailed(401, _)
        ));
        assert!(matches!(
            ImportError::from_status(403, String::new()),
            ImportError::JiraAuthFailed(403, _)
        ));
        assert!(matches!(
            ImportError::from_status(400, "bad".into()),
            ImportError::JiraApiError(400, _)
        ));
    }

    #[test]
    fn test_api_error_shows_status_and_body() {
        let msg = ImportError::from_status(400, r#"{"errors":{"priority":"invalid"}}"#.into()).to_string();
        assert_eq!(msg, r#"Status code: 400, Response: {"errors":{"priority":"invalid"}}"#);
    }

    #[test]
    fn test_missing_config_key_is_not_found() {
        let err: ImportError = ::config::ConfigError::NotFound("jira".into()).into();
        assert!(matches!(err, ImportError::ConfigNotFound(_)));
    }

    #[test]
    fn test_bad_json_is_invalid_input() {
        let err: ImportError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, ImportError::InputInvalid(_)));
    }
}
