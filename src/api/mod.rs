pub mod jira;

use crate::errors::Result;
use crate::models::jira::{CreateIssue, Document, Transition};
use async_trait::async_trait;

/// The destination tracker calls an import needs.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Creates an issue and returns its key.
    async fn create_issue(&self, payload: &CreateIssue) -> Result<String>;
    async fn add_comment(&self, issue_key: &str, body: &Document) -> Result<()>;
    /// Transitions currently available for the issue.
    async fn transitions(&self, issue_key: &str) -> Result<Vec<Transition>>;
    async fn transition(&self, issue_key: &str, transition_id: &str) -> Result<()>;
}
