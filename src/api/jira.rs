use super::IssueTracker;
use crate::errors::{ImportError, Result};
use crate::models::jira::{
    CreateComment, CreateIssue, CreatedIssue, DoTransition, Document, Transition, TransitionId,
    TransitionList,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

pub struct JiraClient {
    client: Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(base_url: String, email: String, api_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            email,
            api_token,
        }
    }

    fn issue_url(&self, issue_key: &str, tail: &str) -> String {
        format!(
            "{}/rest/api/3/issue/{}/{}",
            self.base_url,
            urlencoding::encode(issue_key),
            tail
        )
    }

    /// Fails with the status and body unless the response has `expected` status.
    async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
        if response.status() != expected {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ImportError::from_status(status.as_u16(), text));
        }
        Ok(response)
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn create_issue(&self, payload: &CreateIssue) -> Result<String> {
        let url = format!("{}/rest/api/3/issue", self.base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .json(payload)
            .send()
            .await?;

        let created = Self::expect_status(response, StatusCode::CREATED)
            .await?
            .json::<CreatedIssue>()
            .await
            .map_err(|e| ImportError::Other(format!("Failed to parse Jira response: {}", e)))?;

        Ok(created.key)
    }

    async fn add_comment(&self, issue_key: &str, body: &Document) -> Result<()> {
        let url = self.issue_url(issue_key, "comment");
        let comment = CreateComment { body: body.clone() };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .json(&comment)
            .send()
            .await?;

        Self::expect_status(response, StatusCode::CREATED).await?;
        Ok(())
    }

    async fn transitions(&self, issue_key: &str) -> Result<Vec<Transition>> {
        let url = self.issue_url(issue_key, "transitions");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .send()
            .await?;

        let list = Self::expect_status(response, StatusCode::OK)
            .await?
            .json::<TransitionList>()
            .await
            .map_err(|e| ImportError::Other(format!("Failed to parse transitions: {}", e)))?;

        Ok(list.transitions)
    }

    async fn transition(&self, issue_key: &str, transition_id: &str) -> Result<()> {
        let url = self.issue_url(issue_key, "transitions");
        let body = DoTransition {
            transition: TransitionId { id: transition_id },
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .json(&body)
            .send()
            .await?;

        Self::expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}
