use serde::{Deserialize, Serialize};

/// Request body for `POST /rest/api/3/issue`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateIssue {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: Document,
    #[serde(rename = "issuetype")]
    pub issue_type: NameRef,
    pub priority: NameRef,
    pub assignee: AccountRef,
    pub reporter: AccountRef,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameRef {
    pub name: String,
}

/// An account reference. A missing id is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRef {
    pub id: Option<String>,
}

/// Atlassian Document Format body holding a single paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u8,
    content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Node {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<Node>,
}

impl Document {
    pub fn paragraph(text: impl Into<String>) -> Self {
        let text = Node {
            kind: "text",
            text: Some(text.into()),
            content: Vec::new(),
        };
        let paragraph = Node {
            kind: "paragraph",
            text: None,
            content: vec![text],
        };
        Self {
            kind: "doc",
            version: 1,
            content: vec![paragraph],
        }
    }

    pub fn text(&self) -> &str {
        self.content
            .first()
            .and_then(|p| p.content.first())
            .and_then(|t| t.text.as_deref())
            .unwrap_or_default()
    }
}

/// Request body for `POST /rest/api/3/issue/{key}/comment`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateComment {
    pub body: Document,
}

#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitionList {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DoTransition<'a> {
    pub transition: TransitionId<'a>,
}

#[derive(Debug, Serialize)]
pub struct TransitionId<'a> {
    pub id: &'a str,
}
