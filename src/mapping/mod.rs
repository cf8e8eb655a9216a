pub mod fields;
pub mod tables;

use crate::models::jira::{AccountRef, CreateIssue, Document, IssueFields, NameRef, ProjectRef};
use crate::models::youtrack::SourceIssue;
use fields::CustomFields;
use tables::MappingTables;

/// Turns YouTrack issues into Jira create-issue payloads.
#[derive(Debug, Clone)]
pub struct IssueMapper {
    tables: MappingTables,
    project_key: String,
}

impl IssueMapper {
    pub fn new(tables: MappingTables, project_key: impl Into<String>) -> Self {
        Self {
            tables,
            project_key: project_key.into(),
        }
    }

    pub fn map(&self, issue: &SourceIssue) -> CreateIssue {
        let custom = CustomFields::resolve(&issue.custom_fields);

        let priority = custom.priority;
        tracing::debug!(?priority, "priority from YouTrack");
        let issue_type = custom.issue_type;
        tracing::debug!(?issue_type, "issue type from YouTrack");

        CreateIssue {
            fields: IssueFields {
                project: ProjectRef {
                    key: self.project_key.clone(),
                },
                summary: issue.summary.clone().unwrap_or_default(),
                description: Document::paragraph(issue.description.clone().unwrap_or_default()),
                issue_type: NameRef {
                    name: self.tables.issue_types.resolve(issue_type).to_string(),
                },
                priority: NameRef {
                    name: self.tables.priorities.resolve(priority).to_string(),
                },
                assignee: AccountRef {
                    id: self.assignee_id(custom.assignee),
                },
                reporter: AccountRef {
                    id: Some(self.tables.users.resolve(issue.reporter_name()).to_string()),
                },
                labels: issue.tags.iter().map(|t| t.name.clone()).collect(),
            },
        }
    }

    /// Resolves the assignee account id.
    ///
    /// An unknown assignee falls back to the users-table entry for the
    /// fallback assignee name, which can itself be missing.
    fn assignee_id(&self, name: Option<&str>) -> Option<String> {
        let users = &self.tables.users;
        match name.and_then(|n| users.get(n)).filter(|id| !id.is_empty()) {
            Some(id) => Some(id.to_string()),
            None => {
                tracing::warn!(
                    "Assignee '{}' not found. Falling back to '{}'.",
                    name.unwrap_or("None"),
                    self.tables.fallback_assignee
                );
                users.get(&self.tables.fallback_assignee).map(str::to_string)
            }
        }
    }
}
