pub mod jira;
pub mod youtrack;
