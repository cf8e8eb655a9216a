pub mod source;


use crate::api::IssueTracker;
use crate::mapping::IssueMapper;
use crate::models::jira::{CreateIssue, Document};
use crate::models::youtrack::{Comment, SourceIssue};
use colored::*;

const DONE_TRANSITION: &str = "done";

/// Counts of what an import run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub skipped: usize,
    pub processed: usize,
    pub created: usize,
    pub failed: usize,
    pub comments_added: usize,
    pub comments_failed: usize,
    pub transitioned: usize,
    pub transitions_missing: usize,
    pub transitions_failed: usize,
}

/// Creates Jira issues for YouTrack issues, one at a time.
pub struct Importer {
    tracker: Box<dyn IssueTracker>,
    mapper: IssueMapper,
    report: ImportReport,
}

impl Importer {
    pub fn new(tracker: Box<dyn IssueTracker>, mapper: IssueMapper) -> Self {
        Self {
            tracker,
            mapper,
            report: ImportReport::default(),
        }
    }

    /// Imports `issues[start_index..]`, skipping everything before it.
    pub async fn run(&mut self, issues: &[SourceIssue], start_index: usize) -> ImportReport {
        self.report = ImportReport::default();
        let total = issues.len();

        for (index, issue) in issues.iter().enumerate() {
            if index < start_index {
                println!("{}", format!("Skipping issue {}", index).dimmed());
                self.report.skipped += 1;
                continue;
            }

            println!();
            println!(
                "{} {}",
                format!("[{}/{}]", index + 1, total).cyan().bold(),
                issue.summary.as_deref().unwrap_or_default()
            );
            self.import_one(issue).await;
        }

        std::mem::take(&mut self.report)
    }

    async fn import_one(&mut self, issue: &SourceIssue) {
        self.report.processed += 1;
        let payload = self.mapper.map(issue);

        let Some(issue_key) = self.create(&payload).await else {
            return;
        };

        if let Some(comments) = issue.comments() {
            self.add_comments(&issue_key, comments).await;
        }

        self.transition_to_done(&issue_key).await;
    }

    /// Creates the issue, returning its key, or `None` if Jira refused it.
    pub async fn create(&mut self, payload: &CreateIssue) -> Option<String> {
        match self.tracker.create_issue(payload).await {
            Ok(key) => {
                println!("  {} {}", "Issue created successfully:".green(), key.bright_white());
                self.report.created += 1;
                Some(key)
            }
            Err(e) => {
                println!("  {} {}", "Failed to create issue.".red(), e);
                self.report.failed += 1;
                None
            }
        }
    }

    /// Adds each comment in order. A failed comment does not stop the rest.
    pub async fn add_comments(&mut self, issue_key: &str, comments: &[Comment]) {
        for comment in comments {
            let body = Document::paragraph(comment.text.clone().unwrap_or_default());
            match self.tracker.add_comment(issue_key, &body).await {
                Ok(()) => {
                    println!("  {}", format!("Comment added to issue {}", issue_key).green());
                    self.report.comments_added += 1;
                }
                Err(e) => {
                    println!(
                        "  {} {}",
                        format!("Failed to add comment to {}.", issue_key).red(),
                        e
                    );
                    self.report.comments_failed += 1;
                }
            }
        }
    }

    /// Applies the transition named "done" (any case), if the issue offers one.
    pub async fn transition_to_done(&mut self, issue_key: &str) -> bool {
        let transitions = match self.tracker.transitions(issue_key).await {
            Ok(transitions) => {
                tracing::debug!(issue = issue_key, ?transitions, "available transitions");
                transitions
            }
            Err(e) => {
                println!(
                    "  {} {}",
                    format!("Failed to get transitions for {}.", issue_key).red(),
                    e
                );
                Vec::new()
            }
        };

        let Some(done) = transitions
            .iter()
            .find(|t| t.name.to_lowercase() == DONE_TRANSITION)
        else {
            println!(
                "  {}",
                format!("No 'Done' transition found for issue {}", issue_key).yellow()
            );
            self.report.transitions_missing += 1;
            return false;
        };

        match self.tracker.transition(issue_key, &done.id).await {
            Ok(()) => {
                println!(
                    "  {}",
                    format!("Issue {} successfully transitioned to Done", issue_key).green()
                );
                self.report.transitioned += 1;
                true
            }
            Err(e) => {
                println!(
                    "  {} {}",
                    format!("Failed to transition issue {} to Done.", issue_key).red(),
                    e
                );
                self.report.transitions_failed += 1;
                false
            }
        }
    }
}
