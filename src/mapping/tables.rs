use std::collections::HashMap;

pub const FALLBACK_REPORTER_ID: &str = "jira_fallback_reporter_id";
pub const FALLBACK_ASSIGNEE: &str = "Fallback Assignee Name";
pub const FALLBACK_TYPE: &str = "Task";
pub const FALLBACK_PRIORITY: &str = "Medium";

/// A source-to-destination lookup with the value used when a key is unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    entries: HashMap<String, String>,
    fallback: String,
}

impl Lookup {
    pub fn new<I, K, V>(entries: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Lookup of an optional key, degrading to the fallback.
    pub fn resolve(&self, key: Option<&str>) -> &str {
        key.and_then(|k| self.get(k)).unwrap_or(&self.fallback)
    }
}

/// Every table the issue mapper needs.
///
/// The users table is shared by assignee and reporter resolution. Its
/// fallback is the reporter account id; the assignee falls back to the
/// *name* in `fallback_assignee`, which is looked up in the same table.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTables {
    pub priorities: Lookup,
    pub issue_types: Lookup,
    pub users: Lookup,
    pub fallback_assignee: String,
}

impl Default for MappingTables {
    fn default() -> Self {
        Self {
            priorities: Lookup::new(
                [
                    ("Major", "High"),
                    ("Show-Stopper", "Highest"),
                    ("Critical", "Highest"),
                    ("Normal", "Medium"),
                    ("Minor", "Low"),
                ],
                FALLBACK_PRIORITY,
            ),
            issue_types: Lookup::new(
                [
                    ("Bug", "Bug"),
                    ("Chore", "Chore"),
                    ("Task", "Task"),
                    ("Epic", "Epic"),
                ],
                FALLBACK_TYPE,
            ),
            users: Lookup::new(
                [
                    ("YouTrack User Name 1", "jira_account_id_1"),
                    ("YouTrack User Name 2", "jira_account_id_2"),
                    ("YouTrack User Name 4", "jira_account_id_4"),
                    ("YouTrack User Name 5", "jira_account_id_5"),
                ],
                FALLBACK_REPORTER_ID,
            ),
            fallback_assignee: FALLBACK_ASSIGNEE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_table() {
        let tables = MappingTables::default();
        assert_eq!(tables.priorities.resolve(Some("Major")), "High");
        assert_eq!(tables.priorities.resolve(Some("Show-Stopper")), "Highest");
        assert_eq!(tables.priorities.resolve(Some("Critical")), "Highest");
        assert_eq!(tables.priorities.resolve(Some("Normal")), "Medium");
        assert_eq!(tables.priorities.resolve(Some("Minor")), "Low");
    }

    #[test]
    fn test_resolve_falls_back() {
        let tables = MappingTables::default();
        assert_eq!(tables.priorities.resolve(Some("Cosmetic")), FALLBACK_PRIORITY);
        assert_eq!(tables.priorities.resolve(None), FALLBACK_PRIORITY);
        assert_eq!(tables.issue_types.resolve(Some("Feature")), FALLBACK_TYPE);
        assert_eq!(tables.users.resolve(Some("Nobody")), FALLBACK_REPORTER_ID);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let tables = MappingTables::default();
        assert_eq!(tables.issue_types.get("bug"), None);
        assert_eq!(tables.issue_types.get("Bug"), Some("Bug"));
    }

    #[test]
    fn test_default_fallback_assignee_is_not_mapped() {
        let tables = MappingTables::default();
        assert_eq!(tables.users.get(&tables.fallback_assignee), None);
    }
}
