use crate::models::youtrack::{CustomField, FieldValue};

pub const ASSIGNEE: &str = "Assignee";
pub const PRIORITY: &str = "Priority";
pub const TYPE: &str = "Type";

/// Name of the first non-empty value of the custom field called `name`.
///
/// Fields with a matching name but an empty value are passed over. A match
/// whose value has no nested name yields `None`.
pub fn extract_field<'a>(fields: &'a [CustomField], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find_map(|f| present_value(f).filter(|(n, _)| *n == name))
        .and_then(|(_, value)| value.name())
}

fn present_value(field: &CustomField) -> Option<(&str, &FieldValue)> {
    let name = field.name.as_deref()?;
    let value = field.value.as_ref().filter(|v| !v.is_empty())?;
    Some((name, value))
}

/// The custom fields the mapper reads, resolved once per issue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CustomFields<'a> {
    pub assignee: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub issue_type: Option<&'a str>,
}

impl<'a> CustomFields<'a> {
    pub fn resolve(fields: &'a [CustomField]) -> Self {
        Self {
            assignee: extract_field(fields, ASSIGNEE),
            priority: extract_field(fields, PRIORITY),
            issue_type: extract_field(fields, TYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(json: &str) -> Vec<CustomField> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_named_value() {
        let f = fields(
            r#"[{"name": "Priority", "value": {"name": "Major"}},
                {"name": "Type", "value": {"name": "Bug"}}]"#,
        );
        assert_eq!(extract_field(&f, PRIORITY), Some("Major"));
        assert_eq!(extract_field(&f, TYPE), Some("Bug"));
        assert_eq!(extract_field(&f, ASSIGNEE), None);
    }

    #[test]
    fn test_first_match_wins() {
        let f = fields(
            r#"[{"name": "Type", "value": {"name": "Bug"}},
                {"name": "Type", "value": {"name": "Epic"}}]"#,
        );
        assert_eq!(extract_field(&f, TYPE), Some("Bug"));
        assert_eq!(CustomFields::resolve(&f).issue_type, Some("Bug"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let f = fields(
            r#"[{"name": "Assignee", "value": null},
                {"name": "Assignee", "value": {}},
                {"name": "Assignee", "value": {"name": "YouTrack User Name 2"}}]"#,
        );
        assert_eq!(extract_field(&f, ASSIGNEE), Some("YouTrack User Name 2"));
        assert_eq!(CustomFields::resolve(&f).assignee, Some("YouTrack User Name 2"));
    }

    #[test]
    fn test_value_without_name_is_absent() {
        let f = fields(
            r#"[{"name": "Priority", "value": {"presentation": "P1"}},
                {"name": "Priority", "value": {"name": "Minor"}}]"#,
        );
        assert_eq!(extract_field(&f, PRIORITY), None);
        assert_eq!(CustomFields::resolve(&f).priority, None);
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let f = fields(r#"[{"name": "priority", "value": {"name": "Major"}}]"#);
        assert_eq!(extract_field(&f, PRIORITY), None);
    }

    #[test]
    fn test_object_with_null_name_stops_the_scan() {
        let f = fields(
            r#"[{"name": "Priority", "value": {"name": null}},
                {"name": "Priority", "value": {"name": "Major"}}]"#,
        );
        assert_eq!(extract_field(&f, PRIORITY), None);
    }

    #[test]
    fn test_zero_and_false_values_are_skipped() {
        let f = fields(
            r#"[{"name": "Priority", "value": 0},
                {"name": "Priority", "value": false},
                {"name": "Priority", "value": {"name": "Major"}}]"#,
        );
        assert_eq!(extract_field(&f, PRIORITY), Some("Major"));
    }

    #[test]
    fn test_non_string_name_is_absent() {
        let f = fields(
            r#"[{"name": "Estimation", "value": {"name": 5}},
                {"name": "Type", "value": {"name": 5}},
                {"name": "Type", "value": {"name": "Bug"}}]"#,
        );
        assert_eq!(extract_field(&f, TYPE), None);
        assert_eq!(extract_field(&f, "Estimation"), None);
    }

    #[test]
    fn test_resolve_reads_all_three_fields() {
        let f = fields(
            r#"[{"name": "State", "value": {"name": "Open"}},
                {"name": "Assignee", "value": ""},
                {"name": "Assignee", "value": {"name": "A"}},
                {"name": "Priority", "value": [{"name": "Major"}]},
                {"name": "Type", "value": {"name": "Epic"}}]"#,
        );
        assert_eq!(
            CustomFields::resolve(&f),
            CustomFields {
                assignee: Some("A"),
                priority: None,
                issue_type: Some("Epic"),
            }
        );
    }
}
