use serde::Deserialize;

/// One issue record from a YouTrack JSON export.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceIssue {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reporter: Option<UserRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

impl SourceIssue {
    /// Comments worth sending to Jira; `None` when the list is absent or empty.
    pub fn comments(&self) -> Option<&[Comment]> {
        self.comments.as_deref().filter(|c| !c.is_empty())
    }

    pub fn reporter_name(&self) -> Option<&str> {
        self.reporter.as_ref().and_then(|r| r.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<FieldValue>,
}

/// The value of a YouTrack custom field. Enum, user and state fields carry a
/// nested object with a `name`; period and text fields carry other shapes.
/// Every non-null JSON value fits one of the variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Object(serde_json::Map<String, serde_json::Value>),
    Many(Vec<serde_json::Value>),
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Empty values (`{}`, `[]`, `""`, `0`, `false`) are treated as unset.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Object(map) => map.is_empty(),
            FieldValue::Many(items) => items.is_empty(),
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(n) => *n == 0.0,
            FieldValue::Bool(b) => !b,
        }
    }

    /// The nested `name` of an object value, when it is a string.
    pub fn name(&self) -> Option<&str> {
        match self {
            FieldValue::Object(map) => map.get("name").and_then(serde_json::Value::as_str),
            _ => None,
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
