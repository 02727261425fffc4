use serde_json::{Map, Value};

use crate::domain::Task;

const FENCE: &str = "```";

#[derive(Debug, thiserror::Error)]
pub enum UnwrapError {
    #[error("model returned malformed JSON: {0}")]
    MalformedJson(String),
    #[error("model response is not a JSON object")]
    NotAnObject,
    #[error("model response is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("model response field `{field}` must be a string, found {found}")]
    InvalidFieldType { field: &'static str, found: &'static str },
}

/// Removes a Markdown code fence around the model output.
///
/// The opening fence may carry an info string (`json`, `JSON`, ...) which is
/// dropped together with the rest of its line. Opening and closing fences are
/// stripped independently; fences inside the payload are left alone.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Parses model output into a task, requiring all five fields as strings.
pub fn parse_task(raw: &str) -> Result<Task, UnwrapError> {
    let json_text = strip_code_fence(raw);

    let value: Value =
        serde_json::from_str(json_text).map_err(|e| UnwrapError::MalformedJson(e.to_string()))?;

    let Value::Object(object) = value else {
        return Err(UnwrapError::NotAnObject);
    };

    Ok(Task {
        room: string_field(&object, "room")?,
        category: string_field(&object, "category")?,
        title: string_field(&object, "title")?,
        assignee: string_field(&object, "assignee")?,
        due_time: string_field(&object, "dueTime")?,
    })
}

fn string_field(object: &Map<String, Value>, field: &'static str) -> Result<String, UnwrapError> {
    match object.get(field) {
        None => Err(UnwrapError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(UnwrapError::InvalidFieldType {
            field,
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
