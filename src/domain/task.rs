use serde::{Deserialize, Serialize};

use super::department::Department;

/// A service task as dictated by staff or typed into the request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub room: String,
    pub category: String,
    pub title: String,
    pub assignee: String,
    pub due_time: String,
}

impl Task {
    /// Wire names of the task fields, in display order.
    pub const FIELD_NAMES: [&'static str; 5] = ["room", "category", "title", "assignee", "dueTime"];

    pub fn new(
        room: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        assignee: impl Into<String>,
        due_time: impl Into<String>,
    ) -> Self {
        Self {
            room: room.into(),
            category: category.into(),
            title: title.into(),
            assignee: assignee.into(),
            due_time: due_time.into(),
        }
    }

    pub fn department(&self) -> Department {
        Department::from_label(&self.category)
    }

    /// Names of the fields that are empty once surrounding whitespace is removed.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.blank_fields().is_empty()
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("room", self.room.as_str()),
            ("category", self.category.as_str()),
            ("title", self.title.as_str()),
            ("assignee", self.assignee.as_str()),
            ("dueTime", self.due_time.as_str()),
        ]
    }
}
