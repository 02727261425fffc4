use crate::domain::{Department, Task};

/// Builds the instruction sent alongside the voice memo.
pub fn build_task_prompt() -> String {
    let departments = department_choices();
    let schema = Task::FIELD_NAMES
        .iter()
        .map(|name| format!("  \"{name}\": \"string\""))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "You are an AI assistant helping hotel staff create task requests from voice recordings.

Listen to the audio and extract the following information to create a structured task:
- room: The room number mentioned (e.g., \"405\", \"211\")
- category: The department responsible (choose from: {departments})
- title: A brief description of the task (e.g., \"Broken AC in room\", \"Extra pillows needed\")
- assignee: The person assigned to the task if mentioned, otherwise use a generic name based on category
- dueTime: When the task should be completed (e.g., \"8:00 PM\", \"ASAP\", \"tomorrow morning\")

If any information is not clearly mentioned in the audio, make reasonable inferences based on context.

Return the information in JSON format matching this structure:
{{
{schema}
}}"
    )
}

// "A, B, C, or D"
fn department_choices() -> String {
    let labels: Vec<&str> = Department::ALL.iter().map(Department::label).collect();
    match labels.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}
