use voicedesk::application::services::build_task_prompt;

#[test]
fn given_prompt_when_built_then_lists_every_department() {
    let prompt = build_task_prompt();

    assert!(prompt.contains("Housekeeping, Engineering, Concierge, Front Desk, or Other"));
}

#[test]
fn given_prompt_when_built_then_describes_all_five_keys() {
    let prompt = build_task_prompt();

    for key in ["room", "category", "title", "assignee", "dueTime"] {
        assert!(prompt.contains(&format!("\"{key}\": \"string\"")), "missing {key}");
        assert!(prompt.contains(&format!("- {key}:")), "missing description of {key}");
    }
}

#[test]
fn given_prompt_when_built_then_asks_for_inference_and_json() {
    let prompt = build_task_prompt();

    assert!(prompt.contains("make reasonable inferences"));
    assert!(prompt.contains("JSON format"));
}

#[test]
fn given_prompt_when_built_twice_then_identical() {
    assert_eq!(build_task_prompt(), build_task_prompt());
}
