use voicedesk::domain::Department;

#[test]
fn given_known_labels_when_parsing_then_maps_to_department() {
    assert_eq!(Department::from_label("Housekeeping"), Department::Housekeeping);
    assert_eq!(Department::from_label("Engineering"), Department::Engineering);
    assert_eq!(Department::from_label("Concierge"), Department::Concierge);
    assert_eq!(Department::from_label("Front Desk"), Department::FrontDesk);
    assert_eq!(Department::from_label("Other"), Department::Other);
}

#[test]
fn given_label_with_different_case_and_padding_when_parsing_then_still_matches() {
    assert_eq!(Department::from_label("  front desk "), Department::FrontDesk);
    assert_eq!(Department::from_label("ENGINEERING"), Department::Engineering);
}

#[test]
fn given_free_text_category_when_parsing_then_falls_back_to_other() {
    assert_eq!(Department::from_label("Spa"), Department::Other);
    assert_eq!(Department::from_label(""), Department::Other);
}

#[test]
fn given_each_department_when_round_tripping_label_then_returns_same_department() {
    for department in Department::ALL {
        assert_eq!(Department::from_label(department.label()), department);
        assert_eq!(department.to_string(), department.label());
    }
}
