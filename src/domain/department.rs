use std::fmt;

/// Hotel departments a task can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Housekeeping,
    Engineering,
    Concierge,
    FrontDesk,
    Other,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Housekeeping,
        Department::Engineering,
        Department::Concierge,
        Department::FrontDesk,
        Department::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Housekeeping => "Housekeeping",
            Department::Engineering => "Engineering",
            Department::Concierge => "Concierge",
            Department::FrontDesk => "Front Desk",
            Department::Other => "Other",
        }
    }

    /// Classifies a free-text category. Anything unrecognised is `Other`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
            .unwrap_or(Department::Other)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
