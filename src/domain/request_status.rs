use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Todo,
    InProgress,
    Done,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Todo => "TODO",
            RequestStatus::InProgress => "IN_PROGRESS",
            RequestStatus::Done => "DONE",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, RequestStatus::Done)
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(RequestStatus::Todo),
            "IN_PROGRESS" => Ok(RequestStatus::InProgress),
            "DONE" => Ok(RequestStatus::Done),
            _ => Err(format!("Invalid request status: {}", s)),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
