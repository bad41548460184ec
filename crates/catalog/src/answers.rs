use serde::{Deserialize, Serialize};

/// The five fixed answer options. Closed set; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerId {
    Yes,
    ProbYes,
    Unknown,
    ProbNo,
    No,
}

impl AnswerId {
    pub const ALL: [AnswerId; 5] = [
        AnswerId::Yes,
        AnswerId::ProbYes,
        AnswerId::Unknown,
        AnswerId::ProbNo,
        AnswerId::No,
    ];

    /// Internal scoring value on the [-2, 2] scale.
    pub fn value(self) -> i8 {
        match self {
            AnswerId::Yes => 2,
            AnswerId::ProbYes => 1,
            AnswerId::Unknown => 0,
            AnswerId::ProbNo => -1,
            AnswerId::No => -2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerId::Yes => "YES",
            AnswerId::ProbYes => "PROB_YES",
            AnswerId::Unknown => "UNKNOWN",
            AnswerId::ProbNo => "PROB_NO",
            AnswerId::No => "NO",
        }
    }

    pub fn parse(id: &str) -> Option<AnswerId> {
        AnswerId::ALL.into_iter().find(|a| a.as_str() == id)
    }

    /// A confident affirmative (YES or PROB_YES) triggers conflict exclusions.
    pub fn is_affirmative(self) -> bool {
        matches!(self, AnswerId::Yes | AnswerId::ProbYes)
    }
}
