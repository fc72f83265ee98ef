use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule deciding which employee id comes first in a pair key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PairOrder {
    /// The employee of the earlier-listed record comes first.
    ///
    /// The same two employees can end up under two different keys when they
    /// appear in opposite order on different projects.
    #[default]
    Positional,
    /// The smaller employee id comes first.
    Ascending,
}

impl PairOrder {
    /// Orders `(earlier, later)` record employees according to the rule.
    pub fn arrange(self, earlier: u32, later: u32) -> (u32, u32) {
        match self {
            PairOrder::Positional => (earlier, later),
            PairOrder::Ascending if later < earlier => (later, earlier),
            PairOrder::Ascending => (earlier, later),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PairOrder::Positional => "positional",
            PairOrder::Ascending => "ascending",
        }
    }
}

/// Two employees, in the order they were keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PairKey {
    pub first: u32,
    pub second: u32,
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

/// Two employees on one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectPairKey {
    pub pair: PairKey,
    pub project_id: u32,
}

impl ProjectPairKey {
    pub fn new(first: u32, second: u32, project_id: u32) -> Self {
        Self {
            pair: PairKey { first, second },
            project_id,
        }
    }
}

impl fmt::Display for ProjectPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.pair, self.project_id)
    }
}
