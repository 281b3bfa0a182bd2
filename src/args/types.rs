use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Menu entry used when the prompt is left blank.
const DEFAULT_MENU_CHOICE: &str = "1";

/// Which payload flows a run exercises.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestMode {
    /// Built-in sample job against every endpoint.
    Sample,
    /// Hand-entered job, stopping at the first endpoint that accepts it.
    Custom,
    /// Sample first, then custom.
    Both,
}

impl TestMode {
    /// Maps an interactive menu answer ("1", "2", "3"; blank means "1").
    ///
    /// Returns `None` for anything else, which runs neither flow.
    #[must_use]
    pub fn from_menu_choice(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let choice = if trimmed.is_empty() {
            DEFAULT_MENU_CHOICE
        } else {
            trimmed
        };
        match choice {
            "1" => Some(TestMode::Sample),
            "2" => Some(TestMode::Custom),
            "3" => Some(TestMode::Both),
            _ => None,
        }
    }

    #[must_use]
    pub const fn includes_sample(self) -> bool {
        matches!(self, TestMode::Sample | TestMode::Both)
    }

    #[must_use]
    pub const fn includes_custom(self) -> bool {
        matches!(self, TestMode::Custom | TestMode::Both)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TestMode::Sample => "sample",
            TestMode::Custom => "custom",
            TestMode::Both => "both",
        }
    }
}
