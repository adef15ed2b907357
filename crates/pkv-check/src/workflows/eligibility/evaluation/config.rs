use serde::{Deserialize, Serialize};

/// Rubric thresholds for the eligibility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Respondents older than this cannot switch into private insurance.
    pub max_switch_age: u8,
    pub youth_bonus_max_age: u8,
    pub green_threshold: i32,
    /// Scores strictly below this floor classify as red.
    pub red_floor: i32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            max_switch_age: 55,
            youth_bonus_max_age: 45,
            green_threshold: 2,
            red_floor: -2,
        }
    }
}
