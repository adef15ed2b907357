use serde::{Deserialize, Serialize};

use super::super::answers::{Demographics, Occupation};
use super::config::EligibilityConfig;

/// Three-tier outcome shown on the result step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Green,
    Yellow,
    Red,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Green => "green",
            Classification::Yellow => "yellow",
            Classification::Red => "red",
        }
    }
}

/// Hard rules that force a red classification regardless of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum OverrideReason {
    AgeLimitExceeded { age: u8, max_age: u8 },
    CompulsoryPublicInsurance,
}

impl OverrideReason {
    /// Explanation shown to the respondent.
    pub fn message(&self) -> &'static str {
        match self {
            OverrideReason::AgeLimitExceeded { .. } => {
                "Hinweis: Ab 55 Jahren ist ein Wechsel in die PKV in der Regel nicht mehr möglich (Ausnahmen nur in Sonderfällen)."
            }
            OverrideReason::CompulsoryPublicInsurance => {
                "Hinweis: Als Angestellte/r unterhalb der Versicherungspflichtgrenze (JAEG) besteht GKV-Pflicht – ein Wechsel in die PKV ist grundsätzlich nicht möglich."
            }
        }
    }

    pub fn summary(&self) -> String {
        match self {
            OverrideReason::AgeLimitExceeded { age, max_age } => {
                format!("age {age} exceeds switch limit of {max_age}")
            }
            OverrideReason::CompulsoryPublicInsurance => {
                "employed below the compulsory insurance threshold".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: i32,
    pub classification: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<OverrideReason>,
}

pub(crate) fn override_for(
    demographics: &Demographics,
    config: &EligibilityConfig,
) -> Option<OverrideReason> {
    if demographics.age > config.max_switch_age {
        return Some(OverrideReason::AgeLimitExceeded {
            age: demographics.age,
            max_age: config.max_switch_age,
        });
    }

    if demographics.occupation == Occupation::Employed
        && demographics.income_band.below_compulsory_threshold()
    {
        return Some(OverrideReason::CompulsoryPublicInsurance);
    }

    None
}

pub(crate) fn classify(
    demographics: &Demographics,
    score: i32,
    config: &EligibilityConfig,
) -> ScoreResult {
    if let Some(reason) = override_for(demographics, config) {
        return ScoreResult {
            score,
            classification: Classification::Red,
            override_reason: Some(reason),
        };
    }

    let classification = if score >= config.green_threshold {
        Classification::Green
    } else if score >= config.red_floor {
        Classification::Yellow
    } else {
        Classification::Red
    };

    ScoreResult {
        score,
        classification,
        override_reason: None,
    }
}
