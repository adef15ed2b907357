use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::answers::{Answers, ContactInfo, Demographics, HealthHistory};
use super::super::evaluation::{Classification, ScoreResult};

/// Lead handed to the transport after a successful contact step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub demographics: Demographics,
    pub priorities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringSummary>,
    pub contact: ContactInfo,
    pub source_url: String,
    pub timestamp_iso8601: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSummary {
    pub score: i32,
    pub classification: Classification,
}

impl SubmissionPayload {
    /// With privacy mode on, health answers and scoring stay inside the session.
    pub(crate) fn assemble(
        answers: &Answers,
        contact: ContactInfo,
        result: &ScoreResult,
        privacy_mode: bool,
        source_url: &str,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let (health, scoring) = if privacy_mode {
            (None, None)
        } else {
            (
                Some(answers.health.clone()),
                Some(ScoringSummary {
                    score: result.score,
                    classification: result.classification,
                }),
            )
        };

        Self {
            demographics: answers.demographics,
            priorities: answers.priorities.tags().to_vec(),
            health,
            scoring,
            contact,
            source_url: source_url.to_string(),
            timestamp_iso8601: submitted_at,
        }
    }

    pub fn carries_health_data(&self) -> bool {
        self.health.is_some() || self.scoring.is_some()
    }
}
