mod config;
mod policy;
mod rules;

pub use config::EligibilityConfig;
pub use policy::{Classification, OverrideReason, ScoreResult};
pub use rules::ScoreRule;

use super::answers::{Demographics, HealthHistory};
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the rubric thresholds to a respondent's answers.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    pub fn score(&self, demographics: &Demographics, health: &HealthHistory) -> i32 {
        rules::score_answers(demographics, health, &self.config).1
    }

    pub fn classify(&self, demographics: &Demographics, score: i32) -> ScoreResult {
        policy::classify(demographics, score, &self.config)
    }

    /// Score and classify in one pass, keeping the per-rule breakdown.
    pub fn evaluate(
        &self,
        demographics: &Demographics,
        health: &HealthHistory,
    ) -> EligibilityOutcome {
        let (components, score) = rules::score_answers(demographics, health, &self.config);
        let result = policy::classify(demographics, score, &self.config);

        EligibilityOutcome { result, components }
    }
}

/// Point accumulation with the default rubric.
pub fn compute_score(demographics: &Demographics, health: &HealthHistory) -> i32 {
    EligibilityEngine::default().score(demographics, health)
}

/// Classification with the default rubric; overrides win over the score.
pub fn compute_classification(demographics: &Demographics, score: i32) -> ScoreResult {
    EligibilityEngine::default().classify(demographics, score)
}

/// Discrete contribution to a score, kept for transparent result explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub points: i32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub result: ScoreResult,
    pub components: Vec<ScoreComponent>,
}
