use serde::{Deserialize, Serialize};

use super::super::answers::{Demographics, HealthHistory, Occupation};
use super::config::EligibilityConfig;
use super::ScoreComponent;

const MIN_BONUS_AGE: u8 = 18;

/// Rules contributing to the eligibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    CivilServant,
    AgeBracket,
    EmployedAboveThreshold,
    ChronicCondition,
    RecentHospitalization,
    OngoingMedication,
    OpenFindings,
    FullyHealthy,
    SelfEmployedHealthy,
}

pub(crate) fn score_answers(
    demographics: &Demographics,
    health: &HealthHistory,
    config: &EligibilityConfig,
) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::new();
    let mut push = |rule: ScoreRule, points: i32, note: String| {
        components.push(ScoreComponent { rule, points, note });
    };

    if demographics.occupation == Occupation::CivilServant {
        push(
            ScoreRule::CivilServant,
            2,
            "civil servants qualify for subsidised private cover".to_string(),
        );
    }

    if (MIN_BONUS_AGE..=config.youth_bonus_max_age).contains(&demographics.age) {
        push(
            ScoreRule::AgeBracket,
            1,
            format!(
                "age {} within {}-{}",
                demographics.age, MIN_BONUS_AGE, config.youth_bonus_max_age
            ),
        );
    }

    if demographics.occupation == Occupation::Employed
        && !demographics.income_band.below_compulsory_threshold()
    {
        push(
            ScoreRule::EmployedAboveThreshold,
            1,
            format!(
                "employed with income {} above the compulsory threshold",
                demographics.income_band.label()
            ),
        );
    }

    if health.chronic_condition {
        push(ScoreRule::ChronicCondition, -3, "chronic condition".to_string());
    }
    if health.hospitalization_last_5_years {
        push(
            ScoreRule::RecentHospitalization,
            -2,
            "hospital stay within the last five years".to_string(),
        );
    }
    if health.ongoing_medication {
        push(
            ScoreRule::OngoingMedication,
            -2,
            "ongoing medication".to_string(),
        );
    }
    if health.open_findings {
        push(ScoreRule::OpenFindings, -2, "open medical findings".to_string());
    }

    if health.fully_healthy() {
        push(
            ScoreRule::FullyHealthy,
            1,
            "no health risks declared".to_string(),
        );
        if demographics.occupation == Occupation::SelfEmployed {
            push(
                ScoreRule::SelfEmployedHealthy,
                1,
                "self-employed without health risks".to_string(),
            );
        }
    }

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}
