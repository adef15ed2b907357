use serde::{Deserialize, Serialize};

/// Wizard steps in nominal order. Progresses linearly except for the red early exit after
/// the health step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Demographics,
    Priorities,
    HealthHistory,
    ContactInfo,
    Result,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Demographics,
            Self::Priorities,
            Self::HealthHistory,
            Self::ContactInfo,
            Self::Result,
        ]
    }

    /// One-based position as shown in the progress header.
    pub const fn number(self) -> u8 {
        match self {
            Self::Demographics => 1,
            Self::Priorities => 2,
            Self::HealthHistory => 3,
            Self::ContactInfo => 4,
            Self::Result => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Demographics => "Angaben zur Person",
            Self::Priorities => "Prioritäten",
            Self::HealthHistory => "Gesundheit",
            Self::ContactInfo => "Kontakt",
            Self::Result => "Ergebnis",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Demographics => Some(Self::Priorities),
            Self::Priorities => Some(Self::HealthHistory),
            Self::HealthHistory => Some(Self::ContactInfo),
            Self::ContactInfo => Some(Self::Result),
            Self::Result => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Demographics => None,
            Self::Priorities => Some(Self::Demographics),
            Self::HealthHistory => Some(Self::Priorities),
            Self::ContactInfo => Some(Self::HealthHistory),
            Self::Result => Some(Self::ContactInfo),
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Result)
    }

    /// Progress bar value in percent, 0 on the first step and 100 on the result.
    pub fn progress_percent(self) -> u8 {
        (u16::from(self.number() - 1) * 100 / 4) as u8
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Demographics
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number(), self.label())
    }
}

/// Navigation state owned by the wizard controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step: WizardStep,
    pub submitted: bool,
    pub last_error: Option<String>,
    /// Set while a lead payload is in flight.
    pub loading: bool,
}

/// What `reset` clears besides the step pointer and submitted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    NavigationOnly,
    ClearAnswers,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        Self::NavigationOnly
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardConfig {
    /// Keeps health answers and scoring out of the submission payload.
    pub privacy_mode: bool,
    pub reset_policy: ResetPolicy,
    pub source_url: String,
    pub booking_url: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            privacy_mode: true,
            reset_policy: ResetPolicy::default(),
            source_url: "https://pkv-check.local/".to_string(),
            booking_url: "https://calendly.com/".to_string(),
        }
    }
}
