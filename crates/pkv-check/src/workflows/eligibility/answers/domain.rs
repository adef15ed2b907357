use serde::{Deserialize, Serialize};

/// Employment status asked on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Employed,
    SelfEmployed,
    CivilServant,
    Student,
    Other,
}

impl Occupation {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Employed,
            Self::SelfEmployed,
            Self::CivilServant,
            Self::Student,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employed => "Angestellt",
            Self::SelfEmployed => "Selbstständig",
            Self::CivilServant => "Beamter/Beamtin",
            Self::Student => "Student/in",
            Self::Other => "Sonstiges",
        }
    }

    /// Accepts either the displayed label or the snake_case key.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered().into_iter().find(|occupation| {
            occupation.label().eq_ignore_ascii_case(trimmed) || occupation.key() == trimmed
        })
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self_employed",
            Self::CivilServant => "civil_servant",
            Self::Student => "student",
            Self::Other => "other",
        }
    }
}

/// Gross monthly income bands, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeBand {
    #[serde(rename = "under_3000")]
    Under3000,
    #[serde(rename = "from_3000_to_3999")]
    From3000To3999,
    #[serde(rename = "from_4000_to_4999")]
    From4000To4999,
    #[serde(rename = "from_5000_to_5999")]
    From5000To5999,
    #[serde(rename = "from_6000_to_6999")]
    From6000To6999,
    #[serde(rename = "from_7000_to_7999")]
    From7000To7999,
    #[serde(rename = "from_8000")]
    From8000,
}

impl IncomeBand {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Under3000,
            Self::From3000To3999,
            Self::From4000To4999,
            Self::From5000To5999,
            Self::From6000To6999,
            Self::From7000To7999,
            Self::From8000,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under3000 => "unter 3.000 €",
            Self::From3000To3999 => "3.000–3.999 €",
            Self::From4000To4999 => "4.000–4.999 €",
            Self::From5000To5999 => "5.000–5.999 €",
            Self::From6000To6999 => "6.000–6.999 €",
            Self::From7000To7999 => "7.000–7.999 €",
            Self::From8000 => "8.000 € oder mehr",
        }
    }

    /// The four lowest bands sit below the compulsory-insurance income threshold (JAEG).
    pub fn below_compulsory_threshold(self) -> bool {
        self < Self::From6000To6999
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|band| band.label() == trimmed || band.key() == trimmed)
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Under3000 => "under_3000",
            Self::From3000To3999 => "from_3000_to_3999",
            Self::From4000To4999 => "from_4000_to_4999",
            Self::From5000To5999 => "from_5000_to_5999",
            Self::From6000To6999 => "from_6000_to_6999",
            Self::From7000To7999 => "from_7000_to_7999",
            Self::From8000 => "from_8000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age: u8,
    pub occupation: Occupation,
    pub income_band: IncomeBand,
}

impl Default for Demographics {
    fn default() -> Self {
        Self {
            age: 30,
            occupation: Occupation::Employed,
            income_band: IncomeBand::From3000To3999,
        }
    }
}

/// Selected preference tags in first-seen order. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priorities(pub Vec<String>);

impl Priorities {
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthHistory {
    pub chronic_condition: bool,
    pub hospitalization_last_5_years: bool,
    pub ongoing_medication: bool,
    pub open_findings: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthHistory {
    pub fn fully_healthy(&self) -> bool {
        !(self.chronic_condition
            || self.hospitalization_last_5_years
            || self.ongoing_medication
            || self.open_findings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub consent: bool,
}

/// Committed answers for one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub demographics: Demographics,
    pub priorities: Priorities,
    pub health: HealthHistory,
    pub contact: Option<ContactInfo>,
}

/// Raw first-step answers as they arrive from a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsInput {
    pub age: i64,
    pub occupation: String,
    pub income_band: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritiesInput {
    pub priorities: Vec<String>,
}

/// Each flag is a required yes/no answer; `None` means the question was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInput {
    pub chronic_condition: Option<bool>,
    pub hospitalization_last_5_years: Option<bool>,
    pub ongoing_medication: Option<bool>,
    pub open_findings: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub consent: bool,
}

/// Candidate data handed to the wizard's `advance` for the step it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "answers", rename_all = "snake_case")]
pub enum StepInput {
    Demographics(DemographicsInput),
    Priorities(PrioritiesInput),
    Health(HealthInput),
}
