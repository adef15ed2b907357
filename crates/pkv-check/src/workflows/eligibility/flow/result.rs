use serde::Serialize;

use super::super::evaluation::{Classification, ScoreResult};

/// Follow-up offered on the result step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultActions {
    Booking { url: String },
    Alternatives,
}

/// Presentation-ready summary for the final step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub classification: Classification,
    pub badge: &'static str,
    pub headline: &'static str,
    pub details: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_notice: Option<&'static str>,
    pub actions: ResultActions,
}

impl ResultView {
    pub fn from_result(result: &ScoreResult, booking_url: &str) -> Self {
        let classification = result.classification;
        let actions = match classification {
            Classification::Red => ResultActions::Alternatives,
            Classification::Green | Classification::Yellow => ResultActions::Booking {
                url: booking_url.to_string(),
            },
        };

        Self {
            classification,
            badge: badge(classification),
            headline: headline(classification),
            details: details(classification),
            override_notice: result.override_reason.as_ref().map(|reason| reason.message()),
            actions,
        }
    }

    pub fn offers_booking(&self) -> bool {
        matches!(self.actions, ResultActions::Booking { .. })
    }
}

fn badge(classification: Classification) -> &'static str {
    match classification {
        Classification::Green => "Grün",
        Classification::Yellow => "Gelb",
        Classification::Red => "Rot",
    }
}

fn headline(classification: Classification) -> &'static str {
    match classification {
        Classification::Green => {
            "Sehr gute Ausgangslage – hohe Chance auf PKV-Zusage (ggf. zu Top-Konditionen)"
        }
        Classification::Yellow => {
            "Gute Chancen – voraussichtlich mit Rückfragen oder leichtem Zuschlag"
        }
        Classification::Red => {
            "Eher schwierig – wir prüfen gezielt Alternativen (z. B. Zusatzversicherung/GKV-Option)"
        }
    }
}

fn details(classification: Classification) -> Vec<&'static str> {
    match classification {
        Classification::Green => vec![
            "Ihre Angaben sprechen für eine unkomplizierte Antragsprüfung.",
            "Im Beratungstermin vergleichen wir passende Tarife.",
        ],
        Classification::Yellow => vec![
            "Einzelne Angaben können Rückfragen der Versicherer auslösen.",
            "Wir klären im Termin, welche Tarife realistisch sind.",
        ],
        Classification::Red => vec![
            "Ein Wechsel in die PKV ist derzeit voraussichtlich nicht möglich.",
            "Zusatzversicherungen können Leistungen der GKV gezielt ergänzen.",
        ],
    }
}
