use crate::infra::LoggingLeadTransport;
use clap::Args;
use pkv_check::config::AppConfig;
use pkv_check::error::AppError;
use pkv_check::workflows::eligibility::{
    CheckRequest, ContactInput, DemographicsInput, EligibilityService, EligibilityWizard,
    HealthInput, IncomeBand, Occupation, PrioritiesInput, ResultView, ScreeningRequest, StepInput,
    WizardConfig, WizardStep,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Age in years (18 to 80)
    #[arg(long)]
    pub(crate) age: i64,
    /// Occupation label or key, e.g. "Angestellt" or "self_employed"
    #[arg(long)]
    pub(crate) occupation: String,
    /// Gross monthly income band label or key, e.g. "from_6000_to_6999"
    #[arg(long)]
    pub(crate) income: String,
    /// A chronic condition is present
    #[arg(long)]
    pub(crate) chronic: bool,
    /// Hospital stay within the last five years
    #[arg(long)]
    pub(crate) hospital: bool,
    /// Medication is taken regularly
    #[arg(long)]
    pub(crate) medication: bool,
    /// Medical findings are still open
    #[arg(long)]
    pub(crate) findings: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// JSON file with demographics, priorities, health and optional contact answers
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include health answers and scoring in delivered leads
    #[arg(long)]
    pub(crate) share_health_data: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let service = EligibilityService::new(
        Arc::new(LoggingLeadTransport::default()),
        AppConfig::load()?.wizard,
    );

    let response = service.check(check_request(args))?;

    println!(
        "Score {} -> {} ({})",
        response.result.score, response.view.badge, response.view.headline
    );
    for component in &response.components {
        println!("  - {:+} {}", component.points, component.note);
    }
    render_view(&response.view);
    Ok(())
}

pub(crate) fn run_screening(args: ScreenArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let request: ScreeningRequest = serde_json::from_str(&raw)?;

    let transport = Arc::new(LoggingLeadTransport::default());
    let service = EligibilityService::new(transport.clone(), AppConfig::load()?.wizard);
    let response = service.screen(request)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    println!("Leads delivered: {}", transport.delivered().len());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = WizardConfig {
        privacy_mode: !args.share_health_data,
        ..WizardConfig::default()
    };
    let transport = LoggingLeadTransport::default();

    println!("PKV eligibility check demo (contact details redacted)");
    for respondent in scripted_respondents() {
        println!("\n{}", respondent.name);
        let mut wizard = EligibilityWizard::new(config.clone());

        let mut step = wizard.current_step();
        for input in respondent.steps {
            step = match wizard.advance(input) {
                Ok(next) => next,
                Err(err) => {
                    println!("  Step rejected: {}", err);
                    break;
                }
            };
            println!("  -> {} ({}%)", step, wizard.progress_percent());
        }

        if step == WizardStep::ContactInfo {
            match wizard.submit(&respondent.contact, &transport) {
                Ok(next) => println!("  -> {} after lead delivery", next),
                Err(err) => println!("  Submission failed: {}", err),
            }
        }

        let result = wizard.score_result();
        println!("  Score {} / {}", result.score, result.classification.label());
        render_view(&wizard.result_view());
    }

    let delivered = transport.delivered();
    println!("\nLeads delivered: {}", delivered.len());
    for lead in &delivered {
        println!(
            "  - {}, {}, {} priorities, health data shared: {}",
            lead.demographics.occupation.label(),
            lead.demographics.income_band.label(),
            lead.priorities.len(),
            lead.carries_health_data()
        );
    }
    Ok(())
}

fn check_request(args: CheckArgs) -> CheckRequest {
    CheckRequest {
        demographics: DemographicsInput {
            age: args.age,
            occupation: args.occupation,
            income_band: args.income,
        },
        health: HealthInput {
            chronic_condition: Some(args.chronic),
            hospitalization_last_5_years: Some(args.hospital),
            ongoing_medication: Some(args.medication),
            open_findings: Some(args.findings),
            notes: None,
        },
    }
}

fn render_view(view: &ResultView) {
    println!("  {}", view.headline);
    for detail in &view.details {
        println!("    * {}", detail);
    }
    if let Some(notice) = view.override_notice {
        println!("  {}", notice);
    }
    if view.offers_booking() {
        println!("  Next: book a consultation");
    } else {
        println!("  Next: review alternatives");
    }
}

struct ScriptedRespondent {
    name: &'static str,
    steps: Vec<StepInput>,
    contact: ContactInput,
}

fn scripted_respondents() -> Vec<ScriptedRespondent> {
    vec![
        ScriptedRespondent {
            name: "Self-employed designer, 34, healthy",
            steps: answers(
                34,
                Occupation::SelfEmployed,
                IncomeBand::From5000To5999,
                &["Beitragsstabilität", "Einbettzimmer"],
                [false, false, false, false],
            ),
            contact: contact("Anna", "Schulz"),
        },
        ScriptedRespondent {
            name: "Employee, 29, below the compulsory insurance threshold",
            steps: answers(
                29,
                Occupation::Employed,
                IncomeBand::From4000To4999,
                &["Zahnersatz"],
                [false, false, false, false],
            ),
            contact: contact("Markus", "Vogel"),
        },
        ScriptedRespondent {
            name: "Freelancer, 48, regular medication",
            steps: answers(
                48,
                Occupation::Other,
                IncomeBand::From7000To7999,
                &["Chefarztbehandlung"],
                [false, false, true, false],
            ),
            contact: contact("Petra", "Lange"),
        },
    ]
}

fn answers(
    age: i64,
    occupation: Occupation,
    band: IncomeBand,
    priorities: &[&str],
    [chronic, hospital, medication, findings]: [bool; 4],
) -> Vec<StepInput> {
    vec![
        StepInput::Demographics(DemographicsInput {
            age,
            occupation: occupation.label().to_string(),
            income_band: band.label().to_string(),
        }),
        StepInput::Priorities(PrioritiesInput {
            priorities: priorities.iter().map(|tag| tag.to_string()).collect(),
        }),
        StepInput::Health(HealthInput {
            chronic_condition: Some(chronic),
            hospitalization_last_5_years: Some(hospital),
            ongoing_medication: Some(medication),
            open_findings: Some(findings),
            notes: None,
        }),
    ]
}

fn contact(first_name: &str, last_name: &str) -> ContactInput {
    ContactInput {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: "0711 4455667".to_string(),
        email: format!(
            "{}.{}@example.de",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        consent: true,
    }
}
