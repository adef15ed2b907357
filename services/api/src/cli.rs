use crate::demo::{run_check, run_demo, run_screening, CheckArgs, DemoArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pkv_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PKV Eligibility Check",
    about = "Serve and exercise the private health insurance eligibility check",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single respondent from command line answers
    Check(CheckArgs),
    /// Replay a JSON answer bundle through the full wizard
    Screen(ScreenArgs),
    /// Walk three scripted respondents through the wizard
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Screen(args) => run_screening(args),
        Command::Demo(args) => run_demo(args),
    }
}
