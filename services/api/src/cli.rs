use crate::demo::{run_assess, run_demo, run_estimate, AssessArgs, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rera_smart::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RERA Renewal Assessor",
    about = "Assess Dubai rent renewals and run the assessment service from the command line",
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
    /// Assess a single renewal from lease details supplied as flags
    Assess(AssessArgs),
    /// Ask the market collaborator for an estimated annual rent
    Estimate(EstimateArgs),
    /// Run a CLI demo covering the common renewal scenarios
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
        Command::Assess(args) => run_assess(args).await,
        Command::Estimate(args) => run_estimate(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
