use crate::demo::{run_bank_export, run_demo, BankExportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use verifit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VeriFit Assessment Service",
    about = "Serve and demonstrate the Big Five assessment workflow from the command line",
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
    /// Inspect the question inventory
    Bank {
        #[command(subcommand)]
        command: BankCommand,
    },
    /// Run an end-to-end CLI demo covering intake, scoring, and the chart
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum BankCommand {
    /// Export the full question inventory as CSV
    Export(BankExportArgs),
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
        Command::Bank {
            command: BankCommand::Export(args),
        } => run_bank_export(args),
        Command::Demo(args) => run_demo(args),
    }
}
