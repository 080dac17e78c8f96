use crate::commands::{
    run_batch, run_questions, run_report, run_take, BatchArgs, ReportArgs, TakeArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fangzai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fangzai Career Assessment",
    about = "Serve, take, and score the Fangzai career-growth assessment",
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
    /// Print the question catalog
    Questions,
    /// Take the assessment interactively on the terminal
    Take(TakeArgs),
    /// Score an answer sheet and print the report
    Report(ReportArgs),
    /// Score a long-format CSV of many respondents
    Batch(BatchArgs),
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
        Command::Questions => run_questions(),
        Command::Take(args) => run_take(args),
        Command::Report(args) => run_report(args),
        Command::Batch(args) => run_batch(args),
    }
}
