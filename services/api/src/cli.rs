use crate::demo::{run_catalog_report, run_demo, CatalogArgs, DemoArgs};
use crate::server;
use campus_content::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Meridian Campus Content Service",
    about = "Serve and inspect the school website's content and admissions intake",
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
    /// Print catalog content to the terminal
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Drive the application form end to end against a server or in process
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List programs, or show one program in detail
    Programs(CatalogArgs),
    /// Show the cost breakdown for one program
    Tuition(CatalogArgs),
    /// List disclosure documents grouped by category
    Disclosures,
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
        Command::Catalog { command } => match command {
            CatalogCommand::Programs(args) => run_catalog_report(ReportKind::Programs, args),
            CatalogCommand::Tuition(args) => run_catalog_report(ReportKind::Tuition, args),
            CatalogCommand::Disclosures => {
                run_catalog_report(ReportKind::Disclosures, CatalogArgs::default())
            }
        },
        Command::Demo(args) => run_demo(args).await,
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ReportKind {
    Programs,
    Tuition,
    Disclosures,
}
