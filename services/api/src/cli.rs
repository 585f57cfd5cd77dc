use crate::demo::{run_demo, run_finance_quote, DemoArgs, FinanceQuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use showroom::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Showroom Storefront Service",
    about = "Serve and demonstrate the dealership storefront computations from the command line",
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
    /// Financing calculator utilities
    Finance {
        #[command(subcommand)]
        command: FinanceCommand,
    },
    /// Run a CLI demo comparing a sample line-up and financing the winner
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FinanceCommand {
    /// Print an amortization quote for a price, down payment, rate, and term
    Quote(FinanceQuoteArgs),
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
        Command::Finance {
            command: FinanceCommand::Quote(args),
        } => run_finance_quote(args),
        Command::Demo(args) => run_demo(args),
    }
}
