use clap::Parser;
use hedgebook::cli::{analyze, check, serve, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Serve(args) => serve::execute(&cli, args).await,
        Commands::Analyze(args) => analyze::execute(&cli, args).await,
        Commands::Check(CheckCommand::Config) => {
            check::execute_config(&cli.config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
