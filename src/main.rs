use clap::Parser;
use chalkx::logger;
use chalkx::structs::cli::Cli;
use chalkx::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logger::init();

    let cli = Cli::parse();
    CommandRunner::new()
        .run_command(cli.command.unwrap_or_default())
        .await?;

    Ok(())
}
