use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "chalkx")]
#[clap(about = "Blackboard image analysis relay", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}
