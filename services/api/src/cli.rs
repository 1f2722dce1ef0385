use clap::{Args, Parser, Subcommand};
use serene::error::AppError;

use crate::demo::{
    print_profile, print_questions, print_score, run_demo, DemoArgs, ProfileArgs, ScoreArgs,
};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Serene",
    about = "Run the Serene wellness service or explore the personality assessment offline",
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
    /// Inspect the personality survey, score answer sheets, and read profiles
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Walk a scripted assessment session and print sample wellness views
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Print every survey question with its answer options
    Questions,
    /// Classify a full answer sheet
    Score(ScoreArgs),
    /// Print the descriptive profile for a four-letter type code
    Profile(ProfileArgs),
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
        Command::Assessment { command } => match command {
            AssessmentCommand::Questions => {
                print_questions();
                Ok(())
            }
            AssessmentCommand::Score(args) => print_score(args),
            AssessmentCommand::Profile(args) => print_profile(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}
