use crate::demo::{
    run_demo, run_eligibility_evaluate, run_profile_build, DemoArgs, EvaluateArgs,
    ProfileBuildArgs,
};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Build student profiles, match opportunities, and serve the guidance API",
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
    /// Merge extracted documents into a unified profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Match a student profile against the opportunity catalog
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
    /// Run the full pipeline over a built-in set of sample documents
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Build a unified profile from a JSON array of extracted documents
    Build(ProfileBuildArgs),
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Evaluate a student profile JSON file against the rule catalog
    Evaluate(EvaluateArgs),
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
        Command::Profile {
            command: ProfileCommand::Build(args),
        } => run_profile_build(args),
        Command::Eligibility {
            command: EligibilityCommand::Evaluate(args),
        } => run_eligibility_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}
