use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use substatus::areas::config::Config;
use substatus::areas::repository::Repository;
use substatus::areas::vcs::GitCli;

#[derive(Parser)]
#[command(
    name = "substatus",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Report git status for a repository and its submodules",
    long_about = "This tool prints the last commit and working tree state of the repository \
    in the current directory, followed by the same summary for every submodule \
    declared in its .gitmodules file.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show last commit and working tree state of the repository and its submodules",
        long_about = "This command reports the current branch, last commit and working tree \
        state of the repository in the current directory, then does the same for each \
        submodule listed in .gitmodules. Set SUBSTATUS_GIT to use a different git executable."
    )]
    Status,
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Status => {
            let pwd = std::env::current_dir().context("cannot read the current directory")?;
            let repository = Repository::new(
                &pwd,
                Box::new(std::io::stdout()),
                Box::new(GitCli::new(config.git_executable().to_string())),
            )?;

            repository.status()?
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::from_env();
    config.apply_color();

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // stdout may be the very thing that failed
            let _ = writeln!(std::io::stdout().lock(), "Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
