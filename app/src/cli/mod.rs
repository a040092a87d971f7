use clap::{Parser, Subcommand};

use crate::global_settings::GlobalSettings;

mod clean;
mod generate;
mod name;

pub fn exec(settings: &GlobalSettings) -> Result<(), Vec<miette::Report>> {
    use Command::*;
    let cli = Cli::parse();
    match cli.command {
        Generate(args) => generate::exec(args, settings),
        Name(args) => name::exec(args),
        Clean(args) => clean::exec(args),
    }
}

#[derive(Parser)]
#[clap(version, author, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the binding table and wrapper classes from declaration files
    Generate(generate::Args),
    /// Print the flat name of a native method
    Name(name::Args),
    /// Remove the generated sources
    Clean(clean::Args),
}

/// Wrap a single error for rendering.
fn report<E>(err: E) -> Vec<miette::Report>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    vec![miette::Report::new(err)]
}
