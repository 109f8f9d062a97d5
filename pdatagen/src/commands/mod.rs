mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pdatagen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pdatagen")]
#[command(version)]
#[command(about = "Generate Go pdata accessors from pdata.toml")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go wrapper and test files from pdata.toml
    Generate(GenerateCommand),

    /// Validate pdata.toml without generating code
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["pdatagen", "generate"]).unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.config, std::path::Path::new("pdata.toml"));
        assert_eq!(cmd.output, std::path::Path::new("."));
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_check_config_flag() {
        let cli = Cli::try_parse_from(["pdatagen", "check", "-c", "model/pdata.toml"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(cmd.config, std::path::Path::new("model/pdata.toml"));
    }
}
