use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pdatagen_manifest::PdataToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to pdata.toml (defaults to ./pdata.toml)
    #[arg(short, long, default_value = "pdata.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let pdata_toml = PdataToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            pdata_toml.manifest(),
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
