use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pdatagen_manifest::PdataToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pdata.toml (defaults to ./pdata.toml)
    #[arg(short, long, default_value = "pdata.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let pdata_toml = PdataToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(pdata_toml.manifest(), &self.config)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
