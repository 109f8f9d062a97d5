//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{
    Manifest,
    validate::{ParseContext, validate_manifest},
};
use crate::{Error, Result, error::SourceContext};

/// Filename used in diagnostics when none is given.
pub const DEFAULT_FILENAME: &str = "pdata.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a pdata.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a pdata.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &ParseContext::new(content, filename))?;
    Ok(manifest)
}
