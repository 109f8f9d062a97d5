use std::path::{Path, PathBuf};

use eyre::Result;

/// Header prepended to every generated Go source file.
pub const GENERATED_HEADER: &str = "// Code generated by \"pdatagen\". DO NOT EDIT.\n// To regenerate this file run \"pdatagen generate\".\n\n";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body (without header)
    fn render(&self) -> String;

    /// Render the full file content, header included
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{}{}", header, self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.contents();

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                if is_unchanged(&path, &content) {
                    Ok(WriteResult::Unchanged)
                } else {
                    write_file(&path, &content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

fn is_unchanged(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content and was left untouched
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only rewrite when the rendered content differs from what is on disk
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
