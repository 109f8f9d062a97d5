//! Manifest types and parsing for pdata.toml files.

mod fields;
mod file;
mod parse;
mod structs;
mod validate;

use pdatagen_core::to_snake_case;
use serde::Deserialize;
use toml::Spanned;

pub use fields::{FieldDef, FieldKind};
pub use file::PdataToml;
pub use parse::DEFAULT_FILENAME;
pub use structs::{StructDef, StructKind};
pub use validate::ParseContext;

/// Root manifest for pdata.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Go package metadata
    pub package: PackageConfig,

    /// Generated files, in declaration order
    #[serde(default)]
    pub files: Vec<FileDef>,
}

impl Manifest {
    /// Iterate over every struct of every file.
    pub fn structs(&self) -> impl Iterator<Item = &StructDef> {
        self.files.iter().flat_map(|file| file.structs.iter())
    }

    /// Find a struct by name.
    pub fn find_struct(&self, name: &str) -> Option<&StructDef> {
        self.structs().find(|s| s.name() == name)
    }
}

/// `[package]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Go package clause of every generated file
    pub name: Spanned<String>,
}

/// One `[[files]]` entry: a pair of generated Go files.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileDef {
    /// Base name; `trace` yields `generated_trace.go` and `generated_trace_test.go`
    pub name: Spanned<String>,

    /// Import specs for the implementation file. An empty entry starts a new group.
    #[serde(default)]
    pub imports: Vec<String>,

    /// Import specs for the test file.
    #[serde(default)]
    pub test_imports: Vec<String>,

    /// Structs rendered into this file
    #[serde(default)]
    pub structs: Vec<StructDef>,
}

impl FileDef {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    /// Name of the generated implementation file, e.g. `generated_metrics_data.go`
    /// for `metricsData`. Distinct entries must not share it.
    pub fn output_name(&self) -> String {
        format!("generated_{}.go", to_snake_case(self.name()))
    }
}
