//! Parsing and validation of `pdata.toml`, the catalog of wrapper structs
//! and fields the generator emits.
//!
//! Errors are [`miette`] diagnostics that point into the TOML source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_FILENAME, FieldDef, FieldKind, FileDef, Manifest, PackageConfig, ParseContext,
    PdataToml, StructDef, StructKind,
};
