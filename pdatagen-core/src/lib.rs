//! Core utilities and types for the pdatagen accessor generator.
//!
//! This crate provides the generated-file abstraction and the small
//! string helpers shared by the manifest, codegen and CLI crates.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{go_comment, to_snake_case};
