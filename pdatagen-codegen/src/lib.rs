//! Go accessor code generation for wrapper structs over generated protobuf
//! types.
//!
//! # Module Organization
//!
//! - [`builder`] - Output buffer with Go indentation ([`CodeBuilder`](builder::CodeBuilder))
//! - [`template`] - `${name}` placeholder expansion
//! - [`fields`] - Field descriptors and per-kind emission
//! - [`structs`] - Owning struct descriptors (message and slice wrappers)
//! - [`GoFile`] - Generated file pair (declarations and tests)
//! - [`lower()`] - Manifest to descriptor lowering
//! - [`Generator`] - Preview and write all files of a manifest
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod fields;
mod generator;
mod go_file;
pub mod lower;
pub mod structs;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generator::{GenerateResult, Generator, PreviewFile};
pub use go_file::{GoFile, GoImplFile, GoTestFile};
pub use lower::lower;
