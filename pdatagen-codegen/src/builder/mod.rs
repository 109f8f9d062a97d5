//! Code generation building blocks.
//!
//! [`CodeBuilder`] is the output buffer every struct and field emitter
//! writes Go source into.

mod code_builder;

pub use code_builder::CodeBuilder;
