//! Core operations.
//!
//! This module contains the business logic for pdatagen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};

#[cfg(test)]
pub(crate) const TRACE: &str = r#"
[package]
name = "pdata"

[[files]]
name = "trace"
imports = ['otlptrace "go.opentelemetry.io/collector/internal/data/opentelemetry-proto-gen/trace/v1"']
test_imports = ['"testing"', '', '"github.com/stretchr/testify/assert"']

[[files.structs]]
kind = "slice"
name = "SpanSlice"
element = "Span"
origin = "otlptrace.Span"

[[files.structs]]
kind = "message_ptr"
name = "Span"
origin = "otlptrace.Span"

[[files.structs.fields]]
kind = "primitive"
name = "Name"
origin = "Name"
type = "string"
default = '""'
test_value = '"test_name"'

[[files.structs.fields]]
kind = "message_value"
name = "Resource"
origin = "Resource"
type = "Resource"

[[files]]
name = "resource"

[[files.structs]]
kind = "message_value"
name = "Resource"
origin = "otlpresource.Resource"
"#;
