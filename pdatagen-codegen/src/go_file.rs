//! GoFile abstraction for the pair of files generated per manifest entry.
//!
//! A [`GoFile`] owns its structs and renders two outputs:
//! `generated_<name>.go` with the declarations, and
//! `generated_<name>_test.go` with the unit tests and test fixtures.

use std::path::{Path, PathBuf};

use pdatagen_core::{FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, to_snake_case};
use tracing::debug;

use crate::{
    builder::CodeBuilder,
    structs::{BaseStruct, Struct},
};

/// A generated Go source file and its companion test file.
///
/// # Example
///
/// ```
/// use pdatagen_codegen::{GoFile, structs::MessageValueStruct};
///
/// let file = GoFile::new("resource", "pdata")
///     .imports(["otlpresource \"example.com/otlp/resource/v1\""])
///     .add_struct(MessageValueStruct::new("Resource", "otlpresource.Resource"));
///
/// let code = file.render_impl();
/// assert!(code.starts_with("package pdata\n\nimport (\n"));
/// assert!(code.contains("type Resource struct {"));
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    name: String,
    package: String,
    imports: Vec<String>,
    test_imports: Vec<String>,
    structs: Vec<Struct>,
}

impl GoFile {
    /// Create a file with base name `name` in Go package `package`.
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            imports: Vec::new(),
            test_imports: Vec::new(),
            structs: Vec::new(),
        }
    }

    /// Import specs for the implementation file. An empty spec starts a new group.
    pub fn imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Import specs for the test file.
    pub fn test_imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.test_imports.extend(imports.into_iter().map(Into::into));
        self
    }

    pub fn add_struct(mut self, s: impl Into<Struct>) -> Self {
        self.structs.push(s.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }

    /// Name of the implementation file, e.g. `generated_trace.go`.
    pub fn impl_file_name(&self) -> String {
        format!("generated_{}.go", to_snake_case(&self.name))
    }

    /// Name of the test file, e.g. `generated_trace_test.go`.
    pub fn test_file_name(&self) -> String {
        format!("generated_{}_test.go", to_snake_case(&self.name))
    }

    /// Render the implementation file body (without header).
    pub fn render_impl(&self) -> String {
        debug!(file = %self.name, structs = self.structs.len(), "rendering declarations");
        let mut out = self.preamble(&self.imports);
        for s in &self.structs {
            out.push_blank();
            s.generate_struct(&mut out);
        }
        out.build()
    }

    /// Render the test file body (without header).
    ///
    /// Unit tests for every struct come first, followed by the
    /// `generateTest`/`fillTest` helpers they share.
    pub fn render_tests(&self) -> String {
        debug!(file = %self.name, structs = self.structs.len(), "rendering tests");
        let mut out = self.preamble(&self.test_imports);
        for s in &self.structs {
            out.push_blank();
            s.generate_tests(&mut out);
        }
        for s in &self.structs {
            debug!(name = s.name(), kind = s.kind(), "rendering test fixtures");
            out.push_blank();
            s.generate_test_value_helpers(&mut out);
        }
        out.build()
    }

    /// The implementation file as a [`GeneratedFile`].
    pub fn impl_file(&self) -> GoImplFile<'_> {
        GoImplFile(self)
    }

    /// The test file as a [`GeneratedFile`].
    pub fn test_file(&self) -> GoTestFile<'_> {
        GoTestFile(self)
    }

    fn preamble(&self, imports: &[String]) -> CodeBuilder {
        CodeBuilder::go()
            .line(&format!("package {}", self.package))
            .when(!imports.is_empty(), |b| {
                b.blank().block_with_close("import (", ")", |b| {
                    imports.iter().fold(b, |b, spec| {
                        if spec.trim().is_empty() {
                            b.blank()
                        } else {
                            b.line(spec.trim())
                        }
                    })
                })
            })
    }
}

fn go_rules() -> FileRules {
    FileRules {
        overwrite: Overwrite::IfChanged,
        header: Some(GENERATED_HEADER),
    }
}

/// `generated_<name>.go`
pub struct GoImplFile<'a>(&'a GoFile);

impl GeneratedFile for GoImplFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.0.impl_file_name())
    }

    fn rules(&self) -> FileRules {
        go_rules()
    }

    fn render(&self) -> String {
        self.0.render_impl()
    }
}

/// `generated_<name>_test.go`
pub struct GoTestFile<'a>(&'a GoFile);

impl GeneratedFile for GoTestFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.0.test_file_name())
    }

    fn rules(&self) -> FileRules {
        go_rules()
    }

    fn render(&self) -> String {
        self.0.render_tests()
    }
}
