use std::path::Path;

use eyre::{Result, WrapErr};
use pdatagen_core::{GeneratedFile, WriteResult};
use pdatagen_manifest::Manifest;
use tracing::{debug, info};

use crate::{GoFile, lower::lower};

/// Go accessor generator: renders every file of a manifest.
pub struct Generator {
    files: Vec<GoFile>,
}

impl Generator {
    /// Lower `manifest` and prepare its files for rendering.
    pub fn new(manifest: &Manifest) -> Result<Self> {
        Ok(Self::from_files(lower(manifest)?))
    }

    /// Build a generator over already constructed files.
    pub fn from_files(files: Vec<GoFile>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[GoFile] {
        &self.files
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.outputs(|file| PreviewFile {
            path: file.path(Path::new("")).display().to_string(),
            content: file.contents(),
        })
    }

    /// Write all files into `output_dir`, skipping those already up to date.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        let outcomes = self.outputs(|file| {
            let path = file.path(Path::new("")).display().to_string();
            file.write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", file.path(output_dir).display()))
                .map(|written| (path, written))
        });

        for outcome in outcomes {
            let (path, written) = outcome?;
            match written {
                WriteResult::Written => {
                    info!(%path, "wrote");
                    result.written.push(path);
                }
                WriteResult::Unchanged => {
                    debug!(%path, "unchanged");
                    result.unchanged.push(path);
                }
            }
        }

        Ok(result)
    }

    /// Apply `f` to the implementation and test file of every manifest entry,
    /// in declaration order.
    fn outputs<T>(&self, mut f: impl FnMut(&dyn GeneratedFile) -> T) -> Vec<T> {
        let mut out = Vec::with_capacity(self.files.len() * 2);
        for file in &self.files {
            out.push(f(&file.impl_file()));
            out.push(f(&file.test_file()));
        }
        out
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed (or that did not exist)
    pub written: Vec<String>,
    /// Files that already had the generated content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of files produced.
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::structs::MessageValueStruct;

    fn generator() -> Generator {
        Generator::from_files(vec![
            GoFile::new("resource", "pdata")
                .add_struct(MessageValueStruct::new("Resource", "otlpresource.Resource")),
            GoFile::new("common", "pdata").add_struct(MessageValueStruct::new(
                "InstrumentationLibrary",
                "otlpcommon.InstrumentationLibrary",
            )),
        ])
    }

    #[test]
    fn test_preview_lists_impl_and_test_files() {
        let paths: Vec<_> = generator().preview().into_iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            vec![
                "generated_resource.go",
                "generated_resource_test.go",
                "generated_common.go",
                "generated_common_test.go",
            ]
        );
    }

    #[test]
    fn test_generate_writes_preview_content() {
        let dir = TempDir::new().unwrap();
        let generator = generator();
        let result = generator.generate(dir.path()).unwrap();
        assert_eq!(result.written.len(), 4);
        assert!(result.unchanged.is_empty());

        for file in generator.preview() {
            let on_disk = fs::read_to_string(dir.path().join(&file.path)).unwrap();
            assert_eq!(on_disk, file.content);
        }
    }

    #[test]
    fn test_regenerate_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let generator = generator();
        generator.generate(dir.path()).unwrap();

        fs::write(dir.path().join("generated_common.go"), "stale").unwrap();
        let result = generator.generate(dir.path()).unwrap();
        assert_eq!(result.written, vec!["generated_common.go"]);
        assert_eq!(result.unchanged.len(), 3);
        assert_eq!(result.total(), 4);
    }
}
