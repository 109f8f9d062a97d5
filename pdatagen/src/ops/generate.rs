//! Generate operation - Go code generation from manifest.

use std::path::Path;

use eyre::{Context, Result};
use pdatagen_codegen::Generator;
use pdatagen_manifest::Manifest;
use tracing::debug;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the Go files are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(manifest).wrap_err("Failed to lower pdata.toml")?;
    debug!(files = generator.files().len(), dry_run = opts.dry_run, "generating");

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            unchanged: written.unchanged,
        })
    };

    Ok(GenerateReport {
        package: manifest.package.name.get_ref().clone(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tempfile::TempDir;

    use super::*;
    use crate::ops::TRACE;

    fn written(report: GenerateReport) -> WrittenResult {
        match report.result {
            GenerationResult::Written(w) => w,
            GenerationResult::Preview(_) => panic!("expected files to be written"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::from_str(TRACE).unwrap();
        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(preview.files.len(), 4);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_then_regenerate() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::from_str(TRACE).unwrap();
        let opts = || GenerateOptions {
            output_dir: dir.path(),
            dry_run: false,
        };

        let first = written(generate(&manifest, opts()).unwrap());
        assert_eq!(
            first.written,
            vec![
                "generated_trace.go",
                "generated_trace_test.go",
                "generated_resource.go",
                "generated_resource_test.go",
            ]
        );
        assert!(dir.path().join("generated_resource_test.go").exists());

        let second = written(generate(&manifest, opts()).unwrap());
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 4);
    }
}
