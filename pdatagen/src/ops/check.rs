//! Check operation - manifest validation and summary.

use std::path::Path;

use eyre::{Context, Result};
use pdatagen_codegen::{lower, structs::BaseStruct};
use pdatagen_manifest::Manifest;

use crate::reports::{CheckReport, FileSummary};

/// Execute the check operation.
///
/// The manifest is already validated by parsing; lowering it as well
/// guarantees `generate` would accept it.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let files = lower(manifest).wrap_err("Validation failed")?;

    let files = files
        .iter()
        .map(|file| FileSummary {
            impl_file: file.impl_file_name(),
            test_file: file.test_file_name(),
            structs: file
                .structs()
                .iter()
                .map(|s| (s.name().to_string(), s.kind(), s.field_count()))
                .collect(),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        package: manifest.package.name.get_ref().clone(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::ops::TRACE;

    #[test]
    fn test_check_summarizes_files() {
        let manifest = Manifest::from_str(TRACE).unwrap();
        let report = check(&manifest, Path::new("pdata.toml")).unwrap();

        assert_eq!(report.package, "pdata");
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].impl_file, "generated_trace.go");
        assert_eq!(report.files[0].test_file, "generated_trace_test.go");
        assert_eq!(
            report.files[0].structs,
            vec![
                ("SpanSlice".to_string(), "slice", 0),
                ("Span".to_string(), "message_ptr", 2),
            ]
        );
        assert_eq!(report.struct_count(), 3);
        assert_eq!(report.field_count(), 2);
    }

    #[test]
    fn test_check_demo_manifest() {
        let manifest = Manifest::from_str(include_str!("../../../demos/pdata.toml")).unwrap();
        let report = check(&manifest, Path::new("demos/pdata.toml")).unwrap();
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.struct_count(), 6);
        assert_eq!(report.field_count(), 9);
    }
}
