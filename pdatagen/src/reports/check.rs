//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Go package name.
    pub package: String,
    /// One entry per `[[files]]` table.
    pub files: Vec<FileSummary>,
}

/// Generated file pair and the structs it declares.
#[derive(Debug)]
pub struct FileSummary {
    pub impl_file: String,
    pub test_file: String,
    /// `(name, kind, field count)` in declaration order.
    pub structs: Vec<(String, &'static str, usize)>,
}

impl CheckReport {
    pub fn struct_count(&self) -> usize {
        self.files.iter().map(|f| f.structs.len()).sum()
    }

    pub fn field_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| f.structs.iter())
            .map(|(_, _, fields)| fields)
            .sum()
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("package", &self.package);

        let structs = self.struct_count();
        let fields = self.field_count();
        out.preformatted(&format!(
            "{} struct{}, {} field{}",
            structs,
            plural(structs),
            fields,
            plural(fields)
        ));

        for file in &self.files {
            out.newline();
            out.section(&format!("{} + {}", file.impl_file, file.test_file));
            for (name, kind, fields) in &file.structs {
                if *kind == "slice" {
                    out.list_item(&format!("{} ({})", name, kind));
                } else {
                    out.list_item(&format!("{} ({}, {} field{})", name, kind, fields, plural(*fields)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("pdata.toml"),
            package: "pdata".to_string(),
            files: vec![FileSummary {
                impl_file: "generated_trace.go".to_string(),
                test_file: "generated_trace_test.go".to_string(),
                structs: vec![
                    ("SpanSlice".to_string(), "slice", 0),
                    ("Span".to_string(), "message_ptr", 1),
                ],
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "✓ pdata.toml is valid",
                "",
                "package: pdata",
                "2 structs, 1 field",
                "",
                "generated_trace.go + generated_trace_test.go:",
                "  - SpanSlice (slice)",
                "  - Span (message_ptr, 1 field)",
            ]
        );
    }
}
