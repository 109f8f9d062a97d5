//! End-to-end tests: manifest text in, Go files out.

use std::{fs, str::FromStr};

use pdatagen_codegen::{
    Generator,
    testing::{assert_balanced_delimiters, assert_content_eq, generate_to_temp},
};
use pdatagen_manifest::Manifest;

const RESOURCE: &str = r#"
[package]
name = "pdata"

[[files]]
name = "resource"
imports = ['otlpresource "go.opentelemetry.io/collector/internal/data/opentelemetry-proto-gen/resource/v1"']
test_imports = ['"testing"', '', '"github.com/stretchr/testify/assert"']

[[files.structs]]
kind = "message_value"
name = "Resource"
origin = "otlpresource.Resource"
description = "Resource information."

[[files.structs.fields]]
kind = "primitive"
name = "DroppedAttributesCount"
origin = "DroppedAttributesCount"
type = "uint32"
default = "uint32(0)"
test_value = "uint32(17)"
"#;

const TRACE: &str = r#"
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
description = """
Span represents a single operation within a trace.
See Span definition in OTLP: https://github.com/open-telemetry/opentelemetry-proto/blob/master/opentelemetry/proto/trace/v1/trace.proto"""

[[files.structs.fields]]
kind = "primitive"
name = "Name"
origin = "Name"
type = "string"
default = '""'
test_value = '"test_name"'

[[files.structs.fields]]
kind = "typed_primitive"
name = "StartTime"
origin = "StartTimeUnixNano"
type = "TimestampUnixNano"
raw_type = "uint64"
default = "TimestampUnixNano(0)"
test_value = "TimestampUnixNano(1234567890)"

[[files.structs.fields]]
kind = "message_ptr"
name = "Status"
origin = "Status"
type = "SpanStatus"

[[files.structs.fields]]
kind = "slice"
name = "Events"
origin = "Events"
type = "SpanEventSlice"

[[files.structs]]
kind = "slice"
name = "SpanEventSlice"
element = "SpanEvent"
origin = "otlptrace.Span_Event"

[[files.structs]]
kind = "message_ptr"
name = "SpanEvent"
origin = "otlptrace.Span_Event"

[[files.structs.fields]]
kind = "primitive"
name = "Name"
origin = "Name"
type = "string"
default = '""'
test_value = '"test_name"'

[[files.structs]]
kind = "message_ptr"
name = "SpanStatus"
origin = "otlptrace.Status"

[[files.structs.fields]]
kind = "typed_primitive"
name = "Code"
origin = "Code"
type = "StatusCode"
raw_type = "otlptrace.Status_StatusCode"
default = "StatusCode(0)"
test_value = "StatusCode(1)"
manual_setter = true
"#;

fn preview(src: &str) -> Vec<(String, String)> {
    let manifest = Manifest::from_str(src).expect("manifest should parse");
    Generator::new(&manifest)
        .expect("manifest should lower")
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_message_value_file_matches_fixture() {
    let files = preview(RESOURCE);
    assert_content_eq(
        include_str!("fixtures/generated_resource.go"),
        get_file(&files, "generated_resource.go"),
    );
    assert_content_eq(
        include_str!("fixtures/generated_resource_test.go"),
        get_file(&files, "generated_resource_test.go"),
    );
}

#[test]
fn test_trace_files_are_well_formed() {
    let files = preview(TRACE);
    assert_eq!(files.len(), 2);
    for (path, content) in &files {
        assert!(content.starts_with("// Code generated by \"pdatagen\". DO NOT EDIT.\n"), "{path}");
        assert!(!content.contains("${"), "{path} has unexpanded placeholders");
        assert!(!content.contains("\n\n\n"), "{path} has consecutive blank lines");
        assert!(content.ends_with("}\n"), "{path}");
        assert_balanced_delimiters(content);
    }
}

#[test]
fn test_multi_line_description() {
    let files = preview(TRACE);
    let code = get_file(&files, "generated_trace.go");
    assert!(code.contains(
        "// Span represents a single operation within a trace.\n\
         // See Span definition in OTLP: https://github.com/open-telemetry/opentelemetry-proto/blob/master/opentelemetry/proto/trace/v1/trace.proto\n\
         //\n\
         // This is a reference type, if passed by value and callee modifies it the\n"
    ));
}

#[test]
fn test_trace_copy_to_covers_every_field() {
    let files = preview(TRACE);
    let code = get_file(&files, "generated_trace.go");
    assert!(code.contains(
        "\tdest.SetName(ms.Name())\n\
         \tdest.SetStartTime(ms.StartTime())\n\
         \tms.Status().CopyTo(dest.Status())\n\
         \tms.Events().CopyTo(dest.Events())\n\
         }\n"
    ));
}

#[test]
fn test_trace_fill_test_covers_every_field() {
    let files = preview(TRACE);
    let code = get_file(&files, "generated_trace_test.go");
    assert!(code.contains(
        "func fillTestSpan(tv Span) {\n\
         \ttv.SetName(\"test_name\")\n\
         \ttv.SetStartTime(TimestampUnixNano(1234567890))\n\
         \ttv.Status().InitEmpty()\n\
         \tfillTestSpanStatus(tv.Status())\n\
         \tfillTestSpanEventSlice(tv.Events())\n\
         }\n"
    ));
    assert!(code.contains("\t\tfillTestSpanEvent(tv.At(i))\n"));
}

#[test]
fn test_manual_setter_end_to_end() {
    let files = preview(TRACE);
    let code = get_file(&files, "generated_trace.go");
    assert!(code.contains("func (ms SpanStatus) Code() StatusCode {\n\treturn StatusCode((*ms.orig).Code)\n}\n"));
    assert!(!code.contains("func (ms SpanStatus) SetCode("));

    // The hand-written setter is still relied upon by copies and fixtures.
    assert!(code.contains("\tdest.SetCode(ms.Code())\n"));
    let tests = get_file(&files, "generated_trace_test.go");
    assert!(tests.contains("\ttv.SetCode(StatusCode(1))\n"));
}

#[test]
fn test_generate_writes_all_files() {
    let manifest = Manifest::from_str(TRACE).unwrap();
    let generator = Generator::new(&manifest).unwrap();

    let dir = generate_to_temp(|path| {
        let result = generator.generate(path)?;
        assert_eq!(result.written, vec!["generated_trace.go", "generated_trace_test.go"]);
        Ok(())
    })
    .unwrap();

    for file in generator.preview() {
        let on_disk = fs::read_to_string(dir.path().join(&file.path)).unwrap();
        assert_content_eq(&file.content, &on_disk);
    }

    let again = generator.generate(dir.path()).unwrap();
    assert!(again.written.is_empty());
    assert_eq!(again.unchanged.len(), 2);
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(preview(TRACE), preview(TRACE));
}

#[test]
fn test_span_event_accessor_snapshot() {
    let files = preview(TRACE);
    let code = get_file(&files, "generated_trace.go");
    let start = code.find("// Events returns").unwrap();
    let end = start + code[start..].find("}\n").unwrap() + 2;
    insta::assert_snapshot!(&code[start..end], @r#"
    // Events returns the Events associated with this Span.
    //
    // Important: This causes a runtime error if IsNil() returns "true".
    func (ms Span) Events() SpanEventSlice {
    	return newSpanEventSlice(&(*ms.orig).Events)
    }
    "#);
}

const TREE: &str = r#"
[package]
name = "pdata"

[[files]]
name = "tree"

[[files.structs]]
kind = "message_ptr"
name = "Node"
origin = "otlptest.Node"

[[files.structs.fields]]
kind = "primitive"
name = "Name"
origin = "Name"
type = "string"
default = '""'
test_value = '"root"'

[[files.structs.fields]]
kind = "message_ptr"
name = "Parent"
origin = "Parent"
type = "Node"
"#;

#[test]
fn test_self_referencing_fixture_is_finite() {
    let files = preview(TREE);
    let tests = get_file(&files, "generated_tree_test.go");

    assert!(tests.contains("func fillTestNode(tv Node) {\n\ttv.SetName(\"root\")\n}\n"));
    assert!(!tests.contains("fillTestNode(tv.Parent())"));
    assert!(tests.contains("func TestNode_Parent(t *testing.T) {\n"));
    assert_balanced_delimiters(tests);

    let code = get_file(&files, "generated_tree.go");
    assert!(code.contains("\tms.Parent().CopyTo(dest.Parent())\n"));
}
