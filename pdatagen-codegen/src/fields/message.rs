use super::templates::{
    ACCESSOR_MESSAGE_PTR, ACCESSOR_MESSAGE_PTR_TEST, ACCESSOR_MESSAGE_VALUE,
    ACCESSOR_MESSAGE_VALUE_TEST,
};
use crate::{
    builder::CodeBuilder,
    structs::{BaseStruct, StructRef},
    template::Placeholders,
};

/// A field holding an optional pointer to another message.
///
/// The generated accessor reports `IsNil()` until the nested message is
/// explicitly initialized with `InitEmpty()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePtrField {
    pub(crate) field_name: String,
    pub(crate) origin_field_name: String,
    pub(crate) returns: StructRef,
}

impl MessagePtrField {
    pub fn new(
        field_name: impl Into<String>,
        origin_field_name: impl Into<String>,
        returns: StructRef,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            origin_field_name: origin_field_name.into(),
            returns,
        }
    }

    pub(crate) fn placeholders<'a>(&'a self, ms: &'a dyn BaseStruct) -> Placeholders<'a> {
        message_placeholders(ms, &self.field_name, &self.origin_field_name, &self.returns)
    }

    pub fn generate_accessors(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_MESSAGE_PTR));
    }

    pub fn generate_accessors_test(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_MESSAGE_PTR_TEST));
    }

    pub fn generate_set_with_test_value(&self, out: &mut CodeBuilder) {
        out.push_line(&format!("tv.{}().InitEmpty()", self.field_name));
        out.push_line(&format!(
            "fillTest{}(tv.{}())",
            self.returns.name(),
            self.field_name
        ));
    }

    pub fn generate_copy_to_value(&self, out: &mut CodeBuilder) {
        out.push_line(&format!(
            "ms.{0}().CopyTo(dest.{0}())",
            self.field_name
        ));
    }
}

/// A field holding an embedded message that is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageValueField {
    pub(crate) field_name: String,
    pub(crate) origin_field_name: String,
    pub(crate) returns: StructRef,
}

impl MessageValueField {
    pub fn new(
        field_name: impl Into<String>,
        origin_field_name: impl Into<String>,
        returns: StructRef,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            origin_field_name: origin_field_name.into(),
            returns,
        }
    }

    pub(crate) fn placeholders<'a>(&'a self, ms: &'a dyn BaseStruct) -> Placeholders<'a> {
        message_placeholders(ms, &self.field_name, &self.origin_field_name, &self.returns)
    }

    pub fn generate_accessors(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_MESSAGE_VALUE));
    }

    pub fn generate_accessors_test(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_MESSAGE_VALUE_TEST));
    }

    pub fn generate_set_with_test_value(&self, out: &mut CodeBuilder) {
        out.push_line(&format!(
            "fillTest{}(tv.{}())",
            self.returns.name(),
            self.field_name
        ));
    }

    pub fn generate_copy_to_value(&self, out: &mut CodeBuilder) {
        out.push_line(&format!(
            "ms.{0}().CopyTo(dest.{0}())",
            self.field_name
        ));
    }
}

fn message_placeholders<'a>(
    ms: &'a dyn BaseStruct,
    field_name: &'a str,
    origin_field_name: &'a str,
    returns: &'a StructRef,
) -> Placeholders<'a> {
    Placeholders::new()
        .with("structName", ms.name())
        .with("fieldName", field_name)
        .with("lowerFieldName", field_name.to_lowercase())
        .with("returnType", returns.name())
        .with("originFieldName", origin_field_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::MessagePtrStruct;

    fn span() -> MessagePtrStruct {
        MessagePtrStruct::new("Span", "otlptrace.Span")
    }

    fn status() -> MessagePtrField {
        MessagePtrField::new("Status", "Status", StructRef::new("SpanStatus"))
    }

    fn library() -> MessageValueField {
        MessageValueField::new(
            "InstrumentationLibrary",
            "InstrumentationLibrary",
            StructRef::new("InstrumentationLibrary"),
        )
    }

    #[test]
    fn test_placeholders_cover_templates() {
        let ms = span();
        let ptr = status();
        let value = library();
        for template in [ACCESSOR_MESSAGE_PTR, ACCESSOR_MESSAGE_PTR_TEST] {
            assert!(ptr.placeholders(&ms).missing(template).is_empty());
        }
        for template in [ACCESSOR_MESSAGE_VALUE, ACCESSOR_MESSAGE_VALUE_TEST] {
            assert!(value.placeholders(&ms).missing(template).is_empty());
        }
    }

    #[test]
    fn test_ptr_accessor_documents_nil_state() {
        let mut out = CodeBuilder::go();
        status().generate_accessors(&span(), &mut out);
        insta::assert_snapshot!(out.build(), @r#"
        // Status returns the status associated with this Span.
        // If no status available, it creates an empty message and associates it with this Span.
        //
        //  Empty initialized Span will return "nil" SpanStatus.
        //
        // Important: This causes a runtime error if IsNil() returns "true".
        func (ms Span) Status() SpanStatus {
        	return newSpanStatus(&(*ms.orig).Status)
        }
        "#);
    }

    #[test]
    fn test_ptr_accessor_test_checks_nil_transition() {
        let mut out = CodeBuilder::go();
        status().generate_accessors_test(&span(), &mut out);
        assert_eq!(
            out.build(),
            "func TestSpan_Status(t *testing.T) {\n\
             \tms := NewSpan()\n\
             \tms.InitEmpty()\n\
             \tassert.True(t, ms.Status().IsNil())\n\
             \tms.Status().InitEmpty()\n\
             \tassert.False(t, ms.Status().IsNil())\n\
             \tfillTestSpanStatus(ms.Status())\n\
             \tassert.EqualValues(t, generateTestSpanStatus(), ms.Status())\n\
             }\n"
        );
    }

    #[test]
    fn test_ptr_set_with_test_value_initializes_first() {
        let mut out = CodeBuilder::go();
        out.push_indent();
        status().generate_set_with_test_value(&mut out);
        assert_eq!(
            out.build(),
            "\ttv.Status().InitEmpty()\n\tfillTestSpanStatus(tv.Status())\n"
        );
    }

    #[test]
    fn test_value_accessor_has_no_nil_documentation() {
        let mut out = CodeBuilder::go();
        library().generate_accessors(&span(), &mut out);
        let code = out.build();
        assert!(!code.contains("\"nil\""));
        assert!(code.starts_with(
            "// InstrumentationLibrary returns the instrumentationlibrary associated with this Span.\n"
        ));
        assert!(code.contains(
            "func (ms Span) InstrumentationLibrary() InstrumentationLibrary {\n\
             \treturn newInstrumentationLibrary(&(*ms.orig).InstrumentationLibrary)\n\
             }\n"
        ));
    }

    #[test]
    fn test_value_accessor_test_fills_directly() {
        let mut out = CodeBuilder::go();
        library().generate_accessors_test(&span(), &mut out);
        let code = out.build();
        assert!(!code.contains("IsNil"));
        assert!(!code.contains("ms.InstrumentationLibrary().InitEmpty()"));
        assert!(code.ends_with(
            "\tfillTestInstrumentationLibrary(ms.InstrumentationLibrary())\n\
             \tassert.EqualValues(t, generateTestInstrumentationLibrary(), ms.InstrumentationLibrary())\n\
             }\n"
        ));
    }

    #[test]
    fn test_value_set_with_test_value_skips_init() {
        let mut out = CodeBuilder::go();
        out.push_indent();
        library().generate_set_with_test_value(&mut out);
        assert_eq!(
            out.build(),
            "\tfillTestInstrumentationLibrary(tv.InstrumentationLibrary())\n"
        );
    }

    #[test]
    fn test_copy_to_value_delegates_to_nested_copy() {
        let mut ptr_out = CodeBuilder::go();
        status().generate_copy_to_value(&mut ptr_out);
        assert_eq!(ptr_out.build(), "ms.Status().CopyTo(dest.Status())\n");

        let mut value_out = CodeBuilder::go();
        library().generate_copy_to_value(&mut value_out);
        assert_eq!(
            value_out.build(),
            "ms.InstrumentationLibrary().CopyTo(dest.InstrumentationLibrary())\n"
        );
    }
}
