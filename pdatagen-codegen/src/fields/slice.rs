use super::templates::{ACCESSOR_SLICE, ACCESSOR_SLICE_TEST};
use crate::{
    builder::CodeBuilder,
    structs::{BaseStruct, StructRef},
    template::Placeholders,
};

/// A field holding a slice of messages, exposed through a slice wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceField {
    pub(crate) field_name: String,
    pub(crate) origin_field_name: String,
    pub(crate) returns: StructRef,
}

impl SliceField {
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
        Placeholders::new()
            .with("structName", ms.name())
            .with("fieldName", self.field_name.as_str())
            .with("returnType", self.returns.name())
            .with("originFieldName", self.origin_field_name.as_str())
    }

    pub fn generate_accessors(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_SLICE));
    }

    pub fn generate_accessors_test(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_SLICE_TEST));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{structs::MessagePtrStruct, template::placeholder_names};

    fn events() -> SliceField {
        SliceField::new("Events", "Events", StructRef::new("SpanEventSlice"))
    }

    #[test]
    fn test_placeholders_cover_templates() {
        let ms = MessagePtrStruct::new("Span", "otlptrace.Span");
        let field = events();
        let ph = field.placeholders(&ms);
        for template in [ACCESSOR_SLICE, ACCESSOR_SLICE_TEST] {
            assert!(ph.missing(template).is_empty());
            assert!(!placeholder_names(template).is_empty());
        }
    }

    #[test]
    fn test_accessor() {
        let ms = MessagePtrStruct::new("Span", "otlptrace.Span");
        let mut out = CodeBuilder::go();
        events().generate_accessors(&ms, &mut out);
        insta::assert_snapshot!(out.build(), @r#"
        // Events returns the Events associated with this Span.
        //
        // Important: This causes a runtime error if IsNil() returns "true".
        func (ms Span) Events() SpanEventSlice {
        	return newSpanEventSlice(&(*ms.orig).Events)
        }
        "#);
    }

    #[test]
    fn test_accessor_test() {
        let ms = MessagePtrStruct::new("Span", "otlptrace.Span");
        let mut out = CodeBuilder::go();
        events().generate_accessors_test(&ms, &mut out);
        assert_eq!(
            out.build(),
            "func TestSpan_Events(t *testing.T) {\n\
             \tms := NewSpan()\n\
             \tms.InitEmpty()\n\
             \tassert.EqualValues(t, NewSpanEventSlice(), ms.Events())\n\
             \tfillTestSpanEventSlice(ms.Events())\n\
             \ttestValEvents := generateTestSpanEventSlice()\n\
             \tassert.EqualValues(t, testValEvents, ms.Events())\n\
             }\n"
        );
    }

    #[test]
    fn test_set_with_test_value() {
        let mut out = CodeBuilder::go();
        out.push_indent();
        events().generate_set_with_test_value(&mut out);
        assert_eq!(out.build(), "\tfillTestSpanEventSlice(tv.Events())\n");
    }

    #[test]
    fn test_copy_to_value() {
        let mut out = CodeBuilder::go();
        out.push_indent();
        events().generate_copy_to_value(&mut out);
        assert_eq!(out.build(), "\tms.Events().CopyTo(dest.Events())\n");
    }
}
