use super::templates::{
    ACCESSOR_PRIMITIVE, ACCESSOR_PRIMITIVE_TEST, ACCESSOR_PRIMITIVE_TYPED,
    ACCESSOR_PRIMITIVE_TYPED_GETTER_ONLY,
};
use crate::{builder::CodeBuilder, structs::BaseStruct, template::Placeholders};

/// A field holding a built-in scalar, read and written as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveField {
    pub(crate) field_name: String,
    pub(crate) origin_field_name: String,
    pub(crate) return_type: String,
    pub(crate) default_val: String,
    pub(crate) test_val: String,
}

impl PrimitiveField {
    pub fn new(
        field_name: impl Into<String>,
        origin_field_name: impl Into<String>,
        return_type: impl Into<String>,
        default_val: impl Into<String>,
        test_val: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            origin_field_name: origin_field_name.into(),
            return_type: return_type.into(),
            default_val: default_val.into(),
            test_val: test_val.into(),
        }
    }

    pub(crate) fn placeholders<'a>(&'a self, ms: &'a dyn BaseStruct) -> Placeholders<'a> {
        Placeholders::new()
            .with("structName", ms.name())
            .with("fieldName", self.field_name.as_str())
            .with("lowerFieldName", self.field_name.to_lowercase())
            .with("returnType", self.return_type.as_str())
            .with("originFieldName", self.origin_field_name.as_str())
            .with("defaultVal", self.default_val.as_str())
            .with("testValue", self.test_val.as_str())
    }

    pub fn generate_accessors(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_PRIMITIVE));
    }

    pub fn generate_accessors_test(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_PRIMITIVE_TEST));
    }

    pub fn generate_set_with_test_value(&self, out: &mut CodeBuilder) {
        push_set_test_value(out, &self.field_name, &self.test_val);
    }

    pub fn generate_copy_to_value(&self, out: &mut CodeBuilder) {
        push_copy_via_setter(out, &self.field_name);
    }
}

/// A primitive field whose public type is a named type over a raw scalar
/// (e.g. `type TimestampUnixNano uint64`).
///
/// The getter converts the raw value to the public type; the setter converts
/// back. With `manual_setter` the setter is left to hand-written code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveTypedField {
    pub(crate) field_name: String,
    pub(crate) origin_field_name: String,
    pub(crate) return_type: String,
    pub(crate) raw_type: String,
    pub(crate) default_val: String,
    pub(crate) test_val: String,
    pub(crate) manual_setter: bool,
}

impl PrimitiveTypedField {
    pub fn new(
        field_name: impl Into<String>,
        origin_field_name: impl Into<String>,
        return_type: impl Into<String>,
        raw_type: impl Into<String>,
        default_val: impl Into<String>,
        test_val: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            origin_field_name: origin_field_name.into(),
            return_type: return_type.into(),
            raw_type: raw_type.into(),
            default_val: default_val.into(),
            test_val: test_val.into(),
            manual_setter: false,
        }
    }

    /// Skip setter generation; a hand-written `Set<Field>` must exist.
    pub fn manual_setter(mut self) -> Self {
        self.manual_setter = true;
        self
    }

    /// Set whether the setter is hand-written.
    pub fn manual_setter_if(mut self, manual: bool) -> Self {
        self.manual_setter = manual;
        self
    }

    pub fn has_manual_setter(&self) -> bool {
        self.manual_setter
    }

    fn accessor_template(&self) -> &'static str {
        if self.manual_setter {
            ACCESSOR_PRIMITIVE_TYPED_GETTER_ONLY
        } else {
            ACCESSOR_PRIMITIVE_TYPED
        }
    }

    pub(crate) fn placeholders<'a>(&'a self, ms: &'a dyn BaseStruct) -> Placeholders<'a> {
        Placeholders::new()
            .with("structName", ms.name())
            .with("fieldName", self.field_name.as_str())
            .with("lowerFieldName", self.field_name.to_lowercase())
            .with("returnType", self.return_type.as_str())
            .with("rawType", self.raw_type.as_str())
            .with("originFieldName", self.origin_field_name.as_str())
            .with("defaultVal", self.default_val.as_str())
            .with("testValue", self.test_val.as_str())
    }

    pub fn generate_accessors(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(self.accessor_template()));
    }

    pub fn generate_accessors_test(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders(ms).expand(ACCESSOR_PRIMITIVE_TEST));
    }

    pub fn generate_set_with_test_value(&self, out: &mut CodeBuilder) {
        push_set_test_value(out, &self.field_name, &self.test_val);
    }

    pub fn generate_copy_to_value(&self, out: &mut CodeBuilder) {
        push_copy_via_setter(out, &self.field_name);
    }
}

fn push_set_test_value(out: &mut CodeBuilder, field_name: &str, test_val: &str) {
    out.push_line(&format!("tv.Set{}({})", field_name, test_val));
}

fn push_copy_via_setter(out: &mut CodeBuilder, field_name: &str) {
    out.push_line(&format!("dest.Set{0}(ms.{0}())", field_name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::MessagePtrStruct;

    fn span() -> MessagePtrStruct {
        MessagePtrStruct::new("Span", "otlptrace.Span")
    }

    fn start_time() -> PrimitiveField {
        PrimitiveField::new("StartTime", "start_time_unix_nano", "uint64", "0", "1234567890")
    }

    fn typed_start_time() -> PrimitiveTypedField {
        PrimitiveTypedField::new(
            "StartTime",
            "StartTimeUnixNano",
            "TimestampUnixNano",
            "uint64",
            "TimestampUnixNano(0)",
            "TimestampUnixNano(1234567890)",
        )
    }

    #[test]
    fn test_placeholders_cover_templates() {
        let ms = span();
        let plain = start_time();
        for template in [ACCESSOR_PRIMITIVE, ACCESSOR_PRIMITIVE_TEST] {
            assert!(plain.placeholders(&ms).missing(template).is_empty());
        }

        let typed = typed_start_time();
        for template in [
            ACCESSOR_PRIMITIVE_TYPED,
            ACCESSOR_PRIMITIVE_TYPED_GETTER_ONLY,
            ACCESSOR_PRIMITIVE_TEST,
        ] {
            assert!(typed.placeholders(&ms).missing(template).is_empty());
        }
    }

    #[test]
    fn test_accessors() {
        let mut out = CodeBuilder::go();
        start_time().generate_accessors(&span(), &mut out);
        insta::assert_snapshot!(out.build(), @r#"
        // StartTime returns the starttime associated with this Span.
        //
        // Important: This causes a runtime error if IsNil() returns "true".
        func (ms Span) StartTime() uint64 {
        	return (*ms.orig).start_time_unix_nano
        }

        // SetStartTime replaces the starttime associated with this Span.
        //
        // Important: This causes a runtime error if IsNil() returns "true".
        func (ms Span) SetStartTime(v uint64) {
        	(*ms.orig).start_time_unix_nano = v
        }
        "#);
    }

    #[test]
    fn test_accessors_test() {
        let mut out = CodeBuilder::go();
        start_time().generate_accessors_test(&span(), &mut out);
        assert_eq!(
            out.build(),
            "func TestSpan_StartTime(t *testing.T) {\n\
             \tms := NewSpan()\n\
             \tms.InitEmpty()\n\
             \tassert.EqualValues(t, 0, ms.StartTime())\n\
             \ttestValStartTime := 1234567890\n\
             \tms.SetStartTime(testValStartTime)\n\
             \tassert.EqualValues(t, testValStartTime, ms.StartTime())\n\
             }\n"
        );
    }

    #[test]
    fn test_set_and_copy() {
        let mut out = CodeBuilder::go();
        out.push_indent();
        let field = start_time();
        field.generate_set_with_test_value(&mut out);
        field.generate_copy_to_value(&mut out);
        assert_eq!(
            out.build(),
            "\ttv.SetStartTime(1234567890)\n\tdest.SetStartTime(ms.StartTime())\n"
        );
    }

    #[test]
    fn test_typed_accessors_cast_both_ways() {
        let mut out = CodeBuilder::go();
        typed_start_time().generate_accessors(&span(), &mut out);
        let code = out.build();
        assert!(code.contains(
            "func (ms Span) StartTime() TimestampUnixNano {\n\
             \treturn TimestampUnixNano((*ms.orig).StartTimeUnixNano)\n\
             }\n"
        ));
        assert!(code.contains(
            "func (ms Span) SetStartTime(v TimestampUnixNano) {\n\
             \t(*ms.orig).StartTimeUnixNano = uint64(v)\n\
             }\n"
        ));
    }

    #[test]
    fn test_manual_setter_suppresses_setter() {
        let field = typed_start_time().manual_setter();
        assert!(field.has_manual_setter());

        let mut out = CodeBuilder::go();
        field.generate_accessors(&span(), &mut out);
        let code = out.build();
        assert!(code.contains("func (ms Span) StartTime() TimestampUnixNano {"));
        assert!(!code.contains("SetStartTime"));
        assert!(!code.contains("uint64(v)"));
    }

    #[test]
    fn test_setter_present_without_flag() {
        let field = typed_start_time().manual_setter_if(false);
        assert!(!field.has_manual_setter());

        let mut out = CodeBuilder::go();
        field.generate_accessors(&span(), &mut out);
        assert!(out.build().contains("func (ms Span) SetStartTime(v TimestampUnixNano) {"));
    }

    #[test]
    fn test_manual_setter_still_used_by_fixtures() {
        let field = typed_start_time().manual_setter();
        let mut out = CodeBuilder::go();
        field.generate_accessors_test(&span(), &mut out);
        field.generate_set_with_test_value(&mut out);
        field.generate_copy_to_value(&mut out);
        let code = out.build();
        assert!(code.contains("\tassert.EqualValues(t, TimestampUnixNano(0), ms.StartTime())\n"));
        assert!(code.contains("tv.SetStartTime(TimestampUnixNano(1234567890))\n"));
        assert!(code.ends_with("dest.SetStartTime(ms.StartTime())\n"));
    }
}
