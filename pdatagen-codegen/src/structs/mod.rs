//! Wrapper struct descriptors that own fields.
//!
//! Each struct kind renders three pieces into a [`CodeBuilder`]:
//! the declaration (type, constructors, accessors, `CopyTo`), the unit
//! tests, and the `generateTest`/`fillTest` helpers the tests rely on.

mod message;
mod slice;
mod templates;

pub use message::{MessagePtrStruct, MessageValueStruct};
pub use slice::SliceStruct;

use crate::builder::CodeBuilder;

/// Capability every owning struct exposes to its fields.
pub trait BaseStruct {
    /// Display name used for receivers, constructors and test names.
    fn name(&self) -> &str;
}

/// Handle to a struct descriptor, referenced by name.
///
/// Fields hold a `StructRef` rather than the descriptor itself so that a
/// struct may contain fields of its own type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructRef {
    name: String,
}

impl StructRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl BaseStruct for StructRef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A generated wrapper struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Struct {
    MessagePtr(MessagePtrStruct),
    MessageValue(MessageValueStruct),
    Slice(SliceStruct),
}

impl Struct {
    /// Short kind name, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MessagePtr(_) => "message_ptr",
            Self::MessageValue(_) => "message_value",
            Self::Slice(_) => "slice",
        }
    }

    /// Reference to this struct, for use by fields of other structs.
    pub fn to_ref(&self) -> StructRef {
        StructRef::new(self.name())
    }

    /// Number of fields (slices have none).
    pub fn field_count(&self) -> usize {
        match self {
            Self::MessagePtr(s) => s.fields().len(),
            Self::MessageValue(s) => s.fields().len(),
            Self::Slice(_) => 0,
        }
    }

    /// Emit the type declaration and all of its methods.
    pub fn generate_struct(&self, out: &mut CodeBuilder) {
        match self {
            Self::MessagePtr(s) => s.generate_struct(out),
            Self::MessageValue(s) => s.generate_struct(out),
            Self::Slice(s) => s.generate_struct(out),
        }
    }

    /// Emit the unit tests for the struct and its accessors.
    pub fn generate_tests(&self, out: &mut CodeBuilder) {
        match self {
            Self::MessagePtr(s) => s.generate_tests(out),
            Self::MessageValue(s) => s.generate_tests(out),
            Self::Slice(s) => s.generate_tests(out),
        }
    }

    /// Emit `generateTest<Name>` and `fillTest<Name>`.
    pub fn generate_test_value_helpers(&self, out: &mut CodeBuilder) {
        match self {
            Self::MessagePtr(s) => s.generate_test_value_helpers(out),
            Self::MessageValue(s) => s.generate_test_value_helpers(out),
            Self::Slice(s) => s.generate_test_value_helpers(out),
        }
    }
}

/// Render `f` into a scratch buffer and, if it produced anything, append it
/// to `out` after a blank line.
pub(crate) fn push_section(out: &mut CodeBuilder, f: impl FnOnce(&mut CodeBuilder)) {
    let mut section = CodeBuilder::go();
    f(&mut section);
    if !section.is_empty() {
        out.push_blank();
        out.push_raw(section.as_str());
    }
}

impl BaseStruct for Struct {
    fn name(&self) -> &str {
        match self {
            Self::MessagePtr(s) => s.name(),
            Self::MessageValue(s) => s.name(),
            Self::Slice(s) => s.name(),
        }
    }
}

impl From<MessagePtrStruct> for Struct {
    fn from(s: MessagePtrStruct) -> Self {
        Self::MessagePtr(s)
    }
}

impl From<MessageValueStruct> for Struct {
    fn from(s: MessageValueStruct) -> Self {
        Self::MessageValue(s)
    }
}

impl From<SliceStruct> for Struct {
    fn from(s: SliceStruct) -> Self {
        Self::Slice(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::PrimitiveField;

    #[test]
    fn test_struct_ref_name() {
        let r = StructRef::new("SpanStatus");
        assert_eq!(r.name(), "SpanStatus");
        assert_eq!(BaseStruct::name(&r), "SpanStatus");
    }

    #[test]
    fn test_kind_and_ref() {
        let span: Struct = MessagePtrStruct::new("Span", "otlptrace.Span").into();
        let slice: Struct =
            SliceStruct::new("SpanSlice", StructRef::new("Span"), "otlptrace.Span").into();

        assert_eq!(span.kind(), "message_ptr");
        assert_eq!(slice.kind(), "slice");
        assert_eq!(span.to_ref(), StructRef::new("Span"));
        assert_eq!(slice.name(), "SpanSlice");
    }

    #[test]
    fn test_field_count() {
        let span: Struct = MessagePtrStruct::new("Span", "otlptrace.Span")
            .field(PrimitiveField::new("Name", "Name", "string", r#""""#, r#""n""#))
            .into();
        let slice: Struct =
            SliceStruct::new("SpanSlice", StructRef::new("Span"), "otlptrace.Span").into();

        assert_eq!(span.field_count(), 1);
        assert_eq!(slice.field_count(), 0);
    }
}
