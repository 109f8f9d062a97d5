//! Field descriptors and their per-kind code emission.
//!
//! A [`Field`] describes one attribute of a generated wrapper struct. Every
//! kind knows how to emit four pieces of Go source into a [`CodeBuilder`]:
//!
//! | Operation | Emits |
//! |---|---|
//! | [`Field::generate_accessors`] | public getter (and setter for primitives) |
//! | [`Field::generate_accessors_test`] | unit test for those accessors |
//! | [`Field::generate_set_with_test_value`] | statement(s) for the `fillTest` helper |
//! | [`Field::generate_copy_to_value`] | statement for the owner's `CopyTo` |
//!
//! Accessor output is a complete top-level declaration terminated by a
//! newline; the other two write single statements at the builder's current
//! indentation.

mod message;
mod oneof;
mod primitive;
mod slice;
mod templates;

pub use message::{MessagePtrField, MessageValueField};
pub use oneof::OneofField;
pub use primitive::{PrimitiveField, PrimitiveTypedField};
pub use slice::SliceField;

use crate::{builder::CodeBuilder, structs::BaseStruct};

/// A field of a generated wrapper struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Ordered sequence of a composite element type.
    Slice(SliceField),
    /// Optional, separately allocated message.
    MessagePtr(MessagePtrField),
    /// Embedded, always-present message.
    MessageValue(MessageValueField),
    /// Built-in scalar.
    Primitive(PrimitiveField),
    /// Named type layered over a built-in scalar.
    PrimitiveTyped(PrimitiveTypedField),
    /// Discriminated union; only one alternative is set at a time.
    Oneof(OneofField),
}

impl Field {
    /// Short kind name, used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Slice(_) => "slice",
            Self::MessagePtr(_) => "message_ptr",
            Self::MessageValue(_) => "message_value",
            Self::Primitive(_) => "primitive",
            Self::PrimitiveTyped(_) => "typed_primitive",
            Self::Oneof(_) => "oneof",
        }
    }

    /// Name identifying the field within its struct.
    ///
    /// Oneof fields have no accessor of their own and are identified by
    /// their origin field.
    pub fn name(&self) -> &str {
        match self {
            Self::Slice(f) => &f.field_name,
            Self::MessagePtr(f) => &f.field_name,
            Self::MessageValue(f) => &f.field_name,
            Self::Primitive(f) => &f.field_name,
            Self::PrimitiveTyped(f) => &f.field_name,
            Self::Oneof(f) => &f.origin_field_name,
        }
    }

    /// Emit the public accessor(s) for this field on `ms`.
    pub fn generate_accessors(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        match self {
            Self::Slice(f) => f.generate_accessors(ms, out),
            Self::MessagePtr(f) => f.generate_accessors(ms, out),
            Self::MessageValue(f) => f.generate_accessors(ms, out),
            Self::Primitive(f) => f.generate_accessors(ms, out),
            Self::PrimitiveTyped(f) => f.generate_accessors(ms, out),
            Self::Oneof(_) => {}
        }
    }

    /// Emit the unit test covering [`Field::generate_accessors`].
    pub fn generate_accessors_test(&self, ms: &dyn BaseStruct, out: &mut CodeBuilder) {
        match self {
            Self::Slice(f) => f.generate_accessors_test(ms, out),
            Self::MessagePtr(f) => f.generate_accessors_test(ms, out),
            Self::MessageValue(f) => f.generate_accessors_test(ms, out),
            Self::Primitive(f) => f.generate_accessors_test(ms, out),
            Self::PrimitiveTyped(f) => f.generate_accessors_test(ms, out),
            Self::Oneof(_) => {}
        }
    }

    /// Emit the statements that stamp the test value into `tv`.
    pub fn generate_set_with_test_value(&self, out: &mut CodeBuilder) {
        match self {
            Self::Slice(f) => f.generate_set_with_test_value(out),
            Self::MessagePtr(f) => f.generate_set_with_test_value(out),
            Self::MessageValue(f) => f.generate_set_with_test_value(out),
            Self::Primitive(f) => f.generate_set_with_test_value(out),
            Self::PrimitiveTyped(f) => f.generate_set_with_test_value(out),
            Self::Oneof(f) => f.generate_set_with_test_value(out),
        }
    }

    /// Emit the statement that deep-copies this field from `ms` into `dest`.
    pub fn generate_copy_to_value(&self, out: &mut CodeBuilder) {
        match self {
            Self::Slice(f) => f.generate_copy_to_value(out),
            Self::MessagePtr(f) => f.generate_copy_to_value(out),
            Self::MessageValue(f) => f.generate_copy_to_value(out),
            Self::Primitive(f) => f.generate_copy_to_value(out),
            Self::PrimitiveTyped(f) => f.generate_copy_to_value(out),
            Self::Oneof(f) => f.generate_copy_to_value(out),
        }
    }
}

impl From<SliceField> for Field {
    fn from(field: SliceField) -> Self {
        Self::Slice(field)
    }
}

impl From<MessagePtrField> for Field {
    fn from(field: MessagePtrField) -> Self {
        Self::MessagePtr(field)
    }
}

impl From<MessageValueField> for Field {
    fn from(field: MessageValueField) -> Self {
        Self::MessageValue(field)
    }
}

impl From<PrimitiveField> for Field {
    fn from(field: PrimitiveField) -> Self {
        Self::Primitive(field)
    }
}

impl From<PrimitiveTypedField> for Field {
    fn from(field: PrimitiveTypedField) -> Self {
        Self::PrimitiveTyped(field)
    }
}

impl From<OneofField> for Field {
    fn from(field: OneofField) -> Self {
        Self::Oneof(field)
    }
}
