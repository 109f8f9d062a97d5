use super::{
    BaseStruct, StructRef,
    templates::{SLICE_STRUCT, SLICE_TEST_HELPERS, SLICE_TESTS},
};
use crate::{builder::CodeBuilder, template::Placeholders};

/// Wrapper around a slice of pointers to messages of a single element type.
///
/// The element must be a [`MessagePtrStruct`](super::MessagePtrStruct): its
/// unexported constructor is called with a `**origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceStruct {
    name: String,
    element: StructRef,
    origin: String,
}

impl SliceStruct {
    pub fn new(name: impl Into<String>, element: StructRef, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element,
            origin: origin.into(),
        }
    }

    pub fn element(&self) -> &StructRef {
        &self.element
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn placeholders(&self) -> Placeholders<'_> {
        Placeholders::new()
            .with("structName", self.name.as_str())
            .with("elementName", self.element.name())
            .with("originName", self.origin.as_str())
    }

    pub fn generate_struct(&self, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders().expand(SLICE_STRUCT));
    }

    pub fn generate_tests(&self, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders().expand(SLICE_TESTS));
    }

    pub fn generate_test_value_helpers(&self, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders().expand(SLICE_TEST_HELPERS));
    }
}

impl BaseStruct for SliceStruct {
    fn name(&self) -> &str {
        &self.name
    }
}
