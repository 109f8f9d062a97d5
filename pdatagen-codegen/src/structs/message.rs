use pdatagen_core::go_comment;

use super::{
    BaseStruct, push_section,
    templates::{
        FILL_TEST_HEADER, MESSAGE_PTR_COPY_TO_HEADER, MESSAGE_PTR_GENERATE_TEST,
        MESSAGE_PTR_STRUCT, MESSAGE_PTR_TESTS, MESSAGE_VALUE_COPY_TO_HEADER,
        MESSAGE_VALUE_GENERATE_TEST, MESSAGE_VALUE_STRUCT, MESSAGE_VALUE_TESTS,
    },
};
use crate::{builder::CodeBuilder, fields::Field, template::Placeholders};

/// Template set that distinguishes pointer-backed from value-backed messages.
struct Layout {
    declaration: &'static str,
    copy_to_header: &'static str,
    tests: &'static str,
    generate_test: &'static str,
}

const PTR_LAYOUT: Layout = Layout {
    declaration: MESSAGE_PTR_STRUCT,
    copy_to_header: MESSAGE_PTR_COPY_TO_HEADER,
    tests: MESSAGE_PTR_TESTS,
    generate_test: MESSAGE_PTR_GENERATE_TEST,
};

const VALUE_LAYOUT: Layout = Layout {
    declaration: MESSAGE_VALUE_STRUCT,
    copy_to_header: MESSAGE_VALUE_COPY_TO_HEADER,
    tests: MESSAGE_VALUE_TESTS,
    generate_test: MESSAGE_VALUE_GENERATE_TEST,
};

/// A message wrapped through a pointer-to-pointer, so it can be "nil".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePtrStruct {
    name: String,
    origin: String,
    description: Option<String>,
    fields: Vec<Field>,
    cyclic: Vec<String>,
}

impl MessagePtrStruct {
    /// Create a struct named `name` wrapping the Go type `origin`
    /// (e.g. `otlptrace.Span`).
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            description: None,
            fields: Vec::new(),
            cyclic: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add a field whose type leads back to this struct. It gets accessors
    /// and tests like any other field but `fillTest` leaves it unset.
    pub fn cyclic_field(mut self, field: impl Into<Field>) -> Self {
        let field = field.into();
        self.cyclic.push(field.name().to_string());
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Names of fields added through `cyclic_field`.
    pub fn cyclic_fields(&self) -> &[String] {
        &self.cyclic
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn view(&self) -> MessageView<'_> {
        MessageView {
            name: &self.name,
            origin: &self.origin,
            description: self.description.as_deref(),
            fields: &self.fields,
            cyclic: &self.cyclic,
            layout: &PTR_LAYOUT,
        }
    }

    pub fn generate_struct(&self, out: &mut CodeBuilder) {
        self.view().generate_struct(out);
    }

    pub fn generate_tests(&self, out: &mut CodeBuilder) {
        self.view().generate_tests(out);
    }

    pub fn generate_test_value_helpers(&self, out: &mut CodeBuilder) {
        self.view().generate_test_value_helpers(out);
    }
}

impl BaseStruct for MessagePtrStruct {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A message wrapped through a single pointer; always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageValueStruct {
    name: String,
    origin: String,
    description: Option<String>,
    fields: Vec<Field>,
    cyclic: Vec<String>,
}

impl MessageValueStruct {
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            description: None,
            fields: Vec::new(),
            cyclic: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add a field whose type leads back to this struct. It gets accessors
    /// and tests like any other field but `fillTest` leaves it unset.
    pub fn cyclic_field(mut self, field: impl Into<Field>) -> Self {
        let field = field.into();
        self.cyclic.push(field.name().to_string());
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Names of fields added through `cyclic_field`.
    pub fn cyclic_fields(&self) -> &[String] {
        &self.cyclic
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn view(&self) -> MessageView<'_> {
        MessageView {
            name: &self.name,
            origin: &self.origin,
            description: self.description.as_deref(),
            fields: &self.fields,
            cyclic: &self.cyclic,
            layout: &VALUE_LAYOUT,
        }
    }

    pub fn generate_struct(&self, out: &mut CodeBuilder) {
        self.view().generate_struct(out);
    }

    pub fn generate_tests(&self, out: &mut CodeBuilder) {
        self.view().generate_tests(out);
    }

    pub fn generate_test_value_helpers(&self, out: &mut CodeBuilder) {
        self.view().generate_test_value_helpers(out);
    }
}

impl BaseStruct for MessageValueStruct {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Borrowed view shared by both message kinds.
struct MessageView<'a> {
    name: &'a str,
    origin: &'a str,
    description: Option<&'a str>,
    fields: &'a [Field],
    cyclic: &'a [String],
    layout: &'static Layout,
}

impl BaseStruct for MessageView<'_> {
    fn name(&self) -> &str {
        self.name
    }
}

impl MessageView<'_> {
    fn placeholders(&self) -> Placeholders<'_> {
        let description = match self.description.map(str::trim) {
            Some(text) if !text.is_empty() => go_comment(text),
            _ => format!("// {} is a wrapper around {}.", self.name, self.origin),
        };
        Placeholders::new()
            .with("structName", self.name)
            .with("originName", self.origin)
            .with("description", description)
    }

    fn generate_struct(&self, out: &mut CodeBuilder) {
        let ph = self.placeholders();
        out.push_text(&ph.expand(self.layout.declaration));

        for field in self.fields {
            push_section(out, |b| field.generate_accessors(self, b));
        }

        out.push_blank();
        out.push_text(&ph.expand(self.layout.copy_to_header));
        out.push_indent();
        for field in self.fields {
            field.generate_copy_to_value(out);
        }
        out.push_dedent();
        out.push_line("}");
    }

    fn generate_tests(&self, out: &mut CodeBuilder) {
        out.push_text(&self.placeholders().expand(self.layout.tests));
        for field in self.fields {
            push_section(out, |b| field.generate_accessors_test(self, b));
        }
    }

    fn generate_test_value_helpers(&self, out: &mut CodeBuilder) {
        let ph = self.placeholders();
        out.push_text(&ph.expand(self.layout.generate_test));
        out.push_blank();
        out.push_text(&ph.expand(FILL_TEST_HEADER));
        out.push_indent();
        // Filling a field that leads back here would recurse without end.
        for field in self.fields.iter().filter(|f| !self.cyclic.iter().any(|c| c == f.name())) {
            field.generate_set_with_test_value(out);
        }
        out.push_dedent();
        out.push_line("}");
    }
}
