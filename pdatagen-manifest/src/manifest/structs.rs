use serde::Deserialize;
use toml::Spanned;

use super::FieldDef;

/// Kind of a `[[files.structs]]` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructKind {
    /// Message reached through `**origin`; may be nil
    MessagePtr,
    /// Message reached through `*origin`; always present
    MessageValue,
    /// Slice of message pointers
    Slice,
}

impl StructKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MessagePtr => "message_ptr",
            Self::MessageValue => "message_value",
            Self::Slice => "slice",
        }
    }
}

impl std::fmt::Display for StructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wrapper struct declaration
///
/// Which keys are meaningful depends on `kind`: message structs take
/// `description` and `fields`, slices take `element`. Parsing validates
/// the combination.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructDef {
    pub kind: StructKind,

    /// Go type name of the wrapper
    pub name: Spanned<String>,

    /// Wrapped Go type, qualified with its package (e.g. `otlptrace.Span`)
    pub origin: Spanned<String>,

    /// Doc comment text for the wrapper type
    pub description: Option<String>,

    /// Element struct of a slice
    pub element: Option<Spanned<String>>,

    /// Fields of a message struct, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn origin(&self) -> &str {
        self.origin.get_ref()
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_ref().map(|e| e.get_ref().as_str())
    }

    pub fn is_message(&self) -> bool {
        matches!(self.kind, StructKind::MessagePtr | StructKind::MessageValue)
    }
}
