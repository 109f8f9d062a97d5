use std::ops::Range;

use serde::Deserialize;
use toml::Spanned;

use super::StructKind;

/// Kind of a `[[files.structs.fields]]` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Primitive,
    TypedPrimitive,
    MessagePtr,
    MessageValue,
    Slice,
    Oneof,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::TypedPrimitive => "typed_primitive",
            Self::MessagePtr => "message_ptr",
            Self::MessageValue => "message_value",
            Self::Slice => "slice",
            Self::Oneof => "oneof",
        }
    }

    /// Struct kind the `type` key must reference, for struct-valued fields.
    pub fn referenced_struct(&self) -> Option<StructKind> {
        match self {
            Self::MessagePtr => Some(StructKind::MessagePtr),
            Self::MessageValue => Some(StructKind::MessageValue),
            Self::Slice => Some(StructKind::Slice),
            _ => None,
        }
    }

    /// Keys that must be present for this kind.
    /// Whether the generated accessors include `Set<Name>`.
    pub fn has_setter(&self) -> bool {
        matches!(self, Self::Primitive | Self::TypedPrimitive)
    }

    pub(crate) fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Primitive => &["name", "type", "default", "test_value"],
            Self::TypedPrimitive => &["name", "type", "raw_type", "default", "test_value"],
            Self::MessagePtr | Self::MessageValue | Self::Slice => &["name", "type"],
            Self::Oneof => &["copy_func", "test_value", "fill_test"],
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field declaration
///
/// `origin` is the field name on the wrapped Go type. For `primitive` and
/// `typed_primitive`, `type` is the public Go type; for struct-valued kinds
/// it names the referenced wrapper struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub kind: FieldKind,

    /// Accessor name (absent for `oneof`)
    pub name: Option<Spanned<String>>,

    pub origin: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: Option<Spanned<String>>,

    pub raw_type: Option<String>,

    pub default: Option<String>,

    pub test_value: Option<String>,

    /// Skip the generated setter of a `typed_primitive`
    #[serde(default)]
    pub manual_setter: bool,

    /// Hand-written routine copying the active `oneof` alternative
    pub copy_func: Option<String>,

    /// Accessor of the alternative a `oneof` test fixture selects
    pub fill_test: Option<String>,
}

impl FieldDef {
    /// Name identifying the field within its struct: the accessor name, or
    /// the origin field for `oneof`.
    pub fn name(&self) -> &str {
        match &self.name {
            Some(name) => name.get_ref(),
            None => self.origin.get_ref(),
        }
    }

    /// Source range used when reporting errors about this field.
    pub fn span(&self) -> Range<usize> {
        match &self.name {
            Some(name) => name.span(),
            None => self.origin.span(),
        }
    }

    pub fn origin(&self) -> &str {
        self.origin.get_ref()
    }

    pub fn ty(&self) -> Option<&str> {
        self.ty.as_ref().map(|t| t.get_ref().as_str())
    }

    pub(crate) fn has_key(&self, key: &str) -> bool {
        match key {
            "name" => self.name.is_some(),
            "type" => self.ty.is_some(),
            "raw_type" => self.raw_type.is_some(),
            "default" => self.default.is_some(),
            "test_value" => self.test_value.is_some(),
            "copy_func" => self.copy_func.is_some(),
            "fill_test" => self.fill_test.is_some(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_struct() {
        assert_eq!(FieldKind::MessagePtr.referenced_struct(), Some(StructKind::MessagePtr));
        assert_eq!(FieldKind::MessageValue.referenced_struct(), Some(StructKind::MessageValue));
        assert_eq!(FieldKind::Slice.referenced_struct(), Some(StructKind::Slice));
        assert_eq!(FieldKind::Primitive.referenced_struct(), None);
        assert_eq!(FieldKind::Oneof.referenced_struct(), None);
    }

    #[test]
    fn test_has_setter() {
        assert!(FieldKind::Primitive.has_setter());
        assert!(FieldKind::TypedPrimitive.has_setter());
        assert!(!FieldKind::MessagePtr.has_setter());
        assert!(!FieldKind::Oneof.has_setter());
    }

    #[test]
    fn test_oneof_does_not_require_name() {
        assert!(!FieldKind::Oneof.required_keys().contains(&"name"));
        assert!(FieldKind::TypedPrimitive.required_keys().contains(&"raw_type"));
    }
}
