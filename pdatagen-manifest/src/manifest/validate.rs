//! Validation context and utilities for manifest parsing.

use std::{collections::HashMap, ops::Range, sync::Arc};

use toml::Spanned;

use super::{FieldDef, FieldKind, Manifest, StructDef, StructKind};
use crate::{
    Result,
    error::{SourceContext, to_span},
};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested tables.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "pdata.toml");
/// ctx.validate_name(&package.name, "package")?;
///
/// // For nested validation
/// let nested = ctx.push("trace").push("Span");
/// nested.validate_exported_name(&field.name, "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["trace", "Span"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'trace.Span'" or just "struct" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate that a name is a valid Go identifier and not a keyword.
    pub fn validate_name(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        self.validate_identifier_at(name.get_ref(), kind, name.span())
    }

    /// [`validate_name`](Self::validate_name) for a value without its own
    /// span, reported at `span`.
    pub fn validate_identifier_at(&self, name: &str, kind: &str, span: Range<usize>) -> Result<()> {
        let span = Some(to_span(span));

        if is_go_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Like [`validate_name`](Self::validate_name), and the name must be
    /// exported (start with an uppercase letter).
    pub fn validate_exported_name(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        self.validate_name(name, kind)?;

        if !name.get_ref().starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(self.source.invalid_identifier_error(
                name.get_ref(),
                self.context_for(kind),
                "name must start with an uppercase letter so the generated API is exported",
                Some(to_span(name.span())),
            ));
        }

        Ok(())
    }

    fn missing_key(&self, key: &'static str, what: String, span: Range<usize>) -> Box<crate::Error> {
        self.source.missing_key_error(key, self.context_for(&what), span)
    }
}

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Check if a name is a Go reserved keyword
pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Validate that a name is a valid Go identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Methods generated on every message struct; fields cannot take these names.
pub(crate) const GENERATED_METHODS: &[&str] = &["CopyTo", "InitEmpty", "IsNil"];

/// Location and kind of every declared struct, keyed by name.
type StructIndex<'a> = HashMap<&'a str, (StructKind, Range<usize>)>;

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<()> {
    ctx.validate_name(&manifest.package.name, "package")?;

    if manifest.files.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("pdata.toml declares no [[files]]"));
    }

    // Keyed by output file name: `metricsData` and `metrics_data` collide.
    let mut files: HashMap<String, Range<usize>> = HashMap::new();
    let mut index = StructIndex::new();

    for file in &manifest.files {
        ctx.validate_name(&file.name, "file")?;
        let output = file.output_name();
        if let Some(first) = files.insert(output.clone(), file.name.span()) {
            return Err(ctx.source_context().duplicate_name_error(
                output,
                "output file",
                first,
                file.name.span(),
            ));
        }

        let file_ctx = ctx.push(file.name());
        for def in &file.structs {
            def.validate(&file_ctx)?;
            if let Some((_, first)) = index.insert(def.name(), (def.kind, def.name.span())) {
                return Err(ctx.source_context().duplicate_name_error(
                    def.name(),
                    "struct",
                    first,
                    def.name.span(),
                ));
            }
        }
    }

    // References are resolved once every struct is known, so declaration
    // order does not matter.
    for def in manifest.structs() {
        def.validate_references(ctx, &index)?;
    }

    Ok(())
}

impl StructDef {
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_exported_name(&self.name, "struct")?;

        if self.origin().trim().is_empty() {
            return Err(ctx
                .source_context()
                .validation_error_at("origin cannot be empty", to_span(self.origin.span())));
        }

        let what = format!("{} struct '{}'", self.kind, self.name());
        match self.kind {
            StructKind::Slice => {
                if self.element.is_none() {
                    return Err(ctx.missing_key("element", what, self.name.span()));
                }
                if !self.fields.is_empty() || self.description.is_some() {
                    return Err(ctx.source_context().validation_error_at(
                        "slice structs take only name, element and origin",
                        to_span(self.name.span()),
                    ));
                }
            }
            StructKind::MessagePtr | StructKind::MessageValue => {
                if let Some(element) = &self.element {
                    return Err(ctx.source_context().validation_error_at(
                        "only slice structs take an element",
                        to_span(element.span()),
                    ));
                }
            }
        }

        let struct_ctx = ctx.push(self.name());
        let mut names: HashMap<&str, Range<usize>> = HashMap::new();
        for field in &self.fields {
            field.validate(&struct_ctx)?;
            if field.kind == FieldKind::Oneof {
                continue;
            }
            if GENERATED_METHODS.contains(&field.name()) {
                return Err(ctx.source_context().invalid_identifier_error(
                    field.name(),
                    struct_ctx.context_for("field"),
                    "name collides with a method generated for every struct",
                    Some(to_span(field.span())),
                ));
            }
            if let Some(first) = names.insert(field.name(), field.span()) {
                return Err(ctx.source_context().duplicate_name_error(
                    field.name(),
                    "field",
                    first,
                    field.span(),
                ));
            }
        }

        // Primitive fields also get `Set<Name>`, which must not shadow another accessor.
        for field in self.fields.iter().filter(|f| f.kind.has_setter()) {
            let setter = format!("Set{}", field.name());
            if let Some(first) = names.get(setter.as_str()) {
                return Err(ctx.source_context().duplicate_name_error(
                    setter,
                    "method",
                    first.clone(),
                    field.span(),
                ));
            }
        }

        Ok(())
    }

    fn validate_references(&self, ctx: &ParseContext, index: &StructIndex) -> Result<()> {
        if let Some(element) = &self.element {
            check_reference(
                ctx,
                element,
                StructKind::MessagePtr,
                &format!("slice '{}'", self.name()),
                index,
            )?;
        }

        for field in &self.fields {
            if let (Some(expected), Some(ty)) = (field.kind.referenced_struct(), &field.ty) {
                check_reference(
                    ctx,
                    ty,
                    expected,
                    &format!("field '{}.{}'", self.name(), field.name()),
                    index,
                )?;
            }
        }

        Ok(())
    }
}

impl FieldDef {
    fn validate(&self, ctx: &ParseContext) -> Result<()> {
        let what = format!("{} field '{}'", self.kind, self.name());
        for &key in self.kind.required_keys() {
            if !self.has_key(key) {
                return Err(ctx.missing_key(key, what, self.span()));
            }
        }

        match &self.name {
            Some(name) if self.kind == FieldKind::Oneof => {
                return Err(ctx.source_context().validation_error_at(
                    "oneof fields are identified by origin and take no name",
                    to_span(name.span()),
                ));
            }
            Some(name) => ctx.validate_exported_name(name, "field")?,
            None => {}
        }

        ctx.validate_name(&self.origin, "origin")?;
        if let Some(copy_func) = &self.copy_func {
            ctx.validate_identifier_at(copy_func, "copy_func", self.origin.span())?;
        }
        if let Some(fill_test) = &self.fill_test {
            ctx.validate_identifier_at(fill_test, "fill_test", self.origin.span())?;
        }

        if self.manual_setter && self.kind != FieldKind::TypedPrimitive {
            return Err(ctx.source_context().validation_error_at(
                "manual_setter only applies to typed_primitive fields",
                to_span(self.span()),
            ));
        }

        Ok(())
    }
}

fn check_reference(
    ctx: &ParseContext,
    name: &Spanned<String>,
    expected: StructKind,
    referenced_by: &str,
    index: &StructIndex,
) -> Result<()> {
    match index.get(name.get_ref().as_str()) {
        None => Err(ctx
            .source_context()
            .unknown_struct_error(name.get_ref(), referenced_by, name.span())),
        Some((found, _)) if *found != expected => Err(ctx.source_context().kind_mismatch_error(
            name.get_ref(),
            expected.as_str(),
            found.as_str(),
            name.span(),
        )),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanned(src: &str, value: &str) -> Spanned<String> {
        #[derive(serde::Deserialize)]
        struct Holder {
            name: Spanned<String>,
        }
        let holder: Holder = toml::from_str(src).unwrap();
        assert_eq!(holder.name.get_ref(), value);
        holder.name
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("pdata").is_none());
        assert!(validate_identifier("Span").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("metrics_v1").is_none());
        assert!(validate_identifier("Int64DataPoint").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("my-file").is_some());
        assert!(validate_identifier("span.name").is_some());
        assert!(validate_identifier("with space").is_some());
    }

    #[test]
    fn test_is_go_keyword() {
        assert!(is_go_keyword("func"));
        assert!(is_go_keyword("type"));
        assert!(is_go_keyword("range"));
        assert!(!is_go_keyword("Type"));
        assert!(!is_go_keyword("span"));
    }

    #[test]
    fn test_parse_context_push() {
        let ctx = ParseContext::new("", "pdata.toml");
        let nested = ctx.push("trace").push("Span");
        assert_eq!(nested.path_string(), "trace.Span");
        assert_eq!(ctx.context_for("file"), "file");
        assert_eq!(nested.context_for("field"), "field in 'trace.Span'");
    }

    #[test]
    fn test_validate_name_keyword() {
        let src = "name = \"func\"";
        let ctx = ParseContext::new(src, "pdata.toml");
        let err = ctx.validate_name(&spanned(src, "func"), "package").unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_validate_exported_name() {
        let src = "name = \"span\"";
        let ctx = ParseContext::new(src, "pdata.toml");
        let name = spanned(src, "span");
        assert!(ctx.validate_name(&name, "struct").is_ok());
        let err = ctx.validate_exported_name(&name, "struct").unwrap_err();
        assert_eq!(err.to_string(), "invalid struct name 'span'");
    }
}
