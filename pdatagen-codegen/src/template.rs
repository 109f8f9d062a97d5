//! Placeholder substitution for parameterized template text.
//!
//! Templates reference values as `${name}`. Expansion scans left to right,
//! replaces every placeholder with the mapped value verbatim and never
//! re-expands inserted text. A `$` that does not open `${` is literal.
//!
//! A placeholder the mapping does not know about is a defect in the
//! generator itself, so [`expand`] panics instead of returning an error.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Ordered mapping from placeholder name to replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders<'a> {
    values: IndexMap<&'static str, Cow<'a, str>>,
}

impl<'a> Placeholders<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a placeholder value.
    pub fn with(mut self, name: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Look up the value for a placeholder.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|v| v.as_ref())
    }

    /// Whether `name` is mapped.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Placeholder names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Names used by `template` that this mapping cannot resolve.
    pub fn missing<'t>(&self, template: &'t str) -> Vec<&'t str> {
        placeholder_names(template)
            .into_iter()
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Shorthand for [`expand`].
    pub fn expand(&self, template: &str) -> String {
        expand(template, self)
    }
}

/// A piece of a scanned template.
enum Segment<'t> {
    Text(&'t str),
    Placeholder(&'t str),
}

/// Split a template into literal text and placeholder names.
///
/// Panics on an unterminated `${`.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find('}') else {
            panic!("unterminated template placeholder in {:?}", template);
        };
        segments.push(Segment::Placeholder(&after_open[..end]));
        rest = &after_open[end + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

/// List the placeholder names used by `template`, in order of appearance.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Text(_) => None,
        })
        .collect()
}

/// Replace every `${name}` in `template` with its mapped value.
///
/// # Panics
///
/// Panics if `template` uses a name missing from `placeholders`, or if a
/// `${` is never closed.
pub fn expand(template: &str, placeholders: &Placeholders<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => match placeholders.get(name) {
                Some(value) => out.push_str(value),
                None => panic!("unresolved template placeholder `{}`", name),
            },
        }
    }
    out
}
