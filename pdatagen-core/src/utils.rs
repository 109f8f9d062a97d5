//! Shared string helpers for code generation.

/// Convert a string to snake_case (e.g., "ResourceSpans" -> "resource_spans")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Render free text as a Go line comment block.
///
/// Every line gets a `// ` prefix; blank lines become a bare `//` so the
/// block stays contiguous for godoc.
pub fn go_comment(text: &str) -> String {
    text.trim_end()
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                "//".to_string()
            } else {
                format!("// {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
