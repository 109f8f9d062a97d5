//! Test utilities for the Go generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Assert that every `{`, `(` and `[` in Go source is closed in order.
///
/// String and rune literals and `//` comments are skipped. This is a cheap
/// structural check for generated code when no Go toolchain is available.
pub fn assert_balanced_delimiters(code: &str) {
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (line_no, line) in code.lines().enumerate() {
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            match c {
                '/' if chars.as_str().starts_with('/') => break,
                '"' | '\'' | '`' => skip_literal(&mut chars, c),
                '{' | '(' | '[' => stack.push((c, line_no + 1)),
                '}' | ')' | ']' => {
                    let open = match c {
                        '}' => '{',
                        ')' => '(',
                        _ => '[',
                    };
                    match stack.pop() {
                        Some((top, _)) if top == open => {}
                        Some((top, at)) => panic!(
                            "line {}: '{}' closes '{}' opened on line {}",
                            line_no + 1,
                            c,
                            top,
                            at
                        ),
                        None => panic!("line {}: unmatched '{}'", line_no + 1, c),
                    }
                }
                _ => {}
            }
        }
    }

    if let Some((open, at)) = stack.pop() {
        panic!("'{}' opened on line {} is never closed", open, at);
    }
}

fn skip_literal(chars: &mut std::str::Chars<'_>, quote: char) {
    while let Some(c) = chars.next() {
        match c {
            '\\' if quote != '`' => {
                chars.next();
            }
            c if c == quote => return,
            _ => {}
        }
    }
}
