//! Code builder utility for generating gofmt-indented code.

/// One indentation level; gofmt only emits tabs.
const INDENT: &str = "\t";

/// Growable output buffer for generated code.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for emitters that receive the
/// buffer by reference.
///
/// # Example (Consuming API)
///
/// ```
/// use pdatagen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .line("func main() {")
///     .indent()
///     .line("println(\"Hello\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\tprintln(\"Hello\")\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use pdatagen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func fillTestSpan(tv Span) {")
///     .push_indent()
///     .push_line("tv.SetName(\"test_name\")")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(
///     builder.build(),
///     "func fillTestSpan(tv Span) {\n\ttv.SetName(\"test_name\")\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder for Go source.
    pub fn go() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add multi-line text, one `push_line` per line (mutable).
    ///
    /// Empty lines are emitted without indentation. An empty `text` adds
    /// nothing.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use pdatagen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::go()
    ///     .block_with_close("import (", ")", |b: CodeBuilder| b.line("\"testing\""))
    ///     .build();
    /// assert_eq!(code, "import (\n\t\"testing\"\n)\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
