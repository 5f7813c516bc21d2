//! Ordered line tree for generated sources.
//!
//! Emitters build `Code` values instead of text. A `Block` only means
//! "one indentation level deeper"; it carries no other structure.

/// A source line or an indented block of nested code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Code {
    Line(String),
    Block(Vec<Code>),
}

impl Code {
    pub fn line(text: impl Into<String>) -> Self {
        Code::Line(text.into())
    }

    pub fn block(items: Vec<Code>) -> Self {
        Code::Block(items)
    }
}

/// Render `code` as text, one `\n`-terminated line per `Line`.
///
/// Each nesting level prefixes `indent` once more. Empty lines stay empty.
pub fn render(code: &[Code], indent: &str) -> String {
    let mut out = String::new();
    render_into(&mut out, code, indent, 0);
    out
}

fn render_into(out: &mut String, code: &[Code], indent: &str, depth: usize) {
    for item in code {
        match item {
            Code::Line(text) => {
                if !text.is_empty() {
                    for _ in 0..depth {
                        out.push_str(indent);
                    }
                    out.push_str(text);
                }
                out.push('\n');
            }
            Code::Block(items) => render_into(out, items, indent, depth + 1),
        }
    }
}
