//! Text rendering primitives shared by every manifest node.
//!
//! Quoting, indentation, call forms and list layout all live here so that
//! every node kind produces identically shaped source text.

/// Indentation unit for nested blocks.
pub const INDENT: &str = "\t";

/// A manifest node that can produce its source text.
///
/// Rendering is total: every structurally complete node renders, and
/// rendering the same value twice yields identical text.
pub trait Render {
    /// Render this node as manifest source text.
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Quote a value as a Swift string literal.
///
/// An empty value still renders as `""`.
pub fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render an enumerated value as `.symbol`.
pub fn symbol(name: &str) -> String {
    format!(".{}", name)
}

/// Indent every line of `block` by one level.
pub fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an ordered collection of entries.
///
/// `[]` when empty; otherwise one entry per line, indented one level and
/// separated by commas. Every node collection in the manifest goes through
/// this function.
pub fn bracketed_list<I>(entries: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let entries: Vec<String> = entries.into_iter().collect();
    if entries.is_empty() {
        return "[]".to_string();
    }
    format!("[\n{}\n]", indent(&entries.join(",\n")))
}

/// Render plain strings as an inline array literal: `["a", "b"]`.
pub fn quoted_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quoted(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Argument accumulator for a single call expression.
///
/// Arguments are kept in the order they are pushed; optional helpers only
/// push when a value is present.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    args: Vec<String>,
}

impl Arguments {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Arguments { args: Vec::new() }
    }

    /// Push an unlabeled argument.
    pub fn push(&mut self, value: impl Into<String>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    /// Push `label: value`.
    pub fn labeled(&mut self, label: &str, value: impl AsRef<str>) -> &mut Self {
        self.args.push(format!("{}: {}", label, value.as_ref()));
        self
    }

    /// Push `label: "value"` when a value is present.
    pub fn quoted_opt(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.labeled(label, quoted(value));
        }
        self
    }

    /// Push `label: ["a", "b"]` when `values` is non-empty.
    pub fn strings(&mut self, label: &str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.labeled(label, quoted_list(values));
        }
        self
    }

    /// Push `label: <rendered node>` when a node is present.
    pub fn node_opt<T: Render>(&mut self, label: &str, node: Option<&T>) -> &mut Self {
        if let Some(node) = node {
            self.labeled(label, node.render());
        }
        self
    }

    /// Push `label: [...]` when the collection is non-empty.
    pub fn list<T: Render>(&mut self, label: &str, list: &super::list::NodeList<T>) -> &mut Self {
        if !list.is_empty() {
            self.labeled(label, list.render());
        }
        self
    }

    /// Number of arguments pushed so far.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments were pushed.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Render as a multi-line call: one argument per indented line.
    pub fn into_call(self, keyword: &str) -> String {
        format!("{}(\n{}\n)", keyword, indent(&self.args.join(",\n")))
    }

    /// Render as a single-line call: `keyword(a, b)`.
    pub fn into_inline_call(self, keyword: &str) -> String {
        format!("{}({})", keyword, self.args.join(", "))
    }
}
