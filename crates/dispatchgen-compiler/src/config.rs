//! Configuration for parsing and emission.

use dispatchgen_core::IdentifierWidth;

/// Default upper bound on sparse table length.
pub const DEFAULT_MAX_TABLE_LEN: u64 = 1 << 24;

/// Indentation of nested line blocks in generated sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(u8),
}

impl Indent {
    pub fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(n as usize),
        }
    }

    /// Parse `tab` or a space count.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "tab" {
            return Some(Indent::Tab);
        }
        name.parse().ok().map(Indent::Spaces)
    }
}

/// C++ vocabulary of the generated artifacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    /// Interface every generated dispatcher derives from.
    pub base_class: String,
    /// Pointer target type returned by `lookup`.
    pub handler_type: String,
    /// Parameter type of `lookup`.
    pub identifier_type: String,
    /// Name of the diagnostic method writing every slot's state.
    pub state_method: String,
    /// Null pointer literal.
    pub null: String,
    /// Directory prefix used in `#include` lines of generated units.
    pub include_prefix: String,
    /// Headers included by every interface unit, in order.
    pub includes: Vec<String>,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            base_class: "IMeta".to_string(),
            handler_type: "IAnalyzer".to_string(),
            identifier_type: "identifier_t".to_string(),
            state_method: "stringifyAnalyzersState".to_string(),
            null: "nullptr".to_string(),
            include_prefix: "dispatchers/metaprogramming".to_string(),
            includes: vec![
                "analyzers/All.h".to_string(),
                "dispatchers/metaprogramming/IMeta.h".to_string(),
            ],
        }
    }
}

/// Configuration for a generation run.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) width: IdentifierWidth,
    pub(crate) indent: Indent,
    pub(crate) marker: Option<String>,
    pub(crate) max_table_len: u64,
    pub(crate) target: Target,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: IdentifierWidth::default(),
            indent: Indent::default(),
            marker: None,
            max_table_len: DEFAULT_MAX_TABLE_LEN,
            target: Target::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier width accepted by the parser.
    pub fn width(mut self, value: IdentifierWidth) -> Self {
        self.width = value;
        self
    }

    /// Set the indentation of nested blocks.
    pub fn indent(mut self, value: Indent) -> Self {
        self.indent = value;
        self
    }

    /// Require the first line of every mapping to contain `marker`.
    pub fn marker(mut self, value: Option<String>) -> Self {
        self.marker = value;
        self
    }

    /// Set the largest sparse table the array strategy may emit.
    pub fn max_table_len(mut self, value: u64) -> Self {
        self.max_table_len = value;
        self
    }

    /// Replace the C++ vocabulary.
    pub fn target(mut self, value: Target) -> Self {
        self.target = value;
        self
    }

    pub fn get_width(&self) -> IdentifierWidth {
        self.width
    }

    pub fn get_indent(&self) -> Indent {
        self.indent
    }

    pub fn get_marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    pub fn get_max_table_len(&self) -> u64 {
        self.max_table_len
    }

    pub fn get_target(&self) -> &Target {
        &self.target
    }
}
