//! Canonical names for handler slots and generated classes.

use std::fmt;

use dispatchgen_core::Identifier;
use dispatchgen_core::utils::{capitalize_first, hex};

use crate::mapping::Entry;
use crate::plan::Strategy;

/// Words a slot name must not spell.
///
/// Every C++ keyword and alternative token, the identifiers with special
/// meaning in a class body, and the `table` member of array dispatchers.
const RESERVED: &[&str] = &[
    // keywords
    "alignas", "alignof", "asm", "auto", "bool", "break", "case", "catch", "char", "char8_t",
    "char16_t", "char32_t", "class", "co_await", "co_return", "co_yield", "concept", "const",
    "const_cast", "consteval", "constexpr", "constinit", "continue", "decltype", "default",
    "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern",
    "false", "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
    "namespace", "new", "noexcept", "nullptr", "operator", "private", "protected", "public",
    "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while",
    // alternative tokens
    "and", "and_eq", "bitand", "bitor", "compl", "not", "not_eq", "or", "or_eq", "xor", "xor_eq",
    // special meaning
    "final", "import", "module", "override",
    // generated members
    "table",
];

/// Name of the storage slot holding one handler instance.
///
/// `lowercase(type_name) + hex(identifier)`, e.g. `TCPAnalyzer`/`0x6` gives
/// `tcpanalyzer6`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub fn new(type_name: &str, identifier: Identifier) -> Self {
        Self(format!("{}{}", type_name.to_ascii_lowercase(), hex(identifier)))
    }

    pub fn of(entry: &Entry) -> Self {
        Self::new(&entry.type_name, entry.identifier)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the name collides with a keyword or a generated member.
    pub fn is_reserved(&self) -> bool {
        RESERVED.contains(&self.0.as_str())
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generated class name: `Generated<Strategy><MappingName>`.
pub fn class_name(strategy: Strategy, mapping: &str) -> String {
    format!("Generated{}{}", strategy.label(), capitalize_first(mapping))
}
