//! Test helpers.

use crate::{Config, Mapping};

/// Marker line used by every fixture.
pub const MARKER: &str = "# ANALYZERS";

/// Build a validated mapping named `name` from fixture text.
pub fn mapping(name: &str, source: &str) -> Mapping {
    Mapping::from_source(name, source, &Config::default())
        .unwrap_or_else(|e| panic!("fixture '{name}' should be valid: {e}"))
}

/// The `{1: A, 6: B, 17: C}` mapping used throughout the plan tests.
pub fn abc() -> Mapping {
    mapping("abc", "# ANALYZERS\n1 A\n6 B\n11 C\n")
}

/// Mapping with the well-known Zeek identifiers, deliberately unsorted.
pub fn zeek() -> Mapping {
    mapping(
        "zeek",
        indoc::indoc! {"
            # ANALYZERS
            86dd IPv6Analyzer
            1 ETHAnalyzer
            6 TCPAnalyzer
            800 IPv4Analyzer
            11 UDPAnalyzer
        "},
    )
}

/// Mapping with a marker and no entries.
pub fn empty() -> Mapping {
    mapping("empty", "# ANALYZERS\n")
}
