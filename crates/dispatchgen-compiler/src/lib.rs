//! dispatchgen compiler: turns identifier-to-handler mappings into dispatch code.
//!
//! Pipeline, leaves first:
//! - `mapping` - mapping file parser and validation
//! - `naming` - canonical slot names
//! - `plan` - strategy-specific lookup plans (switch, chain, sparse array)
//! - `code` - ordered line tree used for generated sources
//! - `emit` - renders a plan into interface and implementation units
//! - `writer` - writes units to disk, cleans previous output
//! - `generate` - orchestrates parse, emit, write for files and directories
//! - `dispatch` - in-process dispatcher executing a plan

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod code;
pub mod config;
pub mod dispatch;
pub mod emit;
mod error;
pub mod generate;
pub mod mapping;
pub mod naming;
pub mod plan;
pub mod writer;

#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod plan_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod writer_tests;

pub use config::{Config, Indent, Target};
pub use dispatch::Dispatcher;
pub use emit::{Artifact, emit};
pub use error::{Error, FormatError, PathProblem};
pub use generate::Generator;
pub use mapping::{Entry, Mapping};
pub use naming::CanonicalName;
pub use plan::{Plan, Slot, Strategy, TableGeometry};
pub use writer::{OutputLayout, WrittenArtifact};

pub use dispatchgen_core::{Colors, Handler, Identifier, IdentifierWidth};

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
