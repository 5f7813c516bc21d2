//! C++ emission from lookup plans.
//!
//! Every strategy produces the same artifact shape: an interface unit
//! declaring the dispatcher class, and an implementation unit defining
//! `lookup` and the state dump. Only the body of `lookup` (and the array
//! strategy's table member) differs:
//! - `switch` - one `case` per entry
//! - `chain` - `if`/`else if` equality tests
//! - `array` - bounds-checked access into a gap-filled table

mod array;
mod chain;
mod emitter;
mod switch;


use crate::code::{Code, render};
use crate::config::Indent;
use crate::plan::{Plan, Strategy};

pub use emitter::emit;

/// Interface and implementation units emitted for one mapping and strategy.
#[derive(Clone, Debug)]
pub struct Artifact {
    /// `Generated<Strategy><Mapping>`
    pub class_name: String,
    pub mapping: String,
    pub interface: Vec<Code>,
    pub implementation: Vec<Code>,
    /// The plan the units were rendered from.
    pub plan: Plan,
}

impl Artifact {
    pub fn strategy(&self) -> Strategy {
        self.plan.strategy()
    }

    pub fn interface_file_name(&self) -> String {
        format!("{}.h", self.class_name)
    }

    pub fn implementation_file_name(&self) -> String {
        format!("{}.cpp", self.class_name)
    }

    pub fn render_interface(&self, indent: Indent) -> String {
        render(&self.interface, &indent.unit())
    }

    pub fn render_implementation(&self, indent: Indent) -> String {
        render(&self.implementation, &indent.unit())
    }
}
