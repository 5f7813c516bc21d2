//! Chain strategy: sequential equality tests, first match wins.

use crate::code::Code;
use crate::plan::ChainPlan;

use super::emitter::{Emitter, literal};

impl Emitter<'_> {
    pub(super) fn chain_body(&self, plan: &ChainPlan) -> Vec<Code> {
        let mut out = Vec::new();
        for (i, slot) in plan.tests().iter().enumerate() {
            let test = format!("if (identifier == {}) {{", literal(slot.identifier));
            let line = if i == 0 { test } else { format!("}} else {test}") };
            out.push(Code::line(line));
            out.push(Code::block(vec![self.return_slot(slot)]));
        }
        // No tests means no chain to close, only the fall-through.
        if !out.is_empty() {
            out.push(Code::line("}"));
        }
        out.push(self.return_null());
        out
    }
}
