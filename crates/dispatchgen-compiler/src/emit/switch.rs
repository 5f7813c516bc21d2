//! Switch strategy: one `case` per entry, `default` returns null.

use crate::code::Code;
use crate::plan::SwitchPlan;

use super::emitter::{Emitter, literal};

impl Emitter<'_> {
    pub(super) fn switch_body(&self, plan: &SwitchPlan) -> Vec<Code> {
        let mut cases = Vec::with_capacity(plan.cases().len() * 2 + 2);
        for slot in plan.cases() {
            cases.push(Code::line(format!("case {}:", literal(slot.identifier))));
            cases.push(Code::block(vec![self.return_slot(slot)]));
        }
        cases.push(Code::line("default:"));
        cases.push(Code::block(vec![self.return_null()]));

        vec![
            Code::line("switch (identifier) {"),
            Code::block(cases),
            Code::line("}"),
        ]
    }
}
