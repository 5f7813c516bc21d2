//! Artifact layout shared by all strategies.

use dispatchgen_core::Identifier;

use crate::code::Code;
use crate::config::Target;
use crate::mapping::Mapping;
use crate::naming::class_name;
use crate::plan::{Plan, Slot, Strategy};
use crate::{Config, Result};

use super::Artifact;

/// Emit the artifact for `mapping` under `strategy`.
///
/// Fails only where the plan does: the array strategy rejects an empty
/// mapping and oversized tables.
pub fn emit(mapping: &Mapping, strategy: Strategy, config: &Config) -> Result<Artifact> {
    let plan = Plan::build(strategy, mapping, config)?;
    let class_name = class_name(strategy, mapping.name());

    let emitter = Emitter {
        target: &config.target,
        class_name: &class_name,
        plan: &plan,
    };
    let interface = emitter.interface();
    let implementation = emitter.implementation();

    Ok(Artifact {
        class_name,
        mapping: mapping.name().to_string(),
        interface,
        implementation,
        plan,
    })
}

/// Renders one plan into line trees.
pub(super) struct Emitter<'a> {
    pub(super) target: &'a Target,
    pub(super) class_name: &'a str,
    pub(super) plan: &'a Plan,
}

impl Emitter<'_> {
    fn interface(&self) -> Vec<Code> {
        let t = self.target;

        let mut out = vec![Code::line("#pragma once"), Code::line("")];
        out.extend(
            t.includes
                .iter()
                .map(|include| Code::line(format!("#include \"{include}\""))),
        );
        out.push(Code::line(""));
        out.push(Code::line(format!(
            "class {} : public {} {{",
            self.class_name, t.base_class
        )));

        out.push(Code::line("public:"));
        out.push(Code::block(vec![Code::line(format!(
            "{}* lookup({} identifier) override;",
            t.handler_type, t.identifier_type
        ))]));

        out.push(Code::line("private:"));
        let mut members = vec![Code::line(format!(
            "void {}(std::ostream &os) const override;",
            t.state_method
        ))];
        members.extend(
            self.plan
                .dump_order()
                .iter()
                .map(|slot| Code::line(format!("{} {};", slot.type_name, slot.name))),
        );
        if let Plan::Array(table) = self.plan {
            members.extend(self.table_member(table));
        }
        out.push(Code::block(members));

        out.push(Code::line("};"));
        out
    }

    fn implementation(&self) -> Vec<Code> {
        let t = self.target;

        let body = match self.plan {
            Plan::Switch(plan) => self.switch_body(plan),
            Plan::Chain(plan) => self.chain_body(plan),
            Plan::Array(table) => self.array_body(table),
        };
        let state = self
            .plan
            .dump_order()
            .iter()
            .map(|slot| Code::line(format!("os << {} << \"\\n\";", slot.name)))
            .collect();

        vec![
            Code::line(format!(
                "#include \"{}/{}.h\"",
                t.include_prefix, self.class_name
            )),
            Code::line(""),
            Code::line(format!(
                "{}* {}::lookup({} identifier) {{",
                t.handler_type, self.class_name, t.identifier_type
            )),
            Code::block(body),
            Code::line("}"),
            Code::line(""),
            Code::line(format!(
                "void {}::{}(std::ostream &os) const {{",
                self.class_name, t.state_method
            )),
            Code::block(state),
            Code::line("}"),
        ]
    }

    pub(super) fn return_slot(&self, slot: &Slot) -> Code {
        Code::line(format!("return &{};", slot.name))
    }

    pub(super) fn return_null(&self) -> Code {
        Code::line(format!("return {};", self.target.null))
    }
}

/// C++ literal for an identifier (`0x86dd`).
pub(super) fn literal(identifier: Identifier) -> String {
    format!("{identifier:#x}")
}
