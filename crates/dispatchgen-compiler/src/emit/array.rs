//! Sparse array strategy.
//!
//! The table covers every identifier in `[lo, hi]`; gaps hold the null
//! literal. `lookup` rebases the identifier onto the table and bounds-checks
//! it before touching `table`, so identifiers outside the range never index
//! out of bounds.

use crate::code::Code;
use crate::plan::SparseTable;

use super::emitter::{Emitter, literal};

impl Emitter<'_> {
    /// The `table` member, one entry per position.
    pub(super) fn table_member(&self, table: &SparseTable) -> Vec<Code> {
        let entries = table
            .positions()
            .map(|position| match position {
                Some(slot) => Code::line(format!("&{},", slot.name)),
                None => Code::line(format!("{},", self.target.null)),
            })
            .collect();

        vec![
            Code::line(format!(
                "{}* table[{}] = {{",
                self.target.handler_type,
                table.len()
            )),
            Code::block(entries),
            Code::line("};"),
        ]
    }

    pub(super) fn array_body(&self, table: &SparseTable) -> Vec<Code> {
        vec![
            Code::line(format!(
                "int64_t index = static_cast<int64_t>(identifier) - {};",
                literal(table.lo())
            )),
            Code::line(format!(
                "if (index >= 0 && index < {} && table[index] != {}) {{",
                table.len(),
                self.target.null
            )),
            Code::block(vec![Code::line("return table[index];")]),
            Code::line("}"),
            self.return_null(),
        ]
    }
}
