//! In-process dispatcher over a lookup plan.
//!
//! Holds one handler per slot and resolves identifiers exactly the way the
//! emitted C++ does for the same plan. Handlers are stored in dump order, so
//! the state dump follows the strategy's order too.

use std::fmt;

use dispatchgen_core::{Handler, Identifier};

use crate::plan::{Plan, Slot};

/// A lookup plan with a live handler behind every slot.
#[derive(Debug)]
pub struct Dispatcher<H> {
    plan: Plan,
    handlers: Vec<H>,
}

impl<H: Handler> Dispatcher<H> {
    /// Instantiate one handler per slot with `make`, in dump order.
    pub fn new(plan: Plan, mut make: impl FnMut(&Slot) -> H) -> Self {
        let handlers = plan.dump_order().iter().map(&mut make).collect();
        Self { plan, handlers }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler for `identifier`, `None` when the mapping has no entry for it.
    pub fn lookup(&self, identifier: Identifier) -> Option<&H> {
        self.plan
            .lookup_index(identifier)
            .map(|index| &self.handlers[index])
    }

    pub fn lookup_mut(&mut self, identifier: Identifier) -> Option<&mut H> {
        self.plan
            .lookup_index(identifier)
            .map(|index| &mut self.handlers[index])
    }

    /// Slots paired with their handlers, in dump order.
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &H)> {
        self.plan.dump_order().iter().zip(&self.handlers)
    }

    /// Write every handler's state, one line each, in dump order.
    pub fn write_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for handler in &self.handlers {
            handler.write_state(out)?;
            out.write_char('\n')?;
        }
        Ok(())
    }
}
