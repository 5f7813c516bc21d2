//! Lookup plans: the layout decisions of each strategy, independent of text.
//!
//! A plan owns the slots it dispatches to, in the order the strategy
//! declares and dumps them, and can answer lookups itself. Emitters render a
//! plan as C++; [`crate::Dispatcher`] runs it in-process.

use std::collections::HashMap;
use std::fmt;

use dispatchgen_core::Identifier;

use crate::mapping::{Entry, Mapping};
use crate::naming::CanonicalName;
use crate::{Config, Error, Result};

/// Dispatch strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One `case` per entry, file order.
    Switch,
    /// `if`/`else if` equality chain, file order, first match wins.
    Chain,
    /// Direct-indexed table over `[lo, hi]`, ascending identifier order.
    Array,
}

impl Strategy {
    /// Generation order used when producing every strategy at once.
    pub const ALL: [Strategy; 3] = [Self::Chain, Self::Switch, Self::Array];

    /// Name used inside generated class names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Switch => "Switch",
            Self::Chain => "If",
            Self::Array => "Array",
        }
    }

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Chain => "if",
            Self::Array => "array",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "switch" => Some(Self::Switch),
            "if" | "chain" => Some(Self::Chain),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage slot for one handler instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub identifier: Identifier,
    pub type_name: String,
    pub name: CanonicalName,
}

impl Slot {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            identifier: entry.identifier,
            type_name: entry.type_name.clone(),
            name: CanonicalName::of(entry),
        }
    }
}

/// Switch plan: discrete cases in file order.
#[derive(Clone, Debug)]
pub struct SwitchPlan {
    cases: Vec<Slot>,
    index: HashMap<Identifier, usize>,
}

impl SwitchPlan {
    pub fn build(mapping: &Mapping) -> Self {
        let cases: Vec<Slot> = mapping.entries().iter().map(Slot::from_entry).collect();
        let index = cases
            .iter()
            .enumerate()
            .map(|(i, slot)| (slot.identifier, i))
            .collect();
        Self { cases, index }
    }

    pub fn cases(&self) -> &[Slot] {
        &self.cases
    }

    fn lookup_index(&self, identifier: Identifier) -> Option<usize> {
        self.index.get(&identifier).copied()
    }
}

/// Chain plan: sequential equality tests in file order.
#[derive(Clone, Debug)]
pub struct ChainPlan {
    tests: Vec<Slot>,
}

impl ChainPlan {
    pub fn build(mapping: &Mapping) -> Self {
        Self {
            tests: mapping.entries().iter().map(Slot::from_entry).collect(),
        }
    }

    pub fn tests(&self) -> &[Slot] {
        &self.tests
    }

    fn lookup_index(&self, identifier: Identifier) -> Option<usize> {
        self.tests.iter().position(|slot| slot.identifier == identifier)
    }
}

/// Sparse array plan: a dense table over the identifier range `[lo, hi]`.
///
/// Memory is proportional to `hi - lo + 1`, not to the number of entries.
#[derive(Clone, Debug)]
pub struct SparseTable {
    lo: Identifier,
    slots: Vec<Slot>,
    /// Position `identifier - lo` -> index into `slots`.
    table: Vec<Option<usize>>,
}

impl SparseTable {
    pub fn build(mapping: &Mapping, config: &Config) -> Result<Self> {
        if mapping.is_empty() {
            return Err(Error::EmptyMapping {
                mapping: mapping.name().to_string(),
            });
        }

        let mut slots: Vec<Slot> = mapping.entries().iter().map(Slot::from_entry).collect();
        slots.sort_by_key(|slot| slot.identifier);

        let lo = slots[0].identifier;
        let hi = slots[slots.len() - 1].identifier;
        let len = u64::from(hi - lo) + 1;
        if len > config.max_table_len {
            return Err(Error::TableTooLarge {
                mapping: mapping.name().to_string(),
                len,
                limit: config.max_table_len,
            });
        }

        // Gap-fill: walk every identifier in range, consuming sorted slots
        // as their identifier comes up.
        let mut table = Vec::with_capacity(len as usize);
        let mut pending = slots.iter().enumerate().peekable();
        for identifier in lo..=hi {
            match pending.peek() {
                Some((i, slot)) if slot.identifier == identifier => {
                    table.push(Some(*i));
                    pending.next();
                }
                _ => table.push(None),
            }
        }

        Ok(Self { lo, slots, table })
    }

    /// Smallest identifier in the table.
    pub fn lo(&self) -> Identifier {
        self.lo
    }

    /// Largest identifier in the table.
    pub fn hi(&self) -> Identifier {
        self.lo + (self.table.len() - 1) as Identifier
    }

    /// Table length, always `hi - lo + 1`.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Slots in ascending identifier order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Table contents by position: the occupying slot or `None` for a gap.
    pub fn positions(&self) -> impl Iterator<Item = Option<&Slot>> + '_ {
        self.table.iter().map(|pos| pos.map(|i| &self.slots[i]))
    }

    /// Number of positions without a slot.
    pub fn gaps(&self) -> usize {
        self.table.iter().filter(|pos| pos.is_none()).count()
    }

    pub fn geometry(&self) -> TableGeometry {
        TableGeometry {
            lo: self.lo,
            hi: self.hi(),
            len: self.len(),
            gaps: self.gaps(),
        }
    }

    fn lookup_index(&self, identifier: Identifier) -> Option<usize> {
        // Bounds first: identifiers outside [lo, hi] never touch the table.
        let index = identifier.checked_sub(self.lo)? as usize;
        if index >= self.table.len() {
            return None;
        }
        self.table[index]
    }
}

/// Shape of a sparse table, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableGeometry {
    pub lo: Identifier,
    pub hi: Identifier,
    pub len: usize,
    pub gaps: usize,
}

impl fmt::Display for TableGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "table [{:#x}, {:#x}], {} slots, {} empty",
            self.lo, self.hi, self.len, self.gaps
        )
    }
}

/// A strategy-specific lookup plan.
#[derive(Clone, Debug)]
pub enum Plan {
    Switch(SwitchPlan),
    Chain(ChainPlan),
    Array(SparseTable),
}

impl Plan {
    /// Lay out `mapping` for `strategy`.
    ///
    /// Only the array strategy can fail: it needs at least one entry and a
    /// table no longer than `Config::max_table_len`.
    pub fn build(strategy: Strategy, mapping: &Mapping, config: &Config) -> Result<Self> {
        Ok(match strategy {
            Strategy::Switch => Plan::Switch(SwitchPlan::build(mapping)),
            Strategy::Chain => Plan::Chain(ChainPlan::build(mapping)),
            Strategy::Array => Plan::Array(SparseTable::build(mapping, config)?),
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Plan::Switch(_) => Strategy::Switch,
            Plan::Chain(_) => Strategy::Chain,
            Plan::Array(_) => Strategy::Array,
        }
    }

    /// Slots in declaration and dump order: file order for switch and chain,
    /// ascending identifier order for the array.
    pub fn dump_order(&self) -> &[Slot] {
        match self {
            Plan::Switch(p) => p.cases(),
            Plan::Chain(p) => p.tests(),
            Plan::Array(p) => p.slots(),
        }
    }

    /// Index into [`Plan::dump_order`] of the slot `identifier` dispatches to.
    pub fn lookup_index(&self, identifier: Identifier) -> Option<usize> {
        match self {
            Plan::Switch(p) => p.lookup_index(identifier),
            Plan::Chain(p) => p.lookup_index(identifier),
            Plan::Array(p) => p.lookup_index(identifier),
        }
    }

    /// Table shape, for the array strategy only.
    pub fn geometry(&self) -> Option<TableGeometry> {
        match self {
            Plan::Array(table) => Some(table.geometry()),
            _ => None,
        }
    }

    pub fn lookup(&self, identifier: Identifier) -> Option<&Slot> {
        self.lookup_index(identifier).map(|i| &self.dump_order()[i])
    }
}
