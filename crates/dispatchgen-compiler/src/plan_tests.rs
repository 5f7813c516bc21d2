use crate::plan::{Plan, SparseTable, Strategy};
use crate::test_utils::{abc, empty, mapping, zeek};
use crate::{Config, Error};

fn names(plan: &Plan) -> Vec<&str> {
    plan.dump_order().iter().map(|s| s.name.as_str()).collect()
}

fn build(strategy: Strategy, mapping: &crate::Mapping) -> Plan {
    Plan::build(strategy, mapping, &Config::default()).unwrap()
}

#[test]
fn sparse_table_round_trip() {
    let table = SparseTable::build(&abc(), &Config::default()).unwrap();
    assert_eq!((table.lo(), table.hi(), table.len()), (1, 0x11, 17));
    assert_eq!(table.gaps(), 14);
    assert_eq!(
        table.geometry().to_string(),
        "table [0x1, 0x11], 17 slots, 14 empty"
    );

    let positions: Vec<Option<&str>> = table
        .positions()
        .map(|pos| pos.map(|s| s.type_name.as_str()))
        .collect();
    assert_eq!(positions[0], Some("A"));
    assert_eq!(positions[5], Some("B"));
    assert_eq!(positions[16], Some("C"));
    assert_eq!(positions.iter().filter(|p| p.is_some()).count(), 3);

    let plan = Plan::Array(table);
    assert_eq!(plan.lookup(6).map(|s| s.type_name.as_str()), Some("B"));
    assert!(plan.lookup(0).is_none());
    assert!(plan.lookup(0x12).is_none());
    assert!(plan.lookup(2).is_none());
}

#[test]
fn sparse_table_with_single_entry() {
    let mapping = mapping("one", "# ANALYZERS\n86dd IPv6Analyzer\n");
    let table = SparseTable::build(&mapping, &Config::default()).unwrap();
    assert_eq!((table.lo(), table.hi(), table.len()), (0x86dd, 0x86dd, 1));
    assert_eq!(table.gaps(), 0);

    let plan = Plan::Array(table);
    assert!(plan.lookup(0x86dd).is_some());
    assert!(plan.lookup(0x86dc).is_none());
    assert!(plan.lookup(u32::MAX).is_none());
}

#[test]
fn sparse_table_rejects_empty_mapping() {
    let err = SparseTable::build(&empty(), &Config::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyMapping { .. }));
    assert_eq!(err.to_string(), "mapping 'empty' has no entries, cannot build a sparse table");
}

#[test]
fn sparse_table_size_guard() {
    let config = Config::new().max_table_len(16);
    let err = SparseTable::build(&abc(), &config).unwrap_err();
    assert!(matches!(
        err,
        Error::TableTooLarge {
            len: 17,
            limit: 16,
            ..
        }
    ));

    let config = Config::new().max_table_len(17);
    assert!(SparseTable::build(&abc(), &config).is_ok());
}

#[test]
fn full_width_range_is_rejected_before_allocation() {
    let config = Config::new().width(crate::IdentifierWidth::U32);
    let mapping = crate::Mapping::from_source(
        "wide",
        "# ANALYZERS\n0 Low\nffffffff High\n",
        &config,
    )
    .unwrap();
    let err = SparseTable::build(&mapping, &config).unwrap_err();
    assert!(matches!(err, Error::TableTooLarge { len, .. } if len == 1 << 32));
}

#[test]
fn dump_order_per_strategy() {
    let zeek = zeek();
    let file_order = [
        "ipv6analyzer86dd",
        "ethanalyzer1",
        "tcpanalyzer6",
        "ipv4analyzer800",
        "udpanalyzer11",
    ];
    assert_eq!(names(&build(Strategy::Switch, &zeek)), file_order);
    assert_eq!(names(&build(Strategy::Chain, &zeek)), file_order);
    assert_eq!(
        names(&build(Strategy::Array, &zeek)),
        [
            "ethanalyzer1",
            "tcpanalyzer6",
            "udpanalyzer11",
            "ipv4analyzer800",
            "ipv6analyzer86dd",
        ]
    );
}

#[test]
fn every_strategy_resolves_every_entry() {
    let zeek = zeek();
    for strategy in Strategy::ALL {
        let plan = build(strategy, &zeek);
        assert_eq!(plan.strategy(), strategy);
        for entry in zeek.entries() {
            let slot = plan.lookup(entry.identifier).unwrap();
            assert_eq!(slot.type_name, entry.type_name, "{strategy}");
            assert_eq!(slot.identifier, entry.identifier, "{strategy}");
        }
        for missing in [0, 2, 0x12, 0x801, 0x86de, u32::MAX] {
            assert!(plan.lookup(missing).is_none(), "{strategy} {missing:#x}");
        }
    }
}

#[test]
fn empty_switch_and_chain_always_miss() {
    for strategy in [Strategy::Switch, Strategy::Chain] {
        let plan = build(strategy, &empty());
        assert!(plan.dump_order().is_empty());
        assert!(plan.lookup(0).is_none());
        assert!(plan.lookup(1).is_none());
    }
}

#[test]
fn strategy_names() {
    for strategy in Strategy::ALL {
        assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
    }
    assert_eq!(Strategy::from_name("chain"), Some(Strategy::Chain));
    assert_eq!(Strategy::from_name("all"), None);
    assert_eq!(Strategy::Chain.label(), "If");
    assert_eq!(Strategy::ALL.map(|s| s.label()), ["If", "Switch", "Array"]);
}
