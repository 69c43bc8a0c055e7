//! Rights editor scenarios

use rightsmap::*;

fn entry(rights: u8) -> Entry {
    Entry::new(rights)
}

fn mapping(entries: &[(&str, Entry)]) -> RightsMapping {
    entries.iter().map(|(n, e)| (n.to_string(), e.clone())).collect()
}

#[test]
fn test_toggle_sequence() {
    let mut ed = RightsEditor::new(Domain::Agent, RightsMapping::new());

    ed.toggle_bit("csr_agents", READ);
    assert_eq!(ed.current_value(), mapping(&[("csr_agents", entry(1))]));

    ed.toggle_bit("csr_agents", UPDATE);
    assert_eq!(ed.current_value(), mapping(&[("csr_agents", entry(3))]));

    ed.toggle_bit("csr_agents", READ);
    assert_eq!(ed.current_value(), mapping(&[("csr_agents", entry(2))]));
}

#[test]
fn test_double_toggle_leaves_absent() {
    let mut ed = RightsEditor::new(Domain::User, RightsMapping::new());
    for bit in BITS {
        ed.toggle_bit("user", bit);
        ed.toggle_bit("user", bit);
        assert!(ed.entry("user").is_none());
    }
    assert!(ed.current_value().is_empty());
}

#[test]
fn test_all_bits_down_to_zero_removes() {
    let mut ed = RightsEditor::new(Domain::Agent, mapping(&[("pharmacy_fill", entry(ALL))]));
    for bit in BITS {
        ed.toggle_bit("pharmacy_fill", bit);
    }
    assert!(ed.entry("pharmacy_fill").is_none());
    assert_eq!(ed.rights("pharmacy_fill"), 0);
}

#[test]
fn test_set_idents_keeps_rights() {
    let mut ed = RightsEditor::new(Domain::User, mapping(&[("user", entry(CREATE | READ))]));
    ed.set_idents("user", "1001,1002");
    assert_eq!(
        ed.current_value(),
        mapping(&[("user", Entry { rights: 5, idents: Some(vec!["1001".into(), "1002".into()]) })])
    );

    ed.set_idents("user", "");
    assert_eq!(ed.entry("user").unwrap().idents, None);

    ed.set_idents("user", "a, b ,c");
    assert_eq!(
        ed.entry("user").unwrap().idents,
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_idents_before_rights() {
    let mut ed = RightsEditor::new(Domain::Provider, RightsMapping::new());
    ed.set_idents("orders", "42");
    assert_eq!(ed.entry("orders"), Some(&Entry { rights: 0, idents: Some(vec!["42".into()]) }));

    ed.toggle_bit("orders", READ);
    assert_eq!(ed.entry("orders"), Some(&Entry { rights: 1, idents: Some(vec!["42".into()]) }));

    // back to zero drops the idents with the entry
    ed.toggle_bit("orders", READ);
    assert!(ed.entry("orders").is_none());
}

#[test]
fn test_agent_ignores_idents() {
    let mut ed = RightsEditor::new(Domain::Agent, mapping(&[("csr_stats", entry(READ))]));
    ed.set_idents("csr_stats", "1,2");
    assert_eq!(ed.entry("csr_stats"), Some(&entry(READ)));
}

#[test]
fn test_toggle_keeps_idents() {
    let start = mapping(&[("user", Entry { rights: 1, idents: Some(vec!["9".into()]) })]);
    let mut ed = RightsEditor::new(Domain::User, start);
    ed.toggle_bit("user", UPDATE);
    assert_eq!(ed.entry("user"), Some(&Entry { rights: 3, idents: Some(vec!["9".into()]) }));
}

#[test]
fn test_snapshots_are_independent() {
    let mut ed = RightsEditor::new(Domain::Agent, RightsMapping::new());
    ed.toggle_bit("orders", READ);
    let before = ed.current_value();
    ed.toggle_bit("orders", UPDATE);
    assert_eq!(before["orders"].rights, READ);
    assert_eq!(ed.rights("orders"), READ | UPDATE);
}

#[test]
fn test_permissive_allows_any_bit() {
    let mut ed = RightsEditor::new(Domain::Agent, RightsMapping::new());
    // csr_stats only allows READ
    ed.toggle_bit("csr_stats", DELETE);
    ed.toggle_bit("not_in_catalog", CREATE);
    assert_eq!(ed.rights("csr_stats"), DELETE);
    assert_eq!(ed.rights("not_in_catalog"), CREATE);
}

#[test]
fn test_mask_to_allowed() {
    let mut ed = RightsEditor::new(Domain::Agent, RightsMapping::new())
        .with_enforcement(Enforcement::MaskToAllowed);
    ed.toggle_bit("csr_stats", DELETE);
    ed.toggle_bit("not_in_catalog", CREATE);
    ed.toggle_bit("csr_stats", READ);
    assert_eq!(ed.current_value(), mapping(&[("csr_stats", entry(READ))]));
}

#[test]
fn test_rows_hide_disallowed_bits() {
    let ed = RightsEditor::new(
        Domain::Agent,
        mapping(&[("everify", entry(ALL))]),
    );
    let row = ed
        .rows()
        .into_iter()
        .flat_map(|s| s.rows)
        .find(|r| r.name == "everify")
        .unwrap();
    // everify allows READ | UPDATE; cells are Create, Read, Update, Delete
    assert_eq!(row.cells[0], None);
    assert_eq!(row.cells[1], Some(Toggle { bit: READ, checked: true }));
    assert_eq!(row.cells[2], Some(Toggle { bit: UPDATE, checked: true }));
    assert_eq!(row.cells[3], None);
    assert!(!row.show_idents);
}

#[test]
fn test_rows_follow_catalog() {
    let ed = RightsEditor::new(Domain::Provider, mapping(&[("orders", entry(READ))]));
    let sections = ed.rows();
    let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Provider Tool", "CRM", "Memo", "Pharmacy"]);
    assert_eq!(
        sections.iter().map(|s| s.rows.len()).sum::<usize>(),
        Domain::Provider.catalog().definitions().count()
    );

    let crm = &sections[1];
    let orders = crm.rows.iter().find(|r| r.name == "orders").unwrap();
    assert_eq!(orders.cells[1], Some(Toggle { bit: READ, checked: true }));
    assert_eq!(orders.cells[2], Some(Toggle { bit: UPDATE, checked: false }));
    assert!(orders.show_idents);

    let customers = crm.rows.iter().find(|r| r.name == "customers").unwrap();
    assert_eq!(customers.cells[1], Some(Toggle { bit: READ, checked: false }));
    assert!(!customers.show_idents);
}
