//! Join behavior across two item collections: equi and group modes,
//! exclusion rules, and key validation.

use itemflow::{Item, ItemError, JoinProcessor, JoinSide, JoinSpec};

/// Three customers; C1 has no orders.
fn customers() -> Vec<Item> {
    vec![
        Item::with_metadata("C1", [("Region", "north")]),
        Item::with_metadata("C2", [("Region", "south")]),
        Item::with_metadata("C3", [("Region", "east")]),
    ]
}

/// Five orders; one points at the unknown customer C4.
fn orders() -> Vec<Item> {
    vec![
        Item::with_metadata("O1", [("CustomerId", "C2"), ("OrderName", "widgets")]),
        Item::with_metadata("O2", [("CustomerId", "C4"), ("OrderName", "nothing")]),
        Item::with_metadata("O3", [("CustomerId", "C3"), ("OrderName", "bolts")]),
        Item::with_metadata("O4", [("CustomerId", "C3"), ("OrderName", "nuts")]),
        Item::with_metadata("O5", [("CustomerId", "C2"), ("OrderName", "gears")]),
    ]
}

fn customer_order_spec() -> JoinSpec {
    JoinSpec::new().right_key("CustomerId").exclude("CustomerId")
}

#[test]
fn test_equi_join_cardinality_is_the_number_of_matching_pairs() {
    let outcome = JoinProcessor::process(customers(), orders(), &customer_order_spec());

    assert!(outcome.is_success());
    // C2 x 2 orders + C3 x 2 orders; C1 and the C4 order contribute nothing
    assert_eq!(outcome.items.len(), 4);

    let pairs: Vec<(&str, Option<&str>)> = outcome
        .items
        .iter()
        .map(|item| (item.identity(), item.metadata("OrderName")))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("C2", Some("widgets")),
            ("C2", Some("gears")),
            ("C3", Some("bolts")),
            ("C3", Some("nuts")),
        ]
    );
}

#[test]
fn test_equi_join_preserves_left_metadata_and_excludes_the_key() {
    let outcome = JoinProcessor::process(customers(), orders(), &customer_order_spec());

    for item in &outcome.items {
        assert!(item.metadata("Region").is_some());
        assert_eq!(item.metadata("CustomerId"), None);
    }
}

#[test]
fn test_group_join_emits_exactly_one_item_per_left_item() {
    let spec = customer_order_spec().group();
    let outcome = JoinProcessor::process(customers(), orders(), &spec);

    assert!(outcome.is_success());
    assert_eq!(outcome.items.len(), 3);

    let merged: Vec<(&str, Option<&str>)> = outcome
        .items
        .iter()
        .map(|item| (item.identity(), item.metadata("OrderName")))
        .collect();
    assert_eq!(
        merged,
        vec![
            ("C1", None),
            ("C2", Some("widgets;gears")),
            ("C3", Some("bolts;nuts")),
        ]
    );
}

#[test]
fn test_group_join_unmatched_left_item_is_unchanged() {
    let spec = customer_order_spec().group();
    let outcome = JoinProcessor::process(customers(), orders(), &spec);

    let unmatched = &outcome.items[0];
    assert_eq!(unmatched.identity(), "C1");
    let metadata: Vec<(&str, &str)> = unmatched.custom_metadata().collect();
    assert_eq!(metadata, vec![("Region", "north")]);
}

#[test]
fn test_excluded_names_never_reach_group_output() {
    let spec = customer_order_spec().group();
    let outcome = JoinProcessor::process(customers(), orders(), &spec);

    for item in &outcome.items {
        assert_eq!(item.metadata("CustomerId"), None);
    }
}

#[test]
fn test_missing_right_key_aborts_the_join_naming_side_and_key() {
    let mut right = orders();
    right.push(Item::new("O6"));

    let outcome = JoinProcessor::process(customers(), right, &customer_order_spec());

    assert!(!outcome.is_success());
    assert!(outcome.items.is_empty());
    assert_eq!(
        outcome.errors,
        vec![ItemError::MissingJoinKey {
            side: JoinSide::Right,
            key: "CustomerId".to_string(),
            count: 1
        }]
    );
}

#[test]
fn test_join_defaults_match_on_identity_both_sides() {
    let left = vec![Item::with_metadata("k1", [("L", "1")])];
    let right = vec![
        Item::with_metadata("k1", [("R", "2")]),
        Item::with_metadata("k2", [("R", "3")]),
    ];

    let outcome = JoinProcessor::process(left, right, &JoinSpec::new());
    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.items[0].metadata("L"), Some("1"));
    assert_eq!(outcome.items[0].metadata("R"), Some("2"));
}

#[test]
fn test_right_metadata_wins_on_name_collision() {
    let left = vec![Item::with_metadata("k", [("Status", "stale")])];
    let right = vec![Item::with_metadata("k", [("Status", "fresh")])];

    let outcome = JoinProcessor::process(left, right, &JoinSpec::new());
    assert_eq!(outcome.items[0].metadata("Status"), Some("fresh"));
}
