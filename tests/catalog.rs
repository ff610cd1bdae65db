mod common;

use dessert_clicker::catalog::{Catalog, CatalogError, CatalogItem};

#[test]
fn rejects_empty_catalog() {
    assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
}

#[test]
fn rejects_nonzero_first_threshold() {
    let result = Catalog::new(vec![CatalogItem::new("late", "*", 1, 2)]);
    assert!(matches!(
        result,
        Err(CatalogError::FirstThresholdNotZero { threshold: 2, .. })
    ));
}

#[test]
fn rejects_equal_thresholds() {
    let result = Catalog::new(vec![
        CatalogItem::new("a", "*", 1, 0),
        CatalogItem::new("b", "*", 2, 4),
        CatalogItem::new("c", "*", 3, 4),
    ]);
    match result {
        Err(CatalogError::NotAscending {
            name,
            threshold,
            previous,
        }) => {
            assert_eq!(name, "c");
            assert_eq!(threshold, 4);
            assert_eq!(previous, 4);
        }
        other => panic!("expected NotAscending, got {other:?}"),
    }
}

#[test]
fn rejects_zero_price() {
    let result = Catalog::new(vec![CatalogItem::new("free", "*", 0, 0)]);
    assert!(matches!(result, Err(CatalogError::ZeroPrice { .. })));
}

#[test]
fn active_index_is_inclusive_at_threshold() {
    let catalog = common::stepped_catalog();
    assert_eq!(catalog.active_index(0), 0);
    assert_eq!(catalog.active_index(4), 0);
    assert_eq!(catalog.active_index(5), 1);
    assert_eq!(catalog.active_index(9), 1);
    assert_eq!(catalog.active_index(25), 5);
    assert_eq!(catalog.active_index(999), 5);
}

#[test]
fn active_index_matches_max_satisfying_threshold() {
    let catalog = Catalog::desserts();
    for sold in 0..25_000u64 {
        let expected = catalog
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.activation_threshold <= sold)
            .map(|(index, _)| index)
            .max()
            .expect("first item always qualifies");
        assert_eq!(catalog.active_index(sold), expected, "sold = {sold}");
    }
}

#[test]
fn default_is_builtin_desserts() {
    let catalog = Catalog::default();
    let names: Vec<_> = catalog.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"cupcake"));
    assert_eq!(names.last(), Some(&"oreo"));
    assert_eq!(catalog.get(1).map(|item| item.unit_price), Some(10));
    assert_eq!(catalog.get(1).map(|item| item.activation_threshold), Some(5));
}
