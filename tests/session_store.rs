mod common;

use dessert_clicker::session::SessionStore;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn new_store_starts_at_zero() {
    let store = SessionStore::new(common::stepped_catalog());
    assert_eq!(store.current().sold_count(), 0);
    assert_eq!(store.current().revenue(), 0);
    assert_eq!(store.current().active_index(), 0);
}

#[test]
fn reading_twice_yields_identical_snapshots() {
    let mut store = SessionStore::new(common::stepped_catalog());
    store.record_sale();
    let first = store.current().clone();
    let second = store.current().clone();
    assert_eq!(first, second);
}

#[test]
fn record_sale_replaces_snapshot() {
    let mut store = SessionStore::new(common::two_item_catalog());
    let before = store.current().clone();
    let after = store.record_sale().clone();
    assert_ne!(before, after);
    assert_eq!(before.sold_count(), 0);
    assert_eq!(after.sold_count(), 1);
    assert_eq!(store.current(), &after);
}

#[test]
fn subscribers_see_every_snapshot_in_order() {
    let mut store = SessionStore::new(common::two_item_catalog());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |state| {
        sink.borrow_mut()
            .push((state.sold_count(), state.revenue(), state.active_item().name.clone()));
    });

    for _ in 0..4 {
        store.record_sale();
    }

    assert_eq!(
        *seen.borrow(),
        vec![
            (1, 1, "img0".to_string()),
            (2, 2, "img0".to_string()),
            (3, 3, "img1".to_string()),
            (4, 5, "img1".to_string()),
        ]
    );
}

#[test]
fn subscribe_does_not_replay_current_state() {
    let mut store = SessionStore::new(common::stepped_catalog());
    store.record_sale();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(*calls.borrow(), 0);
    store.record_sale();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut store = SessionStore::new(common::stepped_catalog());
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

    store.record_sale();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.record_sale();

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn subscribers_are_notified_in_registration_order() {
    let mut store = SessionStore::default();
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_| order.borrow_mut().push(tag));
    }
    store.record_sale();
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}
