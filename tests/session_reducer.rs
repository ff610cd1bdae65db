mod common;

use dessert_clicker::session::{record_sale, SessionIntent, SessionReducer, SessionState};
use dessert_clicker::ui::mvi::Reducer;

fn sell(state: SessionState, times: usize) -> SessionState {
    (0..times).fold(state, |state, _| {
        SessionReducer::reduce(state, SessionIntent::RecordSale)
    })
}

#[test]
fn startup_state_is_empty() {
    let state = SessionState::new(common::stepped_catalog());
    assert_eq!(state.sold_count(), 0);
    assert_eq!(state.revenue(), 0);
    assert_eq!(state.active_item().name, "item0");
}

#[test]
fn three_sales_unlock_second_item_after_charging_first_price() {
    let state = sell(SessionState::new(common::two_item_catalog()), 3);
    assert_eq!(state.sold_count(), 3);
    assert_eq!(state.revenue(), 3);
    assert_eq!(state.active_item().name, "img1");
}

#[test]
fn fourth_sale_is_charged_at_new_price() {
    let state = sell(SessionState::new(common::two_item_catalog()), 4);
    assert_eq!(state.revenue(), 5);
}

#[test]
fn four_sales_keep_first_item_five_unlock_second() {
    let catalog = common::stepped_catalog();
    let after_four = sell(SessionState::new(catalog.clone()), 4);
    assert_eq!(after_four.active_item().activation_threshold, 0);

    let after_five = SessionReducer::reduce(after_four, SessionIntent::RecordSale);
    assert_eq!(after_five.active_item().activation_threshold, 5);
}

#[test]
fn sold_count_equals_number_of_sales() {
    let state = sell(SessionState::new(common::stepped_catalog()), 37);
    assert_eq!(state.sold_count(), 37);
}

#[test]
fn revenue_is_sum_of_prices_active_at_each_sale() {
    let catalog = common::stepped_catalog();
    let mut state = SessionState::new(catalog);
    let mut expected = 0;
    for _ in 0..40 {
        expected += state.active_item().unit_price;
        let next = record_sale(&state);
        assert!(next.revenue() >= state.revenue());
        state = next;
        assert_eq!(state.revenue(), expected);
    }
    // 5 sales each at prices 1..=5, then 15 at price 6
    assert_eq!(expected, 5 * (1 + 2 + 3 + 4 + 5) + 15 * 6);
}

#[test]
fn active_item_has_greatest_satisfied_threshold() {
    let mut state = SessionState::new(common::stepped_catalog());
    for _ in 0..30 {
        state = record_sale(&state);
        let best = state
            .catalog()
            .items()
            .iter()
            .filter(|item| item.activation_threshold <= state.sold_count())
            .map(|item| item.activation_threshold)
            .max();
        assert_eq!(Some(state.active_item().activation_threshold), best);
    }
}

#[test]
fn record_sale_leaves_input_untouched() {
    let state = SessionState::new(common::two_item_catalog());
    let before = state.clone();
    let _ = record_sale(&state);
    assert_eq!(state, before);
}

#[test]
fn reducer_matches_record_sale() {
    let state = sell(SessionState::default(), 7);
    assert_eq!(
        SessionReducer::reduce(state.clone(), SessionIntent::RecordSale),
        record_sale(&state)
    );
}

#[test]
fn default_catalog_reaches_donut_at_five() {
    let state = sell(SessionState::default(), 5);
    assert_eq!(state.active_item().name, "donut");
    assert_eq!(state.revenue(), 25);
}
