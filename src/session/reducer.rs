use crate::session::intent::SessionIntent;
use crate::session::state::SessionState;
use crate::ui::mvi::Reducer;

/// Sell one unit of the active item.
///
/// The sale is charged at the price of the item active before it; the
/// next item is then picked from the new sold count.
pub fn record_sale(state: &SessionState) -> SessionState {
    let sold_count = state.sold_count().saturating_add(1);
    let revenue = state.revenue().saturating_add(state.active_item().unit_price);
    let catalog = state.catalog();
    let active = catalog.active_index(sold_count);
    SessionState::from_parts(revenue, sold_count, active, catalog.clone())
}

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::RecordSale => record_sale(&state),
        }
    }
}
