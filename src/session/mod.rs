//! Session state engine: cumulative sales, revenue and the active dessert.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::SessionIntent;
pub use reducer::{record_sale, SessionReducer};
pub use state::SessionState;
pub use store::{SessionStore, SubscriptionId};
