//! Owned container for the current session snapshot.
//!
//! The store is the single construction point and the single update entry
//! point for session state. Renderers read [`SessionStore::current`] or
//! register a callback with [`SessionStore::subscribe`] to be handed each
//! new snapshot in the order it was produced.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::session::intent::SessionIntent;
use crate::session::reducer::SessionReducer;
use crate::session::state::SessionState;
use crate::ui::mvi::Reducer;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SessionState)>;

pub struct SessionStore {
    state: SessionState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl SessionStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            state: SessionState::new(catalog),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The latest published snapshot.
    pub fn current(&self) -> &SessionState {
        &self.state
    }

    /// Replace the snapshot with the result of one sale and publish it.
    pub fn record_sale(&mut self) -> &SessionState {
        let previous_item = self.state.active_index();
        self.state = SessionReducer::reduce(self.state.clone(), SessionIntent::RecordSale);

        tracing::debug!(
            sold = self.state.sold_count(),
            revenue = self.state.revenue(),
            "Dessert sold"
        );
        if self.state.active_index() != previous_item {
            tracing::info!(
                dessert = %self.state.active_item().name,
                price = self.state.active_item().unit_price,
                sold = self.state.sold_count(),
                "Active dessert changed"
            );
        }

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
        &self.state
    }

    /// Register a callback for every future snapshot.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&SessionState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::default()))
    }
}
