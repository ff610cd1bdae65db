//! Intents for the session engine.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIntent {
    /// The user sold the dessert currently on screen.
    RecordSale,
}

impl Intent for SessionIntent {}
