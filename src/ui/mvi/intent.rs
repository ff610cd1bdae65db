//! Marker trait for intents.

/// Something that happened and may change state: a key press that sells a
/// dessert, a share request, a clock tick.
pub trait Intent: Send + 'static {}
