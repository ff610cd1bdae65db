//! Marker trait for state snapshots.

/// States are cloned to produce new snapshots, compared to detect changes,
/// and defaulted to get the startup value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
