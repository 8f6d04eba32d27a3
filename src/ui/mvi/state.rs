//! Base trait for component state.

/// Marker trait for component state.
///
/// States are plain values (cloned to produce the next one), carry everything
/// the view needs, and compare with `PartialEq` so callers can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
