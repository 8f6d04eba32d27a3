//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is something that happened to a component: the host changed a
/// prop, a key was pressed, a pointer went down or up.
pub trait Intent: Send + 'static {}
