//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Button activations (`+` / `-`)
/// - Tagged action messages sent to a store
/// - Focus navigation
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
