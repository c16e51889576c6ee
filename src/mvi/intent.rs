//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, query edits)
/// - System events (search responses)
///
/// Intents are processed by reducers to produce new states. Intents are
/// closed enums so reducers match on them exhaustively.
pub trait Intent: Send + 'static {}
