/// Marker trait for intent objects.
///
/// Intents are produced off the frame loop (for example on the input
/// thread), so they must be sendable.
pub trait Intent: Send + 'static {}
