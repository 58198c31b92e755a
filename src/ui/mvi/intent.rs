/// Marker trait for intents: key presses, API outcomes, timer expiries.
pub trait Intent: Send + 'static {}
