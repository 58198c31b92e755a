/// Marker trait for view state.
///
/// `Default` is the state a view mounts with; `Clone + PartialEq` let tests
/// compare snapshots before and after a transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
