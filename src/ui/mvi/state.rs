/// Marker trait for state a reducer produces.
///
/// `Default` lets callers `std::mem::take` the current state out of a slot
/// before handing it to the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
