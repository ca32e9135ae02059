//! Base trait for screen state.

/// Marker trait for reactor state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the screen)
/// - Comparable (PartialEq for detecting changes)
pub trait ReactorState: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {}
