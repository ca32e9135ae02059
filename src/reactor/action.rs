//! Marker traits for actions and mutations.

/// Marker trait for action objects.
///
/// Actions represent user intent coming from the view:
/// - Text field edits
/// - Button taps
/// - Lifecycle events (screen appeared)
///
/// Actions are turned into mutations by [`Reactor::mutate`](super::Reactor::mutate).
pub trait Action: Send + 'static {}

/// Marker trait for mutation objects.
///
/// Mutations are internal to a store. They are folded into state by
/// [`Reducer::reduce`](super::Reducer::reduce) and never observed outside.
pub trait Mutation: Send + 'static {}
