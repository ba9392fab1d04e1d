//! Dataflow primitives for screen state.
//!
//! - [`Relay`] carries user events from views to the state that owns them.
//! - [`Actor`] owns one value and applies events sequentially.
//! - [`Atom`] is an Actor whose only event is "replace the value".
//!
//! State never leaves an Actor except through signals, and every Actor lives
//! exactly as long as the screen that created it.

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
