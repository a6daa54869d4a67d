//! UI state types shared by the engine and its hosts.
//!
//! Pure data types with no IO and no async.

mod animation;
mod history;

pub use animation::EffectTimer;
pub use history::{InputHistory, NavOutcome};
