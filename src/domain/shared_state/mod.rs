//! Shared state snapshot handed to a step by the tree engine.

mod state;

pub use state::SharedState;
