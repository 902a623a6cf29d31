//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! All state transitions go through the reducer; rendering and
//! side effects (event polling, preference writes) live outside it.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Screen};
pub use reducer::reduce;
pub use state::{AppState, CreateFormState, FormField, PendingJoin, StatusBarState, UiConfig};
