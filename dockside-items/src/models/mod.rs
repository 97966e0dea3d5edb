//! Domain models with validation at construction
//!
//! Request payloads are checked when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod validation;

pub use item::{Item, NewItem};
pub use validation::ValidationError;
