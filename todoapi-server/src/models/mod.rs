//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod todo;
pub mod validation;

pub use todo::TodoTitle;
pub use validation::ValidationError;
