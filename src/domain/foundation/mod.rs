//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that the draft, technology
//! stack and wizard modules build on.

mod errors;
mod ids;
mod percentage;
mod yes_no;

pub use errors::ValidationError;
pub use ids::RowId;
pub use percentage::Percentage;
pub use yes_no::YesNo;
