//! Domain layer containing the draft model and its rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (row ids, percentages, yes/no flags, errors)
//! - `draft` - The document draft aggregate, its collections and edits
//! - `tech_stack` - Technology catalog, selection toggle and OS propagation
//! - `wizard` - Step navigation and completion

pub mod draft;
pub mod foundation;
pub mod tech_stack;
pub mod wizard;
