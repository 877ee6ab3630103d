//! Technology stack selection.
//!
//! - `catalog` - Built-in catalog of categories, products and versions
//! - `selection` - Tri-state toggle over the draft's technology choices
//! - `default_os` - One-way propagation of a chosen OS into VM rows

mod catalog;
mod default_os;
mod selection;

pub use catalog::{CatalogProduct, TechCategory};
pub use default_os::{derive_default_os, looks_default, GENERIC_OS_FAMILIES, GENERIC_OS_LABELS};
pub use selection::{
    remove_technology, selected_in, selected_version, toggle_technology, ToggleOutcome,
};
