//! Tri-state technology toggle.
//!
//! A catalog selection is identified by `(category label, product)`.
//! Toggling a pair that is selected with the same version removes it,
//! toggling it with another version switches the version in place, and
//! toggling an unselected pair appends it.

use crate::domain::draft::{Rows, TechnologyChoice};

use super::TechCategory;

/// What a toggle did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new selection was appended.
    Added,
    /// An existing selection changed version.
    Switched { previous: String },
    /// The selection was removed.
    Removed,
}

impl ToggleOutcome {
    /// True when the pair is selected after the toggle.
    pub fn is_selected(&self) -> bool {
        !matches!(self, ToggleOutcome::Removed)
    }
}

fn is_pair(choice: &TechnologyChoice, category: TechCategory, product: &str) -> bool {
    choice.tier == category.label() && choice.product == product
}

/// Toggles `(category, product, version)` in the choices.
pub fn toggle_technology(
    choices: &mut Rows<TechnologyChoice>,
    category: TechCategory,
    product: &str,
    version: &str,
) -> ToggleOutcome {
    let Some(index) = choices.position_where(|c| is_pair(c, category, product)) else {
        choices.push(TechnologyChoice::new(category.label(), product, version));
        return ToggleOutcome::Added;
    };

    let same_version = choices
        .get(index)
        .is_some_and(|row| row.value().version == version);
    if same_version {
        choices.remove(index);
        return ToggleOutcome::Removed;
    }

    match choices.get_mut(index) {
        Some(row) => {
            let previous = std::mem::replace(&mut row.value_mut().version, version.to_string());
            ToggleOutcome::Switched { previous }
        }
        None => ToggleOutcome::Removed,
    }
}

/// Removes every selection of `(category, product)` regardless of version.
/// Returns the number of rows removed.
pub fn remove_technology(
    choices: &mut Rows<TechnologyChoice>,
    category: TechCategory,
    product: &str,
) -> usize {
    let before = choices.len();
    choices.retain(|c| !is_pair(c, category, product));
    before - choices.len()
}

/// Version currently selected for `(category, product)`.
pub fn selected_version<'a>(
    choices: &'a Rows<TechnologyChoice>,
    category: TechCategory,
    product: &str,
) -> Option<&'a str> {
    choices
        .values()
        .find(|c| is_pair(c, category, product))
        .map(|c| c.version.as_str())
}

/// Selections belonging to a catalog category, in selection order.
pub fn selected_in(
    choices: &Rows<TechnologyChoice>,
    category: TechCategory,
) -> impl Iterator<Item = &TechnologyChoice> {
    choices.values().filter(move |c| c.tier == category.label())
}
