//! Wizard navigation over the document sections.

mod step;

pub use step::{StepCursor, WizardStep};
