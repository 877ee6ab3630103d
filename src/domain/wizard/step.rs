//! Wizard steps and the step cursor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// The ordered sections of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Introduction,
    Actors,
    Functional,
    Technical,
    Infrastructure,
    Lifecycle,
    Dependencies,
    Constraints,
    Validation,
}

impl WizardStep {
    /// All steps in navigation order.
    pub const ALL: [WizardStep; 9] = [
        WizardStep::Introduction,
        WizardStep::Actors,
        WizardStep::Functional,
        WizardStep::Technical,
        WizardStep::Infrastructure,
        WizardStep::Lifecycle,
        WizardStep::Dependencies,
        WizardStep::Constraints,
        WizardStep::Validation,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position of the step.
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|step| step == self)
            .map_or(1, |index| index + 1)
    }

    /// Returns the step at a 1-based position.
    pub fn from_number(number: usize) -> Option<WizardStep> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Introduction => "Introduction",
            WizardStep::Actors => "Acteurs",
            WizardStep::Functional => "Spécifications fonctionnelles",
            WizardStep::Technical => "Spécifications techniques",
            WizardStep::Infrastructure => "Besoins en infrastructure",
            WizardStep::Lifecycle => "Cycle de vie",
            WizardStep::Dependencies => "Dépendances",
            WizardStep::Constraints => "Contraintes",
            WizardStep::Validation => "Validation",
        }
    }

    /// The last step reads the whole draft and submits it.
    pub fn is_final(&self) -> bool {
        matches!(self, WizardStep::Validation)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Current position in the wizard. Moves are clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCursor {
    index: usize,
}

impl StepCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        WizardStep::ALL[self.index]
    }

    /// Advances one step; stays on the last step.
    pub fn next(&mut self) -> WizardStep {
        if self.index + 1 < WizardStep::COUNT {
            self.index += 1;
        }
        self.current()
    }

    /// Goes back one step; stays on the first step.
    pub fn previous(&mut self) -> WizardStep {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    pub fn go_to(&mut self, step: WizardStep) {
        self.index = step.number() - 1;
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == WizardStep::COUNT
    }

    /// Progress through the wizard: 0% on the first step, 100% on the last.
    pub fn completion(&self) -> Percentage {
        Percentage::of(self.index, WizardStep::COUNT - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_on_introduction() {
        let cursor = StepCursor::new();
        assert_eq!(cursor.current(), WizardStep::Introduction);
        assert!(cursor.is_first());
        assert_eq!(cursor.completion(), Percentage::ZERO);
    }

    #[test]
    fn previous_is_clamped_at_first_step() {
        let mut cursor = StepCursor::new();
        assert_eq!(cursor.previous(), WizardStep::Introduction);
    }

    #[test]
    fn next_is_clamped_at_last_step() {
        let mut cursor = StepCursor::new();
        for _ in 0..20 {
            cursor.next();
        }
        assert_eq!(cursor.current(), WizardStep::Validation);
        assert!(cursor.is_last());
        assert_eq!(cursor.completion(), Percentage::HUNDRED);
    }

    #[test]
    fn completion_rounds_to_nearest_percent() {
        let mut cursor = StepCursor::new();
        cursor.next();
        // 1/8
        assert_eq!(cursor.completion().value(), 13);
        cursor.go_to(WizardStep::Infrastructure);
        assert_eq!(cursor.completion().value(), 50);
        cursor.go_to(WizardStep::Constraints);
        // 7/8
        assert_eq!(cursor.completion().value(), 88);
    }

    #[test]
    fn step_numbers_are_one_based() {
        assert_eq!(WizardStep::Introduction.number(), 1);
        assert_eq!(WizardStep::Validation.number(), 9);
        assert_eq!(WizardStep::from_number(4), Some(WizardStep::Technical));
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(10), None);
    }

    #[test]
    fn only_validation_is_final() {
        let finals: Vec<_> = WizardStep::ALL.into_iter().filter(|s| s.is_final()).collect();
        assert_eq!(finals, vec![WizardStep::Validation]);
    }
}
