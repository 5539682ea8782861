//! Three-step thali builder over a single mutable [`OrderDraft`].

use thiserror::Error;
use tracing::{debug, instrument};
use crate::domain::{BaseOption, Dish, DishToggle, DraftError, OrderDraft, Upgrade, MAX_DISHES};
use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    DishSelection,
    BaseSelection,
    Extras,
}

impl Step {
    pub fn title(self) -> &'static str {
        match self {
            Step::DishSelection => "Choose your sabjis",
            Step::BaseSelection => "Select base & roti",
            Step::Extras => "Add extras & review",
        }
    }
}

/// Result of [`MealBuilder::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    /// The last step was confirmed; the draft can be checked out.
    ReadyForReview,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WizardError {
    #[error("Please select at least one sabji")]
    NoDishSelected,
    #[error("Already at the first step")]
    AtFirstStep,
    #[error(transparent)]
    Draft(#[from] DraftError),
}

pub struct MealBuilder {
    step: Step,
    draft: OrderDraft,
    notifier: Notifier,
}

impl MealBuilder {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            step: Step::DishSelection,
            draft: OrderDraft::new(),
            notifier,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    #[instrument(skip(self, dish), fields(dish_id = %dish.id))]
    pub fn toggle_dish(&mut self, dish: Dish) -> Result<DishToggle, WizardError> {
        let name = dish.name.clone();
        match self.draft.toggle_dish(dish) {
            Ok(DishToggle::Removed) => {
                self.notifier.info(format!("{} removed", name));
                Ok(DishToggle::Removed)
            }
            Ok(DishToggle::Added { selected }) => {
                self.notifier.success(format!("{}/{} chosen", selected, MAX_DISHES));
                Ok(DishToggle::Added { selected })
            }
            Err(e) => {
                self.notifier.error(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn select_base(&mut self, option: BaseOption) {
        self.draft.set_base_option(option);
        debug!(base = ?option, extra_roti = self.draft.extra_roti(), "Base selected");
    }

    pub fn change_extra_roti(&mut self, delta: i32) -> u32 {
        self.draft.change_extra_roti(delta)
    }

    pub fn toggle_upgrade(&mut self, upgrade: Upgrade) -> bool {
        self.draft.toggle_upgrade(upgrade)
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), WizardError> {
        self.draft.set_quantity(quantity).map_err(|e| {
            self.notifier.error(e.to_string());
            WizardError::from(e)
        })
    }

    /// Moves forward one step. Leaving the first step needs at least one dish.
    #[instrument(skip(self), fields(step = ?self.step))]
    pub fn next(&mut self) -> Result<Advance, WizardError> {
        let next = match self.step {
            Step::DishSelection => {
                if self.draft.selected_dishes().is_empty() {
                    let err = WizardError::NoDishSelected;
                    self.notifier.error(err.to_string());
                    return Err(err);
                }
                Step::BaseSelection
            }
            Step::BaseSelection => Step::Extras,
            Step::Extras => return Ok(Advance::ReadyForReview),
        };
        self.step = next;
        debug!(to = ?next, "Wizard advanced");
        Ok(Advance::Moved(next))
    }

    pub fn back(&mut self) -> Result<Step, WizardError> {
        self.step = match self.step {
            Step::DishSelection => return Err(WizardError::AtFirstStep),
            Step::BaseSelection => Step::DishSelection,
            Step::Extras => Step::BaseSelection,
        };
        Ok(self.step)
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.step = Step::DishSelection;
    }
}
