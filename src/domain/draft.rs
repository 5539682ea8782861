use thiserror::Error;
use super::dish::Dish;

/// Most sabjis a single thali can carry.
pub const MAX_DISHES: usize = 2;

/// Most thalis a single order can carry.
pub const MAX_QUANTITY: u32 = 50;

/// The staple that comes with every thali.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseOption {
    /// Five rotis.
    RotiOnly,
    /// Three rotis and a rice bowl.
    #[default]
    Both,
    /// One rice bowl.
    RiceOnly,
}

impl BaseOption {
    /// Upper bound on extra rotis for this base.
    pub fn max_extra_roti(self) -> u32 {
        match self {
            BaseOption::RotiOnly | BaseOption::Both => 3,
            BaseOption::RiceOnly => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BaseOption::RotiOnly => "Roti Only",
            BaseOption::Both => "Roti + Rice",
            BaseOption::RiceOnly => "Rice Only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upgrade {
    /// Special paneer.
    PremiumProtein,
    /// Extra raita.
    ExtraSide,
    SaladAddons,
}

impl Upgrade {
    pub fn label(self) -> &'static str {
        match self {
            Upgrade::PremiumProtein => "Special Paneer",
            Upgrade::ExtraSide => "Extra Raita",
            Upgrade::SaladAddons => "Salad Add-ons",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Upgrades {
    pub premium_protein: bool,
    pub extra_side: bool,
    pub salad_addons: bool,
}

impl Upgrades {
    pub fn is_enabled(&self, upgrade: Upgrade) -> bool {
        match upgrade {
            Upgrade::PremiumProtein => self.premium_protein,
            Upgrade::ExtraSide => self.extra_side,
            Upgrade::SaladAddons => self.salad_addons,
        }
    }

    fn flag_mut(&mut self, upgrade: Upgrade) -> &mut bool {
        match upgrade {
            Upgrade::PremiumProtein => &mut self.premium_protein,
            Upgrade::ExtraSide => &mut self.extra_side,
            Upgrade::SaladAddons => &mut self.salad_addons,
        }
    }

    /// Labels of the enabled upgrades, in menu order.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        [Upgrade::PremiumProtein, Upgrade::ExtraSide, Upgrade::SaladAddons]
            .into_iter()
            .filter(|upgrade| self.is_enabled(*upgrade))
            .map(Upgrade::label)
            .collect()
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Pick up to 2 sabjis only")]
    DishLimitReached,
    #[error("Quantity must be between 1 and 50")]
    InvalidQuantity,
}

/// What happened to the selection after [`OrderDraft::toggle_dish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishToggle {
    Added { selected: usize },
    Removed,
}

/// The cart being built: one thali design ordered `quantity` times.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    selected_dishes: Vec<Dish>,
    base_option: BaseOption,
    extra_roti: u32,
    upgrades: Upgrades,
    quantity: u32,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            selected_dishes: Vec::new(),
            base_option: BaseOption::default(),
            extra_roti: 0,
            upgrades: Upgrades::default(),
            quantity: 1,
        }
    }
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_dishes(&self) -> &[Dish] {
        &self.selected_dishes
    }

    pub fn base_option(&self) -> BaseOption {
        self.base_option
    }

    pub fn extra_roti(&self) -> u32 {
        self.extra_roti
    }

    pub fn upgrades(&self) -> Upgrades {
        self.upgrades
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_selected(&self, dish_id: &str) -> bool {
        self.selected_dishes.iter().any(|dish| dish.id == dish_id)
    }

    /// Adds the dish, or removes it if it is already selected.
    ///
    /// # Errors
    /// Returns [`DraftError::DishLimitReached`] when adding a dish to a full
    /// selection; the selection is left unchanged.
    pub fn toggle_dish(&mut self, dish: Dish) -> Result<DishToggle, DraftError> {
        if let Some(pos) = self.selected_dishes.iter().position(|d| d.id == dish.id) {
            self.selected_dishes.remove(pos);
            return Ok(DishToggle::Removed);
        }
        if self.selected_dishes.len() >= MAX_DISHES {
            return Err(DraftError::DishLimitReached);
        }
        self.selected_dishes.push(dish);
        Ok(DishToggle::Added { selected: self.selected_dishes.len() })
    }

    /// Switches the base and clamps extra rotis to the new bound.
    pub fn set_base_option(&mut self, option: BaseOption) {
        self.base_option = option;
        self.extra_roti = self.extra_roti.min(option.max_extra_roti());
    }

    /// Moves the extra roti count by `delta`, saturating at `0..=max`.
    pub fn change_extra_roti(&mut self, delta: i32) -> u32 {
        let max = self.base_option.max_extra_roti() as i64;
        let next = (self.extra_roti as i64 + delta as i64).clamp(0, max);
        self.extra_roti = next as u32;
        self.extra_roti
    }

    /// Flips an upgrade and returns its new state.
    pub fn toggle_upgrade(&mut self, upgrade: Upgrade) -> bool {
        let flag = self.upgrades.flag_mut(upgrade);
        *flag = !*flag;
        *flag
    }

    /// # Errors
    /// Rejects 0 and anything above [`MAX_QUANTITY`].
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), DraftError> {
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(DraftError::InvalidQuantity);
        }
        self.quantity = quantity;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn dish_names(&self) -> String {
        self.selected_dishes.iter().map(|d| d.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_dish;

    fn dish(id: &str) -> Dish {
        find_dish(id).unwrap()
    }

    #[test]
    fn test_third_dish_is_rejected() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.toggle_dish(dish("1")), Ok(DishToggle::Added { selected: 1 }));
        assert_eq!(draft.toggle_dish(dish("2")), Ok(DishToggle::Added { selected: 2 }));

        assert_eq!(draft.toggle_dish(dish("3")), Err(DraftError::DishLimitReached));
        assert_eq!(draft.selected_dishes().len(), 2);
        assert!(!draft.is_selected("3"));
    }

    #[test]
    fn test_reselecting_removes_dish() {
        let mut draft = OrderDraft::new();
        draft.toggle_dish(dish("4")).unwrap();
        assert_eq!(draft.toggle_dish(dish("4")), Ok(DishToggle::Removed));
        assert!(draft.selected_dishes().is_empty());

        // Removing from a full selection frees a slot.
        draft.toggle_dish(dish("1")).unwrap();
        draft.toggle_dish(dish("2")).unwrap();
        draft.toggle_dish(dish("1")).unwrap();
        assert_eq!(draft.toggle_dish(dish("6")), Ok(DishToggle::Added { selected: 2 }));
    }

    #[test]
    fn test_base_change_clamps_extra_roti() {
        let mut draft = OrderDraft::new();
        draft.set_base_option(BaseOption::RiceOnly);
        assert_eq!(draft.change_extra_roti(10), 5);

        draft.set_base_option(BaseOption::RotiOnly);
        assert_eq!(draft.extra_roti(), 3);

        // Never raised by a base change.
        draft.change_extra_roti(-2);
        draft.set_base_option(BaseOption::RiceOnly);
        assert_eq!(draft.extra_roti(), 1);
    }

    #[test]
    fn test_base_change_never_exceeds_bound() {
        let options = [BaseOption::RotiOnly, BaseOption::Both, BaseOption::RiceOnly];
        for from in options {
            for to in options {
                for extra in 0..=from.max_extra_roti() {
                    let mut draft = OrderDraft::new();
                    draft.set_base_option(from);
                    draft.change_extra_roti(extra as i32);
                    draft.set_base_option(to);
                    assert!(draft.extra_roti() <= to.max_extra_roti());
                    assert!(draft.extra_roti() <= extra);
                }
            }
        }
    }

    #[test]
    fn test_extra_roti_never_negative() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.change_extra_roti(-1), 0);
        assert_eq!(draft.change_extra_roti(i32::MIN), 0);
    }

    #[test]
    fn test_upgrades_and_quantity() {
        let mut draft = OrderDraft::new();
        assert!(draft.toggle_upgrade(Upgrade::SaladAddons));
        assert!(draft.toggle_upgrade(Upgrade::PremiumProtein));
        assert!(!draft.toggle_upgrade(Upgrade::SaladAddons));
        assert_eq!(draft.upgrades().enabled_labels(), vec!["Special Paneer"]);

        assert_eq!(draft.set_quantity(0), Err(DraftError::InvalidQuantity));
        assert_eq!(draft.quantity(), 1);
        draft.set_quantity(4).unwrap();
        assert_eq!(draft.set_quantity(40_000_000), Err(DraftError::InvalidQuantity));
        assert_eq!(draft.set_quantity(MAX_QUANTITY + 1), Err(DraftError::InvalidQuantity));
        assert_eq!(draft.quantity(), 4);
        draft.set_quantity(MAX_QUANTITY).unwrap();

        draft.clear();
        assert_eq!(draft, OrderDraft::default());
    }
}
