use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Taste {
    Mild,
    Spicy,
}

/// A sabji that can be picked for a thali.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub taste: Taste,
}

impl Dish {
    pub fn new(id: impl Into<String>, name: impl Into<String>, taste: Taste) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            taste,
        }
    }
}

/// Today's sabji menu.
pub fn catalog() -> Vec<Dish> {
    vec![
        Dish::new("1", "Dal Tadka", Taste::Mild),
        Dish::new("2", "Paneer Butter Masala", Taste::Mild),
        Dish::new("3", "Rajma", Taste::Mild),
        Dish::new("4", "Aloo Gobi", Taste::Spicy),
        Dish::new("5", "Bhindi Masala", Taste::Mild),
        Dish::new("6", "Chole", Taste::Spicy),
    ]
}

/// Looks a dish up in [`catalog`] by id.
pub fn find_dish(id: &str) -> Option<Dish> {
    catalog().into_iter().find(|dish| dish.id == id)
}
