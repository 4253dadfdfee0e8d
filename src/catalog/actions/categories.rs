use serde_json::Value;

use crate::constants::{DEFAULT_SELECTION_LABEL, DISH_TYPES, MEAL_CATEGORIES, SELECTION_LABELS};
use crate::schema::{CategoryTab, DishType, MealType, SelectionSummary};

/// Tab caption for a category ("Main Course", not the wire name).
pub fn display_name(category: &MealType) -> &'static str {
    MEAL_CATEGORIES
        .iter()
        .find(|(key, _)| *key == category.as_str())
        .map(|(_, label)| *label)
        .unwrap_or(category.as_str())
}

/// Header label shown above the dish list ("Main Courses Selected").
pub fn selection_label(category: &MealType) -> &'static str {
    SELECTION_LABELS
        .iter()
        .find(|(key, _)| *key == category.as_str())
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_SELECTION_LABEL)
}

/// Same lookup from a raw category value; anything unrecognized falls back to
/// the generic label.
pub fn selection_label_for(value: &str) -> &'static str {
    match MealType::try_from(Value::from(value)) {
        Ok(category) => selection_label(&category),
        Err(_) => DEFAULT_SELECTION_LABEL,
    }
}

pub fn dish_type_label(dish_type: &DishType) -> &'static str {
    DISH_TYPES
        .iter()
        .find(|(key, _)| *key == dish_type.as_str())
        .map(|(_, label)| *label)
        .unwrap_or(dish_type.as_str())
}

/// The four tabs in menu order with their current selection badges.
pub fn list_category_tabs(summary: &SelectionSummary) -> Vec<CategoryTab> {
    MealType::ALL
        .iter()
        .map(|category| CategoryTab {
            category: category.clone(),
            label: display_name(category),
            selected_count: summary.count_for(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_selection_labels() {
        assert_eq!(
            selection_label(&MealType::MainCourse),
            "Main Courses Selected"
        );
        assert_eq!(selection_label(&MealType::Starter), "Starters Selected");

        assert_eq!(selection_label_for("DESSERT"), "Desserts Selected");
        assert_eq!(selection_label_for("MAIN COURSE"), "Main Courses Selected");
        assert_eq!(selection_label_for("UNKNOWN"), "Items Selected");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name(&MealType::MainCourse), "Main Course");
        assert_eq!(display_name(&MealType::Sides), "Sides");

        assert_eq!(dish_type_label(&DishType::Veg), "Veg");
        assert_eq!(dish_type_label(&DishType::NonVeg), "Non-Veg");
    }

    #[test]
    fn test_category_tabs_follow_menu_order() {
        let mut per_category = HashMap::new();
        per_category.insert(MealType::Starter, 2);
        per_category.insert(MealType::Dessert, 1);
        let summary = SelectionSummary {
            per_category,
            total: 3,
        };

        let tabs = list_category_tabs(&summary);
        assert_eq!(tabs.len(), 4);

        assert_eq!(tabs[0].category, MealType::Starter);
        assert_eq!(tabs[0].label, "Starter");
        assert_eq!(tabs[0].selected_count, 2);

        assert_eq!(tabs[1].category, MealType::MainCourse);
        assert_eq!(tabs[1].selected_count, 0);

        assert_eq!(tabs[2].category, MealType::Dessert);
        assert_eq!(tabs[2].selected_count, 1);

        assert_eq!(tabs[3].category, MealType::Sides);
        assert_eq!(tabs[3].selected_count, 0);
    }
}
