use std::collections::HashMap;

use crate::schema::{DishId, MealType, SelectionState, SelectionSummary};
use crate::source::Catalog;

use super::dishes::get_dish;

/// Recomputes per-category and grand-total counts from scratch. Entries that
/// resolve to no catalog dish still count toward the total but belong to no
/// category.
pub fn calculate_selection_summary(
    selection: &SelectionState,
    catalog: &Catalog,
) -> SelectionSummary {
    let mut per_category: HashMap<MealType, u32> = MealType::ALL
        .iter()
        .map(|category| (category.clone(), 0))
        .collect();
    let mut total = 0;

    for (&dish_id, &count) in &selection.counts {
        if count == 0 {
            continue;
        }
        total += count;
        match get_dish(dish_id, catalog) {
            Some(dish) => {
                if let Some(slot) = per_category.get_mut(&dish.meal_type) {
                    *slot += count;
                }
            }
            None => log::warn!("Selection references unknown dish {dish_id}"),
        }
    }

    SelectionSummary {
        per_category,
        total,
    }
}

/// Replaces one dish's count without touching the rest. A count of 0
/// unselects the dish.
pub fn set_dish_count(selection: &SelectionState, dish_id: DishId, count: u32) -> SelectionState {
    let mut updated = selection.clone();
    if count == 0 {
        updated.counts.remove(&dish_id);
    } else {
        updated.counts.insert(dish_id, count);
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Dish, DishType};

    fn dish(id: DishId, name: &str, r#type: DishType, meal_type: MealType) -> Dish {
        Dish {
            id,
            name: name.to_owned(),
            description: None,
            r#type,
            meal_type,
            image: None,
            category: None,
            ingredients: vec![],
            for_people: None,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_dishes(vec![
            dish(1, "Paneer Tikka", DishType::Veg, MealType::Starter),
            dish(2, "Chicken Wings", DishType::NonVeg, MealType::Starter),
            dish(3, "Gulab Jamun", DishType::Veg, MealType::Dessert),
        ])
        .unwrap()
    }

    fn selection(counts: &[(DishId, u32)]) -> SelectionState {
        SelectionState {
            counts: counts.iter().copied().collect(),
        }
    }

    #[test]
    fn test_summary_always_covers_all_categories() {
        let catalog = sample_catalog();
        let summary = calculate_selection_summary(&SelectionState::new(), &catalog);

        assert_eq!(summary.per_category.len(), 4);
        assert_eq!(summary.total, 0);
        assert!(summary.per_category.values().all(|count| *count == 0));
    }

    #[test]
    fn test_summary_counts_per_category_and_total() {
        let catalog = sample_catalog();
        let selection = selection(&[(1, 2), (2, 0), (3, 1)]);
        let summary = calculate_selection_summary(&selection, &catalog);

        assert_eq!(summary.count_for(&MealType::Starter), 2);
        assert_eq!(summary.count_for(&MealType::MainCourse), 0);
        assert_eq!(summary.count_for(&MealType::Dessert), 1);
        assert_eq!(summary.count_for(&MealType::Sides), 0);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_unknown_dish_counts_toward_total_only() {
        let catalog = sample_catalog();
        let selection = selection(&[(1, 2), (99, 5)]);
        let summary = calculate_selection_summary(&selection, &catalog);

        assert_eq!(summary.total, 7);
        assert_eq!(summary.count_for(&MealType::Starter), 2);
        assert_eq!(summary.per_category.values().sum::<u32>(), 2);
    }

    #[test]
    fn test_bundled_catalog_aggregation() {
        let catalog = Catalog::bundled();
        let selection = selection(&[(1, 2), (3, 1), (6, 3)]);
        let summary = calculate_selection_summary(&selection, &catalog);

        assert_eq!(summary.count_for(&MealType::Starter), 2);
        assert_eq!(summary.count_for(&MealType::Dessert), 1);
        assert_eq!(summary.count_for(&MealType::Sides), 3);
        assert_eq!(summary.total, 6);
    }

    #[test]
    fn test_aggregation_is_pure_and_idempotent() {
        let catalog = sample_catalog();
        let selection = selection(&[(1, 2), (3, 1)]);
        let before = selection.clone();

        let first = calculate_selection_summary(&selection, &catalog);
        let second = calculate_selection_summary(&selection, &catalog);

        assert_eq!(first, second);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_set_dish_count_replaces_single_entry() {
        let initial = selection(&[(1, 2), (3, 1)]);
        let updated = set_dish_count(&initial, 3, 4);

        assert_eq!(updated.count_for(1), 2);
        assert_eq!(updated.count_for(3), 4);
        assert_eq!(initial.count_for(3), 1);
    }

    #[test]
    fn test_set_dish_count_zero_removes_entry() {
        let catalog = sample_catalog();
        let initial = selection(&[(1, 2), (3, 1)]);
        let updated = set_dish_count(&initial, 1, 0);

        assert!(!updated.counts.contains_key(&1));

        let summary = calculate_selection_summary(&updated, &catalog);
        assert_eq!(summary.count_for(&MealType::Starter), 0);
        assert_eq!(summary.total, 1);
    }
}
