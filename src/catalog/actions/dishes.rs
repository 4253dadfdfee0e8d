use crate::schema::{Dish, DishId, FilterState};
use crate::source::Catalog;

/// Runs the active filter over the whole catalog in one pass. Dishes come
/// back in catalog order; an empty result is a normal outcome.
pub fn fetch_dishes<'a>(filters: &FilterState, catalog: &'a Catalog) -> Vec<&'a Dish> {
    catalog
        .dishes()
        .iter()
        .filter(|dish| filters.matches(dish))
        .collect()
}

pub fn list_dishes(catalog: &Catalog) -> &[Dish] {
    catalog.dishes()
}

pub fn get_dish(dish_id: DishId, catalog: &Catalog) -> Option<&Dish> {
    catalog.dishes().iter().find(|dish| dish.id == dish_id)
}

pub fn find_dish(name: &str, catalog: &Catalog) -> Option<DishId> {
    let name = name.to_lowercase();
    catalog
        .dishes()
        .iter()
        .find(|dish| dish.name.to_lowercase() == name)
        .map(|dish| dish.id)
}
