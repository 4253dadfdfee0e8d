use std::collections::HashSet;

use super::error::CatalogError;
use super::schema::{Dish, DishId};

const BUNDLED_DISHES: &str = include_str!("../data/dishes.json");

/// Immutable dish store, built once at startup and passed by reference into
/// every query. The unique-id invariant is enforced here, so queries never
/// revalidate it.
#[derive(Debug, Clone)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn from_dishes(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<DishId> = HashSet::with_capacity(dishes.len());
        for dish in &dishes {
            if !seen.insert(dish.id) {
                return Err(CatalogError::new(format!(
                    "Duplicate dish id {} ({})",
                    dish.id, dish.name
                )));
            }
        }
        Ok(Self { dishes })
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let dishes: Vec<Dish> = serde_json::from_str(data)?;
        let catalog = Self::from_dishes(dishes)?;
        log::info!("Loaded dish catalog ({} dishes)", catalog.len());
        Ok(catalog)
    }

    /// The menu shipped with the crate. Validated by test, infallible at
    /// runtime.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_DISHES).expect("bundled dish catalog is valid")
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
