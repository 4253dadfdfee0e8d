use std::{collections::HashMap, str::FromStr};

use serde_json::Value;

use super::error::TypeError;
use super::schema::{DishId, DishType, FilterState, MealType};

pub type FormData = HashMap<String, Value>;

pub struct Form {
    inner: HashMap<String, Value>,
}

impl Form {
    pub fn from_data(data: FormData) -> Self {
        Self { inner: data }
    }

    pub fn get_value<T>(&self, key: &str) -> Result<T, TypeError>
    where
        T: TryFrom<Value>,
    {
        match self.inner.get(key) {
            Some(value) => value
                .to_owned()
                .try_into()
                .map_err(|_e| TypeError::new("Invalid type conversion")),
            None => Err(TypeError::new("Invalid key")),
        }
    }

    /// Like `get_value`, but an absent key or JSON null is `None` instead of
    /// an error. A present but unparseable value still fails.
    pub fn get_optional<T>(&self, key: &str) -> Result<Option<T>, TypeError>
    where
        T: TryFrom<Value>,
    {
        match self.inner.get(key) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => value
                .to_owned()
                .try_into()
                .map(Some)
                .map_err(|_e| TypeError::new("Invalid type conversion")),
        }
    }

    pub fn get_number<T>(&self, key: &str) -> Result<T, TypeError>
    where
        T: FromStr,
    {
        match self.inner.get(key) {
            Some(value) => match value.as_str() {
                Some(v) => v
                    .to_owned()
                    .parse()
                    .map_err(|_e| TypeError::new("Invalid type conversion")),
                None => Err(TypeError::new("Failed to parse value as str")),
            },
            None => Err(TypeError::new("Invalid key")),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<String, TypeError> {
        match self.inner.get(key) {
            Some(value) => match value.as_str() {
                Some(v) => Ok(v.to_string()),
                None => Err(TypeError::new("Invalid key")),
            },
            None => Err(TypeError::new("Invalid key")),
        }
    }
}

/// Builds the filter from UI-reported form data. Never fails: absent or
/// malformed values collapse the filter to the matches-nothing state, since
/// an over-strict menu screen is worse than an empty one.
pub fn filter_state_from_form(form: &Form) -> FilterState {
    let search = form.get_str("search").unwrap_or_default();

    let category = match form.get_optional::<MealType>("category") {
        Ok(category) => category,
        Err(e) => {
            log::warn!("Discarding malformed category filter {e}");
            None
        }
    };

    match form.get_optional::<DishType>("veg") {
        Ok(veg) => FilterState {
            category,
            search,
            veg,
        },
        Err(e) => {
            log::warn!("Discarding malformed veg filter {e}");
            FilterState {
                category: None,
                search,
                veg: None,
            }
        }
    }
}

/// The (dish, new absolute count) pair reported by the +/- steppers.
pub fn dish_count_from_form(form: &Form) -> Result<(DishId, u32), TypeError> {
    let dish_id = form.get_number::<DishId>("dish_id")?;
    let count = form.get_number::<u32>("count")?;

    Ok((dish_id, count))
}
