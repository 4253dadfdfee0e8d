use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    DEFAULT_CATEGORY_NAME, DESCRIPTION_PREVIEW_LENGTH, NO_DESCRIPTION_FALLBACK,
    PLACEHOLDER_DISH_IMAGE,
};

use super::error::TypeError;

pub type DishId = i32;

#[derive(Clone, Debug, PartialEq, PartialOrd, Serialize, Eq, Ord, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishType {
    Veg,
    #[serde(rename = "NONVEG")]
    NonVeg,
}

impl TryFrom<Value> for DishType {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.as_str() {
            Some(value) => match value.to_uppercase().as_str() {
                "VEG" => Ok(Self::Veg),
                "NONVEG" => Ok(Self::NonVeg),
                _ => Err(TypeError::new("Invalid variant")),
            },
            None => return Err(TypeError::new("Failed to parse value as string")),
        }
    }
}

impl DishType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishType::Veg => "VEG",
            DishType::NonVeg => "NONVEG",
        }
    }
}

impl Display for DishType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd, Serialize, Eq, Ord, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Starter,
    /* older menu exports spell this with a space */
    #[serde(alias = "MAIN COURSE")]
    MainCourse,
    Dessert,
    Sides,
}

impl TryFrom<Value> for MealType {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.as_str() {
            Some(value) => match value.to_uppercase().as_str() {
                "STARTER" => Ok(Self::Starter),
                "MAIN_COURSE" | "MAIN COURSE" => Ok(Self::MainCourse),
                "DESSERT" => Ok(Self::Dessert),
                "SIDES" => Ok(Self::Sides),
                _ => Err(TypeError::new("Invalid variant")),
            },
            None => return Err(TypeError::new("Failed to parse value as string")),
        }
    }
}

impl MealType {
    /* tab order on the menu screen */
    pub const ALL: [MealType; 4] = [
        MealType::Starter,
        MealType::MainCourse,
        MealType::Dessert,
        MealType::Sides,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Starter => "STARTER",
            MealType::MainCourse => "MAIN_COURSE",
            MealType::Dessert => "DESSERT",
            MealType::Sides => "SIDES",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCategory {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: Option<String>,
    pub r#type: DishType,
    pub meal_type: MealType,
    pub image: Option<String>,
    pub category: Option<DishCategory>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub for_people: Option<u32>,
}

impl Dish {
    /* dish image → category image → placeholder */
    pub fn image_url(&self) -> &str {
        if let Some(image) = self.image.as_deref().filter(|image| !image.is_empty()) {
            return image;
        }
        self.category
            .as_ref()
            .and_then(|category| category.image.as_deref())
            .filter(|image| !image.is_empty())
            .unwrap_or(PLACEHOLDER_DISH_IMAGE)
    }

    /// Full text for the detail view, with a fallback when the menu data
    /// carries none.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_DESCRIPTION_FALLBACK,
        }
    }

    /// Card preview: the raw description cut at the preview length. Empty
    /// when the dish has no description; the detail-view fallback does not
    /// leak into cards.
    pub fn preview_description(&self) -> &str {
        let text = self.description.as_deref().unwrap_or("");
        match text.char_indices().nth(DESCRIPTION_PREVIEW_LENGTH) {
            Some((cut, _)) => &text[..cut],
            None => text,
        }
    }

    /// Whether the preview lost anything, i.e. whether a "Read more" affordance
    /// makes sense.
    pub fn has_long_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|text| text.chars().count() > DESCRIPTION_PREVIEW_LENGTH)
            .unwrap_or(false)
    }

    /// Cuisine caption on the detail sheet, with the menu's house default.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_NAME)
    }

    pub fn serving_label(&self) -> Option<String> {
        self.for_people.map(|count| format!("For {count} people"))
    }
}

/// Active query state of the menu screen. Exactly one category tab is active
/// at a time; `category: None` only arises from absent or malformed input and
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<MealType>,
    pub search: String,
    pub veg: Option<DishType>,
}

impl FilterState {
    pub fn for_category(category: MealType) -> Self {
        Self {
            category: Some(category),
            search: String::new(),
            veg: None,
        }
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        let matches_category = match &self.category {
            Some(category) => dish.meal_type == *category,
            None => false,
        };
        let matches_search = self.search.is_empty()
            || dish.name.to_lowercase().contains(&self.search.to_lowercase());
        let matches_veg = match &self.veg {
            Some(veg) => dish.r#type == *veg,
            None => true,
        };
        matches_category && matches_search && matches_veg
    }
}

/// Per-dish unit counts. Counts are unsigned; a count of 0 means unselected
/// and is removed by the update path, though aggregation also tolerates
/// explicit zeros in hand-built maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub counts: HashMap<DishId, u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_for(&self, dish_id: DishId) -> u32 {
        self.counts.get(&dish_id).copied().unwrap_or(0)
    }

    pub fn is_selected(&self, dish_id: DishId) -> bool {
        self.count_for(dish_id) > 0
    }
}

/// Aggregated counts; `per_category` always carries all four categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub per_category: HashMap<MealType, u32>,
    pub total: u32,
}

impl SelectionSummary {
    pub fn count_for(&self, category: &MealType) -> u32 {
        self.per_category.get(category).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTab {
    pub category: MealType,
    pub label: &'static str,
    pub selected_count: u32,
}
