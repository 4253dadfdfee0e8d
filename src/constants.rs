pub const DESCRIPTION_PREVIEW_LENGTH: usize = 43;

pub const PLACEHOLDER_DISH_IMAGE: &str = "https://via.placeholder.com/120x120?text=Dish";

pub const NO_DESCRIPTION_FALLBACK: &str = "No description available";

pub const DEFAULT_CATEGORY_NAME: &str = "North Indian";

pub const DEFAULT_SELECTION_LABEL: &str = "Items Selected";

pub const MEAL_CATEGORIES: &[(&str, &str)] = &[
    ("STARTER", "Starter"),
    ("MAIN_COURSE", "Main Course"),
    ("DESSERT", "Dessert"),
    ("SIDES", "Sides"),
];

pub const SELECTION_LABELS: &[(&str, &str)] = &[
    ("STARTER", "Starters Selected"),
    ("MAIN_COURSE", "Main Courses Selected"),
    ("DESSERT", "Desserts Selected"),
    ("SIDES", "Sides Selected"),
];

pub const DISH_TYPES: &[(&str, &str)] = &[
    ("VEG", "Veg"),
    ("NONVEG", "Non-Veg"),
];
