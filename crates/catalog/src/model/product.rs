use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;

/// Fixed menu vocabulary. Stored as the `product_category` Postgres enum;
/// values outside the vocabulary are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_category")]
pub enum Category {
    Appetizers,
    #[serde(rename = "Main Course")]
    #[sqlx(rename = "Main Course")]
    MainCourse,
    Desserts,
    Soups,
    Salads,
    Beverages,
    Snacks,
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cuisine_type")]
pub enum Cuisine {
    Italian,
    Chinese,
    Indian,
    Malay,
    Mexican,
    American,
    Japanese,
    Thai,
    French,
    Korean,
    Mediterranean,
    Greek,
    Spanish,
    Vietnamese,
    Lebanese,
    Moroccan,
    Indonesian,
    #[serde(rename = "Hong Kong")]
    #[sqlx(rename = "Hong Kong")]
    HongKong,
    Taiwanese,
    #[serde(rename = "Health Food")]
    #[sqlx(rename = "Health Food")]
    HealthFood,
    Fusion,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "difficulty_level")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Four ordered heat levels, mildest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "spice_level")]
pub enum SpiceLevel {
    #[default]
    Mild,
    Medium,
    Hot,
    #[serde(rename = "Very Hot")]
    #[sqlx(rename = "Very Hot")]
    VeryHot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "dietary_tag")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    #[sqlx(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    #[sqlx(rename = "Dairy-Free")]
    DairyFree,
    #[serde(rename = "Nut-Free")]
    #[sqlx(rename = "Nut-Free")]
    NutFree,
    #[serde(rename = "Soy-Free")]
    #[sqlx(rename = "Soy-Free")]
    SoyFree,
    #[serde(rename = "Egg-Free")]
    #[sqlx(rename = "Egg-Free")]
    EggFree,
    Keto,
    Paleo,
    #[serde(rename = "Low-Carb")]
    #[sqlx(rename = "Low-Carb")]
    LowCarb,
    #[serde(rename = "High-Protein")]
    #[sqlx(rename = "High-Protein")]
    HighProtein,
}

/// One recipe line item, stored inside the product's `ingredients` JSONB
/// column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub chef_id: i32,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub cuisine: Cuisine,
    pub images: Vec<String>,
    pub price: f64,
    pub servings: i32,
    pub prep_time: i32,
    pub cook_time: i32,
    pub difficulty: Difficulty,
    pub ingredients: Json<Vec<Ingredient>>,
    pub nutritional_info: Option<Json<NutritionalInfo>>,
    pub tags: Vec<String>,
    pub dietary: Vec<DietaryTag>,
    pub spice_level: SpiceLevel,
    pub instructions: Vec<String>,
    pub is_available: bool,
    pub max_orders_per_day: i32,
    pub advance_order_days: i32,
    pub rating_average: f64,
    pub rating_count: i32,
    pub orders_total: i32,
    pub orders_this_week: i32,
    pub orders_this_month: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A product row joined with the owning chef's projection columns. The FK
/// guarantees the chef side is present.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithChef {
    #[sqlx(flatten)]
    pub product: Product,
    pub chef_business_name: String,
    pub chef_rating_average: f64,
    pub chef_rating_count: i32,
    pub chef_service_area: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_rejects_values_outside_vocabulary() {
        assert!(serde_json::from_value::<Category>(json!("Brunch")).is_err());
        assert_eq!(
            serde_json::from_value::<Category>(json!("Main Course")).unwrap(),
            Category::MainCourse
        );
    }

    #[test]
    fn spice_level_defaults_to_mild_and_orders_by_heat() {
        assert_eq!(SpiceLevel::default(), SpiceLevel::Mild);
        assert!(SpiceLevel::Mild < SpiceLevel::VeryHot);
        assert_eq!(
            serde_json::to_value(SpiceLevel::VeryHot).unwrap(),
            json!("Very Hot")
        );
    }

    #[test]
    fn dietary_tags_round_trip_hyphenated_labels() {
        let tags: Vec<DietaryTag> =
            serde_json::from_value(json!(["Gluten-Free", "High-Protein"])).unwrap();
        assert_eq!(tags, vec![DietaryTag::GlutenFree, DietaryTag::HighProtein]);
    }
}
