use crate::model::product::{
    Category, Cuisine, DietaryTag, Difficulty, Ingredient, NutritionalInfo, SpiceLevel,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Raw catalog listing query. `category`/`cuisine` stay strings here because
/// the wire accepts the "All" sentinel; the query service resolves them into
/// a typed [`ProductFilter`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    pub category: Option<String>,

    pub cuisine: Option<String>,

    pub search: Option<String>,

    #[serde(default = "default_limit")]
    pub limit: i32,

    #[serde(default = "default_page")]
    pub page: i32,
}

fn default_limit() -> i32 {
    20
}

fn default_page() -> i32 {
    1
}

/// Normalized listing parameters handed to the repository. Page is 1-indexed
/// and both page and limit are already clamped positive.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub cuisine: Option<Cuisine>,
    pub search: Option<String>,
    pub page: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct IngredientInput {
    #[validate(length(min = 1, message = "Ingredient name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Ingredient quantity is required"))]
    pub quantity: String,

    pub allergens: Option<Vec<String>>,
}

impl From<IngredientInput> for Ingredient {
    fn from(value: IngredientInput) -> Self {
        Ingredient {
            name: value.name,
            quantity: value.quantity,
            allergens: value.allergens,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct NutritionalInfoInput {
    #[validate(range(min = 0.0, message = "Calories cannot be negative"))]
    pub calories: f64,

    #[validate(range(min = 0.0, message = "Protein cannot be negative"))]
    pub protein: f64,

    #[validate(range(min = 0.0, message = "Carbs cannot be negative"))]
    pub carbs: f64,

    #[validate(range(min = 0.0, message = "Fat cannot be negative"))]
    pub fat: f64,

    #[validate(range(min = 0.0, message = "Fiber cannot be negative"))]
    pub fiber: f64,

    #[validate(range(min = 0.0, message = "Sugar cannot be negative"))]
    pub sugar: f64,
}

impl From<NutritionalInfoInput> for NutritionalInfo {
    fn from(value: NutritionalInfoInput) -> Self {
        NutritionalInfo {
            calories: value.calories,
            protein: value.protein,
            carbs: value.carbs,
            fat: value.fat,
            fiber: value.fiber,
            sugar: value.sugar,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityInput {
    #[serde(default = "default_true")]
    pub is_available: bool,

    #[validate(range(min = 1, message = "Must allow at least 1 order per day"))]
    pub max_orders_per_day: i32,

    #[validate(range(min = 0, max = 7, message = "Advance notice cannot exceed 7 days"))]
    pub advance_order_days: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub chef_id: i32,

    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    #[schema(example = "Nyonya Chicken Curry")]
    pub name: String,

    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: String,

    pub category: Category,

    pub cuisine: Cuisine,

    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,

    #[validate(range(min = 0.01, message = "Price must be greater than 0"))]
    #[schema(example = 12.5)]
    pub price: f64,

    #[validate(range(min = 1, message = "Must serve at least 1 person"))]
    pub servings: i32,

    #[validate(range(min = 1, message = "Prep time must be at least 1 minute"))]
    pub prep_time: i32,

    #[validate(range(min = 1, message = "Cook time must be at least 1 minute"))]
    pub cook_time: i32,

    pub difficulty: Difficulty,

    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,

    #[validate(nested)]
    pub nutritional_info: Option<NutritionalInfoInput>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub dietary: Vec<DietaryTag>,

    #[serde(default)]
    pub spice_level: SpiceLevel,

    #[validate(length(min = 1, message = "Cooking instructions are required"))]
    pub instructions: Vec<String>,

    #[validate(nested)]
    pub availability: AvailabilityInput,
}

/// Partial update. Only fields carried here are mutable through the public
/// API; the rating and order aggregates belong to the rating/order
/// subsystems and ownership never transfers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: Option<String>,

    pub category: Option<Category>,

    pub cuisine: Option<Cuisine>,

    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Option<Vec<String>>,

    #[validate(range(min = 0.01, message = "Price must be greater than 0"))]
    pub price: Option<f64>,

    #[validate(range(min = 1, message = "Must serve at least 1 person"))]
    pub servings: Option<i32>,

    #[validate(range(min = 1, message = "Prep time must be at least 1 minute"))]
    pub prep_time: Option<i32>,

    #[validate(range(min = 1, message = "Cook time must be at least 1 minute"))]
    pub cook_time: Option<i32>,

    pub difficulty: Option<Difficulty>,

    #[validate(nested)]
    pub ingredients: Option<Vec<IngredientInput>>,

    #[validate(nested)]
    pub nutritional_info: Option<NutritionalInfoInput>,

    pub tags: Option<Vec<String>>,

    pub dietary: Option<Vec<DietaryTag>>,

    pub spice_level: Option<SpiceLevel>,

    #[validate(length(min = 1, message = "Cooking instructions are required"))]
    pub instructions: Option<Vec<String>>,

    #[validate(nested)]
    pub availability: Option<AvailabilityInput>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_request() -> CreateProductRequest {
        CreateProductRequest {
            chef_id: 1,
            name: "Beef Rendang".into(),
            description: "Slow-cooked dry curry".into(),
            category: Category::MainCourse,
            cuisine: Cuisine::Indonesian,
            images: vec!["/img/rendang.jpg".into()],
            price: 14.9,
            servings: 2,
            prep_time: 30,
            cook_time: 180,
            difficulty: Difficulty::Hard,
            ingredients: vec![IngredientInput {
                name: "Beef chuck".into(),
                quantity: "500g".into(),
                allergens: None,
            }],
            nutritional_info: None,
            tags: vec!["curry".into()],
            dietary: vec![DietaryTag::DairyFree],
            spice_level: SpiceLevel::Hot,
            instructions: vec!["Simmer until dry".into()],
            availability: AvailabilityInput {
                is_available: true,
                max_orders_per_day: 5,
                advance_order_days: 1,
            },
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn zero_price_fails_one_cent_passes() {
        let mut req = valid_create_request();
        req.price = 0.0;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        req.price = 0.01;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn name_over_100_chars_fails() {
        let mut req = valid_create_request();
        req.name = "x".repeat(101);
        assert!(req.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn empty_images_and_instructions_fail() {
        let mut req = valid_create_request();
        req.images.clear();
        req.instructions.clear();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("images"));
        assert!(fields.contains_key("instructions"));
    }

    #[test]
    fn advance_order_days_bounded_to_a_week() {
        let mut req = valid_create_request();
        req.availability.advance_order_days = 8;
        assert!(req.validate().is_err());

        req.availability.advance_order_days = 7;
        assert!(req.validate().is_ok());

        req.availability.advance_order_days = 0;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn ingredient_without_quantity_fails() {
        let mut req = valid_create_request();
        req.ingredients[0].quantity = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_nutritional_value_fails() {
        let mut req = valid_create_request();
        req.nutritional_info = Some(NutritionalInfoInput {
            calories: 450.0,
            protein: 32.0,
            carbs: 10.0,
            fat: -1.0,
            fiber: 2.0,
            sugar: 3.0,
        });
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_validators_only_run_on_present_fields() {
        let req = UpdateProductRequest::default();
        assert!(req.validate().is_ok());

        let req = UpdateProductRequest {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = UpdateProductRequest {
            price: Some(9.5),
            servings: Some(3),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_request_wire_format_is_camel_case() {
        let payload = serde_json::json!({
            "chefId": 7,
            "name": "Miso Soup",
            "description": "Classic starter",
            "category": "Soups",
            "cuisine": "Japanese",
            "images": ["/img/miso.jpg"],
            "price": 4.5,
            "servings": 1,
            "prepTime": 5,
            "cookTime": 10,
            "difficulty": "Easy",
            "instructions": ["Warm the dashi", "Whisk in miso"],
            "availability": { "maxOrdersPerDay": 10, "advanceOrderDays": 0 }
        });

        let req: CreateProductRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(req.chef_id, 7);
        assert_eq!(req.spice_level, SpiceLevel::Mild);
        assert!(req.availability.is_available);
        assert!(req.validate().is_ok());
    }
}
