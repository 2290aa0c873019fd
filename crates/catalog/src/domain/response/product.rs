use crate::domain::response::{
    chef::{ChefProfileResponse, ChefRatingResponse, ChefSummaryResponse},
    pagination::Pagination,
};
use crate::model::product::{
    Category, Cuisine, DietaryTag, Difficulty, Ingredient, NutritionalInfo, Product,
    ProductWithChef, SpiceLevel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub is_available: bool,
    pub max_orders_per_day: i32,
    pub advance_order_days: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RatingResponse {
    pub average: f64,
    pub count: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatsResponse {
    pub total: i32,
    pub this_week: i32,
    pub this_month: i32,
}

/// Catalog listing entry: the product plus the owning chef's summary.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
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
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    pub tags: Vec<String>,
    pub dietary: Vec<DietaryTag>,
    pub spice_level: SpiceLevel,
    pub instructions: Vec<String>,
    pub availability: AvailabilityResponse,
    pub rating: RatingResponse,
    pub orders: OrderStatsResponse,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub chef: ChefSummaryResponse,
}

/// Single-product read: identical body, larger chef projection.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub id: i32,
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
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    pub tags: Vec<String>,
    pub dietary: Vec<DietaryTag>,
    pub spice_level: SpiceLevel,
    pub instructions: Vec<String>,
    pub availability: AvailabilityResponse,
    pub rating: RatingResponse,
    pub orders: OrderStatsResponse,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub chef: ChefProfileResponse,
}

impl From<ProductWithChef> for ProductResponse {
    fn from(value: ProductWithChef) -> Self {
        let chef = ChefSummaryResponse {
            business_name: value.chef_business_name,
            rating: ChefRatingResponse {
                average: value.chef_rating_average,
                count: value.chef_rating_count,
            },
        };

        let p = value.product;
        ProductResponse {
            id: p.product_id,
            chef_id: p.chef_id,
            name: p.name,
            description: p.description,
            category: p.category,
            cuisine: p.cuisine,
            images: p.images,
            price: p.price,
            servings: p.servings,
            prep_time: p.prep_time,
            cook_time: p.cook_time,
            difficulty: p.difficulty,
            ingredients: p.ingredients.0,
            nutritional_info: p.nutritional_info.map(|n| n.0),
            tags: p.tags,
            dietary: p.dietary,
            spice_level: p.spice_level,
            instructions: p.instructions,
            availability: AvailabilityResponse {
                is_available: p.is_available,
                max_orders_per_day: p.max_orders_per_day,
                advance_order_days: p.advance_order_days,
            },
            rating: RatingResponse {
                average: p.rating_average,
                count: p.rating_count,
            },
            orders: OrderStatsResponse {
                total: p.orders_total,
                this_week: p.orders_this_week,
                this_month: p.orders_this_month,
            },
            is_active: p.is_active,
            created_at: p.created_at.to_string(),
            updated_at: p.updated_at.to_string(),
            chef,
        }
    }
}

impl ProductDetailResponse {
    pub fn from_parts(p: Product, chef: ChefProfileResponse) -> Self {
        ProductDetailResponse {
            id: p.product_id,
            chef_id: p.chef_id,
            name: p.name,
            description: p.description,
            category: p.category,
            cuisine: p.cuisine,
            images: p.images,
            price: p.price,
            servings: p.servings,
            prep_time: p.prep_time,
            cook_time: p.cook_time,
            difficulty: p.difficulty,
            ingredients: p.ingredients.0,
            nutritional_info: p.nutritional_info.map(|n| n.0),
            tags: p.tags,
            dietary: p.dietary,
            spice_level: p.spice_level,
            instructions: p.instructions,
            availability: AvailabilityResponse {
                is_available: p.is_available,
                max_orders_per_day: p.max_orders_per_day,
                advance_order_days: p.advance_order_days,
            },
            rating: RatingResponse {
                average: p.rating_average,
                count: p.rating_count,
            },
            orders: OrderStatsResponse {
                total: p.orders_total,
                this_week: p.orders_this_week,
                this_month: p.orders_this_month,
            },
            is_active: p.is_active,
            created_at: p.created_at.to_string(),
            updated_at: p.updated_at.to_string(),
            chef,
        }
    }
}

impl From<ProductWithChef> for ProductDetailResponse {
    fn from(value: ProductWithChef) -> Self {
        let chef = ChefProfileResponse {
            business_name: value.chef_business_name,
            rating: ChefRatingResponse {
                average: value.chef_rating_average,
                count: value.chef_rating_count,
            },
            service_area: value.chef_service_area,
        };

        ProductDetailResponse::from_parts(value.product, chef)
    }
}

/// `data` payload of the listing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CatalogPageData {
    pub products: Vec<ProductResponse>,
    pub pagination: Pagination,
}

/// `data` payload of single-product endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductData {
    pub product: ProductDetailResponse,
}
