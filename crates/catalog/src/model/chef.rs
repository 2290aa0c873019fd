use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Seller record. Owned by the (out-of-scope) chef subsystem; the catalog
/// only reads it for ownership checks and response projections.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chef {
    pub chef_id: i32,
    pub business_name: String,
    pub bio: Option<String>,
    pub service_area: Vec<String>,
    pub rating_average: f64,
    pub rating_count: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
