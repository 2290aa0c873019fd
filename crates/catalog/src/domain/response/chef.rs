use crate::model::chef::Chef;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ChefRatingResponse {
    pub average: f64,
    pub count: i32,
}

/// Chef projection embedded in catalog listings.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChefSummaryResponse {
    pub business_name: String,
    pub rating: ChefRatingResponse,
}

/// Larger chef projection embedded in single-product reads.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChefProfileResponse {
    pub business_name: String,
    pub rating: ChefRatingResponse,
    pub service_area: Vec<String>,
}

impl From<&Chef> for ChefSummaryResponse {
    fn from(value: &Chef) -> Self {
        ChefSummaryResponse {
            business_name: value.business_name.clone(),
            rating: ChefRatingResponse {
                average: value.rating_average,
                count: value.rating_count,
            },
        }
    }
}

impl From<&Chef> for ChefProfileResponse {
    fn from(value: &Chef) -> Self {
        ChefProfileResponse {
            business_name: value.business_name.clone(),
            rating: ChefRatingResponse {
                average: value.rating_average,
                count: value.rating_count,
            },
            service_area: value.service_area.clone(),
        }
    }
}
