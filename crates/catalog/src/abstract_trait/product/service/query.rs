use crate::domain::{
    requests::FindAllProducts,
    response::{
        api::ApiResponse,
        product::{CatalogPageData, ProductData},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_catalog(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<CatalogPageData>, ServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductData>, ServiceError>;
}
