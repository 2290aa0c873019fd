use crate::domain::{
    requests::{CreateProductRequest, UpdateProductRequest},
    response::{
        api::{ApiResponse, MessageResponse},
        product::ProductData,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductData>, ServiceError>;

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductData>, ServiceError>;

    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
