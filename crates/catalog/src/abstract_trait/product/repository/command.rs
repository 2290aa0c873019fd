use crate::{
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::product::Product,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;

    /// Applies the present fields only; `None` means the row does not exist.
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
