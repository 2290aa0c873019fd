use crate::{domain::requests::ProductFilter, model::product::ProductWithChef};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Returns one catalog page plus the total match count. Only listed
    /// products (active and available) are visible here.
    async fn find_catalog(
        &self,
        filter: &ProductFilter,
    ) -> Result<(Vec<ProductWithChef>, i64), RepositoryError>;

    /// Direct lookup; ignores the active/availability toggles so owner and
    /// admin views can see delisted products.
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithChef>, RepositoryError>;
}
