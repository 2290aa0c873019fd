use crate::model::chef::Chef;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynChefQueryRepository = Arc<dyn ChefQueryRepositoryTrait + Send + Sync>;

/// Read-side view of the chef subsystem: ownership checks and projections.
#[async_trait]
pub trait ChefQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<Chef>, RepositoryError>;
}
