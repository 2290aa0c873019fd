use crate::{abstract_trait::ChefQueryRepositoryTrait, model::chef::Chef};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct ChefQueryRepository {
    db: ConnectionPool,
}

impl ChefQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChefQueryRepositoryTrait for ChefQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Chef>, RepositoryError> {
        let result = sqlx::query_as::<_, Chef>(
            r#"
            SELECT
                chef_id,
                business_name,
                bio,
                service_area,
                rating_average,
                rating_count,
                is_active,
                created_at,
                updated_at
            FROM chefs
            WHERE chef_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch chef ID {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result)
    }
}
