use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::ProductFilter,
    model::product::ProductWithChef,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

/// Every product column plus the chef projection; shared by both queries so
/// the row shape stays in one place.
const PRODUCT_WITH_CHEF_COLUMNS: &str = r#"
    p.product_id,
    p.chef_id,
    p.name,
    p.description,
    p.category,
    p.cuisine,
    p.images,
    p.price,
    p.servings,
    p.prep_time,
    p.cook_time,
    p.difficulty,
    p.ingredients,
    p.nutritional_info,
    p.tags,
    p.dietary,
    p.spice_level,
    p.instructions,
    p.is_available,
    p.max_orders_per_day,
    p.advance_order_days,
    p.rating_average,
    p.rating_count,
    p.orders_total,
    p.orders_this_week,
    p.orders_this_month,
    p.is_active,
    p.created_at,
    p.updated_at,
    c.business_name AS chef_business_name,
    c.rating_average AS chef_rating_average,
    c.rating_count AS chef_rating_count,
    c.service_area AS chef_service_area
"#;

#[derive(Debug, FromRow)]
struct CatalogPageRow {
    #[sqlx(flatten)]
    item: ProductWithChef,
    total_count: i64,
}

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_catalog(
        &self,
        filter: &ProductFilter,
    ) -> Result<(Vec<ProductWithChef>, i64), RepositoryError> {
        info!(
            "🔍 Fetching catalog page {} (limit {}, search: {:?})",
            filter.page, filter.limit, filter.search
        );

        let limit = i64::from(filter.limit);
        let offset = i64::from((filter.page - 1).max(0)) * limit;

        let search_pattern = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let sql = format!(
            r#"
            SELECT
                {PRODUCT_WITH_CHEF_COLUMNS},
                COUNT(*) OVER() AS total_count
            FROM products p
            JOIN chefs c ON c.chef_id = p.chef_id
            WHERE p.is_active = TRUE
              AND p.is_available = TRUE
              AND ($1::product_category IS NULL OR p.category = $1)
              AND ($2::cuisine_type IS NULL OR p.cuisine = $2)
              AND ($3::TEXT IS NULL
                   OR p.name ILIKE '%' || $3 || '%'
                   OR p.description ILIKE '%' || $3 || '%'
                   OR array_to_string(p.tags, ' ') ILIKE '%' || $3 || '%')
            ORDER BY p.rating_average DESC, p.created_at DESC
            LIMIT $4 OFFSET $5
            "#
        );

        let rows = sqlx::query_as::<_, CatalogPageRow>(&sql)
            .bind(filter.category)
            .bind(filter.cuisine)
            .bind(search_pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch catalog page: {e:?}");
                RepositoryError::from(e)
            })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.item).collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithChef>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT
                {PRODUCT_WITH_CHEF_COLUMNS}
            FROM products p
            JOIN chefs c ON c.chef_id = p.chef_id
            WHERE p.product_id = $1
            "#
        );

        let result = sqlx::query_as::<_, ProductWithChef>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product ID {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result)
    }
}
