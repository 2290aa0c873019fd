use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::product::{Ingredient, NutritionalInfo, Product},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::types::Json;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = r#"
    product_id, chef_id, name, description, category, cuisine, images, price,
    servings, prep_time, cook_time, difficulty, ingredients, nutritional_info,
    tags, dietary, spice_level, instructions, is_available, max_orders_per_day,
    advance_order_days, rating_average, rating_count, orders_total,
    orders_this_week, orders_this_month, is_active, created_at, updated_at
"#;

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let ingredients: Json<Vec<Ingredient>> = Json(
            req.ingredients
                .iter()
                .cloned()
                .map(Ingredient::from)
                .collect(),
        );
        let nutritional_info: Option<Json<NutritionalInfo>> =
            req.nutritional_info.map(|n| Json(NutritionalInfo::from(n)));

        let sql = format!(
            r#"
            INSERT INTO products (
                chef_id, name, description, category, cuisine, images, price,
                servings, prep_time, cook_time, difficulty, ingredients,
                nutritional_info, tags, dietary, spice_level, instructions,
                is_available, max_orders_per_day, advance_order_days,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20,
                current_timestamp, current_timestamp
            )
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, Product>(&sql)
            .bind(req.chef_id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.category)
            .bind(req.cuisine)
            .bind(&req.images)
            .bind(req.price)
            .bind(req.servings)
            .bind(req.prep_time)
            .bind(req.cook_time)
            .bind(req.difficulty)
            .bind(ingredients)
            .bind(nutritional_info)
            .bind(&req.tags)
            .bind(&req.dietary)
            .bind(req.spice_level)
            .bind(&req.instructions)
            .bind(req.availability.is_available)
            .bind(req.availability.max_orders_per_day)
            .bind(req.availability.advance_order_days)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product '{}': {err:?}", req.name);
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let ingredients: Option<Json<Vec<Ingredient>>> = req
            .ingredients
            .as_ref()
            .map(|list| Json(list.iter().cloned().map(Ingredient::from).collect()));
        let nutritional_info: Option<Json<NutritionalInfo>> =
            req.nutritional_info.map(|n| Json(NutritionalInfo::from(n)));

        let sql = format!(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                cuisine = COALESCE($5, cuisine),
                images = COALESCE($6, images),
                price = COALESCE($7, price),
                servings = COALESCE($8, servings),
                prep_time = COALESCE($9, prep_time),
                cook_time = COALESCE($10, cook_time),
                difficulty = COALESCE($11, difficulty),
                ingredients = COALESCE($12, ingredients),
                nutritional_info = COALESCE($13, nutritional_info),
                tags = COALESCE($14, tags),
                dietary = COALESCE($15, dietary),
                spice_level = COALESCE($16, spice_level),
                instructions = COALESCE($17, instructions),
                is_available = COALESCE($18, is_available),
                max_orders_per_day = COALESCE($19, max_orders_per_day),
                advance_order_days = COALESCE($20, advance_order_days),
                is_active = COALESCE($21, is_active),
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.category)
            .bind(req.cuisine)
            .bind(&req.images)
            .bind(req.price)
            .bind(req.servings)
            .bind(req.prep_time)
            .bind(req.cook_time)
            .bind(req.difficulty)
            .bind(ingredients)
            .bind(nutritional_info)
            .bind(&req.tags)
            .bind(&req.dietary)
            .bind(req.spice_level)
            .bind(&req.instructions)
            .bind(req.availability.as_ref().map(|a| a.is_available))
            .bind(req.availability.as_ref().map(|a| a.max_orders_per_day))
            .bind(req.availability.as_ref().map(|a| a.advance_order_days))
            .bind(req.is_active)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if let Some(product) = &result {
            info!("🔄 Updated product ID {}", product.product_id);
        }
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i32>(
            r#"
            DELETE FROM products
            WHERE product_id = $1
            RETURNING product_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if deleted.is_some() {
            info!("🗑️ Deleted product ID {id}");
        }
        Ok(deleted.is_some())
    }
}
