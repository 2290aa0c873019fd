use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::{FindAllProducts, ProductFilter},
        response::{
            api::ApiResponse,
            pagination::Pagination,
            product::{CatalogPageData, ProductData, ProductDetailResponse, ProductResponse},
        },
    },
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::ServiceError;
use tracing::{error, info};

const DEFAULT_PAGE_SIZE: i32 = 20;

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

/// Resolves an optional `category`/`cuisine` query value against its closed
/// vocabulary. `"All"` and the empty string are the storefront's no-filter
/// sentinels.
fn parse_vocab_filter<T: DeserializeOwned>(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<T>, ServiceError> {
    match raw.map(str::trim) {
        None | Some("") | Some("All") => Ok(None),
        Some(value) => serde_json::from_value(Value::String(value.to_owned()))
            .map(Some)
            .map_err(|_| {
                ServiceError::Validation(vec![format!(
                    "{field}: '{value}' is not a recognized {field}"
                )])
            }),
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_catalog(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<CatalogPageData>, ServiceError> {
        info!(
            "🔍 Browsing catalog | Page: {}, Limit: {}, Category: {:?}, Cuisine: {:?}, Search: {:?}",
            req.page, req.limit, req.category, req.cuisine, req.search
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 {
            req.limit
        } else {
            DEFAULT_PAGE_SIZE
        };

        let filter = ProductFilter {
            category: parse_vocab_filter("category", req.category.as_deref())?,
            cuisine: parse_vocab_filter("cuisine", req.cuisine.as_deref())?,
            search: req.search.clone().filter(|s| !s.trim().is_empty()),
            page,
            limit,
        };

        let (rows, total) = self.query.find_catalog(&filter).await.map_err(|e| {
            error!("❌ Failed to fetch catalog page: {e:?}");
            ServiceError::Repo(e)
        })?;

        let products: Vec<ProductResponse> =
            rows.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products (total: {total})", products.len());

        Ok(ApiResponse::new(CatalogPageData {
            products,
            pagination: Pagination::new(page, limit, total),
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductData>, ServiceError> {
        let row = match self.query.find_by_id(id).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                info!("Product not found with ID: {id}");
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        info!(
            "✅ Found product '{}' (ID: {id})",
            row.product.name
        );

        Ok(ApiResponse::new(ProductData {
            product: ProductDetailResponse::from(row),
        }))
    }
}
