use crate::{
    abstract_trait::{
        DynChefQueryRepository,
        product::{repository::DynProductCommandRepository, service::ProductCommandServiceTrait},
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{
            api::{ApiResponse, MessageResponse},
            chef::ChefProfileResponse,
            product::{ProductData, ProductDetailResponse},
        },
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub chef_query: DynChefQueryRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, chef_query: DynChefQueryRepository) -> Self {
        Self { command, chef_query }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductData>, ServiceError> {
        info!("🧑‍🍳 Creating product '{}' for chef {}", req.name, req.chef_id);

        // Ownership gate: the referenced chef must exist before anything is
        // written.
        let chef = match self.chef_query.find_by_id(req.chef_id).await {
            Ok(Some(chef)) => chef,
            Ok(None) => {
                info!("Chef not found with ID: {}", req.chef_id);
                return Err(ServiceError::NotFound("Chef not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while checking chef {}: {e:?}", req.chef_id);
                return Err(ServiceError::Repo(e));
            }
        };

        let product = self.command.create(req).await.map_err(|e| {
            error!("❌ Failed to create product '{}': {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        let response = ProductDetailResponse::from_parts(product, ChefProfileResponse::from(&chef));

        Ok(ApiResponse::with_message(
            "Product created successfully",
            ProductData { product: response },
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductData>, ServiceError> {
        let product = match self.command.update(id, req).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                info!("Product not found with ID: {id}");
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while updating product ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let chef = self
            .chef_query
            .find_by_id(product.chef_id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| {
                error!(
                    "❌ Product {id} references chef {} which no longer resolves",
                    product.chef_id
                );
                ServiceError::Internal("Product owner could not be resolved".to_string())
            })?;

        let response = ProductDetailResponse::from_parts(product, ChefProfileResponse::from(&chef));

        Ok(ApiResponse::with_message(
            "Product updated successfully",
            ProductData { product: response },
        ))
    }

    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        let deleted = self.command.delete(id).await.map_err(|e| {
            error!("❌ Database error while deleting product ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if !deleted {
            info!("Product not found with ID: {id}");
            return Err(ServiceError::NotFound("Product not found".to_string()));
        }

        Ok(MessageResponse::new("Product deleted successfully"))
    }
}
