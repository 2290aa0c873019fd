use crate::{
    abstract_trait::{
        DynChefQueryRepository,
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    repository::{
        chef::ChefQueryRepository,
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::product::{ProductCommandService, ProductQueryService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let chef_query_repo: DynChefQueryRepository = Arc::new(ChefQueryRepository::new(pool));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_command_repo,
            chef_query_repo,
        ));

        Self {
            product_query,
            product_command,
        }
    }
}
