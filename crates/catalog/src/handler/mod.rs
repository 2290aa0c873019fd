mod product;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Json, extract::DefaultBodyLimit, response::IntoResponse, routing::get};
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
    ),
    tags(
        (name = "Product", description = "Catalog endpoints: browse, inspect and manage food listings"),
    )
)]
struct ApiDoc;

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_handler))
            .merge(product_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app =
            app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
