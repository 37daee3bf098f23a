use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A025 DOCBUILDER
        // ========================================
        .route(
            "/api/a025/ui_content",
            post(handlers::a025_docbuilder::ui_content),
        )
        .route(
            "/api/a025/default_content",
            get(handlers::a025_docbuilder::default_content),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_build() {
        let _router: Router = configure_routes();
    }
}
