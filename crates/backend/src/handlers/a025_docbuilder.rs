use axum::Json;
use contracts::domain::a025_docbuilder::ui_content::{
    ContentTable, UiContentRequest, UiContentResponse,
};

use crate::domain::a025_docbuilder;

/// POST /api/a025/ui_content
pub async fn ui_content(
    Json(request): Json<UiContentRequest>,
) -> Result<Json<UiContentResponse>, axum::http::StatusCode> {
    match a025_docbuilder::service::ui_content(request).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::warn!("ui_content request rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// GET /api/a025/default_content
pub async fn default_content() -> Json<ContentTable> {
    Json(a025_docbuilder::service::default_content())
}
