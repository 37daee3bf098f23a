use contracts::domain::a025_docbuilder::ui_content::{
    ContentTable, UiContentRequest, UiContentResponse,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use super::content_source::{ContentOverrideSource, StaticContentSource};
use super::default_content::DEFAULT_CONTENT_TABLE;
use super::submittable;
use super::ui_content::{state_key_for, UiContentResolver};
use crate::shared::instant::parse_instant;

static CONTENT_SOURCE: OnceCell<Arc<dyn ContentOverrideSource>> = OnceCell::new();

/// Установить источник переопределений контента (один раз при старте)
pub fn initialize_content_source(source: Arc<dyn ContentOverrideSource>) -> anyhow::Result<()> {
    CONTENT_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("Docbuilder content source is already initialized"))
}

fn content_source() -> Arc<dyn ContentOverrideSource> {
    match CONTENT_SOURCE.get() {
        Some(source) => Arc::clone(source),
        None => {
            tracing::warn!("Docbuilder content source is not initialized; using no overrides");
            Arc::new(StaticContentSource::default())
        }
    }
}

/// Тексты интерфейса для документа
pub async fn ui_content(request: UiContentRequest) -> anyhow::Result<UiContentResponse> {
    ui_content_with(content_source(), request).await
}

/// Тексты интерфейса для документа с явно заданным источником переопределений
pub async fn ui_content_with(
    source: Arc<dyn ContentOverrideSource>,
    request: UiContentRequest,
) -> anyhow::Result<UiContentResponse> {
    let now = match request.now.as_deref() {
        Some(value) => Some(
            parse_instant(value).ok_or_else(|| anyhow::anyhow!("Invalid 'now': {}", value))?,
        ),
        None => None,
    };

    let UiContentRequest {
        template,
        meta,
        requirements_met,
        slots,
        ..
    } = request;

    let status = submittable::calculate_status(Some(&template), meta.as_ref(), now);
    let state_key = state_key_for(&template, meta.as_ref(), requirements_met, now);

    let resolver = UiContentResolver::new(template, source);
    let content = resolver.resolve_slots(&slots, &state_key).await;

    Ok(UiContentResponse {
        state_key,
        status,
        content,
    })
}

/// Тексты по умолчанию
pub fn default_content() -> ContentTable {
    (**DEFAULT_CONTENT_TABLE).clone()
}
