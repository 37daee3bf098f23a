use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::aggregate::{DocbuilderTemplate, SubmissionMeta};
use super::state_key::StateKey;
use crate::enums::SubmittableStatus;

/// Контент одного слота: ключ-шаблон (`"**l"`) → текст (может содержать разметку)
pub type SlotContent = HashMap<String, String>;

/// Таблица контента: имя слота → контент слота
pub type ContentTable = HashMap<String, SlotContent>;

/// Запрос контента интерфейса для документа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiContentRequest {
    pub template: DocbuilderTemplate,

    #[serde(default)]
    pub meta: Option<SubmissionMeta>,

    /// `None` — требования ещё не проверялись
    #[serde(default)]
    pub requirements_met: Option<bool>,

    /// Момент времени для расчёта статуса; по умолчанию текущий
    #[serde(default)]
    pub now: Option<String>,

    pub slots: Vec<String>,
}

/// Ответ с вычисленным состоянием и текстами слотов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiContentResponse {
    pub state_key: StateKey,
    pub status: SubmittableStatus,
    pub content: HashMap<String, String>,
}
