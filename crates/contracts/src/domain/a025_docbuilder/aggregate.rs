use serde::{Deserialize, Serialize};

// ============================================================================
// Docbuilder Template
// ============================================================================

/// Длительность периода ожидания перед блокировкой.
///
/// Источник отдаёт значение то числом, то строкой, поэтому принимаем оба варианта
/// и приводим к целому так же, как это делает клиент.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LockAfter {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LockAfter {
    /// Целое значение периода, если его удаётся разобрать
    pub fn as_int(&self) -> Option<i64> {
        match self {
            LockAfter::Int(v) => Some(*v),
            LockAfter::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            LockAfter::Float(_) => None,
            LockAfter::Text(s) => parse_leading_int(s),
        }
    }
}

/// Разобрать целое в начале строки: " 10 days" → 10, "abc" → None
fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Шаблон документа Docbuilder (только чтение)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocbuilderTemplate {
    pub id: i64,

    /// Машинное имя, по которому ищутся переопределения контента
    pub machine_name: String,

    /// Можно ли формально отправить документ; `None` — поле не пришло
    #[serde(default)]
    pub submittable: Option<bool>,

    /// Период ожидания до автоматической блокировки (0 — блокировка сразу)
    #[serde(default)]
    pub submittable_lock_after: Option<LockAfter>,
}

impl DocbuilderTemplate {
    /// Создать шаблон без возможности отправки
    pub fn new(id: i64, machine_name: impl Into<String>) -> Self {
        Self {
            id,
            machine_name: machine_name.into(),
            submittable: Some(false),
            submittable_lock_after: None,
        }
    }

    /// Создать отправляемый шаблон с заданным периодом ожидания
    pub fn new_submittable(id: i64, machine_name: impl Into<String>, lock_after: i64) -> Self {
        Self {
            id,
            machine_name: machine_name.into(),
            submittable: Some(true),
            submittable_lock_after: Some(LockAfter::Int(lock_after)),
        }
    }

    /// Период ожидания как целое число
    pub fn lock_after(&self) -> Option<i64> {
        self.submittable_lock_after.as_ref().and_then(LockAfter::as_int)
    }
}

// ============================================================================
// Submission Meta
// ============================================================================

/// Сведения об отправке документа организацией
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionMeta {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub docbuilder_id: Option<i64>,

    /// Момент блокировки; пусто — документ ещё не отправлен
    #[serde(default)]
    pub lock_at: Option<String>,
}

impl SubmissionMeta {
    pub fn locked_at(lock_at: impl Into<String>) -> Self {
        Self {
            lock_at: Some(lock_at.into()),
            ..Self::default()
        }
    }

    /// Непустое значение `lock_at`
    pub fn lock_at(&self) -> Option<&str> {
        self.lock_at
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
