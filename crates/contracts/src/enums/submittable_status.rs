use serde::{Deserialize, Serialize};

/// Статус отправки документа Docbuilder для конкретной организации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmittableStatus {
    /// Недостаточно данных, чтобы определить статус
    Unknown,
    /// Шаблон не предусматривает отправку
    NotApplicable,
    NotSubmitted,
    /// Отправлен, идёт период ожидания до блокировки
    SubmittedAndPending,
    SubmittedAndLocked,
}

impl SubmittableStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            SubmittableStatus::Unknown => "UNKNOWN",
            SubmittableStatus::NotApplicable => "NOT_APPLICABLE",
            SubmittableStatus::NotSubmitted => "NOT_SUBMITTED",
            SubmittableStatus::SubmittedAndPending => "SUBMITTED_AND_PENDING",
            SubmittableStatus::SubmittedAndLocked => "SUBMITTED_AND_LOCKED",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<SubmittableStatus> {
        vec![
            SubmittableStatus::Unknown,
            SubmittableStatus::NotApplicable,
            SubmittableStatus::NotSubmitted,
            SubmittableStatus::SubmittedAndPending,
            SubmittableStatus::SubmittedAndLocked,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UNKNOWN" => Some(SubmittableStatus::Unknown),
            "NOT_APPLICABLE" => Some(SubmittableStatus::NotApplicable),
            "NOT_SUBMITTED" => Some(SubmittableStatus::NotSubmitted),
            "SUBMITTED_AND_PENDING" => Some(SubmittableStatus::SubmittedAndPending),
            "SUBMITTED_AND_LOCKED" => Some(SubmittableStatus::SubmittedAndLocked),
            _ => None,
        }
    }

    /// Документ уже отправлен (независимо от блокировки)
    pub fn is_submitted(&self) -> bool {
        matches!(
            self,
            SubmittableStatus::SubmittedAndPending | SubmittableStatus::SubmittedAndLocked
        )
    }
}

impl std::fmt::Display for SubmittableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
