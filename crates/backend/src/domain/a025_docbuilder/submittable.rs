//! Расчёт статуса отправки документа по настройкам шаблона и сведениям об отправке.

use chrono::{DateTime, Utc};
use contracts::domain::a025_docbuilder::aggregate::{DocbuilderTemplate, SubmissionMeta};
use contracts::enums::SubmittableStatus;

use crate::shared::instant::parse_instant;

/// Шаблон допускает формальную отправку
pub fn is_submittable(template: &DocbuilderTemplate) -> bool {
    template.submittable == Some(true)
}

/// Отправляемый шаблон с периодом ожидания перед блокировкой
pub fn is_submittable_with_grace_period(template: &DocbuilderTemplate) -> bool {
    is_submittable(template) && template.lock_after().is_some_and(|v| v > 0)
}

/// Отправляемый шаблон, который блокируется сразу после отправки
pub fn is_submittable_without_grace_period(template: &DocbuilderTemplate) -> bool {
    is_submittable(template) && template.lock_after() == Some(0)
}

/// Вычислить статус отправки.
///
/// `now` — момент, относительно которого проверяется блокировка; `None` означает
/// текущее время. Шаблон без периода ожидания никогда не бывает в состоянии
/// ожидания: любая дата блокировки сразу даёт `SubmittedAndLocked`.
pub fn calculate_status(
    template: Option<&DocbuilderTemplate>,
    meta: Option<&SubmissionMeta>,
    now: Option<DateTime<Utc>>,
) -> SubmittableStatus {
    let Some(template) = template else {
        return SubmittableStatus::Unknown;
    };
    if template.submittable.is_none() {
        return SubmittableStatus::Unknown;
    }
    if !is_submittable(template) {
        return SubmittableStatus::NotApplicable;
    }

    let Some(meta) = meta else {
        return SubmittableStatus::Unknown;
    };
    let Some(lock_at) = meta.lock_at() else {
        return SubmittableStatus::NotSubmitted;
    };

    if !is_submittable_with_grace_period(template) {
        return SubmittableStatus::SubmittedAndLocked;
    }

    let Some(lock_at) = parse_instant(lock_at) else {
        tracing::warn!(
            "docbuilder {}: cannot parse lock_at '{}'",
            template.machine_name,
            lock_at
        );
        return SubmittableStatus::Unknown;
    };

    let now = now.unwrap_or_else(Utc::now);
    if now > lock_at {
        SubmittableStatus::SubmittedAndLocked
    } else {
        SubmittableStatus::SubmittedAndPending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_docbuilder::aggregate::LockAfter;

    fn not_submittable() -> DocbuilderTemplate {
        DocbuilderTemplate::new(1, "plan")
    }

    fn immediate() -> DocbuilderTemplate {
        DocbuilderTemplate::new_submittable(2, "report", 0)
    }

    fn with_grace() -> DocbuilderTemplate {
        DocbuilderTemplate::new_submittable(3, "assessment", 10000)
    }

    fn at(value: &str) -> Option<DateTime<Utc>> {
        parse_instant(value)
    }

    #[test]
    fn test_is_submittable() {
        assert!(is_submittable(&immediate()));
        assert!(!is_submittable(&not_submittable()));
        let missing = DocbuilderTemplate {
            submittable: None,
            ..immediate()
        };
        assert!(!is_submittable(&missing));
    }

    #[test]
    fn test_grace_period_predicates() {
        let t = immediate();
        assert!(is_submittable_without_grace_period(&t));
        assert!(!is_submittable_with_grace_period(&t));

        let t = with_grace();
        assert!(is_submittable_with_grace_period(&t));
        assert!(!is_submittable_without_grace_period(&t));

        let t = DocbuilderTemplate {
            submittable_lock_after: Some(LockAfter::Int(5)),
            ..not_submittable()
        };
        assert!(!is_submittable_with_grace_period(&t));
        assert!(!is_submittable_without_grace_period(&t));

        let t = DocbuilderTemplate {
            submittable_lock_after: Some(LockAfter::Text("30".into())),
            ..immediate()
        };
        assert!(is_submittable_with_grace_period(&t));

        let t = DocbuilderTemplate {
            submittable_lock_after: None,
            ..immediate()
        };
        assert!(!is_submittable_with_grace_period(&t));
        assert!(!is_submittable_without_grace_period(&t));
    }

    #[test]
    fn test_status_for_empty_inputs() {
        let meta = SubmissionMeta::locked_at("2021-12-11");

        assert_eq!(calculate_status(None, None, None), SubmittableStatus::Unknown);
        assert_eq!(
            calculate_status(None, Some(&meta), None),
            SubmittableStatus::Unknown
        );
        assert_eq!(
            calculate_status(Some(&not_submittable()), None, None),
            SubmittableStatus::NotApplicable
        );
        assert_eq!(
            calculate_status(Some(&not_submittable()), Some(&meta), None),
            SubmittableStatus::NotApplicable
        );
        assert_eq!(
            calculate_status(Some(&immediate()), None, None),
            SubmittableStatus::Unknown
        );

        let no_flag = DocbuilderTemplate {
            submittable: None,
            ..immediate()
        };
        assert_eq!(
            calculate_status(Some(&no_flag), Some(&meta), None),
            SubmittableStatus::Unknown
        );
    }

    #[test]
    fn test_status_without_grace_period() {
        let t = immediate();
        let now = at("2022-01-01");

        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::default()), now),
            SubmittableStatus::NotSubmitted
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2021-12-11")), now),
            SubmittableStatus::SubmittedAndLocked
        );
        // Дата в будущем всё равно означает блокировку
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2030-06-01")), now),
            SubmittableStatus::SubmittedAndLocked
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("not a date")), now),
            SubmittableStatus::SubmittedAndLocked
        );
    }

    #[test]
    fn test_status_with_grace_period() {
        let t = with_grace();
        let now = at("2022-01-01");

        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2021-12-11")), now),
            SubmittableStatus::SubmittedAndLocked
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta { lock_at: None, ..Default::default() }), now),
            SubmittableStatus::NotSubmitted
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2022-02-01")), now),
            SubmittableStatus::SubmittedAndPending
        );
        // Ровно в момент блокировки документ ещё не заблокирован
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2022-01-01")), now),
            SubmittableStatus::SubmittedAndPending
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2021-12-11T10:00:00.123")), now),
            SubmittableStatus::SubmittedAndLocked
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2021-12-11T10:00")), now),
            SubmittableStatus::SubmittedAndLocked
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("soon")), now),
            SubmittableStatus::Unknown
        );
    }

    #[test]
    fn test_status_defaults_to_current_time() {
        let t = with_grace();
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("2000-01-01")), None),
            SubmittableStatus::SubmittedAndLocked
        );
        assert_eq!(
            calculate_status(Some(&t), Some(&SubmissionMeta::locked_at("9999-01-01")), None),
            SubmittableStatus::SubmittedAndPending
        );
    }
}
