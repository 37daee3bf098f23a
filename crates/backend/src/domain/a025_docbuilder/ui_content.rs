//! Выбор текстов интерфейса Docbuilder по ключу состояния документа.
//!
//! Для каждого слота ищется наиболее специфичный шаблон ключа сначала
//! в переопределениях шаблона документа, затем в текстах по умолчанию.
//! Любое совпадение в переопределениях важнее совпадения в текстах по умолчанию.

use chrono::{DateTime, Utc};
use contracts::domain::a025_docbuilder::aggregate::{DocbuilderTemplate, SubmissionMeta};
use contracts::domain::a025_docbuilder::state_key::{
    Lifecycle, RequirementsMet, StateKey, Submittability, WILDCARD,
};
use contracts::domain::a025_docbuilder::ui_content::{ContentTable, SlotContent};
use contracts::enums::SubmittableStatus;
use futures::future::join_all;
use futures::FutureExt;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::content_source::{ContentOverrideSource, ContentSourceError};
use super::default_content::DEFAULT_CONTENT_TABLE;
use super::submittable;

/// Приоритет ключа без единого фиксированного символа (`"***"` → 0)
const PRIORITY_BASELINE: i64 = 29;

// ─── Ключ состояния ──────────────────────────────────────────────────────────

/// Класс отправки шаблона (первая позиция ключа)
pub fn submittability_char(template: &DocbuilderTemplate) -> Submittability {
    if !submittable::is_submittable(template) {
        Submittability::NotSubmittable
    } else if submittable::is_submittable_with_grace_period(template) {
        Submittability::GracePeriod
    } else {
        Submittability::Immediate
    }
}

/// Ключ, пока неизвестны требования и этап жизненного цикла: `"i--"`
pub fn generate_initial_state_key(template: &DocbuilderTemplate) -> StateKey {
    StateKey::initial(submittability_char(template))
}

pub fn lifecycle_char(status: SubmittableStatus) -> Lifecycle {
    match status {
        SubmittableStatus::Unknown => Lifecycle::Undetermined,
        SubmittableStatus::NotApplicable => Lifecycle::NotApplicable,
        SubmittableStatus::NotSubmitted => Lifecycle::NotSubmitted,
        SubmittableStatus::SubmittedAndPending => Lifecycle::Pending,
        SubmittableStatus::SubmittedAndLocked => Lifecycle::Locked,
    }
}

/// Этап жизненного цикла по сведениям об отправке.
///
/// Без шаблона всегда возвращает заполнитель.
pub fn status_char_from_meta(
    template: Option<&DocbuilderTemplate>,
    meta: Option<&SubmissionMeta>,
    now: Option<DateTime<Utc>>,
) -> Lifecycle {
    match template {
        Some(template) => lifecycle_char(submittable::calculate_status(
            Some(template),
            meta,
            now,
        )),
        None => Lifecycle::Undetermined,
    }
}

pub fn with_requirements_met(key: StateKey, requirements: RequirementsMet) -> StateKey {
    key.with_requirements_met(requirements)
}

pub fn with_lifecycle_char(key: StateKey, lifecycle: Lifecycle) -> StateKey {
    key.with_lifecycle(lifecycle)
}

/// Полный ключ состояния документа.
///
/// `requirements_met = None` оставляет во второй позиции заполнитель.
pub fn state_key_for(
    template: &DocbuilderTemplate,
    meta: Option<&SubmissionMeta>,
    requirements_met: Option<bool>,
    now: Option<DateTime<Utc>>,
) -> StateKey {
    let key = generate_initial_state_key(template);
    let key = match requirements_met {
        Some(met) => with_requirements_met(key, met.into()),
        None => key,
    };
    with_lifecycle_char(key, status_char_from_meta(Some(template), meta, now))
}

// ─── Поиск по шаблонам ключей ────────────────────────────────────────────────

/// Специфичность шаблона ключа.
///
/// Каждый фиксированный символ весит больше любого набора `*`, а при равном
/// количестве `*` выигрывает ключ с фиксированными символами ближе к концу.
pub fn key_priority(key: &str) -> i64 {
    key.chars()
        .enumerate()
        .fold(PRIORITY_BASELINE, |priority, (index, c)| {
            let weight = index as i64 + 2;
            if c == WILDCARD {
                priority - weight * weight
            } else {
                priority + weight * 1000
            }
        })
}

/// Шаблон подходит к ключу, если совпадает длина и каждый символ равен или `*`
pub fn key_matches(subject: &str, pattern: &str) -> bool {
    subject.chars().count() == pattern.chars().count()
        && subject
            .chars()
            .zip(pattern.chars())
            .all(|(s, p)| p == WILDCARD || p == s)
}

/// Наиболее специфичный из подходящих шаблонов.
///
/// При равном приоритете выбирается лексикографически меньший ключ, чтобы
/// результат не зависел от порядка обхода `HashMap`.
pub fn best_pattern_key<'a, I>(subject: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, i64)> = None;

    for candidate in candidates {
        if !key_matches(subject, candidate) {
            continue;
        }
        let priority = key_priority(candidate);
        best = match best {
            Some((key, p)) if p > priority || (p == priority && key <= candidate) => {
                Some((key, p))
            }
            _ => Some((candidate, priority)),
        };
    }

    best.map(|(key, _)| key)
}

fn best_content<'a>(subject: &str, content: Option<&'a SlotContent>) -> Option<&'a str> {
    let content = content?;
    best_pattern_key(subject, content.keys().map(String::as_str))
        .and_then(|key| content.get(key))
        .map(String::as_str)
}

// ─── Resolver ────────────────────────────────────────────────────────────────

/// Тексты интерфейса для одного шаблона Docbuilder.
///
/// Переопределения шаблона загружаются один раз, при первом запросе слота;
/// одновременные запросы ждут ту же загрузку.
pub struct UiContentResolver {
    template: DocbuilderTemplate,
    source: Arc<dyn ContentOverrideSource>,
    defaults: Arc<ContentTable>,
    overrides: OnceCell<ContentTable>,
}

impl UiContentResolver {
    pub fn new(template: DocbuilderTemplate, source: Arc<dyn ContentOverrideSource>) -> Self {
        Self::with_defaults(template, source, Arc::clone(&DEFAULT_CONTENT_TABLE))
    }

    pub fn with_defaults(
        template: DocbuilderTemplate,
        source: Arc<dyn ContentOverrideSource>,
        defaults: Arc<ContentTable>,
    ) -> Self {
        Self {
            template,
            source,
            defaults,
            overrides: OnceCell::new(),
        }
    }

    pub fn initial_state_key(&self) -> StateKey {
        generate_initial_state_key(&self.template)
    }

    async fn overrides(&self) -> &ContentTable {
        self.overrides
            .get_or_init(|| async {
                let machine_name = &self.template.machine_name;
                match self.source.load(machine_name).await {
                    Ok(table) => table,
                    Err(ContentSourceError::NotFound(_)) => {
                        tracing::debug!("docbuilder {}: no content overrides", machine_name);
                        ContentTable::new()
                    }
                    Err(e) => {
                        tracing::warn!("docbuilder {}: {}", machine_name, e);
                        ContentTable::new()
                    }
                }
            })
            .await
    }

    /// Текст слота для ключа состояния; пустая строка, если показывать нечего
    pub async fn resolve_slot(&self, slot: &str, key: &StateKey) -> String {
        let subject = key.to_string();

        let overrides = self.overrides().await;
        if let Some(text) = best_content(&subject, overrides.get(slot)) {
            tracing::debug!(
                "docbuilder {}: slot {} [{}] from overrides",
                self.template.machine_name,
                slot,
                subject
            );
            return text.to_string();
        }

        if let Some(text) = best_content(&subject, self.defaults.get(slot)) {
            return text.to_string();
        }

        tracing::debug!(
            "docbuilder {}: slot {} [{}] has no content",
            self.template.machine_name,
            slot,
            subject
        );
        String::new()
    }

    /// Тексты нескольких слотов сразу.
    ///
    /// Сбой одного слота даёт для него пустую строку и не влияет на остальные.
    pub async fn resolve_slots<S>(&self, slots: &[S], key: &StateKey) -> HashMap<String, String>
    where
        S: AsRef<str> + Sync,
    {
        let futures = slots.iter().map(|slot| async move {
            let slot = slot.as_ref();
            let text = match AssertUnwindSafe(self.resolve_slot(slot, key))
                .catch_unwind()
                .await
            {
                Ok(text) => text,
                Err(_) => {
                    tracing::warn!(
                        "docbuilder {}: slot {} failed to resolve",
                        self.template.machine_name,
                        slot
                    );
                    String::new()
                }
            };
            (slot.to_string(), text)
        });

        join_all(futures).await.into_iter().collect()
    }
}
