use async_trait::async_trait;
use contracts::domain::a025_docbuilder::ui_content::ContentTable;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Ошибки загрузки переопределений контента
#[derive(Debug, Error)]
pub enum ContentSourceError {
    #[error("No content overrides for '{0}'")]
    NotFound(String),

    #[error("Invalid machine name: '{0}'")]
    InvalidMachineName(String),

    #[error("Cannot read overrides for '{machine_name}': {source}")]
    Io {
        machine_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse overrides for '{machine_name}': {source}")]
    Parse {
        machine_name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Источник переопределений контента для конкретного шаблона
#[async_trait]
pub trait ContentOverrideSource: Send + Sync {
    /// Загрузить таблицу контента шаблона по его машинному имени
    async fn load(&self, machine_name: &str) -> Result<ContentTable, ContentSourceError>;
}

// ─── Встроенные таблицы ──────────────────────────────────────────────────────

/// Переопределения, заданные в памяти (константы приложения, тесты)
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    tables: HashMap<String, ContentTable>,
}

impl StaticContentSource {
    pub fn new(tables: HashMap<String, ContentTable>) -> Self {
        Self { tables }
    }

    pub fn with_table(mut self, machine_name: impl Into<String>, table: ContentTable) -> Self {
        self.tables.insert(machine_name.into(), table);
        self
    }
}

#[async_trait]
impl ContentOverrideSource for StaticContentSource {
    async fn load(&self, machine_name: &str) -> Result<ContentTable, ContentSourceError> {
        self.tables
            .get(machine_name)
            .cloned()
            .ok_or_else(|| ContentSourceError::NotFound(machine_name.to_string()))
    }
}

// ─── Файлы на диске ──────────────────────────────────────────────────────────

/// Переопределения в JSON-файлах `<dir>/<machine_name>.json`.
///
/// Формат файла: `{"slot_name": {"**l": "text", ...}, ...}`.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    dir: PathBuf,
}

impl FsContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_path(&self, machine_name: &str) -> Result<PathBuf, ContentSourceError> {
        let valid = !machine_name.is_empty()
            && machine_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ContentSourceError::InvalidMachineName(
                machine_name.to_string(),
            ));
        }
        Ok(self.dir.join(format!("{}.json", machine_name)))
    }
}

#[async_trait]
impl ContentOverrideSource for FsContentSource {
    async fn load(&self, machine_name: &str) -> Result<ContentTable, ContentSourceError> {
        let path = self.file_path(machine_name)?;

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentSourceError::NotFound(machine_name.to_string()));
            }
            Err(source) => {
                return Err(ContentSourceError::Io {
                    machine_name: machine_name.to_string(),
                    source,
                });
            }
        };

        let table: ContentTable =
            serde_json::from_str(&raw).map_err(|source| ContentSourceError::Parse {
                machine_name: machine_name.to_string(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} content override slots for '{}' from {}",
            table.len(),
            machine_name,
            path.display()
        );
        Ok(table)
    }
}
