//! Docbuilder: статус отправки документа и тексты интерфейса по ключу состояния.

pub mod content_source;
pub mod default_content;
pub mod service;
pub mod submittable;
pub mod ui_content;

pub use content_source::{
    ContentOverrideSource, ContentSourceError, FsContentSource, StaticContentSource,
};
pub use ui_content::UiContentResolver;
