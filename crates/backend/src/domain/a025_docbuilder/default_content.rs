//! Встроенные тексты интерфейса Docbuilder.
//!
//! Ключи — шаблоны ключа состояния (`*` подходит под любой символ),
//! см. `contracts::domain::a025_docbuilder::state_key`.

use contracts::domain::a025_docbuilder::ui_content::ContentTable;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Тексты по умолчанию, встроенные в бинарник
const DEFAULT_CONTENT: &str = r#"
[final_submit_button_text]
"**n" = "Submit"
"**p" = "Submitted (pending)"
"**l" = "Submitted!"

[final_submit_help_text]
"*nn" = "All required sections must be completed before this document can be submitted."
"*yn" = "This document is ready to be submitted."
"iyn" = "Once submitted, this document will be locked immediately and can no longer be edited."
"gyn" = "After submitting, you will still be able to make changes until the document locks."
"**p" = "This document has been submitted. You can keep editing it until it locks."
"**l" = "This document has been submitted and is now locked."

[final_submit_confirm_title]
"iy*" = "Submit and lock this document?"
"gy*" = "Submit this document?"

[final_submit_confirm_body]
"i**" = "<p>Submitting will <strong>lock</strong> this document immediately. This cannot be undone.</p>"
"g**" = "<p>After submitting you will have a grace period to make final changes. The document locks automatically when it ends.</p>"

[final_submit_confirm_button_text]
"***" = "Yes, submit"

[lock_status_label]
"**n" = "Not submitted"
"**p" = "Pending lock"
"**l" = "Locked"

[requirements_unmet_message]
"*n*" = "Some required sections are incomplete."

[readonly_notice]
"**l" = "This document is locked and can no longer be edited."
"#;

/// Разобранная таблица текстов по умолчанию
pub static DEFAULT_CONTENT_TABLE: Lazy<Arc<ContentTable>> = Lazy::new(|| {
    match toml::from_str::<ContentTable>(DEFAULT_CONTENT) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!("Docbuilder default content is invalid: {}", e);
            Arc::new(ContentTable::new())
        }
    }
});
