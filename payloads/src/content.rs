//! Homepage content records edited from the admin screen.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::ContentId;

pub const CONTENT_KEY_MAX_LEN: usize = 100;
pub const CONTENT_SECTION_MAX_LEN: usize = 100;

/// One editable piece of homepage copy, e.g. section "hero", key "title".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: ContentId,
    pub section: String,
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

/// Records sharing a section name, shown together in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSection {
    pub name: String,
    pub records: Vec<ContentRecord>,
}

/// Group records into sections.
///
/// Sections keep the order in which their first record appears; records
/// inside a section are sorted by key.
pub fn group_by_section(records: Vec<ContentRecord>) -> Vec<ContentSection> {
    let mut sections: Vec<ContentSection> = Vec::new();
    for record in records {
        match sections.iter_mut().find(|s| s.name == record.section) {
            Some(section) => section.records.push(record),
            None => sections.push(ContentSection {
                name: record.section.clone(),
                records: vec![record],
            }),
        }
    }
    for section in &mut sections {
        section.records.sort_by(|a, b| a.key.cmp(&b.key));
    }
    sections
}

/// Check a content edit before sending it.
pub fn validate_content(
    request: &crate::requests::UpsertContent,
) -> Vec<crate::FieldError> {
    let mut errors = Vec::new();
    let section = request.section.trim();
    let key = request.key.trim();
    if section.is_empty() {
        errors.push(crate::FieldError {
            field: "section",
            message: "Section is required".to_string(),
        });
    } else if section.len() > CONTENT_SECTION_MAX_LEN {
        errors.push(crate::FieldError {
            field: "section",
            message: format!(
                "Section must be at most {CONTENT_SECTION_MAX_LEN} characters"
            ),
        });
    }
    if key.is_empty() {
        errors.push(crate::FieldError {
            field: "key",
            message: "Key is required".to_string(),
        });
    } else if key.len() > CONTENT_KEY_MAX_LEN {
        errors.push(crate::FieldError {
            field: "key",
            message: format!(
                "Key must be at most {CONTENT_KEY_MAX_LEN} characters"
            ),
        });
    }
    errors
}
