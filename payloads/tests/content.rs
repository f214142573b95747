use jiff::Timestamp;
use payloads::{
    ContentId, ContentRecord, content::validate_content, group_by_section,
    requests::UpsertContent,
};
use uuid::Uuid;

fn record(section: &str, key: &str, value: &str) -> ContentRecord {
    ContentRecord {
        id: ContentId(Uuid::new_v4()),
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn test_records_group_by_first_seen_section() {
    let sections = group_by_section(vec![
        record("hero", "title", "Find a home"),
        record("faq", "q2", "Is it free?"),
        record("hero", "subtitle", "No brokerage"),
        record("faq", "q1", "How do I list?"),
        record("footer", "copyright", "2026"),
    ]);

    let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["hero", "faq", "footer"]);

    let hero_keys: Vec<&str> =
        sections[0].records.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(hero_keys, ["subtitle", "title"]);

    let faq_keys: Vec<&str> =
        sections[1].records.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(faq_keys, ["q1", "q2"]);
}

#[test]
fn test_no_records_means_no_sections() {
    assert!(group_by_section(Vec::new()).is_empty());
}

#[test]
fn test_content_edit_needs_section_and_key() {
    let request = UpsertContent {
        id: None,
        section: " ".into(),
        key: "".into(),
        value: "anything".into(),
    };
    let fields: Vec<&str> =
        validate_content(&request).iter().map(|e| e.field).collect();
    assert_eq!(fields, ["section", "key"]);

    let request = UpsertContent {
        id: None,
        section: "hero".into(),
        key: "k".repeat(101),
        value: String::new(),
    };
    let errors = validate_content(&request);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Key must be at most 100 characters");
}
