use draftsmith_core::error::CoreError;
use draftsmith_core::extract::parse_extraction_response;
use draftsmith_core::models::snippet::{ExtractedSnippets, UNTITLED};

const RESPONSE: &str = r#"{
  "pullQuotes": ["Decide first.", "One metric per page.", "Retire reports."],
  "anonymizedExamples": ["A retailer cut 40 reports.", "A bank merged dashboards."],
  "socialHooks": ["h1", "h2", "h3", "h4", "h5"],
  "tags": ["analytics", "reporting", "strategy"],
  "notes": null
}"#;

#[test]
fn parses_strict_json() {
    let snippets = parse_extraction_response(RESPONSE).unwrap();
    assert_eq!(snippets.pull_quotes.len(), 3);
    assert_eq!(snippets.social_hooks[4], "h5");
    assert_eq!(snippets.notes, None);
    assert!(snippets.shape_violations().is_empty());
}

#[test]
fn parses_json_wrapped_in_prose() {
    let wrapped = format!("Sure! Here are your snippets:\n```json\n{RESPONSE}\n```\nEnjoy.");
    let snippets = parse_extraction_response(&wrapped).unwrap();
    assert_eq!(snippets.tags, vec!["analytics", "reporting", "strategy"]);
}

#[test]
fn accepts_snake_case_keys_and_notes() {
    let json = r#"{"pull_quotes": [], "anonymized_examples": [], "social_hooks": [], "tags": [], "notes": "Lead with the retail example."}"#;
    let snippets = parse_extraction_response(json).unwrap();
    assert_eq!(snippets.notes.as_deref(), Some("Lead with the retail example."));
}

#[test]
fn missing_required_list_is_an_error() {
    let json = r#"{"pullQuotes": ["a"], "socialHooks": [], "tags": []}"#;
    let err = parse_extraction_response(json).unwrap_err();
    assert!(matches!(err, CoreError::ExtractionParse(_)));
}

#[test]
fn response_without_json_is_an_error() {
    let err = parse_extraction_response("I could not extract anything.").unwrap_err();
    assert!(matches!(err, CoreError::ExtractionParse(_)));
}

#[test]
fn shape_violations_name_each_broken_rule() {
    let snippets = ExtractedSnippets {
        pull_quotes: vec!["only one".to_string()],
        anonymized_examples: vec!["a".to_string(), "b".to_string()],
        social_hooks: vec![],
        tags: (0..7).map(|i| format!("t{i}")).collect(),
        notes: None,
    };

    let violations = snippets.shape_violations();
    let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
    assert_eq!(fields, vec!["pull_quotes", "social_hooks", "tags"]);
    assert_eq!(
        violations[0].to_string(),
        "pull_quotes must have exactly 3 items, got 1"
    );
    assert_eq!(violations[2].to_string(), "tags must have 3-6 items, got 7");
}

#[test]
fn source_title_falls_back_to_untitled() {
    assert_eq!(ExtractedSnippets::default().source_title(), UNTITLED);

    let snippets = parse_extraction_response(RESPONSE).unwrap();
    assert_eq!(snippets.source_title(), "Decide first.");
}
