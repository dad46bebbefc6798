use chrono::{TimeZone, Utc};
use docstore_core::query::{Criterion, SearchRequest};
use serde_json::json;

#[test]
fn empty_request_has_no_criteria() {
    let request = SearchRequest::new();

    assert!(request.is_unconstrained());
    assert_eq!(request.criteria().count(), 0);
}

#[test]
fn empty_lists_are_not_active_criteria() {
    let request = SearchRequest::builder()
        .title_prefixes(Vec::<String>::new())
        .author_id("a-1")
        .build();

    let criteria = request.criteria().collect::<Vec<_>>();

    assert_eq!(criteria.len(), 1);
    assert!(matches!(criteria[0], Criterion::AuthorIn(ids) if ids == ["a-1"]));
}

#[test]
fn criteria_follow_evaluation_order() {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
    let request = SearchRequest::builder()
        .created_to(to)
        .created_from(from)
        .author_id("a-1")
        .contains_content("needle")
        .title_prefix("Al")
        .build();

    let criteria = request.criteria().collect::<Vec<_>>();

    assert_eq!(criteria.len(), 5);
    assert!(matches!(criteria[0], Criterion::TitlePrefix(_)));
    assert!(matches!(criteria[1], Criterion::ContentContains(_)));
    assert!(matches!(criteria[2], Criterion::AuthorIn(_)));
    assert_eq!(criteria[3], Criterion::CreatedFrom(from));
    assert_eq!(criteria[4], Criterion::CreatedTo(to));
}

#[test]
fn builder_appends_list_values() {
    let request = SearchRequest::builder()
        .title_prefix("Al")
        .title_prefixes(["Be", "Ga"])
        .contains_contents(vec!["x".to_string()])
        .contains_content("y")
        .author_ids(["a-1"])
        .author_id("a-2")
        .build();

    assert_eq!(request.title_prefixes, ["Al", "Be", "Ga"]);
    assert_eq!(request.contains_contents, ["x", "y"]);
    assert_eq!(request.author_ids, ["a-1", "a-2"]);
}

#[test]
fn deserializes_camel_case_fields() {
    let request: SearchRequest = serde_json::from_value(json!({
        "titlePrefixes": ["Al"],
        "containsContents": ["needle"],
        "authorIds": ["a-1", "a-2"],
        "createdFrom": "2024-01-01T00:00:00Z",
        "createdTo": "2024-06-30T23:59:59Z",
    }))
    .unwrap();

    assert_eq!(request.title_prefixes, ["Al"]);
    assert_eq!(request.contains_contents, ["needle"]);
    assert_eq!(request.author_ids, ["a-1", "a-2"]);
    assert_eq!(
        request.created_from,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        request.created_to,
        Some(Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap())
    );
}

#[test]
fn null_and_missing_fields_deserialize_as_unconstrained() {
    let request: SearchRequest = serde_json::from_value(json!({
        "titlePrefixes": null,
        "authorIds": null,
        "createdFrom": null,
    }))
    .unwrap();

    assert_eq!(request, SearchRequest::default());
    assert!(request.is_unconstrained());
}
