use docstore::chrono::{TimeZone, Utc};
use docstore::memory::InMemoryStore;
use docstore::prelude::*;

fn seeded_store<B: StoreBackend>(store: &mut DocumentStore<B>) {
    let created = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();

    for (title, author) in [("Alpha", "a-1"), ("Beta", "a-2"), ("Gamma", "a-1")] {
        store
            .save(
                Document::builder()
                    .title(title)
                    .content(format!("{title} body"))
                    .author(Author::new(author, ""))
                    .created(created)
                    .build(),
            )
            .unwrap();
    }
}

#[test]
fn typed_store_round_trip() {
    let mut store = DocumentStore::new(InMemoryStore::builder().build().unwrap());
    seeded_store(&mut store);

    assert_eq!(store.len(), 3);
    assert_eq!(store.find_by_id("3").unwrap().title.as_deref(), Some("Gamma"));

    let by_author = store.search(&SearchRequest::builder().author_id("a-1").build());
    assert_eq!(by_author.len(), 2);
}

#[test]
fn dyn_store_behaves_like_typed_store() {
    let mut store: DynDocumentStore = DocumentStore::new(InMemoryStore::new()).into_dyn();
    seeded_store(&mut store);

    let request = SearchRequest::builder()
        .title_prefixes(["Al", "Ga"])
        .contains_content("body")
        .build();

    let titles = store
        .search(&request)
        .into_iter()
        .filter_map(|doc| doc.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, ["Alpha", "Gamma"]);
    assert!(store.find_by_id("nonexistent").is_none());
}

#[test]
fn default_store_is_empty() {
    let store: DocumentStore<InMemoryStore> = DocumentStore::default();

    assert!(store.is_empty());
    assert_eq!(store.backend().config(), &StoreConfig::default());
}

#[test]
fn store_config_loaded_from_json() {
    let config: StoreConfig =
        serde_json::from_str(r#"{ "unknown_id": "reject", "id_strategy": "counter" }"#).unwrap();
    let mut store = DocumentStore::new(InMemoryStore::builder().config(config).build().unwrap());

    let result = store.save(Document::builder().id("custom").build());

    assert!(matches!(result, Err(DocumentStoreError::DocumentNotFound(_))));
    assert!(store.is_empty());
}

#[test]
fn json_document_can_be_saved_and_searched() {
    let mut store = DocumentStore::new(InMemoryStore::new());
    let document = Document::from_json(serde_json::json!({
        "title": "Imported",
        "content": "from the wire",
        "created": "2024-02-01T09:00:00Z",
    }))
    .unwrap();

    let saved = store.save(document).unwrap();
    let request: SearchRequest = serde_json::from_value(serde_json::json!({
        "titlePrefixes": ["Imp"],
        "createdFrom": "2024-02-01T09:00:00Z",
    }))
    .unwrap();

    let found = store.search(&request);
    assert_eq!(found, vec![saved.clone()]);
    assert_eq!(saved.to_json().unwrap()["id"], serde_json::json!("1"));
}

#[test]
fn into_inner_returns_backend_with_documents() {
    let mut store = DocumentStore::new(InMemoryStore::new());
    seeded_store(&mut store);

    let backend = store.into_inner();

    let titles = backend
        .iter()
        .filter_map(|doc| doc.title.as_deref())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
}
