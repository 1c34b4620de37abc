use appmeta::{
    ApplicationRecord, Maintainer, Query, Store, StoreError, decode_record, encode_records,
    validate,
};

fn app(title: &str, version: &str, maintainers: Vec<Maintainer>) -> ApplicationRecord {
    ApplicationRecord {
        title: title.into(),
        version: version.into(),
        maintainers,
        company: "Random Inc.".into(),
        website: "https://website.com".into(),
        source: "https://github.com/random/repo".into(),
        license: "Apache-2.0".into(),
        description: "Some application content".into(),
    }
}

fn seeded_store() -> Store {
    let mut store = Store::new();
    for record in [
        app("A", "0.0.1", vec![Maintainer::new("X", "x@x.com")]),
        app("B", "0.0.1", vec![Maintainer::new("X", "x@x.com")]),
        app(
            "C",
            "1.0.0",
            vec![
                Maintainer::new("n1", "e1@example.com"),
                Maintainer::new("n2", "e2@example.com"),
            ],
        ),
    ] {
        store
            .insert(validate(record).expect("fixture is valid"))
            .expect("titles are unique");
    }
    store
}

fn titles(records: Vec<&ApplicationRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.title.clone()).collect()
}

#[test]
fn version_query_returns_matches_in_insertion_order() {
    let store = seeded_store();
    let query = Query {
        version: "0.0.1".into(),
        ..Default::default()
    };
    assert_eq!(titles(store.search(&query)), ["A", "B"]);

    let query = Query {
        version: "0.0.2".into(),
        ..Default::default()
    };
    assert!(store.search(&query).is_empty());
}

#[test]
fn maintainer_query_is_existential() {
    let store = seeded_store();
    let query = Query {
        maintainers: vec![Maintainer::new("n1", "e1@example.com")],
        ..Default::default()
    };
    assert_eq!(titles(store.search(&query)), ["C"]);

    let query = Query {
        maintainers: vec![Maintainer::new("n3", "e3@example.com")],
        ..Default::default()
    };
    assert!(store.search(&query).is_empty());
}

#[test]
fn empty_query_returns_everything() {
    let store = seeded_store();
    assert_eq!(titles(store.search(&Query::default())), ["A", "B", "C"]);
}

#[test]
fn duplicate_title_is_a_conflict() {
    let mut store = seeded_store();
    let dup = validate(app("B", "2.0.0", vec![Maintainer::new("Z", "z@z.com")])).unwrap();
    assert_eq!(
        store.insert(dup),
        Err(StoreError::Conflict { title: "B".into() })
    );
    assert_eq!(store.len(), 3);

    let query = Query {
        title: "B".into(),
        ..Default::default()
    };
    let found = store.search(&query);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].version, "0.0.1");
}

#[test]
fn decoded_query_searches_and_encodes() {
    let store = seeded_store();
    let query = decode_record("version: 1.0.0\nmaintainers:\n- email: e2@example.com\n").unwrap();
    let matches = store.search(&query);
    assert_eq!(titles(matches.clone()), ["C"]);

    let yaml = encode_records(&matches).unwrap();
    let back: Vec<ApplicationRecord> = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].maintainers[0].name, "n1");
    assert_eq!(back[0].maintainers[1].name, "n2");
}

#[test]
fn decoded_create_payload_missing_fields_fails_validation() {
    let record = decode_record("title: Only Title\n").unwrap();
    let errs = validate(record).unwrap_err();
    assert!(errs.fields().contains(&"version"));
    assert!(errs.fields().contains(&"maintainers"));
}
