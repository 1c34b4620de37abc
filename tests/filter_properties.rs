use appmeta::{ApplicationRecord, Maintainer, Query, filter, record_matches};
use proptest::prelude::*;

fn non_empty() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .:/-]{1,16}"
}

fn maintainer() -> impl Strategy<Value = Maintainer> {
    (non_empty(), "[a-z]{1,8}@[a-z]{1,8}\\.com").prop_map(|(name, email)| Maintainer { name, email })
}

prop_compose! {
    fn record()(
        title in non_empty(),
        version in non_empty(),
        maintainers in prop::collection::vec(maintainer(), 1..4),
        company in non_empty(),
        website in non_empty(),
        source in non_empty(),
        license in non_empty(),
        description in non_empty(),
    ) -> ApplicationRecord {
        ApplicationRecord { title, version, maintainers, company, website, source, license, description }
    }
}

proptest! {
    #[test]
    fn empty_query_matches_everything(r in record()) {
        let knowns = vec![r];
        prop_assert_eq!(filter(&knowns, &Query::default()), vec![&knowns[0]]);
    }

    #[test]
    fn record_matches_itself(r in record()) {
        let knowns = vec![r.clone()];
        prop_assert_eq!(filter(&knowns, &r), vec![&knowns[0]]);
    }

    #[test]
    fn any_single_maintainer_of_a_record_matches_it(r in record(), pick in any::<prop::sample::Index>()) {
        let chosen = pick.get(&r.maintainers).clone();
        let query = Query { maintainers: vec![chosen], ..Default::default() };
        prop_assert!(record_matches(&r, &query));
    }

    #[test]
    fn differing_version_is_rejected(r in record(), suffix in non_empty()) {
        let query = Query { version: format!("{}{}", r.version, suffix), ..Default::default() };
        prop_assert!(!record_matches(&r, &query));
    }

    #[test]
    fn filter_output_is_an_ordered_subsequence(
        records in prop::collection::vec(record(), 0..12),
        license in prop::option::of(non_empty()),
    ) {
        let query = Query { license: license.unwrap_or_default(), ..Default::default() };
        let hits = filter(&records, &query);
        let mut cursor = records.iter();
        for hit in hits {
            prop_assert!(cursor.any(|r| std::ptr::eq(r, hit)));
        }
    }
}
