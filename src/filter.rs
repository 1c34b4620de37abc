use crate::matcher::{fields_match, maintainers_match};
use crate::schema::{ApplicationRecord, Query};

/// True when `known` satisfies every constrained field of `query`.
pub fn record_matches(known: &ApplicationRecord, query: &Query) -> bool {
    fields_match(known, query) && maintainers_match(&known.maintainers, &query.maintainers)
}

/// Select the records matching `query`, preserving the order of `knowns`.
///
/// Returns an empty vector when nothing matches.
pub fn filter<'a, I>(knowns: I, query: &Query) -> Vec<&'a ApplicationRecord>
where
    I: IntoIterator<Item = &'a ApplicationRecord>,
{
    knowns
        .into_iter()
        .filter(|known| record_matches(known, query))
        .collect()
}
