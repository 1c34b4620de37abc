//! Partial-match predicates between a stored record and a query.
//!
//! An empty query value never constrains anything: `""` for scalar fields and
//! an empty list for maintainers both act as wildcards.

use crate::schema::{ApplicationRecord, Maintainer};

/// True when `query_value` is a wildcard or equals `known_value`.
#[inline]
fn value_matches(known_value: &str, query_value: &str) -> bool {
    known_value == query_value || query_value.is_empty()
}

/// Compare the seven scalar fields of `known` against `query`.
///
/// Maintainers are not looked at here; see [`maintainers_match`].
pub fn fields_match(known: &ApplicationRecord, query: &ApplicationRecord) -> bool {
    known
        .scalar_fields()
        .into_iter()
        .zip(query.scalar_fields())
        .all(|((field, known_value), (_, query_value))| {
            let matched = value_matches(known_value, query_value);
            tracing::debug!(
                field,
                known = known_value,
                query = query_value,
                wildcard = query_value.is_empty(),
                matched,
                "compared field"
            );
            matched
        })
}

/// Single maintainer predicate: both name and email must match, where an empty
/// query value matches anything.
pub fn maintainer_matches(known: &Maintainer, query: &Maintainer) -> bool {
    value_matches(&known.name, &query.name) && value_matches(&known.email, &query.email)
}

/// Every query maintainer must be satisfied by at least one known maintainer.
///
/// Known maintainers that no query entry asks for are ignored, and two query
/// entries may be satisfied by the same known maintainer.
pub fn maintainers_match(known: &[Maintainer], query: &[Maintainer]) -> bool {
    query.iter().all(|wanted| {
        let found = known.iter().any(|k| maintainer_matches(k, wanted));
        tracing::debug!(
            name = %wanted.name,
            email = %wanted.email,
            found,
            "compared maintainer"
        );
        found
    })
}
