//! Record shapes shared by the catalog, the validator and the wire codec.
//!
//! A field that is omitted or set to null (`~`) decodes to the empty value.
//! For a stored record the validator then rejects it; for a query the empty
//! value is a wildcard (see [`Query`]).

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit null as the type's default instead of a literal value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single maintainer's contact information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

impl Maintainer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Metadata describing one application in the catalog.
///
/// `title` is the uniqueness key inside a [`Store`](crate::Store). Field
/// declaration order is the wire order used by the encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub maintainers: Vec<Maintainer>,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub license: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A search request.
///
/// Same shape as a stored record, but an empty string or an empty maintainer
/// list means the field is unconstrained. A query therefore cannot ask for a
/// record whose value really is empty; stored records never have empty values,
/// so nothing is lost in practice.
pub type Query = ApplicationRecord;

/// Names of the scalar fields compared by the matcher, in wire order.
pub const SCALAR_FIELDS: [&str; 7] = [
    "title",
    "version",
    "company",
    "website",
    "source",
    "license",
    "description",
];

impl ApplicationRecord {
    /// The scalar fields paired with their names, in wire order.
    ///
    /// This is the single place that enumerates the comparable fields, so the
    /// matcher and the validator cannot drift apart when a field is added.
    pub fn scalar_fields(&self) -> [(&'static str, &str); 7] {
        [
            (SCALAR_FIELDS[0], self.title.as_str()),
            (SCALAR_FIELDS[1], self.version.as_str()),
            (SCALAR_FIELDS[2], self.company.as_str()),
            (SCALAR_FIELDS[3], self.website.as_str()),
            (SCALAR_FIELDS[4], self.source.as_str()),
            (SCALAR_FIELDS[5], self.license.as_str()),
            (SCALAR_FIELDS[6], self.description.as_str()),
        ]
    }

    /// True when no field constrains a search.
    pub fn is_wildcard(&self) -> bool {
        self.maintainers.is_empty() && self.scalar_fields().iter().all(|(_, v)| v.is_empty())
    }
}
