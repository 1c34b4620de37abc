//! In-memory catalog of application metadata with partial-match search.
//!
//! Records are validated on the way in, stored in insertion order with `title`
//! as the uniqueness key, and searched with a query of the same shape in which
//! any empty field is a wildcard.
//!
//! ```
//! use appmeta::{ApplicationRecord, Maintainer, Query, Store, validate};
//!
//! let mut store = Store::new();
//! let record = ApplicationRecord {
//!     title: "A".into(),
//!     version: "0.0.1".into(),
//!     maintainers: vec![Maintainer::new("X", "x@x.com")],
//!     company: "Random Inc.".into(),
//!     website: "https://website.com".into(),
//!     source: "https://github.com/random/repo".into(),
//!     license: "Apache-2.0".into(),
//!     description: "An application".into(),
//! };
//! store.insert(validate(record).unwrap()).unwrap();
//!
//! let query = Query { version: "0.0.1".into(), ..Default::default() };
//! assert_eq!(store.search(&query).len(), 1);
//! ```

pub mod codec;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod schema;
pub mod store;
pub mod validate;

pub use codec::{decode_record, encode_records};
pub use error::{CodecError, StoreError, ValidationError, ValidationErrors, ValidationRule};
pub use filter::{filter, record_matches};
pub use matcher::{fields_match, maintainer_matches, maintainers_match};
pub use schema::{ApplicationRecord, Maintainer, Query};
pub use store::Store;
pub use validate::{ValidRecord, is_valid_email, validate};
