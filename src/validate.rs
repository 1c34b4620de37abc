//! Required-field checks run before a record may enter the [`Store`](crate::Store).
//!
//! Validation collects every failure instead of stopping at the first one so
//! callers can report all offending fields in a single response.

use std::ops::Deref;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationErrors, ValidationRule};
use crate::schema::ApplicationRecord;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Syntactic email check (`local@domain.tld`).
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// A record that passed [`validate`]. Only this module can construct one, so
/// holding a `ValidRecord` proves the required-field rules hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord(ApplicationRecord);

impl ValidRecord {
    pub fn into_inner(self) -> ApplicationRecord {
        self.0
    }
}

impl Deref for ValidRecord {
    type Target = ApplicationRecord;

    fn deref(&self) -> &ApplicationRecord {
        &self.0
    }
}

impl TryFrom<ApplicationRecord> for ValidRecord {
    type Error = ValidationErrors;

    fn try_from(record: ApplicationRecord) -> Result<Self, Self::Error> {
        validate(record)
    }
}

fn required(errors: &mut Vec<ValidationError>, field: String, value: &str) -> bool {
    if value.is_empty() {
        errors.push(ValidationError {
            field,
            value: value.to_string(),
            reason: ValidationRule::Required,
        });
        return false;
    }
    true
}

/// Check that every scalar field is non-empty, that there is at least one
/// maintainer, and that each maintainer has a name and a well-formed email.
pub fn validate(record: ApplicationRecord) -> Result<ValidRecord, ValidationErrors> {
    let mut errors = Vec::new();

    // Report in wire order: title, version, maintainers, then the rest.
    let scalars = record.scalar_fields();
    let (head, tail) = scalars.split_at(2);
    for (field, value) in head {
        required(&mut errors, (*field).to_string(), value);
    }

    if record.maintainers.is_empty() {
        errors.push(ValidationError {
            field: "maintainers".into(),
            value: "[]".into(),
            reason: ValidationRule::Required,
        });
    }
    for (i, maintainer) in record.maintainers.iter().enumerate() {
        required(&mut errors, format!("maintainers[{i}].name"), &maintainer.name);
        let email_field = format!("maintainers[{i}].email");
        if required(&mut errors, email_field.clone(), &maintainer.email)
            && !is_valid_email(&maintainer.email)
        {
            errors.push(ValidationError {
                field: email_field,
                value: maintainer.email.clone(),
                reason: ValidationRule::Email,
            });
        }
    }

    for (field, value) in tail {
        required(&mut errors, (*field).to_string(), value);
    }

    if errors.is_empty() {
        Ok(ValidRecord(record))
    } else {
        tracing::debug!(title = %record.title, failures = errors.len(), "record failed validation");
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Maintainer;

    fn complete() -> ApplicationRecord {
        ApplicationRecord {
            title: "Valid App 2".into(),
            version: "1.0.1".into(),
            maintainers: vec![Maintainer::new("AppTwo Maintainer", "apptwo@hotmail.com")],
            company: "Upbound Inc.".into(),
            website: "https://upbound.io".into(),
            source: "https://github.com/upbound/repo".into(),
            license: "Apache-2.0".into(),
            description: "### Why app 2 is the best\nBecause it simply is...\n".into(),
        }
    }

    #[test]
    fn complete_record_passes() {
        let valid = validate(complete()).expect("record is valid");
        assert_eq!(valid.title, "Valid App 2");
        assert_eq!(valid.into_inner(), complete());
    }

    #[test]
    fn missing_version_is_reported() {
        let record = ApplicationRecord {
            version: String::new(),
            ..complete()
        };
        let errs = validate(record).unwrap_err();
        assert_eq!(errs.fields(), ["version"]);
        assert_eq!(errs.iter().next().unwrap().reason, ValidationRule::Required);
    }

    #[test]
    fn bad_email_is_reported_with_value() {
        let record = ApplicationRecord {
            maintainers: vec![
                Maintainer::new("ok", "ok@example.com"),
                Maintainer::new("firstmaintainer app1", "apptwohotmail.com"),
            ],
            ..complete()
        };
        let errs = validate(record).unwrap_err();
        assert_eq!(errs.len(), 1);
        let err = errs.iter().next().unwrap();
        assert_eq!(err.field, "maintainers[1].email");
        assert_eq!(err.value, "apptwohotmail.com");
        assert_eq!(err.reason, ValidationRule::Email);
    }

    #[test]
    fn every_failure_is_collected_in_field_order() {
        let record = ApplicationRecord {
            title: "Only a title".into(),
            ..Default::default()
        };
        let errs = validate(record).unwrap_err();
        assert_eq!(
            errs.fields(),
            [
                "version",
                "maintainers",
                "company",
                "website",
                "source",
                "license",
                "description"
            ]
        );
    }

    #[test]
    fn blank_maintainer_reports_name_and_email_once_each() {
        let record = ApplicationRecord {
            maintainers: vec![Maintainer::default()],
            ..complete()
        };
        let errs = validate(record).unwrap_err();
        assert_eq!(
            errs.fields(),
            ["maintainers[0].name", "maintainers[0].email"]
        );
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("x@x.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@ example.com"));
    }

    #[test]
    fn try_from_runs_validation() {
        assert!(ValidRecord::try_from(ApplicationRecord::default()).is_err());
        assert!(ValidRecord::try_from(complete()).is_ok());
    }
}
