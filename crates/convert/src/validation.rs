//! Publication-readiness checks.
//!
//! A document must pass every rule before it is mapped. All rules are
//! evaluated on every call so the caller receives the complete list of
//! problems, in rule order.
//!
//! | Rule | Property | Message |
//! |------|----------|---------|
//! | [`Rule::StatusInvalid`] | `Status` | Status must be 3. |
//! | [`Rule::PublishDateTooEarly`] | `PublishDate` | PublishDate must be on or after 2024-08-24. |
//! | [`Rule::TestRunRequired`] | `TestRun` | Request must be a test run (TestRun=true). |

use std::fmt;

use chrono::{NaiveDate, Utc};
use pubxml_contracts::InputDocument;
use tracing::debug;

/// The only status accepted for publication.
pub const REQUIRED_STATUS: i64 = 3;

/// Earliest accepted publication date, compared as a UTC calendar date.
pub const MIN_PUBLISH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 8, 24) {
    Some(date) => date,
    None => panic!("invalid minimum publish date"),
};

/// A publication-readiness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `status` is not 3.
    StatusInvalid,
    /// `publishDate` falls before 2024-08-24 (UTC) or is missing.
    PublishDateTooEarly,
    /// `testRun` is not `true`.
    TestRunRequired,
}

impl Rule {
    /// Name of the input property the rule applies to.
    pub fn property(&self) -> &'static str {
        match self {
            Rule::StatusInvalid => "Status",
            Rule::PublishDateTooEarly => "PublishDate",
            Rule::TestRunRequired => "TestRun",
        }
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &'static str {
        match self {
            Rule::StatusInvalid => "Status must be 3.",
            Rule::PublishDateTooEarly => "PublishDate must be on or after 2024-08-24.",
            Rule::TestRunRequired => "Request must be a test run (TestRun=true).",
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// The rule that failed.
    pub rule: Rule,
    /// Input property name, as used in problem reports.
    pub property: &'static str,
    /// Failure message.
    pub message: &'static str,
}

impl From<Rule> for ValidationFailure {
    fn from(rule: Rule) -> Self {
        Self {
            rule,
            property: rule.property(),
            message: rule.message(),
        }
    }
}

/// Every rule a document failed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    failures: Vec<ValidationFailure>,
}

impl ValidationErrors {
    /// Returns the failures in rule order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Returns true if the given rule failed.
    pub fn contains(&self, rule: Rule) -> bool {
        self.failures.iter().any(|f| f.rule == rule)
    }

    /// Number of failed rules.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no rule failed. Errors returned by [`validate`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.failures.iter().map(|v| v.message).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

/// Checks that the document is ready for publication.
///
/// Returns every failed rule, or `Ok(())` when all pass.
pub fn validate(input: &InputDocument) -> Result<(), ValidationErrors> {
    let checks = [
        (Rule::StatusInvalid, status_is_valid(input)),
        (Rule::PublishDateTooEarly, publish_date_is_valid(input)),
        (Rule::TestRunRequired, input.test_run == Some(true)),
    ];

    let failures: Vec<ValidationFailure> = checks
        .into_iter()
        .filter(|(_, passed)| !passed)
        .map(|(rule, _)| rule.into())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        debug!(failures = failures.len(), "Document failed publication checks");
        Err(ValidationErrors { failures })
    }
}

fn status_is_valid(input: &InputDocument) -> bool {
    input.status == Some(REQUIRED_STATUS)
}

fn publish_date_is_valid(input: &InputDocument) -> bool {
    input
        .publish_date
        .is_some_and(|date| date.with_timezone(&Utc).date_naive() >= MIN_PUBLISH_DATE)
}
