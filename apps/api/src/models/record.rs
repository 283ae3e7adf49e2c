//! Candidate record data model — the structured output of one pipeline run.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel for single-value fields that were checked but not found.
pub const NOT_FOUND: &str = "Not found";

/// Sentinel for a skill scan that matched nothing. Distinct from an empty
/// list so callers can tell "checked and found none" from "not yet checked".
pub const NO_SKILLS_MATCHED: &str = "No skills matched";

/// Deduplicated entity sets produced by the span labeler.
///
/// A span's text lands only in the set(s) for the categories the recognizer
/// assigned it; there is no cross-category merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub people: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub dates: BTreeSet<String>,
}

/// Result of matching the skill vocabulary against resume text.
///
/// `NoneMatched` is an explicit sentinel, not an empty `Matched` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "skills", rename_all = "snake_case")]
pub enum SkillSet {
    /// Vocabulary terms found in the text, in vocabulary order.
    Matched(Vec<String>),
    NoneMatched,
}

impl SkillSet {
    /// Renders the display form: comma-joined terms, or the sentinel.
    pub fn display(&self) -> String {
        match self {
            SkillSet::Matched(skills) => skills.join(", "),
            SkillSet::NoneMatched => NO_SKILLS_MATCHED.to_string(),
        }
    }
}

/// One structured candidate record per processed document.
///
/// Single-value fields keep `None` for misses; the sentinel string is applied
/// at the display/export boundary (`RecordRow`). Multi-value fields are stored
/// as sequences and comma-joined only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub skills: SkillSet,
    pub organizations: Vec<String>,
    pub dates: Vec<String>,
}

/// A record as held by the dashboard store: the candidate record plus
/// store-assigned identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: Uuid,
    pub record: CandidateRecord,
    pub parsed_at: DateTime<Utc>,
}

/// Display projection of a record, fields in dashboard/export order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub skills: String,
    pub organizations: String,
    pub dates: String,
}

impl From<&CandidateRecord> for RecordRow {
    fn from(record: &CandidateRecord) -> Self {
        RecordRow {
            name: display_or_not_found(&record.name),
            email: display_or_not_found(&record.email),
            phone: display_or_not_found(&record.phone),
            linkedin: display_or_not_found(&record.linkedin),
            skills: record.skills.display(),
            organizations: record.organizations.join(", "),
            dates: record.dates.join(", "),
        }
    }
}

fn display_or_not_found(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| NOT_FOUND.to_string())
}
