//! Pipeline orchestration — one document in, one candidate record out.
//!
//! Stage order: text extraction, then the three independent passes
//! (patterns, skills, entities) over the same extracted text, then record
//! assembly. The pattern and skill passes are pure; only the labeler call
//! does I/O. No retries at any stage.

use crate::errors::AppError;
use crate::extraction::entities::{collect_entities, SpanLabeler};
use crate::extraction::patterns::{extract_contact_info, ContactInfo};
use crate::extraction::skills::{match_skills, SkillVocabulary};
use crate::extraction::text::extract_text;
use crate::models::record::{CandidateRecord, EntityBundle, SkillSet};

/// Runs the full pipeline over raw PDF bytes.
pub async fn run_pipeline(
    bytes: &[u8],
    vocabulary: &SkillVocabulary,
    labeler: &dyn SpanLabeler,
) -> Result<CandidateRecord, AppError> {
    let text = extract_text(bytes)?;
    process_text(&text, vocabulary, labeler).await
}

/// Runs the extraction passes over already-extracted text.
pub async fn process_text(
    text: &str,
    vocabulary: &SkillVocabulary,
    labeler: &dyn SpanLabeler,
) -> Result<CandidateRecord, AppError> {
    let contact = extract_contact_info(text);
    let skills = match_skills(text, vocabulary);
    let spans = labeler.label_spans(text).await?;
    let entities = collect_entities(&spans);

    Ok(build_record(contact, skills, entities))
}

/// Assembles a candidate record from the pass outputs.
///
/// Name policy: an arbitrary element of the PERSON set — implemented as the
/// first element of the ordered set, so identical inputs always produce an
/// identical record. This is a "some match" pick, not "best match": titles
/// and section headers mislabeled as people are not filtered out.
pub fn build_record(
    contact: ContactInfo,
    skills: SkillSet,
    entities: EntityBundle,
) -> CandidateRecord {
    let name = entities.people.iter().next().cloned();

    CandidateRecord {
        name,
        email: contact.email,
        phone: contact.phone,
        linkedin: contact.linkedin,
        skills,
        organizations: entities.organizations.into_iter().collect(),
        dates: entities.dates.into_iter().collect(),
    }
}
