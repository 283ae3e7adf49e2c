//! Skill matching — case-insensitive substring scan of a fixed vocabulary.
//!
//! Matching is substring-only with no word-boundary enforcement, so "nlp"
//! matches inside an unrelated token. That false-positive behavior is kept
//! as-is; results preserve vocabulary order, not text occurrence order.

use anyhow::{Context, Result};

use crate::models::record::SkillSet;

/// Built-in vocabulary used when no SKILLS_PATH override is configured.
const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "sql",
    "excel",
    "communication",
    "nlp",
    "machine learning",
    "deep learning",
    "data analysis",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "keras",
    "fastapi",
    "docker",
    "git",
    "linux",
];

/// Read-only skill vocabulary, constructed once at startup and shared by all
/// pipeline invocations. Terms are stored lowercase.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    pub fn new(terms: impl IntoIterator<Item = String>) -> Self {
        SkillVocabulary {
            terms: terms.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// The built-in default vocabulary.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SKILLS.iter().map(|s| s.to_string()))
    }

    /// Loads a vocabulary from a newline-delimited file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary from '{path}'"))?;
        Ok(Self::parse(&contents))
    }

    /// Parses newline-delimited terms: one term per line, trimmed,
    /// blank lines ignored.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        )
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Scans the text for every vocabulary term, case-insensitively.
///
/// Pure function of (text, vocabulary). Returns the matched terms in
/// vocabulary order, or the explicit `NoneMatched` sentinel.
pub fn match_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    let text_lower = text.to_lowercase();
    let found: Vec<String> = vocabulary
        .terms()
        .iter()
        .filter(|term| text_lower.contains(term.as_str()))
        .cloned()
        .collect();

    if found.is_empty() {
        SkillSet::NoneMatched
    } else {
        SkillSet::Matched(found)
    }
}
