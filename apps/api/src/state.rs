use std::sync::Arc;

use crate::dashboard::store::RecordStore;
use crate::extraction::entities::SpanLabeler;
use crate::extraction::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only skill vocabulary, loaded once at startup and shared by all
    /// pipeline invocations.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable span labeler. Production: HttpSpanLabeler; tests substitute
    /// a deterministic stub.
    pub labeler: Arc<dyn SpanLabeler>,
    pub store: RecordStore,
}
