use std::sync::Arc;

use wander_core::model::Question;

use crate::api::QuestionSource;
use crate::error::ApiError;

/// Fetches the pending question list for the signed-in user.
#[derive(Clone)]
pub struct QuestionService {
    source: Arc<dyn QuestionSource>,
}

impl QuestionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch the pending questions in display order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for auth or transport failures.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.source.fetch_questions().await
    }
}
