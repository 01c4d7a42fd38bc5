use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use wander_core::model::{AnswerPayload, Country, CountryId, Question, QuestionId};

use crate::config::ApiConfig;
use crate::error::ApiError;

//
// ─── COLLABORATOR CONTRACTS ───────────────────────────────────────────────────
//

/// One answered question, in the shape the backend accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceSubmission {
    pub question_id: QuestionId,
    pub answer: AnswerPayload,
}

/// Source of the ordered question list.
///
/// Invoked by views; the flow engine only consumes the resulting list.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the pending questions in display order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for auth or transport failures.
    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError>;
}

/// Sink for answered questions.
///
/// Submissions must be idempotent-safe: the flow resubmits the same
/// `question_id` when the user retries after a failure.
#[async_trait]
pub trait PreferenceGateway: Send + Sync {
    /// Submit one answered question.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for auth, transport, or non-success responses.
    async fn submit_preference(&self, submission: PreferenceSubmission) -> Result<(), ApiError>;
}

/// Country catalogue and selection endpoints.
#[async_trait]
pub trait CountryGateway: Send + Sync {
    /// Fetch the travel country catalogue.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for auth or transport failures.
    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError>;

    /// Submit the user's selected country.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for auth, transport, or non-success responses.
    async fn submit_country(&self, country: CountryId) -> Result<(), ApiError>;
}

//
// ─── HTTP CLIENT ──────────────────────────────────────────────────────────────
//

/// Reqwest-backed client for the travel backend.
#[derive(Clone)]
pub struct TravelApi {
    client: Client,
    config: ApiConfig,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct CountrySubmission {
    country_id: u64,
}

impl TravelApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.config.token.as_deref().ok_or(ApiError::MissingAuth)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn get_enveloped<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(self.token()?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body: DataEnvelope<T> = response.json().await?;
        Ok(body.data)
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(self.token()?)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionSource for TravelApi {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.get_enveloped("questions").await
    }
}

#[async_trait]
impl PreferenceGateway for TravelApi {
    async fn submit_preference(&self, submission: PreferenceSubmission) -> Result<(), ApiError> {
        self.post_json("user-preference", &submission).await
    }
}

#[async_trait]
impl CountryGateway for TravelApi {
    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        self.get_enveloped("travel-countries").await
    }

    async fn submit_country(&self, country: CountryId) -> Result<(), ApiError> {
        self.post_json(
            "user-country",
            &CountrySubmission {
                country_id: country.value(),
            },
        )
        .await
    }
}
