use std::sync::Arc;

use storage::repository::Storage;

use crate::api::TravelApi;
use crate::auth_service::AuthService;
use crate::config::ApiConfig;
use crate::country_service::CountryService;
use crate::error::AppServicesError;
use crate::flow_loop::FlowLoopService;
use crate::question_service::QuestionService;

/// Assembles app-facing services over storage and the remote API.
#[derive(Clone)]
pub struct AppServices {
    questions: Arc<QuestionService>,
    flow_loop: Arc<FlowLoopService>,
    countries: Arc<CountryService>,
    auth: Arc<AuthService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_parts(storage, config).await
    }

    /// Build services over an existing storage bundle.
    ///
    /// An environment-supplied token in `config` wins; otherwise the
    /// persisted auth session is used.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the persisted session cannot be read.
    pub async fn from_parts(
        storage: Storage,
        mut config: ApiConfig,
    ) -> Result<Self, AppServicesError> {
        if config.token.is_none() {
            config.token = storage
                .auth_sessions
                .load_session()
                .await?
                .map(|record| record.token);
        }

        // Method-call clone so each argument position can unsize to its
        // trait object; `Arc::clone` would fix the type parameter first.
        let api = Arc::new(TravelApi::new(config));
        let questions = Arc::new(QuestionService::new(api.clone()));
        let flow_loop = Arc::new(FlowLoopService::new(api.clone()));
        let countries = Arc::new(CountryService::new(api, Arc::clone(&storage.app_state)));
        let auth = Arc::new(AuthService::new(Arc::clone(&storage.auth_sessions)));

        Ok(Self {
            questions,
            flow_loop,
            countries,
            auth,
        })
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn flow_loop(&self) -> Arc<FlowLoopService> {
        Arc::clone(&self.flow_loop)
    }

    #[must_use]
    pub fn countries(&self) -> Arc<CountryService> {
        Arc::clone(&self.countries)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}
