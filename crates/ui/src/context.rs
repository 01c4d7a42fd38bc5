use std::sync::Arc;

use services::auth_service::AuthService;
use services::country_service::CountryService;
use services::flow_loop::FlowLoopService;
use services::question_service::QuestionService;

pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<QuestionService>;
    fn flow_loop(&self) -> Arc<FlowLoopService>;
    fn countries(&self) -> Arc<CountryService>;
    fn auth(&self) -> Arc<AuthService>;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<QuestionService>,
    flow_loop: Arc<FlowLoopService>,
    countries: Arc<CountryService>,
    auth: Arc<AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            flow_loop: app.flow_loop(),
            countries: app.countries(),
            auth: app.auth(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
