#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod country_service;
pub mod error;
pub mod flow_loop;
pub mod question_flow;
pub mod question_service;

pub use api::{CountryGateway, PreferenceGateway, PreferenceSubmission, QuestionSource, TravelApi};
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use config::ApiConfig;
pub use country_service::CountryService;
pub use error::{ApiError, AppServicesError, AuthServiceError, CountryServiceError, FlowError};
pub use flow_loop::FlowLoopService;
pub use question_flow::{FlowProgress, FlowSignal, QuestionFlow};
pub use question_service::QuestionService;
