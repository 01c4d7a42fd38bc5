mod countries;
mod home;
mod plans;
mod questionnaire;
mod settings;
mod sheet_host;
mod state;

use dioxus::prelude::Resource;
use wander_core::model::Question;

pub use countries::CountriesView;
pub use home::HomeView;
pub use plans::PlansSheet;
pub use questionnaire::QuestionnaireSheet;
pub use settings::SettingsView;
pub use sheet_host::SheetHost;
pub use state::{ViewError, ViewState, view_state_from_resource};

/// The app-wide pending-question fetch, provided once at the root so the
/// questionnaire can refresh it after completion.
pub type QuestionsResource = Resource<Result<Vec<Question>, ViewError>>;
