use std::sync::Arc;

use storage::repository::AppStateRepository;
use wander_core::model::{Country, CountryId};

use crate::api::CountryGateway;
use crate::error::CountryServiceError;

/// Country catalogue plus the locally persisted selection.
#[derive(Clone)]
pub struct CountryService {
    gateway: Arc<dyn CountryGateway>,
    app_state: Arc<dyn AppStateRepository>,
}

impl CountryService {
    #[must_use]
    pub fn new(gateway: Arc<dyn CountryGateway>, app_state: Arc<dyn AppStateRepository>) -> Self {
        Self { gateway, app_state }
    }

    /// Fetch the travel country catalogue.
    ///
    /// # Errors
    ///
    /// Returns `CountryServiceError` for API failures.
    pub async fn list_countries(&self) -> Result<Vec<Country>, CountryServiceError> {
        Ok(self.gateway.fetch_countries().await?)
    }

    /// The persisted selection, if any.
    ///
    /// # Errors
    ///
    /// Returns `CountryServiceError` for storage failures.
    pub async fn selected_country(&self) -> Result<Option<CountryId>, CountryServiceError> {
        Ok(self.app_state.selected_country().await?)
    }

    /// Submit the selection to the backend, then persist it locally.
    ///
    /// The local write only happens after the backend accepted the
    /// selection, so persisted state never runs ahead of the server.
    ///
    /// # Errors
    ///
    /// Returns `CountryServiceError` for API or storage failures.
    pub async fn select_country(&self, country: CountryId) -> Result<(), CountryServiceError> {
        self.gateway.submit_country(country).await?;
        self.app_state.set_selected_country(Some(country)).await?;
        Ok(())
    }
}
