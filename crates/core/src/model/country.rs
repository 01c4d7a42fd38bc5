use serde::{Deserialize, Serialize};

use crate::model::ids::CountryId;

/// A destination country from the travel catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    id: CountryId,
    name: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl Country {
    #[must_use]
    pub fn new(
        id: CountryId,
        name: impl Into<String>,
        code: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code,
            image_url,
        }
    }

    #[must_use]
    pub fn id(&self) -> CountryId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}
