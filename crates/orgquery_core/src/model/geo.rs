//! Geography records: regions, countries and office locations.

use super::validation::{require_text, ModelValidationError};
use super::Keyed;
use serde::{Deserialize, Serialize};

pub type RegionId = u32;
/// Two-letter country code, e.g. `US`.
pub type CountryId = String;
pub type LocationId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub region_id: RegionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Not every location has a postal code (London in the sample data).
    pub postal_code: Option<String>,
    pub city: String,
    pub country_id: CountryId,
}

impl Region {
    pub fn new(id: RegionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("name", &self.name)
    }
}

impl Country {
    pub fn new(id: impl Into<CountryId>, name: impl Into<String>, region_id: RegionId) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region_id,
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)
    }
}

impl Location {
    pub fn new(id: LocationId, city: impl Into<String>, country_id: impl Into<CountryId>) -> Self {
        Self {
            id,
            postal_code: None,
            city: city.into(),
            country_id: country_id.into(),
        }
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("city", &self.city)?;
        require_text("country_id", &self.country_id)
    }
}

impl Keyed for Region {
    type Key = RegionId;

    fn key(&self) -> &RegionId {
        &self.id
    }
}

impl Keyed for Country {
    type Key = CountryId;

    fn key(&self) -> &CountryId {
        &self.id
    }
}

impl Keyed for Location {
    type Key = LocationId;

    fn key(&self) -> &LocationId {
        &self.id
    }
}
