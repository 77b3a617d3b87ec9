use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed species set; free-form breeds are not modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
    Other,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Other => "Other",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetSize {
    Small,
    Medium,
    Large,
}

/// An adoptable animal in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub species: Species,
    /// Free text, e.g. "2 years" or "6 months".
    pub age: String,
    pub gender: Gender,
    pub size: PetSize,
    pub location: String,
    pub description: String,
    pub image: String,
    pub adopted: bool,
    /// Name of the shelter that listed the animal.
    pub shelter: String,
}

/// Registration input. The id, location, image, adopted flag, and shelter
/// name are system-assigned, never caller-supplied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetDraft {
    pub name: String,
    pub species: Species,
    pub age: String,
    pub gender: Gender,
    pub size: PetSize,
    pub description: String,
}

impl PetDraft {
    pub fn validate(&self) -> Result<(), crate::errors::ModelError> {
        if self.name.trim().is_empty() {
            return Err(crate::errors::ModelError::Validation("name required".into()));
        }
        Ok(())
    }
}
