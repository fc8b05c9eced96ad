//! Quail (individual bird) records.
//!
//! # Invariants
//! - `id` is the only field other collections could ever refer to.
//! - Updates overwrite only the fields present in a [`QuailPatch`].

use crate::model::value::{derive_timestamp, CalendarDate, ValueParseError};
use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Biological sex as recorded by the keeper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "Not specified",
        }
    }
}

impl FromStr for Sex {
    type Err = ValueParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unknown" => Ok(Self::Unknown),
            other => Err(ValueParseError::UnknownVariant {
                field: "sex",
                value: other.to_string(),
            }),
        }
    }
}

/// Health state shown on the quail card and counted by the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    #[default]
    Healthy,
    Sick,
    Recovering,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Sick => "Sick",
            Self::Recovering => "Recovering",
        }
    }
}

impl FromStr for Health {
    type Err = ValueParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "healthy" => Ok(Self::Healthy),
            "sick" => Ok(Self::Sick),
            "recovering" => Ok(Self::Recovering),
            other => Err(ValueParseError::UnknownVariant {
                field: "health",
                value: other.to_string(),
            }),
        }
    }
}

/// One tracked bird.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quail {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub breed: String,
    /// Acquisition date.
    pub date: CalendarDate,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub health: Health,
    #[serde(default)]
    pub notes: String,
}

impl Quail {
    /// Builds a record from create input, filling defaults for absent fields.
    pub fn from_draft(id: RecordId, draft: QuailDraft, today: CalendarDate) -> Self {
        Self {
            id,
            name: draft.name,
            breed: draft.breed.unwrap_or_default(),
            date: draft.date.unwrap_or(today),
            sex: draft.sex.unwrap_or_default(),
            health: draft.health.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
        }
    }

    /// Overwrites every field present in `patch`.
    pub fn apply(&mut self, patch: QuailPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(breed) = patch.breed {
            self.breed = breed;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(sex) = patch.sex {
            self.sex = sex;
        }
        if let Some(health) = patch.health {
            self.health = health;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }

    /// Local midnight of the acquisition date, used for activity ordering.
    pub fn acquired_timestamp(&self) -> i64 {
        derive_timestamp(self.date, None)
    }
}

/// Create input for a quail. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuailDraft {
    pub name: String,
    pub breed: Option<String>,
    pub date: Option<CalendarDate>,
    pub sex: Option<Sex>,
    pub health: Option<Health>,
    pub notes: Option<String>,
}

impl QuailDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Edit input for a quail; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuailPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub date: Option<CalendarDate>,
    pub sex: Option<Sex>,
    pub health: Option<Health>,
    pub notes: Option<String>,
}

impl QuailPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
