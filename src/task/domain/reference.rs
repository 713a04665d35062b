//! External reference types: the entities tasks are raised against.

use super::{ParseReferenceTypeError, ReferenceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of external entity a task can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    /// A customer order.
    Order,
    /// A customer or sales entity.
    Entity,
}

impl ReferenceType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Entity => "entity",
        }
    }
}

impl TryFrom<&str> for ReferenceType {
    type Error = ParseReferenceTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "order" => Ok(Self::Order),
            "entity" => Ok(Self::Entity),
            _ => Err(ParseReferenceTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reassignment key: identifies the external entity a task serves.
///
/// Not unique across task records. Multiple records, historical and
/// current, may share a key; reassignment normalizes them back to a single
/// open record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceKey {
    /// External entity identifier.
    pub reference_id: ReferenceId,
    /// External entity category.
    pub reference_type: ReferenceType,
}

impl ReferenceKey {
    /// Creates a reference key from its parts.
    #[must_use]
    pub const fn new(reference_id: ReferenceId, reference_type: ReferenceType) -> Self {
        Self {
            reference_id,
            reference_type,
        }
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.reference_type, self.reference_id)
    }
}
