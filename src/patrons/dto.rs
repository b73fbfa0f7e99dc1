use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::domain::model::PatronEntity;

// PatronDto is the roster view of a library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: i64,
    pub version: i64,
    pub name: String,
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id,
            version: other.version,
            name: other.name.to_string(),
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> i64 {
        self.patron_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Display for PatronDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Name: {}", self.patron_id, self.name)
    }
}
