use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::repository::Record;
use crate::utils::date::serializer;

// PatronEntity abstracts a registered library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: i64,
    pub version: i64,
    pub name: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronEntity {
    pub fn new(patron_id: i64, name: &str) -> Self {
        Self {
            patron_id,
            version: 0,
            name: name.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> i64 {
        self.patron_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Record for PatronEntity {
    fn bump_version(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}
