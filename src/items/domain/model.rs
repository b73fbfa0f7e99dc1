use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::core::repository::Record;
use crate::items::domain::LibraryItem;
use crate::utils::date::serializer;

// ItemDetails carries the fields that only one kind of item has.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ItemDetails {
    Book {
        author: String,
    },
    Dvd {
        duration_minutes: i64,
    },
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Book { .. } => ItemKind::Book,
            ItemDetails::Dvd { .. } => ItemKind::Dvd,
        }
    }
}

// ItemEntity abstracts a physical copy on the shelf. It is borrowed exactly when
// it has a holder.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemEntity {
    pub item_id: i64,
    pub version: i64,
    pub title: String,
    pub details: ItemDetails,
    pub holder_id: Option<i64>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemEntity {
    pub fn new(item_id: i64, title: &str, details: ItemDetails) -> Self {
        Self {
            item_id,
            version: 0,
            title: title.to_string(),
            details,
            holder_id: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn check_out(&mut self, patron_id: i64) {
        self.holder_id = Some(patron_id);
    }

    pub fn check_in(&mut self) {
        self.holder_id = None;
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> i64 {
        self.item_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Record for ItemEntity {
    fn bump_version(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl LibraryItem for ItemEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn kind(&self) -> ItemKind {
        self.details.kind()
    }

    fn holder_id(&self) -> Option<i64> {
        self.holder_id
    }
}
