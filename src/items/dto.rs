use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::{ItemDetails, ItemEntity};

// ItemDto is the listing view of an item, with the holder's name resolved from
// the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_id: i64,
    pub version: i64,
    pub title: String,
    pub details: ItemDetails,
    pub holder_id: Option<i64>,
    pub holder_name: Option<String>,
}

impl ItemDto {
    pub fn from_entity(entity: &ItemEntity, holder_name: Option<String>) -> Self {
        Self {
            item_id: entity.item_id,
            version: entity.version,
            title: entity.title.to_string(),
            details: entity.details.clone(),
            holder_id: entity.holder_id,
            holder_name,
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> i64 {
        self.item_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl LibraryItem for ItemDto {
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

impl Display for ItemDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Type: {:<4} | Title: {:<15} | Status: {}",
               self.item_id, self.kind(), self.title, self.status())?;
        if let Some(holder_name) = &self.holder_name {
            write!(f, " (Held by: {})", holder_name)?;
        }
        match &self.details {
            ItemDetails::Book { author } => write!(f, " | Author: {}", author),
            ItemDetails::Dvd { duration_minutes } => write!(f, " | Runtime: {} mins", duration_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::items::domain::model::{ItemDetails, ItemEntity};
    use crate::items::dto::ItemDto;

    #[test]
    fn test_should_render_available_book() {
        let book = ItemEntity::new(1, "The Hobbit", ItemDetails::Book { author: "Tolkien".to_string() });
        let dto = ItemDto::from_entity(&book, None);
        assert_eq!("ID: 1 | Type: BOOK | Title: The Hobbit      | Status: IN | Author: Tolkien", dto.to_string());
    }

    #[test]
    fn test_should_render_borrowed_dvd() {
        let mut dvd = ItemEntity::new(2, "Inception", ItemDetails::Dvd { duration_minutes: 148 });
        dvd.check_out(1);
        let dto = ItemDto::from_entity(&dvd, Some("Alice Smith".to_string()));
        assert_eq!("ID: 2 | Type: DVD  | Title: Inception       | Status: OUT (Held by: Alice Smith) | Runtime: 148 mins",
                   dto.to_string());
    }

    #[test]
    fn test_should_not_truncate_long_title() {
        let book = ItemEntity::new(12, "A-Very-Long-Title-Indeed", ItemDetails::Book { author: "Anon".to_string() });
        let dto = ItemDto::from_entity(&book, None);
        assert_eq!("ID: 12 | Type: BOOK | Title: A-Very-Long-Title-Indeed | Status: IN | Author: Anon", dto.to_string());
    }
}
