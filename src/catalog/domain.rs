pub mod service;

use crate::core::library::LibraryResult;
use crate::items::domain::model::ItemDetails;
use crate::items::dto::ItemDto;

pub trait CatalogService {
    fn add_item(&self, title: &str, details: ItemDetails) -> LibraryResult<ItemDto>;
    fn find_item_by_id(&self, id: i64) -> LibraryResult<ItemDto>;
    fn list_items(&self) -> LibraryResult<Vec<ItemDto>>;

    fn add_book(&self, title: &str, author: &str) -> LibraryResult<ItemDto> {
        self.add_item(title, ItemDetails::Book { author: author.to_string() })
    }

    fn add_dvd(&self, title: &str, duration_minutes: i64) -> LibraryResult<ItemDto> {
        self.add_item(title, ItemDetails::Dvd { duration_minutes })
    }
}
