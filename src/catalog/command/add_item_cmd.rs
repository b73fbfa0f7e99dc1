use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::{ItemKind, LibraryResult};
use crate::items::domain::LibraryItem;
use crate::items::domain::model::ItemDetails;
use crate::items::dto::ItemDto;

pub struct AddItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddItemCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddItemCommandRequest {
    pub title: String,
    pub details: ItemDetails,
}

impl AddItemCommandRequest {
    pub fn book(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            details: ItemDetails::Book { author: author.to_string() },
        }
    }

    pub fn dvd(title: &str, duration_minutes: i64) -> Self {
        Self {
            title: title.to_string(),
            details: ItemDetails::Dvd { duration_minutes },
        }
    }
}

#[derive(Debug)]
pub struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }

    pub fn message(&self) -> String {
        match self.item.kind() {
            ItemKind::Book => "Book added.".to_string(),
            ItemKind::Dvd => "DVD added.".to_string(),
        }
    }
}

impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand {
    fn execute(&self, req: AddItemCommandRequest) -> LibraryResult<AddItemCommandResponse> {
        self.catalog_service.add_item(req.title.as_str(), req.details).map(AddItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn build_cmd() -> AddItemCommand {
        AddItemCommand::new(factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::default()))
    }

    #[test]
    fn test_should_run_add_book() {
        let res = build_cmd().execute(AddItemCommandRequest::book("Dune", "Herbert")).expect("should add book");
        assert_eq!(1, res.item.item_id);
        assert_eq!("Book added.", res.message());
    }

    #[test]
    fn test_should_run_add_dvd() {
        let res = build_cmd().execute(AddItemCommandRequest::dvd("Alien", 117)).expect("should add dvd");
        assert_eq!("DVD added.", res.message());
    }
}
