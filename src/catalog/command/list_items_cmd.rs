use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::items::dto::ItemDto;

pub struct ListItemsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListItemsCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ListItemsCommandResponse {
    pub items: Vec<ItemDto>,
}

impl Command<(), ListItemsCommandResponse> for ListItemsCommand {
    fn execute(&self, _req: ()) -> LibraryResult<ListItemsCommandResponse> {
        let items = self.catalog_service.list_items()?;
        Ok(ListItemsCommandResponse { items })
    }
}
