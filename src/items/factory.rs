use crate::core::repository::RepositoryStore;
use crate::items::repository::ItemRepository;
use crate::items::repository::memory_item_repository::MemoryItemRepository;

pub fn create_item_repository(store: &RepositoryStore) -> Box<dyn ItemRepository> {
    Box::new(MemoryItemRepository::new(store.items.clone()))
}
