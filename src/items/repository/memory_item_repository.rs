use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{MemoryTable, Repository};
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;

#[derive(Debug)]
pub struct MemoryItemRepository {
    table: MemoryTable<ItemEntity>,
}

impl MemoryItemRepository {
    pub(crate) fn new(table: MemoryTable<ItemEntity>) -> Self {
        Self {
            table,
        }
    }
}

impl Repository<ItemEntity> for MemoryItemRepository {
    fn next_id(&self) -> i64 {
        self.table.allocate_id()
    }

    fn create(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        self.table.insert(entity)
    }

    fn update(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        match self.table.replace(entity)? {
            0 => Err(LibraryError::item_not_found(entity.item_id)),
            n => Ok(n),
        }
    }

    fn get(&self, id: i64) -> LibraryResult<ItemEntity> {
        self.table.find(id).ok_or_else(|| LibraryError::item_not_found(id))
    }

    fn list(&self) -> LibraryResult<Vec<ItemEntity>> {
        Ok(self.table.rows())
    }
}

impl ItemRepository for MemoryItemRepository {}
