use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{MemoryTable, Repository};
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;

#[derive(Debug)]
pub struct MemoryPatronRepository {
    table: MemoryTable<PatronEntity>,
}

impl MemoryPatronRepository {
    pub(crate) fn new(table: MemoryTable<PatronEntity>) -> Self {
        Self {
            table,
        }
    }
}

impl Repository<PatronEntity> for MemoryPatronRepository {
    fn next_id(&self) -> i64 {
        self.table.allocate_id()
    }

    fn create(&self, entity: &PatronEntity) -> LibraryResult<usize> {
        self.table.insert(entity)
    }

    fn update(&self, entity: &PatronEntity) -> LibraryResult<usize> {
        match self.table.replace(entity)? {
            0 => Err(LibraryError::patron_not_found(entity.patron_id)),
            n => Ok(n),
        }
    }

    fn get(&self, id: i64) -> LibraryResult<PatronEntity> {
        self.table.find(id).ok_or_else(|| LibraryError::patron_not_found(id))
    }

    fn list(&self) -> LibraryResult<Vec<PatronEntity>> {
        Ok(self.table.rows())
    }
}

impl PatronRepository for MemoryPatronRepository {}
