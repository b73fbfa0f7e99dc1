use std::cell::RefCell;
use std::rc::Rc;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;
use crate::items::domain::model::ItemEntity;
use crate::patrons::domain::model::PatronEntity;

pub trait Repository<Entity> {
    // reserves the next id of the sequence, ids are never handed out twice
    fn next_id(&self) -> i64;

    // create an entity
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the version must match the stored one
    fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: i64) -> LibraryResult<Entity>;

    // all entities in insertion order
    fn list(&self) -> LibraryResult<Vec<Entity>>;
}

// Record is a stored entity whose version moves forward on each update.
pub trait Record: Identifiable + Clone {
    fn bump_version(&mut self);
}

#[derive(Debug)]
struct TableState<E> {
    rows: Vec<E>,
    next_id: i64,
}

/// Ordered in-memory table with its own id sequence starting at 1.
///
/// Clones share the same rows, so every service built from one
/// [`RepositoryStore`] sees the same data.
#[derive(Debug)]
pub struct MemoryTable<E> {
    state: Rc<RefCell<TableState<E>>>,
}

impl<E> Clone for MemoryTable<E> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<E> Default for MemoryTable<E> {
    fn default() -> Self {
        Self { state: Rc::new(RefCell::new(TableState { rows: Vec::new(), next_id: 1 })) }
    }
}

impl<E: Record> MemoryTable<E> {
    pub fn allocate_id(&self) -> i64 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        id
    }

    pub fn insert(&self, entity: &E) -> LibraryResult<usize> {
        let mut state = self.state.borrow_mut();
        if state.rows.iter().any(|row| row.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("record with id {} already exists", entity.id()).as_str()));
        }
        state.rows.push(entity.clone());
        Ok(1)
    }

    // Returns the number of rows touched, zero when the id is unknown.
    pub fn replace(&self, entity: &E) -> LibraryResult<usize> {
        let mut state = self.state.borrow_mut();
        match state.rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => {
                if row.version() != entity.version() {
                    return Err(LibraryError::stale_version(
                        format!("record with id {} was updated concurrently", entity.id()).as_str(),
                        entity.version(), row.version()));
                }
                let mut next = entity.clone();
                next.bump_version();
                *row = next;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    pub fn find(&self, id: i64) -> Option<E> {
        self.state.borrow().rows.iter().find(|row| row.id() == id).cloned()
    }

    pub fn rows(&self) -> Vec<E> {
        self.state.borrow().rows.clone()
    }
}

/// Single owner of all desk state, handed to the factories at startup.
#[derive(Debug, Clone, Default)]
pub struct RepositoryStore {
    pub items: MemoryTable<ItemEntity>,
    pub patrons: MemoryTable<PatronEntity>,
    pub publisher: GatewayPublisherVia,
}

impl RepositoryStore {
    pub fn new(publisher: GatewayPublisherVia) -> Self {
        Self {
            items: MemoryTable::default(),
            patrons: MemoryTable::default(),
            publisher,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::MemoryTable;
    use crate::patrons::domain::model::PatronEntity;

    #[test]
    fn test_should_allocate_sequential_ids() {
        let table: MemoryTable<PatronEntity> = MemoryTable::default();
        assert_eq!(1, table.allocate_id());
        assert_eq!(2, table.allocate_id());
        assert_eq!(3, table.clone().allocate_id());
        assert_eq!(4, table.allocate_id());
    }

    #[test]
    fn test_should_reject_duplicate_id() {
        let table: MemoryTable<PatronEntity> = MemoryTable::default();
        let patron = PatronEntity::new(table.allocate_id(), "Alice Smith");
        assert_eq!(1, table.insert(&patron).expect("should insert"));
        assert!(matches!(table.insert(&patron), Err(LibraryError::DuplicateKey { message: _ })));
        assert_eq!(1, table.rows().len());
    }

    #[test]
    fn test_should_bump_version_on_replace() {
        let table: MemoryTable<PatronEntity> = MemoryTable::default();
        let patron = PatronEntity::new(table.allocate_id(), "Alice Smith");
        table.insert(&patron).expect("should insert");
        assert_eq!(1, table.replace(&patron).expect("should replace"));
        let loaded = table.find(patron.patron_id).expect("should find");
        assert_eq!(1, loaded.version);
    }

    #[test]
    fn test_should_reject_stale_replace() {
        let table: MemoryTable<PatronEntity> = MemoryTable::default();
        let patron = PatronEntity::new(table.allocate_id(), "Alice Smith");
        table.insert(&patron).expect("should insert");
        table.replace(&patron).expect("should replace");
        let res = table.replace(&patron);
        assert!(matches!(res, Err(LibraryError::StaleVersion { expected: 0, actual: 1, .. })));
    }

    #[test]
    fn test_should_skip_replace_of_unknown_id() {
        let table: MemoryTable<PatronEntity> = MemoryTable::default();
        let patron = PatronEntity::new(42, "Nobody");
        assert_eq!(0, table.replace(&patron).expect("should not fail"));
        assert!(table.find(42).is_none());
    }

    #[test]
    fn test_should_share_rows_between_clones() {
        let table: MemoryTable<PatronEntity> = MemoryTable::default();
        let other = table.clone();
        table.insert(&PatronEntity::new(table.allocate_id(), "Alice Smith")).expect("should insert");
        assert_eq!(1, other.rows().len());
    }
}
