pub mod model;
pub mod service;

use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronDto;

pub trait PatronService {
    fn register_patron(&self, name: &str) -> LibraryResult<PatronDto>;
    fn find_patron_by_id(&self, id: i64) -> LibraryResult<PatronDto>;
    fn list_patrons(&self) -> LibraryResult<Vec<PatronDto>>;
}
