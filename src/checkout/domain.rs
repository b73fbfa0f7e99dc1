pub mod service;

use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;

pub trait CheckoutService {
    // Fails the same way checkout would before any patron is involved, so the
    // desk can reject an item before asking who borrows it.
    fn ensure_available(&self, item_id: i64) -> LibraryResult<()>;
    fn checkout(&self, item_id: i64, patron_id: i64) -> LibraryResult<CheckoutDto>;
    fn returned(&self, item_id: i64) -> LibraryResult<CheckoutDto>;
}
