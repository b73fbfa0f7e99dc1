use crate::core::domain::Identifiable;
use crate::core::library::{ItemKind, ItemStatus};

pub mod model;

// LibraryItem is the shared view of a catalog entry, whatever its kind.
pub trait LibraryItem: Identifiable {
    fn title(&self) -> &str;
    fn kind(&self) -> ItemKind;
    fn holder_id(&self) -> Option<i64>;

    fn status(&self) -> ItemStatus {
        ItemStatus::from_holder(self.holder_id())
    }

    fn is_borrowed(&self) -> bool {
        self.holder_id().is_some()
    }
}
