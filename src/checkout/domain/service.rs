use std::collections::HashMap;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;
use crate::patrons::repository::PatronRepository;

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    item_repository: Box<dyn ItemRepository>,
    patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(config: &Configuration, item_repository: Box<dyn ItemRepository>,
                      patron_repository: Box<dyn PatronRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            item_repository,
            patron_repository,
            events_publisher,
        }
    }

    fn find_available(&self, item_id: i64) -> LibraryResult<ItemEntity> {
        let item = self.item_repository.get(item_id)?;
        if item.is_borrowed() {
            return Err(LibraryError::already_checked_out(item_id, item.holder_id));
        }
        Ok(item)
    }

    fn build_event(&self, name: &str, checkout: &CheckoutDto) -> LibraryResult<DomainEvent> {
        Ok(DomainEvent::updated(
            name, "checkout", checkout.item_id,
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), checkout)?)
    }

    // Stores the changed item and publishes its event. When publishing fails
    // the stored item gets its previous fields back.
    fn commit(&self, original: &ItemEntity, changed: &ItemEntity, event: &DomainEvent) -> LibraryResult<()> {
        self.item_repository.update(changed)?;
        if let Err(err) = self.events_publisher.publish(event) {
            let mut restored = original.clone();
            restored.version = changed.version + 1;
            self.item_repository.update(&restored)?;
            tracing::warn!(item_id = original.item_id, error = ?err, "restored item after failed publish");
            return Err(err);
        }
        Ok(())
    }
}

impl CheckoutService for CheckoutServiceImpl {
    fn ensure_available(&self, item_id: i64) -> LibraryResult<()> {
        self.find_available(item_id).map(|_| ())
    }

    fn checkout(&self, item_id: i64, patron_id: i64) -> LibraryResult<CheckoutDto> {
        let original = self.find_available(item_id)?;
        let patron = self.patron_repository.get(patron_id)?;
        let mut item = original.clone();
        item.check_out(patron.patron_id);
        let checkout = CheckoutDto::from_patron_item(&patron, &item, CheckoutStatus::CheckedOut);
        let event = self.build_event("item_checkout", &checkout)?;
        self.commit(&original, &item, &event)?;
        tracing::debug!(item_id, patron_id, status = %checkout.checkout_status, "checked out item");
        Ok(checkout)
    }

    fn returned(&self, item_id: i64) -> LibraryResult<CheckoutDto> {
        let original = self.item_repository.get(item_id)?;
        let patron_id = original.holder_id.ok_or_else(|| LibraryError::not_currently_borrowed(item_id))?;
        let patron = self.patron_repository.get(patron_id)?;
        let mut item = original.clone();
        item.check_in();
        let checkout = CheckoutDto::from_patron_item(&patron, &item, CheckoutStatus::Returned);
        let event = self.build_event("item_returned", &checkout)?;
        self.commit(&original, &item, &event)?;
        tracing::debug!(item_id, patron_id, status = %checkout.checkout_status, "returned item");
        Ok(checkout)
    }
}
