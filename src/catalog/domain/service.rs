use std::collections::HashMap;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::items::domain::model::{ItemDetails, ItemEntity};
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;
use crate::patrons::repository::PatronRepository;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    item_repository: Box<dyn ItemRepository>,
    patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
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

    fn to_dto(&self, item: &ItemEntity) -> LibraryResult<ItemDto> {
        let holder_name = match item.holder_id {
            Some(patron_id) => Some(self.patron_repository.get(patron_id)?.name),
            None => None,
        };
        Ok(ItemDto::from_entity(item, holder_name))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_item(&self, title: &str, details: ItemDetails) -> LibraryResult<ItemDto> {
        let item = ItemEntity::new(self.item_repository.next_id(), title, details);
        self.item_repository.create(&item)?;
        let dto = ItemDto::from_entity(&item, None);
        self.events_publisher.publish(&DomainEvent::added(
            "item_added", "catalog", dto.item_id,
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &dto)?)?;
        tracing::debug!(item_id = dto.item_id, kind = %item.details.kind(), "added item");
        Ok(dto)
    }

    fn find_item_by_id(&self, id: i64) -> LibraryResult<ItemDto> {
        let item = self.item_repository.get(id)?;
        self.to_dto(&item)
    }

    fn list_items(&self) -> LibraryResult<Vec<ItemDto>> {
        self.item_repository.list()?.iter().map(|item| self.to_dto(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{ItemKind, ItemStatus, LibraryError};
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::journal::EventJournal;
    use crate::items::domain::LibraryItem;
    use crate::items::domain::model::ItemDetails;
    use crate::patrons::factory::create_patron_service;

    #[test]
    fn test_should_add_book_and_dvd() {
        let journal = EventJournal::default();
        let store = RepositoryStore::new(GatewayPublisherVia::Journal(journal.clone()));
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"), &store);

        let book = catalog_svc.add_book("Dune", "Herbert").expect("should add book");
        let dvd = catalog_svc.add_dvd("Alien", 117).expect("should add dvd");
        assert_eq!(1, book.item_id);
        assert_eq!(ItemKind::Book, book.kind());
        assert_eq!(2, dvd.item_id);
        assert_eq!(ItemDetails::Dvd { duration_minutes: 117 }, dvd.details);
        assert_eq!(vec!["item_added", "item_added"], journal.names());
    }

    #[test]
    fn test_should_accept_lenient_values() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::default());
        let book = catalog_svc.add_book("", "").expect("should add book");
        let dvd = catalog_svc.add_dvd("Short", -5).expect("should add dvd");
        assert_eq!("", book.title.as_str());
        assert_eq!(ItemDetails::Dvd { duration_minutes: -5 }, dvd.details);
    }

    #[test]
    fn test_should_find_item_by_id() {
        let catalog_svc = factory::create_catalog_service(&Configuration::new("test"), &RepositoryStore::default());
        catalog_svc.add_book("Dune", "Herbert").expect("should add book");
        let loaded = catalog_svc.find_item_by_id(1).expect("should return item");
        assert_eq!("Dune", loaded.title());
        assert_eq!(ItemStatus::Available, loaded.status());
        assert!(matches!(catalog_svc.find_item_by_id(2), Err(LibraryError::ItemNotFound { item_id: 2 })));
    }

    #[test]
    fn test_should_list_items_with_holder_names() {
        let store = RepositoryStore::default();
        let config = Configuration::new("test");
        let catalog_svc = factory::create_catalog_service(&config, &store);
        assert!(catalog_svc.list_items().expect("should list").is_empty());

        let patron = create_patron_service(&config, &store).register_patron("Alice Smith").expect("should register");
        catalog_svc.add_book("Dune", "Herbert").expect("should add book");
        let mut item = store.items.find(1).expect("stored item");
        item.check_out(patron.patron_id);
        store.items.replace(&item).expect("should replace");

        let items = catalog_svc.list_items().expect("should list");
        assert_eq!(1, items.len());
        assert_eq!(Some("Alice Smith".to_string()), items[0].holder_name);
    }

    #[test]
    fn test_should_keep_item_ids_independent_of_patrons() {
        let store = RepositoryStore::default();
        let config = Configuration::new("test");
        let catalog_svc = factory::create_catalog_service(&config, &store);
        let patron_svc = create_patron_service(&config, &store);
        patron_svc.register_patron("a").expect("should register");
        patron_svc.register_patron("b").expect("should register");
        let item = catalog_svc.add_book("Dune", "Herbert").expect("should add book");
        assert_eq!(1, item.item_id);
    }

    proptest! {
        // Property: item ids run 1..N in call order whatever patron
        // registrations happen in between.
        #[test]
        fn item_ids_are_sequential(ops in proptest::collection::vec(any::<bool>(), 0..30)) {
            let store = RepositoryStore::default();
            let config = Configuration::new("test");
            let catalog_svc = factory::create_catalog_service(&config, &store);
            let patron_svc = create_patron_service(&config, &store);
            let mut item_ids = Vec::new();
            let mut patron_ids = Vec::new();
            for add_item in ops {
                if add_item {
                    item_ids.push(catalog_svc.add_dvd("Alien", 117).expect("should add dvd").item_id);
                } else {
                    patron_ids.push(patron_svc.register_patron("Bob").expect("should register").patron_id);
                }
            }
            prop_assert_eq!((1..=item_ids.len() as i64).collect::<Vec<_>>(), item_ids);
            prop_assert_eq!((1..=patron_ids.len() as i64).collect::<Vec<_>>(), patron_ids);
        }
    }
}
