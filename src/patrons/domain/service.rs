use std::collections::HashMap;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;

pub(crate) struct PatronServiceImpl {
    branch_id: String,
    patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl PatronServiceImpl {
    pub(crate) fn new(config: &Configuration, patron_repository: Box<dyn PatronRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        PatronServiceImpl {
            branch_id: config.branch_id.to_string(),
            patron_repository,
            events_publisher,
        }
    }
}

impl PatronService for PatronServiceImpl {
    fn register_patron(&self, name: &str) -> LibraryResult<PatronDto> {
        let patron = PatronEntity::new(self.patron_repository.next_id(), name);
        self.patron_repository.create(&patron)?;
        let dto = PatronDto::from(&patron);
        self.events_publisher.publish(&DomainEvent::added(
            "patron_registered", "patrons", dto.patron_id,
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &dto)?)?;
        tracing::debug!(patron_id = dto.patron_id, "registered patron");
        Ok(dto)
    }

    fn find_patron_by_id(&self, id: i64) -> LibraryResult<PatronDto> {
        self.patron_repository.get(id).map(|p| PatronDto::from(&p))
    }

    fn list_patrons(&self) -> LibraryResult<Vec<PatronDto>> {
        let res = self.patron_repository.list()?;
        Ok(res.iter().map(PatronDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::journal::EventJournal;
    use crate::patrons::domain::PatronService;
    use crate::patrons::factory;

    fn build_service(journal: &EventJournal) -> Box<dyn PatronService> {
        let store = RepositoryStore::new(GatewayPublisherVia::Journal(journal.clone()));
        factory::create_patron_service(&Configuration::new("test"), &store)
    }

    #[test]
    fn test_should_register_patron() {
        let journal = EventJournal::default();
        let patron_svc = build_service(&journal);

        let patron = patron_svc.register_patron("Alice Smith").expect("should register patron");
        assert_eq!(1, patron.patron_id);

        let loaded = patron_svc.find_patron_by_id(patron.patron_id).expect("should return patron");
        assert_eq!("Alice Smith", loaded.name.as_str());
        assert_eq!(vec!["patron_registered"], journal.names());
    }

    #[test]
    fn test_should_assign_sequential_ids() {
        let patron_svc = build_service(&EventJournal::default());
        let ids: Vec<i64> = ["a", "b", "c"].iter()
            .map(|name| patron_svc.register_patron(name).expect("should register patron").patron_id)
            .collect();
        assert_eq!(vec![1, 2, 3], ids);
    }

    #[test]
    fn test_should_accept_empty_name() {
        let patron_svc = build_service(&EventJournal::default());
        let patron = patron_svc.register_patron("").expect("should register patron");
        assert_eq!("", patron.name.as_str());
    }

    #[test]
    fn test_should_not_find_unknown_patron() {
        let patron_svc = build_service(&EventJournal::default());
        let res = patron_svc.find_patron_by_id(99);
        assert!(matches!(res, Err(LibraryError::PatronNotFound { patron_id: 99 })));
    }

    #[test]
    fn test_should_list_patrons_in_order() {
        let patron_svc = build_service(&EventJournal::default());
        assert!(patron_svc.list_patrons().expect("should list").is_empty());
        patron_svc.register_patron("Alice").expect("should register patron");
        patron_svc.register_patron("Bob").expect("should register patron");
        let names: Vec<String> = patron_svc.list_patrons().expect("should list").into_iter().map(|p| p.name).collect();
        assert_eq!(vec!["Alice", "Bob"], names);
    }
}
