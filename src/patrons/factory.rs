use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::patrons::repository::PatronRepository;
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;

pub fn create_patron_repository(store: &RepositoryStore) -> Box<dyn PatronRepository> {
    Box::new(MemoryPatronRepository::new(store.patrons.clone()))
}

pub fn create_patron_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn PatronService> {
    let patron_repo = create_patron_repository(store);
    let publisher = create_publisher(config, &store.publisher);
    Box::new(PatronServiceImpl::new(config, patron_repo, publisher))
}
