use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::items::factory::create_item_repository;
use crate::patrons::factory::create_patron_repository;

pub fn create_catalog_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn CatalogService> {
    let item_repo = create_item_repository(store);
    let patron_repo = create_patron_repository(store);
    let publisher = create_publisher(config, &store.publisher);
    Box::new(CatalogServiceImpl::new(config, item_repo, patron_repo, publisher))
}
