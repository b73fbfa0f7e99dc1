use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::items::factory::create_item_repository;
use crate::patrons::factory::create_patron_repository;

pub fn create_checkout_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn CheckoutService> {
    let item_repo = create_item_repository(store);
    let patron_repo = create_patron_repository(store);
    let publisher = create_publisher(config, &store.publisher);
    Box::new(CheckoutServiceImpl::new(config, item_repo, patron_repo, publisher))
}
