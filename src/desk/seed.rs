use crate::catalog::factory::create_catalog_service;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::patrons::factory::create_patron_service;

// Stocks a fresh store with the sample shelf every new desk starts from.
pub fn seed_sample_data(config: &Configuration, store: &RepositoryStore) -> LibraryResult<()> {
    let catalog_svc = create_catalog_service(config, store);
    catalog_svc.add_book("The Hobbit", "Tolkien")?;
    catalog_svc.add_dvd("Inception", 148)?;
    create_patron_service(config, store).register_patron("Alice Smith")?;
    tracing::debug!(branch_id = %config.branch_id, "seeded sample data");
    Ok(())
}
