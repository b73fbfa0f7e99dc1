pub mod memory_item_repository;

use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;

pub trait ItemRepository: Repository<ItemEntity> {}
