use serde::{Deserialize, Serialize};
use crate::core::library::CheckoutStatus;
use crate::items::domain::model::ItemEntity;
use crate::patrons::domain::model::PatronEntity;

// CheckoutDto describes one completed checkout or return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub item_id: i64,
    pub title: String,
    pub patron_id: i64,
    pub patron_name: String,
    pub checkout_status: CheckoutStatus,
}

impl CheckoutDto {
    pub fn from_patron_item(patron: &PatronEntity, item: &ItemEntity, checkout_status: CheckoutStatus) -> Self {
        CheckoutDto {
            item_id: item.item_id,
            title: item.title.to_string(),
            patron_id: patron.patron_id,
            patron_name: patron.name.to_string(),
            checkout_status,
        }
    }
}
