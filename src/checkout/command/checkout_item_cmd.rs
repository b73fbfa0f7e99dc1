use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct CheckoutItemCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutItemCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }

    // Lets the desk reject an unknown or borrowed item before it asks for a patron.
    pub fn precheck(&self, item_id: i64) -> LibraryResult<()> {
        self.checkout_service.ensure_available(item_id)
    }
}

#[derive(Debug)]
pub struct CheckoutItemCommandRequest {
    pub item_id: i64,
    pub patron_id: i64,
}

impl CheckoutItemCommandRequest {
    pub fn new(item_id: i64, patron_id: i64) -> Self {
        Self {
            item_id,
            patron_id,
        }
    }
}

#[derive(Debug)]
pub struct CheckoutItemCommandResponse {
    pub checkout: CheckoutDto,
}

impl CheckoutItemCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }

    pub fn message(&self) -> String {
        format!("{} borrowed {}", self.checkout.patron_name, self.checkout.title)
    }
}

impl Command<CheckoutItemCommandRequest, CheckoutItemCommandResponse> for CheckoutItemCommand {
    fn execute(&self, req: CheckoutItemCommandRequest) -> LibraryResult<CheckoutItemCommandResponse> {
        self.checkout_service.checkout(req.item_id, req.patron_id).map(CheckoutItemCommandResponse::new)
    }
}
