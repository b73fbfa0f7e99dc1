use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct ReturnItemCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnItemCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub struct ReturnItemCommandRequest {
    pub item_id: i64,
}

impl ReturnItemCommandRequest {
    pub fn new(item_id: i64) -> Self {
        Self {
            item_id,
        }
    }
}

#[derive(Debug)]
pub struct ReturnItemCommandResponse {
    pub checkout: CheckoutDto,
}

impl ReturnItemCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }

    pub fn message(&self) -> String {
        "Item returned.".to_string()
    }
}

impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand {
    fn execute(&self, req: ReturnItemCommandRequest) -> LibraryResult<ReturnItemCommandResponse> {
        self.checkout_service.returned(req.item_id).map(ReturnItemCommandResponse::new)
    }
}
