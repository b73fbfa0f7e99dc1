use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct RegisterPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl RegisterPatronCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug)]
pub struct RegisterPatronCommandRequest {
    pub name: String,
}

impl RegisterPatronCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RegisterPatronCommandResponse {
    pub patron: PatronDto,
}

impl RegisterPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }

    pub fn message(&self) -> String {
        format!("Patron registered: {}", self.patron.name)
    }
}

impl Command<RegisterPatronCommandRequest, RegisterPatronCommandResponse> for RegisterPatronCommand {
    fn execute(&self, req: RegisterPatronCommandRequest) -> LibraryResult<RegisterPatronCommandResponse> {
        self.patron_service.register_patron(req.name.as_str()).map(RegisterPatronCommandResponse::new)
    }
}
