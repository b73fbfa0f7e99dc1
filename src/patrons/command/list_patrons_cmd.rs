use crate::core::command::Command;
use crate::core::library::LibraryResult;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct ListPatronsCommand {
    patron_service: Box<dyn PatronService>,
}

impl ListPatronsCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug)]
pub struct ListPatronsCommandResponse {
    pub patrons: Vec<PatronDto>,
}

impl Command<(), ListPatronsCommandResponse> for ListPatronsCommand {
    fn execute(&self, _req: ()) -> LibraryResult<ListPatronsCommandResponse> {
        let patrons = self.patron_service.list_patrons()?;
        Ok(ListPatronsCommandResponse { patrons })
    }
}
