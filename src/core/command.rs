use crate::core::library::LibraryResult;

// Command is a single operator action at the desk, taking a request built from
// terminal input and producing a response to report.
pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> LibraryResult<Response>;
}
