use std::io::{BufRead, Write};
use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use crate::catalog::command::list_items_cmd::ListItemsCommand;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::command::checkout_item_cmd::{CheckoutItemCommand, CheckoutItemCommandRequest};
use crate::checkout::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use crate::checkout::factory::create_checkout_service;
use crate::core::command::Command;
use crate::core::domain::Configuration;
use crate::core::library::{ItemKind, LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;
use crate::desk::scanner::TokenScanner;
use crate::patrons::command::list_patrons_cmd::ListPatronsCommand;
use crate::patrons::command::register_patron_cmd::{RegisterPatronCommand, RegisterPatronCommandRequest};
use crate::patrons::factory::create_patron_service;
use crate::utils::logger::Logger;

const BANNER: &str = "=== Advanced Library System ===";

const MENU: &str = "\n--- MENU ---\n\
1. List Inventory\n\
2. List Patrons\n\
3. Add Item (Book/DVD)\n\
4. Register Patron\n\
5. Checkout Item\n\
6. Return Item\n\
7. Exit\n\
Choice: ";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DeskState {
    Running,
    Stopped,
}

/// Interactive circulation desk: renders the menu, reads the operator's
/// answers and dispatches each choice to a command.
///
/// Operator mistakes are reported as one `[ERROR]` line and the menu comes
/// back; any other failure ends [`Desk::run`] with the error.
pub struct Desk<R, W> {
    config: Configuration,
    store: RepositoryStore,
    input: TokenScanner<R>,
    out: W,
}

impl<R: BufRead, W: Write> Desk<R, W> {
    pub fn new(config: &Configuration, store: &RepositoryStore, input: R, out: W) -> Self {
        Self {
            config: config.clone(),
            store: store.clone(),
            input: TokenScanner::new(input),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        writeln!(self.out, "{}", BANNER)?;
        let mut state = DeskState::Running;
        while state == DeskState::Running {
            self.prompt(MENU)?;
            state = match self.read_int()? {
                Some(choice) => self.dispatch(choice)?,
                None => self.shutdown()?,
            };
        }
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: i64) -> LibraryResult<DeskState> {
        tracing::debug!(choice, "menu selection");
        let res = match choice {
            1 => self.list_items(),
            2 => self.list_patrons(),
            3 => self.add_item(),
            4 => self.register_patron(),
            5 => self.checkout_item(),
            6 => self.return_item(),
            7 => self.shutdown(),
            _ => Err(LibraryError::invalid_menu_selection(choice)),
        };
        match res {
            Err(err) if err.recoverable() => {
                tracing::debug!(choice, error = ?err, "rejected operator request");
                Logger::log_error(&mut self.out, err.to_string().as_str())?;
                Ok(DeskState::Running)
            }
            other => other,
        }
    }

    fn list_items(&mut self) -> LibraryResult<DeskState> {
        let res = ListItemsCommand::new(create_catalog_service(&self.config, &self.store)).execute(())?;
        if res.items.is_empty() {
            Logger::log_info(&mut self.out, "Inventory is empty.")?;
        }
        for item in res.items {
            writeln!(self.out, "{}", item)?;
        }
        Ok(DeskState::Running)
    }

    fn list_patrons(&mut self) -> LibraryResult<DeskState> {
        let res = ListPatronsCommand::new(create_patron_service(&self.config, &self.store)).execute(())?;
        if res.patrons.is_empty() {
            Logger::log_info(&mut self.out, "No registered patrons.")?;
        }
        for patron in res.patrons {
            writeln!(self.out, "{}", patron)?;
        }
        Ok(DeskState::Running)
    }

    // The title is consumed before the type is judged, so a bad type still
    // swallows one token.
    fn add_item(&mut self) -> LibraryResult<DeskState> {
        self.prompt("Enter type (1 for Book, 2 for DVD): ")?;
        let Some(selection) = self.read_int()? else { return self.shutdown() };
        self.prompt("Enter Title: ")?;
        let Some(title) = self.input.next_token()? else { return self.shutdown() };

        let req = match ItemKind::try_from(selection)? {
            ItemKind::Book => {
                self.prompt("Enter Author: ")?;
                let Some(author) = self.input.next_token()? else { return self.shutdown() };
                AddItemCommandRequest::book(title.as_str(), author.as_str())
            }
            ItemKind::Dvd => {
                self.prompt("Enter Duration (mins): ")?;
                let Some(duration_minutes) = self.read_int()? else { return self.shutdown() };
                AddItemCommandRequest::dvd(title.as_str(), duration_minutes)
            }
        };
        let res = AddItemCommand::new(create_catalog_service(&self.config, &self.store)).execute(req)?;
        Logger::log_success(&mut self.out, res.message().as_str())?;
        Ok(DeskState::Running)
    }

    fn register_patron(&mut self) -> LibraryResult<DeskState> {
        self.prompt("Enter Patron Name: ")?;
        let Some(name) = self.input.next_token()? else { return self.shutdown() };
        let res = RegisterPatronCommand::new(create_patron_service(&self.config, &self.store))
            .execute(RegisterPatronCommandRequest::new(name.as_str()))?;
        Logger::log_success(&mut self.out, res.message().as_str())?;
        Ok(DeskState::Running)
    }

    fn checkout_item(&mut self) -> LibraryResult<DeskState> {
        self.prompt("Enter Item ID: ")?;
        let Some(item_id) = self.read_int()? else { return self.shutdown() };
        let cmd = CheckoutItemCommand::new(create_checkout_service(&self.config, &self.store));
        cmd.precheck(item_id)?;
        self.prompt("Enter Patron ID: ")?;
        let Some(patron_id) = self.read_int()? else { return self.shutdown() };
        let res = cmd.execute(CheckoutItemCommandRequest::new(item_id, patron_id))?;
        Logger::log_success(&mut self.out, res.message().as_str())?;
        Ok(DeskState::Running)
    }

    fn return_item(&mut self) -> LibraryResult<DeskState> {
        self.prompt("Enter Item ID: ")?;
        let Some(item_id) = self.read_int()? else { return self.shutdown() };
        let res = ReturnItemCommand::new(create_checkout_service(&self.config, &self.store))
            .execute(ReturnItemCommandRequest::new(item_id))?;
        Logger::log_success(&mut self.out, res.message().as_str())?;
        Ok(DeskState::Running)
    }

    fn shutdown(&mut self) -> LibraryResult<DeskState> {
        Logger::log_info(&mut self.out, "System shutting down...")?;
        Ok(DeskState::Stopped)
    }

    fn prompt(&mut self, text: &str) -> LibraryResult<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    // Discards tokens until one parses as a 32-bit integer. None once the
    // input is exhausted.
    fn read_int(&mut self) -> LibraryResult<Option<i64>> {
        while let Some(token) = self.input.next_token()? {
            match token.parse::<i32>() {
                Ok(value) => return Ok(Some(i64::from(value))),
                Err(_) => {
                    let err = LibraryError::non_numeric_input(token.as_str());
                    Logger::log_error(&mut self.out, err.to_string().as_str())?;
                }
            }
        }
        Ok(None)
    }
}
