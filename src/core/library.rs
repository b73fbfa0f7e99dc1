use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    InvalidMenuSelection {
        selection: i64,
    },
    InvalidItemType {
        selection: i64,
    },
    NonNumericInput {
        token: String,
    },
    ItemNotFound {
        item_id: i64,
    },
    PatronNotFound {
        patron_id: i64,
    },
    AlreadyCheckedOut {
        item_id: i64,
        holder_id: Option<i64>,
    },
    NotCurrentlyBorrowed {
        item_id: i64,
    },
    DuplicateKey {
        message: String,
    },
    // The caller attempted to update a record from an older read; another update
    // bumped the version in between.
    StaleVersion {
        message: String,
        expected: i64,
        actual: i64,
    },
    Serialization {
        message: String,
    },
    Io {
        message: String,
    },
}

impl LibraryError {
    pub fn invalid_menu_selection(selection: i64) -> LibraryError {
        LibraryError::InvalidMenuSelection { selection }
    }

    pub fn invalid_item_type(selection: i64) -> LibraryError {
        LibraryError::InvalidItemType { selection }
    }

    pub fn non_numeric_input(token: &str) -> LibraryError {
        LibraryError::NonNumericInput { token: token.to_string() }
    }

    pub fn item_not_found(item_id: i64) -> LibraryError {
        LibraryError::ItemNotFound { item_id }
    }

    pub fn patron_not_found(patron_id: i64) -> LibraryError {
        LibraryError::PatronNotFound { patron_id }
    }

    pub fn already_checked_out(item_id: i64, holder_id: Option<i64>) -> LibraryError {
        LibraryError::AlreadyCheckedOut { item_id, holder_id }
    }

    pub fn not_currently_borrowed(item_id: i64) -> LibraryError {
        LibraryError::NotCurrentlyBorrowed { item_id }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn stale_version(message: &str, expected: i64, actual: i64) -> LibraryError {
        LibraryError::StaleVersion { message: message.to_string(), expected, actual }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn io(message: &str) -> LibraryError {
        LibraryError::Io { message: message.to_string() }
    }

    // Operator errors are reported on the terminal and the desk keeps running;
    // anything else ends the session.
    pub fn recoverable(&self) -> bool {
        match self {
            LibraryError::InvalidMenuSelection { .. } => { true }
            LibraryError::InvalidItemType { .. } => { true }
            LibraryError::NonNumericInput { .. } => { true }
            LibraryError::ItemNotFound { .. } => { true }
            LibraryError::PatronNotFound { .. } => { true }
            LibraryError::AlreadyCheckedOut { .. } => { true }
            LibraryError::NotCurrentlyBorrowed { .. } => { true }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::StaleVersion { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Io { .. } => { false }
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(
            format!("terminal io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json encoding {:?}", err).as_str())
    }
}

// The display text of operator errors is exactly what the desk prints after the
// [ERROR] prefix.
impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidMenuSelection { .. } => {
                write!(f, "Invalid selection.")
            }
            LibraryError::InvalidItemType { .. } => {
                write!(f, "Invalid Type.")
            }
            LibraryError::NonNumericInput { .. } => {
                write!(f, "Please enter a number.")
            }
            LibraryError::ItemNotFound { .. } => {
                write!(f, "Item not found.")
            }
            LibraryError::PatronNotFound { .. } => {
                write!(f, "Patron not found.")
            }
            LibraryError::AlreadyCheckedOut { .. } => {
                write!(f, "Item is already checked out.")
            }
            LibraryError::NotCurrentlyBorrowed { .. } => {
                write!(f, "Item is not currently borrowed.")
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::StaleVersion { message, expected, actual } => {
                write!(f, "{} (expected version {}, found {})", message, expected, actual)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Io { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for the library desk.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemStatus {
    Available,
    CheckedOut,
}

impl ItemStatus {
    pub fn from_holder(holder_id: Option<i64>) -> Self {
        match holder_id {
            Some(_) => ItemStatus::CheckedOut,
            None => ItemStatus::Available,
        }
    }
}

// Rendered the way the inventory listing shows it.
impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => f.pad("IN"),
            ItemStatus::CheckedOut => f.pad("OUT"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemKind {
    Book,
    Dvd,
}

impl TryFrom<i64> for ItemKind {
    type Error = LibraryError;

    // Menu selector used by the add item prompt.
    fn try_from(selection: i64) -> LibraryResult<Self> {
        match selection {
            1 => Ok(ItemKind::Book),
            2 => Ok(ItemKind::Dvd),
            _ => Err(LibraryError::invalid_item_type(selection)),
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemKind::Book => f.pad("BOOK"),
            ItemKind::Dvd => f.pad("DVD"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CheckoutStatus {
    CheckedOut,
    Returned,
}

impl Display for CheckoutStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CheckoutStatus::CheckedOut => write!(f, "CheckedOut"),
            CheckoutStatus::Returned => write!(f, "Returned"),
        }
    }
}
