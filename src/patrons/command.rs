pub mod list_patrons_cmd;
pub mod register_patron_cmd;
