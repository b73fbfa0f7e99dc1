pub mod date;
pub mod logger;
