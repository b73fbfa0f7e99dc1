pub mod catalog;
pub mod checkout;
pub mod core;
pub mod desk;
pub mod gateway;
pub mod items;
pub mod patrons;
pub mod utils;
