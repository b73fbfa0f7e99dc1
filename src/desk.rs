pub mod controller;
pub mod scanner;
pub mod seed;
