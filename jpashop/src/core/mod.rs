pub mod api;
pub mod database;
pub mod entities;
pub mod env;
pub mod types;
pub mod utils;
