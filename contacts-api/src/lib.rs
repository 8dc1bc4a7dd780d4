pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod routes;
pub mod store;
pub mod views;

pub use database::Database;
pub use routes::Router;
