pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

pub use db::Db;
pub use error::Error;
