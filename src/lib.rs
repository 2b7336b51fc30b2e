pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;

pub use config::Config;
pub use db::create_pool;
pub use error::AppError;
