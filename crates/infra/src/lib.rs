pub mod db;
pub mod error;
pub mod models;
pub mod repos;
pub mod seed;

pub use db::Db;
pub use error::{StoreError, StoreResult};
