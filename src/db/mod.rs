//! Persistence boundary split across logical submodules.

mod connection;
mod courses;

pub use connection::open_connection;
pub use courses::{CourseStore, SqliteStore, StoreError};
