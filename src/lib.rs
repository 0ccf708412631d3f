//! Core library surface for the course-catalog command-line utility.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the tests can reuse the same pieces: the pure
//! catalog generator, the store boundary, and the interactive search loop.
pub mod catalog;
pub mod db;
pub mod models;
pub mod ui;

/// Convenience re-exports for the generator and persistence layer. These are
/// what `main.rs` uses to wire the three command modes together.
pub use catalog::{generate_catalog, seed_catalog};
pub use db::{CourseStore, SqliteStore};

/// The sole domain type that other layers manipulate.
pub use models::CourseRecord;

/// The interactive search entry point.
pub use ui::run_search_loop;
