//! Database module: models, schema and the user store.
//!
//! Layout:
//! - `models.rs`: domain structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `query.rs`: per-operation SQL templates and bound arguments
//! - `sqlite.rs`: `UserStore`, CRUD over a SQLite pool

pub mod models;
pub mod query;
pub mod schema;
pub mod sqlite;

pub use models::{Comment, User};
pub use query::{Operation, PreparedQuery, QueryArg, prepare_query};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, UserStore};
