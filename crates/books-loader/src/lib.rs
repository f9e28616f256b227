//! Bulk loader for the `books` table.
//!
//! Opens one PostgreSQL connection, inserts a million generated books in a
//! single transaction, commits once, and closes the connection on every exit
//! path.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use books_loader::prelude::*;
//!
//! let connector = PgConnector::from_config(&ConnectionConfig::from_env()?)?;
//! let summary = run(&connector, LoadConfig::default()).await?;
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConnectionConfig, LoadConfig};
    pub use crate::db::{
        BookStore, Connector, LoadSummary, PgBookStore, PgConnector, load_books, run,
        with_connection,
    };
    pub use crate::errors::LoadError;
    pub use crate::generators::{BookGenerator, BookRow};
}
