//! Database access for the bulk load.
//!
//! [`with_connection`] owns the connection for the duration of a load and
//! [`load_books`] writes the generated rows through a [`BookStore`].

mod loader;
mod postgres;
mod scope;

#[cfg(test)]
pub(crate) mod fake;

pub use loader::{LoadSummary, load_books, run};
pub use postgres::{PgBookStore, PgConnector};
pub use scope::{BookStore, Connector, with_connection};
