//! Scoped connection acquisition.
//!
//! [`with_connection`] opens one connection, lends it to a body, and closes it
//! once the body has finished, whichever way it finished.

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::errors::LoadError;
use crate::generators::BookRow;

/// An open connection that can receive books inside a transaction.
#[async_trait]
pub trait BookStore: Send {
    /// Opens the transaction that the following inserts run in.
    async fn begin(&mut self) -> Result<(), sqlx::Error>;

    /// Inserts one book with its values bound as statement parameters.
    async fn insert_book(&mut self, book: &BookRow) -> Result<(), sqlx::Error>;

    /// Commits the open transaction.
    async fn commit(&mut self) -> Result<(), sqlx::Error>;

    /// Releases the connection. Any transaction still open is discarded by the
    /// server.
    async fn close(self) -> Result<(), sqlx::Error>
    where
        Self: Sized;
}

/// Source of [`BookStore`] connections.
#[async_trait]
pub trait Connector: Send + Sync {
    type Store: BookStore;

    async fn connect(&self) -> Result<Self::Store, sqlx::Error>;
}

/// Runs `body` against a freshly opened connection and closes it afterwards.
///
/// The connection is closed exactly once, on success and on failure. If both
/// `body` and the close fail, the error from `body` is returned. A panic in
/// `body` drops the connection, which shuts the socket.
///
/// ```rust,ignore
/// let summary = with_connection(&connector, move |store| {
///     Box::pin(load_books(store, config))
/// })
/// .await?;
/// ```
pub async fn with_connection<C, T, F>(connector: &C, body: F) -> Result<T, LoadError>
where
    C: Connector,
    F: for<'s> FnOnce(&'s mut C::Store) -> BoxFuture<'s, Result<T, LoadError>>,
{
    let mut store = connector.connect().await.map_err(LoadError::Connect)?;

    let outcome = body(&mut store).await;
    let closed = store.close().await;

    match (outcome, closed) {
        (Ok(value), Ok(())) => {
            debug!("Connection closed");
            Ok(value)
        }
        (Ok(_), Err(e)) => Err(LoadError::Close(e)),
        (Err(e), Ok(())) => {
            debug!("Connection closed after failure");
            Err(e)
        }
        (Err(e), Err(close_error)) => {
            warn!(error = %close_error, "Failed to close connection after failure");
            Err(e)
        }
    }
}
