//! PostgreSQL implementation of the store traits.

use async_trait::async_trait;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use tracing::info;

use super::scope::{BookStore, Connector};
use crate::config::ConnectionConfig;
use crate::errors::LoadError;
use crate::generators::BookRow;

const INSERT_BOOK: &str = "INSERT INTO books (title, author, year) VALUES ($1, $2, $3)";

/// Opens single, unpooled connections to PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgConnector {
    options: PgConnectOptions,
}

impl PgConnector {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &ConnectionConfig) -> Result<Self, LoadError> {
        Ok(Self::new(config.connect_options()?))
    }
}

#[async_trait]
impl Connector for PgConnector {
    type Store = PgBookStore;

    async fn connect(&self) -> Result<PgBookStore, sqlx::Error> {
        info!(
            host = self.options.get_host(),
            port = self.options.get_port(),
            database = self.options.get_database().unwrap_or_default(),
            "Connecting to database"
        );

        let conn = PgConnection::connect_with(&self.options).await?;

        info!("Connected to database");
        Ok(PgBookStore { conn })
    }
}

/// A live connection that writes into the `books` table.
pub struct PgBookStore {
    conn: PgConnection,
}

impl PgBookStore {
    /// Direct access to the underlying connection.
    pub fn connection_mut(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn begin(&mut self) -> Result<(), sqlx::Error> {
        sqlx::query("BEGIN").execute(&mut self.conn).await?;
        Ok(())
    }

    async fn insert_book(&mut self, book: &BookRow) -> Result<(), sqlx::Error> {
        sqlx::query(INSERT_BOOK)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year)
            .execute(&mut self.conn)
            .await?;

        Ok(())
    }

    async fn commit(&mut self) -> Result<(), sqlx::Error> {
        sqlx::query("COMMIT").execute(&mut self.conn).await?;
        Ok(())
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        self.conn.close().await
    }
}
