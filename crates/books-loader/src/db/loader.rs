//! Single-transaction bulk insert of generated books.

use std::time::{Duration, Instant};

use tracing::info;

use super::scope::{BookStore, Connector, with_connection};
use crate::config::LoadConfig;
use crate::errors::LoadError;
use crate::generators::BookGenerator;

/// Outcome of a committed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_inserted: u64,
    pub elapsed: Duration,
}

/// Inserts `config.row_count` books one statement at a time and commits once.
///
/// All inserts share one transaction. The first failing insert aborts the run
/// and nothing from it becomes visible; no rollback is issued here, the
/// transaction is discarded when the connection closes.
pub async fn load_books<S>(store: &mut S, config: LoadConfig) -> Result<LoadSummary, LoadError>
where
    S: BookStore,
{
    let started = Instant::now();
    info!("Loading {} books...", config.row_count);

    store.begin().await.map_err(LoadError::Begin)?;

    let mut rows_inserted = 0;
    for (row, book) in BookGenerator::new(&config) {
        store
            .insert_book(&book)
            .await
            .map_err(|source| LoadError::Insert { row, source })?;
        rows_inserted = row;
    }

    store.commit().await.map_err(LoadError::Commit)?;

    let summary = LoadSummary {
        rows_inserted,
        elapsed: started.elapsed(),
    };
    info!(
        "Loaded {} books in {:.1}s",
        summary.rows_inserted,
        summary.elapsed.as_secs_f64()
    );

    Ok(summary)
}

/// Opens a connection, loads the books, and closes the connection.
pub async fn run<C>(connector: &C, config: LoadConfig) -> Result<LoadSummary, LoadError>
where
    C: Connector,
{
    with_connection(connector, move |store| Box::pin(load_books(store, config))).await
}
