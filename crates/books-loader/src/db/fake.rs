//! In-memory connector that records every call, for unit tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::scope::{BookStore, Connector};
use crate::generators::BookRow;

#[derive(Debug, Default)]
pub struct FakeLog {
    pub connects: usize,
    pub begins: usize,
    pub commits: usize,
    pub closes: usize,
    /// Rows inserted since the last begin, not yet committed.
    pub pending: Vec<BookRow>,
    /// Rows made visible by a commit.
    pub committed: Vec<BookRow>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeConnector {
    pub fail_connect: bool,
    /// 1-based insert call that fails.
    pub fail_insert_at: Option<u64>,
    pub fail_commit: bool,
    pub fail_close: bool,
    pub(crate) shared: Arc<Mutex<FakeLog>>,
}

impl FakeConnector {
    pub fn log(&self) -> MutexGuard<'_, FakeLog> {
        self.shared.lock().unwrap()
    }
}

pub struct FakeStore {
    connector: FakeConnector,
    inserts: u64,
}

impl FakeStore {
    /// Insert calls made on this connection, failed ones included.
    pub fn inserts(&self) -> u64 {
        self.inserts
    }
}

fn injected(what: &str) -> sqlx::Error {
    sqlx::Error::Protocol(format!("injected {what} failure"))
}

#[async_trait]
impl Connector for FakeConnector {
    type Store = FakeStore;

    async fn connect(&self) -> Result<FakeStore, sqlx::Error> {
        self.log().connects += 1;
        if self.fail_connect {
            return Err(injected("connect"));
        }
        Ok(FakeStore {
            connector: self.clone(),
            inserts: 0,
        })
    }
}

#[async_trait]
impl BookStore for FakeStore {
    async fn begin(&mut self) -> Result<(), sqlx::Error> {
        let mut log = self.connector.log();
        log.begins += 1;
        log.pending.clear();
        Ok(())
    }

    async fn insert_book(&mut self, book: &BookRow) -> Result<(), sqlx::Error> {
        self.inserts += 1;
        if self.connector.fail_insert_at == Some(self.inserts) {
            return Err(injected("insert"));
        }
        self.connector.log().pending.push(book.clone());
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), sqlx::Error> {
        if self.connector.fail_commit {
            return Err(injected("commit"));
        }
        let mut log = self.connector.log();
        log.commits += 1;
        let pending = std::mem::take(&mut log.pending);
        log.committed.extend(pending);
        Ok(())
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        let mut log = self.connector.log();
        log.closes += 1;
        // Server side rollback of whatever was left open.
        log.pending.clear();
        if self.connector.fail_close {
            return Err(injected("close"));
        }
        Ok(())
    }
}
