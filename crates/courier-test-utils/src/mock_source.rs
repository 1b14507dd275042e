// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory recipient source.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use courier_core::{CourierError, RawRecord, RecordSource};

/// Serves a fixed list of rows, or fails every fetch.
pub struct VecSource {
    rows: Vec<RawRecord>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl VecSource {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self {
            rows,
            failure: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose `fetch` always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            failure: Some(message.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch` was called.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for VecSource {
    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }

    async fn fetch(&self) -> Result<Vec<RawRecord>, CourierError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(CourierError::Source {
                message: message.clone(),
                source: None,
            }),
            None => Ok(self.rows.clone()),
        }
    }
}
