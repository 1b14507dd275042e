// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipient sheet read from a CSV export.
//!
//! The first line holds the column headers (`Name`, `Email`, `Group`,
//! `Send Time (IST)`, `Message`, and optionally `Subject`). Every later line is
//! one recipient. Values are passed through untouched; rows with fewer cells
//! than headers simply lack the trailing columns.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use courier_core::{CourierError, RawRecord, RecordSource};
use tracing::debug;

/// Reads every row of a CSV file once per fetch.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for CsvSource {
    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<RawRecord>, CourierError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CourierError::Source {
                message: format!("cannot open {}: {e}", self.path.display()),
                source: Some(Box::new(e)),
            })?;
        let records = parse_records(bytes.as_slice())?;
        debug!(path = %self.path.display(), rows = records.len(), "sheet read");
        Ok(records)
    }
}

/// Parse a header row followed by data rows, numbered from 1.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, CourierError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(source_error)?.clone();

    reader
        .records()
        .enumerate()
        .map(|(index, record)| {
            let record = record.map_err(source_error)?;
            let mut raw = RawRecord::new(index + 1);
            for (header, value) in headers.iter().zip(record.iter()) {
                raw.insert(header, value);
            }
            Ok(raw)
        })
        .collect()
}

fn source_error(e: csv::Error) -> CourierError {
    CourierError::Source {
        message: format!("malformed sheet: {e}"),
        source: Some(Box::new(e)),
    }
}
