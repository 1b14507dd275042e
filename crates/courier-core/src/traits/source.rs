// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only recipient source (spreadsheet export, in-memory fixture).

use async_trait::async_trait;

use crate::error::CourierError;
use crate::types::RawRecord;

/// Supplies the ordered recipient rows for one run.
///
/// Called exactly once per run. Implementations never write status back.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable location of the source, used in the connection log.
    fn describe(&self) -> String;

    /// Read every row, in source order.
    async fn fetch(&self) -> Result<Vec<RawRecord>, CourierError>;
}
