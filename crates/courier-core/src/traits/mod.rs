// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits at the edges of the dispatch pipeline.
//!
//! The async traits use `#[async_trait]` so they can be held as `Arc<dyn _>`.

pub mod clock;
pub mod source;
pub mod transport;

pub use clock::{Clock, SystemClock};
pub use source::RecordSource;
pub use transport::MailTransport;
