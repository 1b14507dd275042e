// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Courier integration tests.
//!
//! Deterministic stand-ins for every collaborator, so the pipeline can be
//! driven end to end without a mail server, a spreadsheet, or real waiting.
//!
//! # Components
//!
//! - [`MockTransport`] - scripted SMTP outcomes with captured messages
//! - [`VecSource`] - in-memory recipient rows
//! - [`PausedClock`] - wall clock driven by tokio's paused time

pub mod clock;
pub mod fixtures;
pub mod mock_source;
pub mod mock_transport;

pub use clock::PausedClock;
pub use fixtures::recipient;
pub use mock_source::VecSource;
pub use mock_transport::MockTransport;
