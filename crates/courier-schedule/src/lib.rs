// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduling half of the Courier pipeline.
//!
//! - [`RowValidator`] turns a raw row into a [`ScheduledMessage`] or a
//!   rejection reason.
//! - [`TimeResolver`] maps the row's wall-clock send time to a UTC instant.
//! - [`DispatchWaiter`] holds the run until that instant arrives.

pub mod message;
pub mod resolver;
pub mod validator;
pub mod waiter;

pub use message::ScheduledMessage;
pub use resolver::TimeResolver;
pub use validator::{RowValidator, SEND_TIME_FORMAT, is_valid_email, parse_send_time};
pub use waiter::{DEFAULT_POLL_INTERVAL, DispatchWaiter, WaitOutcome};
