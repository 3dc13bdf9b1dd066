// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for alert presentation.
//!
//! Every queue and presentation decision the controller makes is recorded as
//! a [`DiagnosticEvent`] and sent through a [`DiagnosticsHandle`] to a
//! [`DiagnosticsCollector`], which keeps the most recent events in a
//! memory-bounded ring and can export them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped alert lifecycle or warning event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-fed collector
//! - [`DiagnosticReport`]: serializable export format

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AlertSummary, AlertTransition, DiagnosticEvent, DiagnosticEventKind, WarningEvent,
    WarningType,
};
pub use export::{DiagnosticReport, SerializableEvent};
