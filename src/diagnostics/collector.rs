// SPDX-License-Identifier: MPL-2.0
//! Central collector for diagnostic events.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{write_report, DiagnosticReport};
use super::{
    AlertSummary, AlertTransition, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, WarningEvent, WarningType,
};
use crate::alert::AlertRequest;
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event is
/// dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle step for `alert`.
    pub fn log_alert(&self, transition: AlertTransition, alert: &AlertRequest) {
        self.send(DiagnosticEventKind::Alert {
            transition,
            alert: AlertSummary::from(alert),
        });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_warning_simple(&self, warning_type: WarningType, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(warning_type, message));
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Receives events from every [`DiagnosticsHandle`] and keeps the latest
/// ones in a circular buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves everything waiting in the channel into the buffer.
    ///
    /// Call this once per UI turn, or before reading events.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Stored alert lifecycle steps, oldest first.
    pub fn alert_transitions(&self) -> impl Iterator<Item = (AlertTransition, &AlertSummary)> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Alert { transition, alert } => Some((*transition, alert)),
            DiagnosticEventKind::Warning { .. } => None,
        })
    }

    /// Stored warnings, oldest first.
    pub fn warnings(&self) -> impl Iterator<Item = &WarningEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Warning { event } => Some(event),
            DiagnosticEventKind::Alert { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport::build(
            self.buffer.iter(),
            self.collection_started_at,
            self.collection_started_at_utc,
        )
    }

    /// Serializes the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`](crate::error::Error::Export) if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        write_report(path, &json)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("started_at", &self.collection_started_at_utc)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn collector() -> DiagnosticsCollector {
        DiagnosticsCollector::new(BufferCapacity::default())
    }

    #[test]
    fn events_arrive_after_process_pending() {
        let mut collector = collector();
        let handle = collector.handle();
        handle.log_alert(AlertTransition::Presented, &AlertRequest::titled("A"));

        assert!(collector.is_empty());
        collector.process_pending();
        assert_eq!(collector.len(), 1);

        let (transition, summary) = collector.alert_transitions().next().expect("one event");
        assert_eq!(transition, AlertTransition::Presented);
        assert_eq!(summary.title.as_deref(), Some("A"));
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let mut collector = collector();
        let first = collector.handle();
        let second = first.clone();
        first.log_warning_simple(WarningType::Other, "one");
        second.log_warning_simple(WarningType::NoHostAvailable, "two");

        collector.process_pending();
        let types: Vec<_> = collector.warnings().map(|w| w.warning_type).collect();
        assert_eq!(types, vec![WarningType::Other, WarningType::NoHostAvailable]);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut collector = collector();
        let handle = collector.handle();
        for i in 0..DIAGNOSTICS_CHANNEL_CAPACITY + 10 {
            handle.log_warning_simple(WarningType::Other, format!("w{i}"));
        }
        collector.process_pending();
        assert_eq!(collector.len(), DIAGNOSTICS_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_keeps_only_latest_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();
        for round in 0..3 {
            for i in 0..10 {
                handle.log_warning_simple(WarningType::Other, format!("{round}-{i}"));
            }
            collector.process_pending();
        }
        assert_eq!(collector.len(), 16);
        assert_eq!(
            collector.warnings().last().map(|w| w.message.as_str()),
            Some("2-9")
        );
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = collector();
        collector
            .handle()
            .log_alert(AlertTransition::Queued, &AlertRequest::titled("Later"));
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("\"event_count\": 1"));
        assert!(json.contains("\"transition\": \"queued\""));
    }

    #[test]
    fn export_to_file_writes_report() {
        let mut collector = collector();
        collector
            .handle()
            .log_warning_simple(WarningType::NoHostAvailable, "nothing to present on");
        collector.process_pending();

        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("reports").join("alerts.json");
        collector.export_to_file(&path).expect("export should succeed");

        let written = std::fs::read_to_string(&path).expect("report readable");
        assert!(written.contains("no_host_available"));
    }

    #[test]
    fn clear_drops_stored_events() {
        let mut collector = collector();
        collector.handle().log_warning_simple(WarningType::Other, "x");
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
    }
}
