// SPDX-License-Identifier: MPL-2.0
//! JSON report format for collected diagnostics.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DiagnosticEvent, DiagnosticEventKind};
use crate::error::Result;

/// An event with its time expressed relative to the start of collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub crate_version: String,
    pub collection_started_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    pub(crate) fn build<'a>(
        events: impl Iterator<Item = &'a DiagnosticEvent>,
        started_at: Instant,
        started_at_utc: DateTime<Utc>,
    ) -> Self {
        let events: Vec<SerializableEvent> = events
            .map(|event| SerializableEvent {
                offset_ms: u64::try_from(
                    event.timestamp.saturating_duration_since(started_at).as_millis(),
                )
                .unwrap_or(u64::MAX),
                kind: event.kind.clone(),
            })
            .collect();

        Self {
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: started_at_utc,
            generated_at: Utc::now(),
            event_count: events.len(),
            events,
        }
    }
}

/// Writes `json` to `path` through a temporary sibling file.
pub(crate) fn write_report(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
