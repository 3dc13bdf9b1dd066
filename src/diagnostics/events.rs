// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::alert::AlertRequest;

/// Step in an alert's life that the controller performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTransition {
    /// Handed to the host for display.
    Presented,
    /// Deferred into the queue.
    Queued,
    /// Taken off screen.
    Dismissed,
    /// Dropped for good by `DiscardAll`.
    Discarded,
    /// Ignored because an equal alert is already shown or queued.
    Duplicate,
    /// One of its actions fired.
    ActionInvoked,
}

/// The identity fields of an alert, detached from its handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub action_count: usize,
}

impl From<&AlertRequest> for AlertSummary {
    fn from(request: &AlertRequest) -> Self {
        Self {
            title: request.title().map(str::to_string),
            message: request.message().map(str::to_string),
            action_count: request.action_count(),
        }
    }
}

/// Categories of non-fatal conditions met while presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The surface tree had no root to present on.
    NoHostAvailable,
    /// The host finished a transition the controller was not waiting for.
    UnknownTransition,
    /// An action was triggered while no alert was on top.
    NoAlertPresented,
    /// The triggered action index does not exist on the alert.
    InvalidAction,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with the monotonic time it was recorded at.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Alert {
        transition: AlertTransition,
        alert: AlertSummary,
    },
    Warning {
        event: WarningEvent,
    },
}
