// SPDX-License-Identifier: MPL-2.0
//! Structural alert identity.
//!
//! Two requests are the same alert when title, message and number of actions
//! match. Handlers, labels and the object itself play no part.

use super::request::AlertRequest;

/// Borrowed view of the fields that make up an alert's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertKey<'a> {
    pub title: Option<&'a str>,
    pub message: Option<&'a str>,
    pub action_count: usize,
}

impl<'a> From<&'a AlertRequest> for AlertKey<'a> {
    fn from(request: &'a AlertRequest) -> Self {
        Self {
            title: request.title(),
            message: request.message(),
            action_count: request.action_count(),
        }
    }
}

/// Returns whether `a` and `b` describe the same alert.
#[must_use]
pub fn same_alert(a: &AlertRequest, b: &AlertRequest) -> bool {
    AlertKey::from(a) == AlertKey::from(b)
}
