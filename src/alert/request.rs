// SPDX-License-Identifier: MPL-2.0
//! Alert requests and their actions.

use std::fmt;

/// Visual role of an action button. Rendering is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    Cancel,
    Destructive,
}

/// A labeled button on an alert.
pub struct AlertAction {
    label: String,
    style: ActionStyle,
    handler: Option<Box<dyn FnMut()>>,
}

impl AlertAction {
    pub fn new(label: impl Into<String>, style: ActionStyle, handler: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            style,
            handler: Some(Box::new(handler)),
        }
    }

    /// An action that only closes the alert.
    pub fn plain(label: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            label: label.into(),
            style,
            handler: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    /// Runs the caller's handler, if one was attached.
    pub fn invoke(&mut self) {
        if let Some(handler) = self.handler.as_mut() {
            handler();
        }
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// A dialog waiting to be shown, or being shown, by a host.
///
/// Identity is structural; see [`same_alert`](super::same_alert).
#[derive(Debug, Default)]
pub struct AlertRequest {
    title: Option<String>,
    message: Option<String>,
    actions: Vec<AlertAction>,
}

impl AlertRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: Some(message.into()),
            actions: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_action(
        mut self,
        label: impl Into<String>,
        style: ActionStyle,
        handler: impl FnMut() + 'static,
    ) -> Self {
        self.actions.push(AlertAction::new(label, style, handler));
        self
    }

    #[must_use]
    pub fn with_plain_action(mut self, label: impl Into<String>, style: ActionStyle) -> Self {
        self.actions.push(AlertAction::plain(label, style));
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn actions(&self) -> &[AlertAction] {
        &self.actions
    }

    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Invokes the handler of the action at `index`.
    ///
    /// Returns `false` if there is no such action.
    pub fn invoke_action(&mut self, index: usize) -> bool {
        match self.actions.get_mut(index) {
            Some(action) => {
                action.invoke();
                true
            }
            None => false,
        }
    }

    /// Short human-readable label used in diagnostics and the demo.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("<untitled>")
    }
}
