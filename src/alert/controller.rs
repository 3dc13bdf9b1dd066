// SPDX-License-Identifier: MPL-2.0
//! Alert presentation state machine.
//!
//! The `AlertController` decides, for every show and dismiss request, whether
//! an alert is presented now, deferred into the queue, or dropped. It owns the
//! queue and the continuations of every transition it has asked the host to
//! run. When the host reports a transition as finished, the matching
//! continuation runs: a caller completion fires, or the next alert is
//! presented on the freshly resolved topmost surface.
//!
//! Every caller completion fires exactly once, including on no-op paths and
//! when no host is available.

use std::collections::HashMap;
use std::fmt;

use super::behavior::DisplayBehavior;
use super::identity::same_alert;
use super::queue::{AlertQueue, Completion, QueueItem};
use super::request::AlertRequest;
use crate::config::{Config, DEFAULT_ANIMATED};
use crate::diagnostics::{AlertTransition, DiagnosticsHandle, WarningType};
use crate::domain::surface::{SurfaceId, TransitionId};
use crate::error::{Error, Result};
use crate::host::{resolve_topmost, Host, SurfaceTree};

/// What to do once a transition finishes.
enum Continuation {
    /// Fire the caller's completion.
    Complete(Option<Completion>),
    /// Present the item on whatever is topmost by then.
    Present(QueueItem),
    /// Run the tapped action's handler, then present the next queued alert.
    ActionFired {
        alert: Option<AlertRequest>,
        action: usize,
    },
}

fn run(completion: Option<Completion>) {
    if let Some(completion) = completion {
        completion();
    }
}

fn topmost<T: SurfaceTree + ?Sized>(tree: &T) -> Result<SurfaceId> {
    resolve_topmost(tree).ok_or(Error::NoHostAvailable)
}

pub struct AlertController {
    queue: AlertQueue,
    pending: HashMap<TransitionId, Continuation>,
    next_transition: TransitionId,
    animated: bool,
    default_behavior: DisplayBehavior,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for AlertController {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: AlertQueue::new(),
            pending: HashMap::new(),
            next_transition: TransitionId::new(0),
            animated: DEFAULT_ANIMATED,
            default_behavior: DisplayBehavior::default(),
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            animated: config.animated(),
            default_behavior: config.behavior(),
            ..Self::new()
        }
    }

    /// Sets the diagnostics handle every decision is reported to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Behavior configured for callers that have no preference.
    #[must_use]
    pub fn default_behavior(&self) -> DisplayBehavior {
        self.default_behavior
    }

    /// Whether dismissals started by `dismiss` and `dismiss_topmost` animate.
    #[must_use]
    pub fn animated(&self) -> bool {
        self.animated
    }

    #[must_use]
    pub fn queue(&self) -> &AlertQueue {
        &self.queue
    }

    /// Transitions the host has not reported as finished yet.
    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.pending.len()
    }

    /// The alert shown on the topmost surface, if any.
    pub fn presented<'h, T: SurfaceTree + ?Sized>(&self, host: &'h T) -> Option<&'h AlertRequest> {
        let top = resolve_topmost(host)?;
        host.alert(top)
    }

    /// Requests that `request` be shown, resolving conflicts per `behavior`.
    ///
    /// Does nothing but complete if an equal alert is already presented or
    /// queued.
    pub fn show<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        request: AlertRequest,
        behavior: DisplayBehavior,
        animated: bool,
        completion: impl FnOnce() + 'static,
    ) {
        let mut item = QueueItem::new(request, animated).with_completion(completion);
        let top = match topmost(&*host) {
            Ok(top) => top,
            Err(err) => {
                self.warn(WarningType::NoHostAvailable, format!("show: {err}"));
                item.finish();
                return;
            }
        };

        let alert_on_top = match host.alert(top) {
            Some(presented) if same_alert(presented, &item.alert) => {
                self.record(AlertTransition::Duplicate, &item.alert);
                item.finish();
                return;
            }
            Some(_) => true,
            None => false,
        };
        if self.queue.contains(&item.alert) {
            self.record(AlertTransition::Duplicate, &item.alert);
            item.finish();
            return;
        }

        match behavior {
            DisplayBehavior::Default if alert_on_top => {
                // The displaced alert goes back to the queue unconditionally.
                if let Some(displaced) =
                    self.begin_dismiss(host, top, animated, Continuation::Present(item))
                {
                    self.enqueue(QueueItem::new(displaced, animated));
                }
            }
            DisplayBehavior::DiscardAll => {
                self.discard_queue();
                if alert_on_top {
                    if let Some(dropped) =
                        self.begin_dismiss(host, top, animated, Continuation::Present(item))
                    {
                        self.record(AlertTransition::Discarded, &dropped);
                    }
                } else {
                    self.present(host, top, item);
                }
            }
            DisplayBehavior::Passive if alert_on_top => {
                let completion = item.completion.take();
                self.enqueue(item);
                run(completion);
            }
            DisplayBehavior::Default | DisplayBehavior::Passive => {
                self.present(host, top, item);
            }
        }
    }

    /// Shows `request` with the configured default behavior and animation.
    pub fn show_with_defaults<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        request: AlertRequest,
        completion: impl FnOnce() + 'static,
    ) {
        self.show(host, request, self.default_behavior, self.animated, completion);
    }

    /// Requests that `request` be taken off screen.
    ///
    /// `DiscardAll` clears the queue first. `Passive` puts the alert back in
    /// the queue instead of showing the next one. `Default` and `DiscardAll`
    /// present the most recently queued alert once the dismissal finishes.
    /// If `request` is not the presented alert, only the queue side effects
    /// apply and `completion` fires right away.
    pub fn dismiss<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        request: AlertRequest,
        behavior: DisplayBehavior,
        completion: impl FnOnce() + 'static,
    ) {
        let completion: Completion = Box::new(completion);
        let top = match topmost(&*host) {
            Ok(top) => top,
            Err(err) => {
                self.warn(WarningType::NoHostAvailable, format!("dismiss: {err}"));
                completion();
                return;
            }
        };
        let presented = host
            .alert(top)
            .is_some_and(|shown| same_alert(shown, &request));

        match behavior {
            DisplayBehavior::DiscardAll => self.discard_queue(),
            // The presented instance is re-queued by the dismissal itself.
            DisplayBehavior::Passive if !presented => {
                self.enqueue(QueueItem::new(request, self.animated));
            }
            DisplayBehavior::Default | DisplayBehavior::Passive => {}
        }

        if presented {
            self.dismiss_surface(host, top, behavior, self.animated, Some(completion));
        } else {
            completion();
        }
    }

    /// Dismisses whatever alert is on top, if any.
    pub fn dismiss_topmost<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        behavior: DisplayBehavior,
        completion: impl FnOnce() + 'static,
    ) {
        let completion: Completion = Box::new(completion);
        let top = match topmost(&*host) {
            Ok(top) => top,
            Err(err) => {
                self.warn(WarningType::NoHostAvailable, format!("dismiss_topmost: {err}"));
                completion();
                return;
            }
        };
        if !host.is_alert(top) {
            completion();
            return;
        }
        if behavior == DisplayBehavior::DiscardAll {
            self.discard_queue();
        }
        self.dismiss_surface(host, top, behavior, self.animated, Some(completion));
    }

    /// Advances the queue: dismisses the alert on top, which brings up the
    /// next queued one, or presents the next queued alert directly.
    pub fn show_next<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        animated: bool,
        completion: impl FnOnce() + 'static,
    ) {
        let completion: Completion = Box::new(completion);
        let top = match topmost(&*host) {
            Ok(top) => top,
            Err(err) => {
                self.warn(WarningType::NoHostAvailable, format!("show_next: {err}"));
                completion();
                return;
            }
        };
        if host.is_alert(top) {
            self.dismiss_surface(host, top, DisplayBehavior::Default, animated, Some(completion));
            return;
        }
        match self.queue.pop_last() {
            Some(mut next) => {
                next.animated = animated;
                next.chain_completion(Some(completion));
                self.present(host, top, next);
            }
            None => completion(),
        }
    }

    /// Fires action `action` of the alert on top.
    ///
    /// The alert is dismissed; once the dismissal finishes the action's
    /// handler runs and the next queued alert, if any, is presented. Returns
    /// `false` without touching anything if there is no alert on top or it
    /// has no such action.
    pub fn trigger_action<H: Host + ?Sized>(&mut self, host: &mut H, action: usize) -> bool {
        let top = match topmost(&*host) {
            Ok(top) => top,
            Err(err) => {
                self.warn(WarningType::NoHostAvailable, format!("trigger_action: {err}"));
                return false;
            }
        };
        let Some(alert) = host.alert(top) else {
            self.warn(
                WarningType::NoAlertPresented,
                format!("action {action} triggered with no alert on top"),
            );
            return false;
        };
        if action >= alert.action_count() {
            self.warn(
                WarningType::InvalidAction,
                format!(
                    "action {action} out of range for '{}' ({} actions)",
                    alert.label(),
                    alert.action_count()
                ),
            );
            return false;
        }

        let transition = self.issue_transition();
        let dismissed = host.dismiss(top, self.animated, transition);
        if let Some(alert) = &dismissed {
            self.record(AlertTransition::Dismissed, alert);
        }
        self.pending.insert(
            transition,
            Continuation::ActionFired {
                alert: dismissed,
                action,
            },
        );
        true
    }

    /// Called by the host when `transition` has finished.
    pub fn finish_transition<H: Host + ?Sized>(&mut self, host: &mut H, transition: TransitionId) {
        let Some(continuation) = self.pending.remove(&transition) else {
            self.warn(
                WarningType::UnknownTransition,
                format!("{transition} finished but was not pending"),
            );
            return;
        };

        match continuation {
            Continuation::Complete(completion) => run(completion),
            Continuation::Present(item) => self.present_on_topmost(host, item),
            Continuation::ActionFired { alert, action } => {
                if let Some(mut alert) = alert {
                    self.record(AlertTransition::ActionInvoked, &alert);
                    alert.invoke_action(action);
                }
                if let Some(next) = self.queue.pop_last() {
                    self.present_on_topmost(host, next);
                }
            }
        }
    }

    fn dismiss_surface<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        surface: SurfaceId,
        behavior: DisplayBehavior,
        animated: bool,
        completion: Option<Completion>,
    ) {
        match behavior {
            DisplayBehavior::Passive => {
                let dismissed =
                    self.begin_dismiss(host, surface, animated, Continuation::Complete(completion));
                if let Some(alert) = dismissed {
                    self.enqueue(QueueItem::new(alert, animated));
                }
            }
            DisplayBehavior::Default | DisplayBehavior::DiscardAll => {
                let then = match self.queue.pop_last() {
                    Some(mut next) => {
                        next.chain_completion(completion);
                        Continuation::Present(next)
                    }
                    None => Continuation::Complete(completion),
                };
                self.begin_dismiss(host, surface, animated, then);
            }
        }
    }

    fn present_on_topmost<H: Host + ?Sized>(&mut self, host: &mut H, mut item: QueueItem) {
        match topmost(&*host) {
            Err(err) => {
                self.warn(WarningType::NoHostAvailable, format!("present: {err}"));
                item.finish();
            }
            Ok(top) => match host.alert(top) {
                Some(shown) if same_alert(shown, &item.alert) => {
                    self.record(AlertTransition::Duplicate, &item.alert);
                    item.finish();
                }
                // Never stack a second alert; wait for the visible one instead.
                Some(_) => {
                    let completion = item.completion.take();
                    self.enqueue(item);
                    run(completion);
                }
                None => self.present(host, top, item),
            },
        }
    }

    fn present<H: Host + ?Sized>(&mut self, host: &mut H, surface: SurfaceId, item: QueueItem) {
        let QueueItem {
            alert,
            animated,
            completion,
        } = item;
        let transition = self.issue_transition();
        self.pending
            .insert(transition, Continuation::Complete(completion));
        self.record(AlertTransition::Presented, &alert);
        host.present(surface, alert, animated, transition);
    }

    fn begin_dismiss<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        surface: SurfaceId,
        animated: bool,
        then: Continuation,
    ) -> Option<AlertRequest> {
        let transition = self.issue_transition();
        self.pending.insert(transition, then);
        let dismissed = host.dismiss(surface, animated, transition);
        if let Some(alert) = &dismissed {
            self.record(AlertTransition::Dismissed, alert);
        }
        dismissed
    }

    fn enqueue(&mut self, item: QueueItem) {
        match self.queue.append(item) {
            Ok(()) => {
                if let Some(queued) = self.queue.last() {
                    self.record(AlertTransition::Queued, &queued.alert);
                }
            }
            Err(rejected) => {
                self.record(AlertTransition::Duplicate, &rejected.alert);
                rejected.finish();
            }
        }
    }

    fn discard_queue(&mut self) {
        for item in self.queue.remove_all() {
            self.record(AlertTransition::Discarded, &item.alert);
            item.finish();
        }
    }

    fn issue_transition(&mut self) -> TransitionId {
        let id = self.next_transition;
        self.next_transition = id.next();
        id
    }

    fn record(&self, transition: AlertTransition, alert: &AlertRequest) {
        if let Some(handle) = &self.diagnostics {
            handle.log_alert(transition, alert);
        }
    }

    fn warn(&self, warning_type: WarningType, message: String) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning_simple(warning_type, message);
        }
    }
}

impl fmt::Debug for AlertController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertController")
            .field("queue", &self.queue)
            .field("pending", &self.pending.len())
            .field("animated", &self.animated)
            .field("default_behavior", &self.default_behavior)
            .finish_non_exhaustive()
    }
}
