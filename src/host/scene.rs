// SPDX-License-Identifier: MPL-2.0
//! In-memory presentation-surface tree.
//!
//! `Scene` stores surfaces in an arena and implements [`Host`]. Present and
//! dismiss update the tree immediately but their transitions stay pending
//! until [`Scene::settle`] reports them to the controller, which mirrors a
//! host whose animations finish on a later turn of the event loop.

use super::{Host, SurfaceId, SurfaceTree, TransitionId};
use crate::alert::{AlertController, AlertRequest};
use std::collections::VecDeque;

/// What a surface is, and therefore how the resolver may descend into it.
#[derive(Debug)]
pub enum SurfaceKind {
    /// Plain content with no children of its own.
    Screen,
    Tabs {
        tabs: Vec<SurfaceId>,
        selected: Option<usize>,
    },
    Navigation {
        stack: Vec<SurfaceId>,
    },
    Container {
        children: Vec<SurfaceId>,
    },
    Alert(AlertRequest),
}

#[derive(Debug)]
struct Surface {
    name: String,
    kind: SurfaceKind,
    modal: Option<SurfaceId>,
    presenter: Option<SurfaceId>,
}

/// Something visible happened to an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    Presented { alert: String, animated: bool },
    Dismissed { alert: String, animated: bool },
}

#[derive(Debug, Default)]
pub struct Scene {
    surfaces: Vec<Option<Surface>>,
    root: Option<SurfaceId>,
    pending: VecDeque<TransitionId>,
    history: Vec<SceneEvent>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: impl Into<String>, kind: SurfaceKind) -> SurfaceId {
        let id = SurfaceId::new(self.surfaces.len() as u64);
        self.surfaces.push(Some(Surface {
            name: name.into(),
            kind,
            modal: None,
            presenter: None,
        }));
        id
    }

    fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces
            .get(usize::try_from(id.value()).ok()?)
            .and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces
            .get_mut(usize::try_from(id.value()).ok()?)
            .and_then(Option::as_mut)
    }

    pub fn add_screen(&mut self, name: impl Into<String>) -> SurfaceId {
        self.insert(name, SurfaceKind::Screen)
    }

    /// Adds a tab container. `selected` indexes into `tabs`.
    pub fn add_tabs(
        &mut self,
        name: impl Into<String>,
        tabs: Vec<SurfaceId>,
        selected: Option<usize>,
    ) -> SurfaceId {
        self.insert(name, SurfaceKind::Tabs { tabs, selected })
    }

    /// Adds a navigation stack, bottom entry first.
    pub fn add_navigation(&mut self, name: impl Into<String>, stack: Vec<SurfaceId>) -> SurfaceId {
        self.insert(name, SurfaceKind::Navigation { stack })
    }

    pub fn add_container(&mut self, name: impl Into<String>, children: Vec<SurfaceId>) -> SurfaceId {
        self.insert(name, SurfaceKind::Container { children })
    }

    pub fn set_root(&mut self, root: SurfaceId) {
        self.root = Some(root);
    }

    pub fn clear_root(&mut self) {
        self.root = None;
    }

    /// Selects tab `index`. Returns `false` without switching if `tabs` is not
    /// a tab container or its selected tab is covered by an alert.
    pub fn select_tab(&mut self, tabs: SurfaceId, index: usize) -> bool {
        let current = self.active_tab(tabs);
        if current.is_some_and(|tab| self.holds_alert(tab)) {
            return false;
        }
        match self.get_mut(tabs) {
            Some(Surface {
                kind: SurfaceKind::Tabs { selected, .. },
                ..
            }) => {
                *selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Pushes `entry` onto a navigation stack. Returns `false` without pushing
    /// if `navigation` is not a stack or an alert is up inside it.
    pub fn push(&mut self, navigation: SurfaceId, entry: SurfaceId) -> bool {
        if self.holds_alert(navigation) {
            return false;
        }
        match self.get_mut(navigation) {
            Some(Surface {
                kind: SurfaceKind::Navigation { stack },
                ..
            }) => {
                stack.push(entry);
                true
            }
            _ => false,
        }
    }

    /// Pops the top entry of a navigation stack, unless an alert is up
    /// inside it.
    pub fn pop(&mut self, navigation: SurfaceId) -> Option<SurfaceId> {
        if self.holds_alert(navigation) {
            return None;
        }
        match self.get_mut(navigation) {
            Some(Surface {
                kind: SurfaceKind::Navigation { stack },
                ..
            }) => stack.pop(),
            _ => None,
        }
    }

    /// Links `child` as presented modally over `presenter`, without a transition.
    pub fn set_modal(&mut self, presenter: SurfaceId, child: SurfaceId) {
        if let Some(surface) = self.get_mut(presenter) {
            surface.modal = Some(child);
        }
        if let Some(surface) = self.get_mut(child) {
            surface.presenter = Some(presenter);
        }
    }

    #[must_use]
    pub fn name(&self, id: SurfaceId) -> Option<&str> {
        self.get(id).map(|surface| surface.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: SurfaceId) -> bool {
        self.get(id).is_some()
    }

    /// Alerts currently attached anywhere in the scene.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.surfaces
            .iter()
            .flatten()
            .filter(|surface| matches!(surface.kind, SurfaceKind::Alert(_)))
            .count()
    }

    #[must_use]
    pub fn history(&self) -> &[SceneEvent] {
        &self.history
    }

    /// Titles of every alert presented so far, in order.
    #[must_use]
    pub fn presented_titles(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|event| match event {
                SceneEvent::Presented { alert, .. } => Some(alert.as_str()),
                SceneEvent::Dismissed { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.pending.len()
    }

    /// Reports every pending transition to `controller`, including the ones
    /// started while settling. Returns how many were reported.
    pub fn settle(&mut self, controller: &mut AlertController) -> usize {
        let mut finished = 0;
        while let Some(transition) = self.pending.pop_front() {
            controller.finish_transition(self, transition);
            finished += 1;
        }
        finished
    }

    /// Whether an alert is attached anywhere in or above `surface`.
    fn holds_alert(&self, surface: SurfaceId) -> bool {
        let mut stack = vec![surface];
        while let Some(id) = stack.pop() {
            let Some(current) = self.get(id) else {
                continue;
            };
            stack.extend(current.modal);
            match &current.kind {
                SurfaceKind::Alert(_) => return true,
                SurfaceKind::Tabs { tabs, .. } => stack.extend(tabs),
                SurfaceKind::Navigation { stack: entries } => stack.extend(entries),
                SurfaceKind::Container { children } => stack.extend(children),
                SurfaceKind::Screen => {}
            }
        }
        false
    }

    /// Top of the modal chain starting at `surface`.
    fn last_presented(&self, surface: SurfaceId) -> SurfaceId {
        let mut current = surface;
        while let Some(next) = self.get(current).and_then(|s| s.modal) {
            current = next;
        }
        current
    }

    /// Removes `surface` and everything it contains or presents.
    fn remove_subtree(&mut self, surface: SurfaceId) -> Option<AlertRequest> {
        let mut alert = None;
        let mut stack = vec![surface];
        while let Some(id) = stack.pop() {
            let Some(index) = usize::try_from(id.value()).ok() else {
                continue;
            };
            let Some(removed) = self.surfaces.get_mut(index).and_then(Option::take) else {
                continue;
            };
            stack.extend(removed.modal);
            match removed.kind {
                SurfaceKind::Alert(request) if id == surface => alert = Some(request),
                SurfaceKind::Tabs { tabs, .. } => stack.extend(tabs),
                SurfaceKind::Navigation { stack: entries } => stack.extend(entries),
                SurfaceKind::Container { children } => stack.extend(children),
                SurfaceKind::Screen | SurfaceKind::Alert(_) => {}
            }
        }
        alert
    }
}

impl SurfaceTree for Scene {
    fn root(&self) -> Option<SurfaceId> {
        self.root.filter(|root| self.contains(*root))
    }

    fn active_tab(&self, surface: SurfaceId) -> Option<SurfaceId> {
        match &self.get(surface)?.kind {
            SurfaceKind::Tabs { tabs, selected } => selected.and_then(|i| tabs.get(i).copied()),
            _ => None,
        }
    }

    fn modal_child(&self, surface: SurfaceId) -> Option<SurfaceId> {
        self.get(surface)?.modal.filter(|child| self.contains(*child))
    }

    fn navigation_entries(&self, surface: SurfaceId) -> &[SurfaceId] {
        match self.get(surface).map(|s| &s.kind) {
            Some(SurfaceKind::Navigation { stack }) => stack.as_slice(),
            _ => &[],
        }
    }

    fn children(&self, surface: SurfaceId) -> &[SurfaceId] {
        match self.get(surface).map(|s| &s.kind) {
            Some(SurfaceKind::Container { children }) => children.as_slice(),
            _ => &[],
        }
    }

    fn alert(&self, surface: SurfaceId) -> Option<&AlertRequest> {
        match &self.get(surface)?.kind {
            SurfaceKind::Alert(request) => Some(request),
            _ => None,
        }
    }
}

impl Host for Scene {
    fn present(
        &mut self,
        surface: SurfaceId,
        alert: AlertRequest,
        animated: bool,
        transition: TransitionId,
    ) {
        let presenter = self.last_presented(surface);
        let label = alert.label().to_string();
        let id = self.insert(format!("alert:{label}"), SurfaceKind::Alert(alert));
        self.set_modal(presenter, id);
        self.history.push(SceneEvent::Presented {
            alert: label,
            animated,
        });
        self.pending.push_back(transition);
    }

    fn dismiss(
        &mut self,
        surface: SurfaceId,
        animated: bool,
        transition: TransitionId,
    ) -> Option<AlertRequest> {
        let presenter = self.get(surface).and_then(|s| s.presenter);
        if let Some(parent) = presenter.and_then(|p| self.get_mut(p)) {
            if parent.modal == Some(surface) {
                parent.modal = None;
            }
        }
        let alert = self.remove_subtree(surface);
        if let Some(request) = &alert {
            self.history.push(SceneEvent::Dismissed {
                alert: request.label().to_string(),
                animated,
            });
        }
        self.pending.push_back(transition);
        alert
    }
}
