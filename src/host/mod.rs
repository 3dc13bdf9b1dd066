// SPDX-License-Identifier: MPL-2.0
//! The presentation-surface tree the controller presents alerts into.
//!
//! The controller never builds or renders surfaces. It reads the tree through
//! [`SurfaceTree`], finds the topmost surface with [`resolver`], and asks the
//! [`Host`] to present or dismiss. The host reports each finished transition
//! back through
//! [`AlertController::finish_transition`](crate::alert::AlertController::finish_transition).
//!
//! [`Scene`] is a complete in-memory host used by the demo binary and tests.

pub mod resolver;
pub mod scene;

pub use crate::domain::surface::{SurfaceId, TransitionId};
pub use resolver::{resolve_path, resolve_topmost};
pub use scene::{Scene, SceneEvent, SurfaceKind};

use crate::alert::AlertRequest;

/// Read-only view of a presentation-surface tree.
///
/// Unknown ids answer like leaves: no tab, no modal, no entries, no children.
pub trait SurfaceTree {
    /// The active window or screen root, if any.
    fn root(&self) -> Option<SurfaceId>;

    /// The selected child of a tab container.
    fn active_tab(&self, surface: SurfaceId) -> Option<SurfaceId>;

    /// The surface currently presented modally over `surface`.
    fn modal_child(&self, surface: SurfaceId) -> Option<SurfaceId>;

    /// Navigation stack contents, bottom first.
    fn navigation_entries(&self, surface: SurfaceId) -> &[SurfaceId];

    /// Generic contained children.
    fn children(&self, surface: SurfaceId) -> &[SurfaceId];

    /// The alert `surface` is displaying, if it is an alert surface.
    fn alert(&self, surface: SurfaceId) -> Option<&AlertRequest>;

    fn is_alert(&self, surface: SurfaceId) -> bool {
        self.alert(surface).is_some()
    }
}

/// A surface tree that can present and dismiss alerts.
///
/// Both operations start a transition and return immediately. The host must
/// later call `AlertController::finish_transition` with the given
/// `transition` exactly once, from outside of these methods.
pub trait Host: SurfaceTree {
    /// Presents `alert` modally over `surface`, taking ownership of it.
    fn present(
        &mut self,
        surface: SurfaceId,
        alert: AlertRequest,
        animated: bool,
        transition: TransitionId,
    );

    /// Dismisses `surface`, handing back the alert it was displaying.
    fn dismiss(
        &mut self,
        surface: SurfaceId,
        animated: bool,
        transition: TransitionId,
    ) -> Option<AlertRequest>;
}
