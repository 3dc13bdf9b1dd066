// SPDX-License-Identifier: MPL-2.0
//! Topmost-surface resolution.
//!
//! Starting at the root, the walk descends by the first rule that applies:
//!
//! 1. the selected tab of a tab container,
//! 2. the modally presented surface,
//! 3. the whole navigation stack, continuing from its last entry,
//! 4. all generic children, continuing from the last one.
//!
//! When no rule applies the current surface is the topmost one. Alert
//! surfaces are leaves. The walk is an explicit loop over an accumulated path,
//! so stack usage does not grow with tree depth.

use super::{SurfaceId, SurfaceTree};

/// Returns the full resolution path from `root` to the topmost surface.
///
/// Flattened navigation stacks and child lists appear on the path in order;
/// the last element is the topmost surface.
pub fn resolve_path<T: SurfaceTree + ?Sized>(tree: &T, root: SurfaceId) -> Vec<SurfaceId> {
    let mut path = vec![root];
    let mut current = root;

    loop {
        if tree.is_alert(current) {
            break;
        }
        if let Some(tab) = tree.active_tab(current) {
            path.push(tab);
            current = tab;
            continue;
        }
        if let Some(modal) = tree.modal_child(current) {
            path.push(modal);
            current = modal;
            continue;
        }
        if let Some(&top) = tree.navigation_entries(current).last() {
            path.extend_from_slice(tree.navigation_entries(current));
            current = top;
            continue;
        }
        if let Some(&last) = tree.children(current).last() {
            path.extend_from_slice(tree.children(current));
            current = last;
            continue;
        }
        break;
    }

    path
}

/// Returns the surface the user currently perceives as on top, or `None`
/// when the tree has no root.
pub fn resolve_topmost<T: SurfaceTree + ?Sized>(tree: &T) -> Option<SurfaceId> {
    let root = tree.root()?;
    resolve_path(tree, root).last().copied()
}
