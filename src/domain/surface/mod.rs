// SPDX-License-Identifier: MPL-2.0
//! Handles for nodes of the presentation-surface tree and for the
//! present/dismiss transitions running on them.

mod newtypes;

pub use newtypes::{SurfaceId, TransitionId};
