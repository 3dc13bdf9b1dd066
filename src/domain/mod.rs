// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`surface`]: Surface tree handles ([`SurfaceId`](surface::SurfaceId),
//!   [`TransitionId`](surface::TransitionId))

pub mod diagnostics;
pub mod surface;
