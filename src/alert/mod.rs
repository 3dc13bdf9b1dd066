// SPDX-License-Identifier: MPL-2.0
//! Serialized presentation of modal alerts.
//!
//! # Components
//!
//! - [`request`] - `AlertRequest` and its labeled actions
//! - [`identity`] - structural "same alert" rule used for deduplication
//! - [`behavior`] - `DisplayBehavior` conflict-resolution policies
//! - [`queue`] - `AlertQueue` of deferred requests (last in, first shown)
//! - [`controller`] - `AlertController` state machine driving a [`Host`](crate::host::Host)
//!
//! # Usage
//!
//! ```
//! use alert_queue::alert::{AlertController, AlertRequest, DisplayBehavior};
//! use alert_queue::host::Scene;
//!
//! let mut scene = Scene::new();
//! let home = scene.add_screen("home");
//! scene.set_root(home);
//!
//! let mut controller = AlertController::new();
//! controller.show(
//!     &mut scene,
//!     AlertRequest::new("Saved", "Your changes were saved."),
//!     DisplayBehavior::Default,
//!     true,
//!     || {},
//! );
//! scene.settle(&mut controller);
//! assert!(controller.presented(&scene).is_some());
//! ```

pub mod behavior;
pub mod controller;
pub mod identity;
pub mod queue;
pub mod request;

pub use behavior::DisplayBehavior;
pub use controller::AlertController;
pub use identity::{same_alert, AlertKey};
pub use queue::{AlertQueue, Completion, QueueItem};
pub use request::{ActionStyle, AlertAction, AlertRequest};
