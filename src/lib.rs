// SPDX-License-Identifier: MPL-2.0
//! `alert_queue` coordinates modal alert dialogs over a tree of nested
//! presentation surfaces.
//!
//! At most one alert is visible at a time. Competing requests are serialized
//! into a queue and resolved with one of three [`DisplayBehavior`](alert::DisplayBehavior)
//! policies. The topmost surface of the host tree is found by the resolver in
//! [`host::resolver`].

#![doc(html_root_url = "https://docs.rs/alert_queue/0.1.0")]

pub mod alert;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod host;

#[cfg(test)]
mod test_utils;
