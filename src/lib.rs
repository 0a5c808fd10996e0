//! Bubble layout library.
//!
//! Measures and lays out chat message bubbles (text, quoted message,
//! attachments) for a scrolling message list, and positions egui views from
//! the computed layout.

pub mod config;
pub mod feed;
pub mod layout;
pub mod model;
pub mod text;
pub mod ui;

#[cfg(test)]
mod integration_tests;
