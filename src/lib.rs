//! LabelX - terminal rendition of the LabelX landing page.
//!
//! The animated primitives (`motion`) are plain state machines stepped by a
//! frame delta, so the whole page can be driven and inspected without a
//! terminal.

pub mod app;
pub mod build_info;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod landing;
pub mod logging;
pub mod motion;
pub mod ui;
