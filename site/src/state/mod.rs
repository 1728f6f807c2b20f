//! Per-widget interaction state.
//!
//! DESIGN
//! ======
//! Each interactive element owns its own state value; nothing here is a
//! process-wide singleton. State types are plain data so transitions can be
//! tested without a browser.

pub mod menu;
