//! Page sections and shared UI pieces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static markup annotated with `data-reveal`,
//! `data-reveal-group`, and `data-tilt`; the behaviors that read those
//! markers are installed once by the page, not by each section. The mobile
//! menu is the only component that owns interactive state.

pub mod benefits;
pub mod booking;
pub mod closing;
pub mod faq;
pub mod header;
pub mod hero;
pub mod icons;
pub mod mobile_menu;
pub mod process;
